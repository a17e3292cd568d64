#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The mutually exclusive locomotion state of a character.
///
/// This is not stored between frames as a source of truth - it is resolved from scratch every
/// frame by [`MotionMode::resolve`], so there is no ordering between "start running" and "start
/// crouching" to get wrong.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum MotionMode {
    #[default]
    Idle,
    Walking,
    Running,
    Crouching,
}

/// Everything [`MotionMode::resolve`] needs to know about a frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct MotionIntent {
    /// Directional input is outside the deadzone.
    pub moving: bool,
    pub grounded: bool,
    /// The run button is held.
    pub running: bool,
    /// The character is in the air after a jump that started while running.
    pub run_jump_persisted: bool,
    /// The effective crouch - see [`effective_crouch`].
    pub crouching: bool,
}

impl MotionMode {
    /// Pick the mode, by priority `Running > Crouching > Walking > Idle`.
    pub fn resolve(intent: &MotionIntent) -> Self {
        if !intent.moving {
            Self::Idle
        } else if intent.running || intent.run_jump_persisted {
            Self::Running
        } else if intent.grounded && intent.crouching {
            Self::Crouching
        } else {
            Self::Walking
        }
    }

    pub fn is_moving(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// The crouch input after the things that override it.
///
/// Running always wins over crouching, and a jump may have suppressed the crouch (see
/// [`CrouchJumpPolicy`](crate::CrouchJumpPolicy)).
pub fn effective_crouch(crouch_active: bool, run_active: bool, crouch_suppressed: bool) -> bool {
    crouch_active && !run_active && !crouch_suppressed
}
