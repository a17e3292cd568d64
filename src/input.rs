use bevy::prelude::*;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::math::{Float, Vector2};

/// The input of one frame, already translated from whatever device produced it.
///
/// Device handling (bindings, gamepad thresholds, edge detection) is the job of the
/// [`InputProvider`]. By the time a snapshot is built, buttons are plain levels or edges.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct InputSnapshot {
    /// Directional input. `x` is sideways (positive to the right), `y` is forward.
    ///
    /// Components are expected in `[-1, 1]`. The vector does not need to be normalized - a
    /// diagonal keyboard input has a length of about `1.41`.
    pub motion: Vector2,
    /// True only on the frame the jump button went down.
    pub jump_triggered: bool,
    /// True for as long as the run button is held.
    pub run_active: bool,
    /// The crouch toggle.
    pub crouch_active: bool,
    /// True for as long as the aim button is held.
    pub aim_active: bool,
}

impl InputSnapshot {
    /// A snapshot with only directional input.
    pub fn moving(motion: Vector2) -> Self {
        Self {
            motion,
            ..Default::default()
        }
    }

    /// Clamp the motion components into `[-1, 1]`, treating NaN as `0.0`.
    pub fn sanitized(&self) -> Self {
        let sanitize = |component: Float| {
            if component.is_nan() {
                0.0
            } else {
                component.clamp(-1.0, 1.0)
            }
        };
        Self {
            motion: Vector2::new(sanitize(self.motion.x), sanitize(self.motion.y)),
            ..*self
        }
    }

    pub fn motion_magnitude(&self) -> Float {
        self.motion.length()
    }
}

/// Yields one [`InputSnapshot`] per frame.
pub trait InputProvider: Send + Sync {
    fn poll(&mut self) -> InputSnapshot;
}

impl<F> InputProvider for F
where
    F: FnMut() -> InputSnapshot + Send + Sync,
{
    fn poll(&mut self) -> InputSnapshot {
        self()
    }
}

/// The input a character receives in the ECS.
///
/// A user system is expected to write this during
/// [`LocomotionPipelineStages::UserControls`](crate::LocomotionPipelineStages::UserControls). The
/// controller system clears [`jump_triggered`](InputSnapshot::jump_triggered) after using it, so a
/// single press cannot jump twice if the user system skips a frame.
#[derive(Component, Debug, Default, Clone)]
pub struct LocomotionInput(pub InputSnapshot);
