use crate::config::{JumpTakeoff, LocomotionConfig};
use crate::math::Float;

/// Airborne vertical velocities closer to zero than this are snapped to exactly zero before
/// gravity is applied.
pub const VERTICAL_SNAP_EPSILON: Float = 1e-5;

/// Gravity and jump integration, gated by the ground query.
#[derive(Debug, Clone)]
pub struct VerticalMotionModel {
    pub gravity: Float,
    /// Upward velocity of a regular (not crouched) jump.
    pub jump_impulse: Float,
    pub crouch_jump_multiplier: Float,
    pub ground_stick_factor: Float,
}

/// What happened during a [`VerticalMotionModel::step`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VerticalOutcome {
    /// A jump started this frame. The caller should emit the jump trigger.
    pub jumped: bool,
    /// Run-jump persistence ended this frame because the character touched the ground.
    pub landed: bool,
}

/// The parts of the frame's input that matter for a jump.
#[derive(Debug, Default, Clone, Copy)]
pub struct JumpRequest {
    pub triggered: bool,
    pub running: bool,
    pub crouching: bool,
}

impl VerticalMotionModel {
    pub fn from_config(config: &LocomotionConfig) -> Self {
        let jump_impulse = match config.jump_takeoff {
            JumpTakeoff::Velocity => config.jump_height,
            // v^2 = 2gh
            JumpTakeoff::Apex => (2.0 * config.gravity * config.jump_height).sqrt(),
        };
        Self {
            gravity: config.gravity,
            jump_impulse,
            crouch_jump_multiplier: config.crouch_jump_multiplier,
            ground_stick_factor: config.ground_stick_factor,
        }
    }

    /// The vertical velocity held while standing on the ground.
    pub fn ground_stick_velocity(&self) -> Float {
        -self.gravity * self.ground_stick_factor
    }

    pub fn jump_impulse(&self, crouching: bool) -> Float {
        if crouching {
            self.jump_impulse * self.crouch_jump_multiplier
        } else {
            self.jump_impulse
        }
    }

    /// Advance the vertical velocity by one frame.
    pub fn step(
        &self,
        vertical_velocity: &mut Float,
        run_jump_persisted: &mut bool,
        grounded: bool,
        jump: JumpRequest,
        frame_duration: Float,
    ) -> VerticalOutcome {
        if grounded {
            *vertical_velocity = self.ground_stick_velocity();
            if jump.triggered {
                *vertical_velocity = self.jump_impulse(jump.crouching);
                if jump.running {
                    *run_jump_persisted = true;
                }
                VerticalOutcome {
                    jumped: true,
                    landed: false,
                }
            } else {
                VerticalOutcome {
                    jumped: false,
                    landed: self.land(run_jump_persisted),
                }
            }
        } else {
            if vertical_velocity.abs() < VERTICAL_SNAP_EPSILON {
                *vertical_velocity = 0.0;
            }
            *vertical_velocity -= self.gravity * frame_duration;
            VerticalOutcome::default()
        }
    }

    /// Clear run-jump persistence. Returns `true` if it was set.
    pub fn land(&self, run_jump_persisted: &mut bool) -> bool {
        std::mem::replace(run_jump_persisted, false)
    }
}
