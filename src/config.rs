#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::math::Float;

/// How the current speed chases the target speed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum SpeedSmoothing {
    /// Close the gap exponentially, at `rate` per second.
    ///
    /// This is frame-rate independent. A rate of `0.0` or less, or an infinite rate, means the
    /// speed snaps to the target on the first frame.
    Exponential { rate: Float },
    /// Close `ratio` of the gap every frame, no matter how long the frame was.
    ///
    /// This is how many hand-written controllers smooth their speed. It behaves differently at
    /// different frame rates, so only use it to reproduce a tuning that was made for a fixed frame
    /// rate.
    FixedRatio { ratio: Float },
}

impl Default for SpeedSmoothing {
    fn default() -> Self {
        Self::Exponential { rate: 10.0 }
    }
}

/// How [`jump_height`](LocomotionConfig::jump_height) is turned into the takeoff velocity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum JumpTakeoff {
    /// `jump_height` is the upward velocity at takeoff.
    #[default]
    Velocity,
    /// `jump_height` is the height of the apex above the takeoff point, under
    /// [`gravity`](LocomotionConfig::gravity).
    Apex,
}

/// What happens to an active crouch when the character jumps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum CrouchJumpPolicy {
    /// The crouch survives the jump. The character lands still crouching.
    #[default]
    KeepCrouch,
    /// The jump ends the crouch. The crouch input must be released before it can crouch again.
    CancelOnJump,
}

/// Tuning of a locomotion controller. Fixed once the controller is constructed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct LocomotionConfig {
    /// Target speed when moving without running or crouching.
    pub walk_speed: Float,

    /// Target speed when moving while crouching on the ground.
    pub crouch_speed: Float,

    /// Target speed when moving while running, or while airborne after a run-jump.
    pub running_speed: Float,

    /// Approximate time, in seconds, the character takes to turn toward a new heading.
    ///
    /// `0.0` turns instantly.
    pub rotate_smooth_time: Float,

    pub speed_smoothing: SpeedSmoothing,

    /// The takeoff of a jump. See [`jump_takeoff`](Self::jump_takeoff) for how it's interpreted.
    pub jump_height: Float,

    pub jump_takeoff: JumpTakeoff,

    /// Downward acceleration, as a positive number.
    pub gravity: Float,

    /// Directional input shorter than this is treated as no input at all.
    pub input_deadzone: Float,

    /// Jumps started while crouching get their takeoff velocity multiplied by this.
    pub crouch_jump_multiplier: Float,

    /// While grounded, the vertical velocity is held at `-gravity * ground_stick_factor`.
    ///
    /// The small constant push keeps the character glued to slopes and small bumps so that the
    /// ground query does not flicker.
    pub ground_stick_factor: Float,

    /// Rotate the directional input by the camera yaw.
    ///
    /// When disabled, "forward" is always world +Z and no camera is needed.
    pub camera_relative: bool,

    pub crouch_jump_policy: CrouchJumpPolicy,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            walk_speed: 2.0,
            crouch_speed: 1.0,
            running_speed: 6.0,
            rotate_smooth_time: 0.1,
            speed_smoothing: Default::default(),
            jump_height: 5.0,
            jump_takeoff: Default::default(),
            gravity: 9.81,
            input_deadzone: 0.1,
            crouch_jump_multiplier: 0.75,
            ground_stick_factor: 0.3,
            camera_relative: true,
            crouch_jump_policy: Default::default(),
        }
    }
}

/// Returned by [`LocomotionConfig::validate`] when a tuning value cannot produce sane motion.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a finite non-negative speed, got {value}")]
    InvalidSpeed { name: &'static str, value: Float },
    #[error("gravity must be finite and non-negative, got {0}")]
    InvalidGravity(Float),
    #[error("jump_height must be finite and non-negative, got {0}")]
    InvalidJumpHeight(Float),
    #[error("input_deadzone must be in [0, 1), got {0}")]
    InvalidDeadzone(Float),
    #[error("{name} must not be NaN")]
    NanSmoothing { name: &'static str },
    #[error("{name} must be a finite non-negative multiplier, got {value}")]
    InvalidMultiplier { name: &'static str, value: Float },
}

fn is_finite_non_negative(value: Float) -> bool {
    value.is_finite() && 0.0 <= value
}

impl LocomotionConfig {
    /// Check that every value can be used by the controller.
    ///
    /// Degenerate smoothing values (zero smooth time, zero or infinite rates) are accepted - they
    /// mean "snap immediately". Only NaN is rejected there.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("walk_speed", self.walk_speed),
            ("crouch_speed", self.crouch_speed),
            ("running_speed", self.running_speed),
        ] {
            if !is_finite_non_negative(value) {
                return Err(ConfigError::InvalidSpeed { name, value });
            }
        }
        if !is_finite_non_negative(self.gravity) {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        if !is_finite_non_negative(self.jump_height) {
            return Err(ConfigError::InvalidJumpHeight(self.jump_height));
        }
        if !(0.0 <= self.input_deadzone && self.input_deadzone < 1.0) {
            return Err(ConfigError::InvalidDeadzone(self.input_deadzone));
        }
        if self.rotate_smooth_time.is_nan() {
            return Err(ConfigError::NanSmoothing {
                name: "rotate_smooth_time",
            });
        }
        match self.speed_smoothing {
            SpeedSmoothing::Exponential { rate } if rate.is_nan() => {
                return Err(ConfigError::NanSmoothing {
                    name: "speed_smoothing.rate",
                });
            }
            SpeedSmoothing::FixedRatio { ratio } if ratio.is_nan() => {
                return Err(ConfigError::NanSmoothing {
                    name: "speed_smoothing.ratio",
                });
            }
            _ => {}
        }
        for (name, value) in [
            ("crouch_jump_multiplier", self.crouch_jump_multiplier),
            ("ground_stick_factor", self.ground_stick_factor),
        ] {
            if !is_finite_non_negative(value) {
                return Err(ConfigError::InvalidMultiplier { name, value });
            }
        }
        Ok(())
    }
}
