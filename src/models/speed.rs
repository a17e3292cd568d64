use crate::config::{LocomotionConfig, SpeedSmoothing};
use crate::math::Float;
use crate::motion_mode::MotionMode;
use crate::util::{exponential_approach, fixed_ratio_approach};

/// Target-speed selection and smoothing.
#[derive(Debug, Clone)]
pub struct SpeedModel {
    pub walk_speed: Float,
    pub crouch_speed: Float,
    pub running_speed: Float,
    pub smoothing: SpeedSmoothing,
}

impl SpeedModel {
    pub fn from_config(config: &LocomotionConfig) -> Self {
        Self {
            walk_speed: config.walk_speed,
            crouch_speed: config.crouch_speed,
            running_speed: config.running_speed,
            smoothing: config.speed_smoothing,
        }
    }

    pub fn target_speed(&self, mode: MotionMode) -> Float {
        match mode {
            MotionMode::Idle => 0.0,
            MotionMode::Walking => self.walk_speed,
            MotionMode::Running => self.running_speed,
            MotionMode::Crouching => self.crouch_speed,
        }
    }

    /// Move `current_speed` toward `target_speed`.
    ///
    /// The result always lies between the old `current_speed` and `target_speed`.
    pub fn step(&self, current_speed: &mut Float, target_speed: Float, frame_duration: Float) {
        *current_speed = match self.smoothing {
            SpeedSmoothing::Exponential { rate } => {
                exponential_approach(*current_speed, target_speed, rate, frame_duration)
            }
            SpeedSmoothing::FixedRatio { ratio } => {
                fixed_ratio_approach(*current_speed, target_speed, ratio)
            }
        };
    }
}
