use crate::config::LocomotionConfig;
use crate::math::{Float, Quaternion, Vector2, Vector3};
use crate::util::{normalize_degrees, smooth_damp_degrees};

/// Camera-relative heading with damped turning.
///
/// Azimuths are in degrees around the up (+Y) axis. `0.0` faces world +Z, `90.0` faces world +X.
#[derive(Debug, Clone)]
pub struct OrientationModel {
    /// See [`LocomotionConfig::rotate_smooth_time`].
    pub smooth_time: Float,
    /// See [`LocomotionConfig::input_deadzone`].
    pub deadzone: Float,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationOutput {
    /// The damped heading after this frame.
    pub azimuth: Float,
    /// Unit horizontal direction to move in, or zero if the input was inside the deadzone.
    pub move_direction: Vector3,
}

impl OrientationModel {
    pub fn from_config(config: &LocomotionConfig) -> Self {
        Self {
            smooth_time: config.rotate_smooth_time,
            deadzone: config.input_deadzone,
        }
    }

    /// The heading the input points at, normalized to `(-180, 180]`.
    ///
    /// Azimuths grow counterclockwise when seen from above, so the right of a reference facing
    /// `yaw` is at `yaw - 90`. That's why positive `direction.x` lowers the azimuth.
    pub fn target_azimuth(direction: Vector2, reference_yaw: Float) -> Float {
        normalize_degrees((-direction.x).atan2(direction.y).to_degrees() + reference_yaw)
    }

    pub fn forward_for(azimuth: Float) -> Vector3 {
        let radians = azimuth.to_radians();
        Vector3::new(radians.sin(), 0.0, radians.cos())
    }

    /// The rotation that turns the character's +Z toward `azimuth`.
    pub fn rotation_for(azimuth: Float) -> Quaternion {
        Quaternion::from_rotation_y(azimuth.to_radians())
    }

    /// Advance `heading` toward the input's direction.
    ///
    /// Inside the deadzone, `heading` and `turn_velocity` are left alone.
    pub fn step(
        &self,
        heading: &mut Float,
        turn_velocity: &mut Float,
        direction: Vector2,
        reference_yaw: Float,
        frame_duration: Float,
    ) -> OrientationOutput {
        if direction.length() < self.deadzone {
            return OrientationOutput {
                azimuth: *heading,
                move_direction: Vector3::ZERO,
            };
        }
        let target = Self::target_azimuth(direction, reference_yaw);
        *heading = smooth_damp_degrees(
            *heading,
            target,
            turn_velocity,
            self.smooth_time,
            frame_duration,
        );
        OrientationOutput {
            azimuth: *heading,
            move_direction: Self::forward_for(*heading),
        }
    }
}
