use bevy::prelude::*;

use crate::math::{AdjustPrecision, Float};

/// Source of the camera yaw that directional input is relative to.
pub trait CameraReference: Send + Sync {
    /// The camera azimuth in degrees, with the same convention as the character heading: `0.0`
    /// looks toward world +Z and `90.0` looks toward world +X.
    fn yaw_degrees(&self) -> Float;
}

/// A camera that never turns.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FixedYaw(pub Float);

impl CameraReference for FixedYaw {
    fn yaw_degrees(&self) -> Float {
        self.0
    }
}

/// The camera yaw shared by all the characters driven by
/// [`LocomotionPlugin`](crate::LocomotionPlugin).
///
/// The camera rig should update this resource before
/// [`LocomotionPipelineStages::Logic`](crate::LocomotionPipelineStages::Logic). Characters only
/// read it.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct LocomotionCamera {
    pub yaw_degrees: Float,
}

impl LocomotionCamera {
    /// Extract the yaw from a camera's transform.
    ///
    /// The camera looks along its local -Z, so a camera rotated by `θ` around Y looks toward
    /// azimuth `θ + 180°`.
    pub fn from_camera_transform(transform: &Transform) -> Self {
        let forward = transform.forward();
        Self {
            yaw_degrees: forward.x.atan2(forward.z).to_degrees().adjust_precision(),
        }
    }
}

impl CameraReference for LocomotionCamera {
    fn yaw_degrees(&self) -> Float {
        self.yaw_degrees
    }
}
