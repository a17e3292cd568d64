//! # Integration layer for bevy-tps-locomotion
//!
//! Collision backends depend on this crate instead of the full controller. A backend is
//! responsible for two things:
//!
//! * During [`LocomotionPipelineStages::Sensors`], fill
//!   [`LocomotionGroundSensor`](data_for_backends::LocomotionGroundSensor) with the result of its
//!   ground query.
//! * During [`LocomotionPipelineStages::Motors`], apply the displacement accumulated in
//!   [`LocomotionMotor`](data_for_backends::LocomotionMotor) with a single collision-aware move.
//!
//! Code that is not ECS driven can implement [`Mover`](data_for_backends::Mover) directly.
use bevy::prelude::*;

pub mod data_for_backends;
pub mod math;

/// Umbrella system set for [`LocomotionPipelineStages`].
///
/// The backends' plugins are responsible for preventing this entire system set from running
/// when the collision backend itself is paused.
#[derive(SystemSet, Clone, PartialEq, Eq, Debug, Hash)]
pub struct LocomotionSystems;

/// The various stages of the locomotion pipeline.
#[derive(SystemSet, Clone, PartialEq, Eq, Debug, Hash)]
pub enum LocomotionPipelineStages {
    /// Ground contact is read from the backend.
    Sensors,
    /// User systems write the frame's input snapshot and camera yaw.
    UserControls,
    /// The controller decides how the character should move.
    Logic,
    /// The backend moves the character.
    Motors,
}
