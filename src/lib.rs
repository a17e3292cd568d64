//! # Third-person locomotion for Bevy
//!
//! Turns abstract input (a movement stick, run/crouch/jump/aim buttons) and a camera yaw into a
//! per-frame displacement and a set of animation parameters for a third-person character.
//!
//! The controller only needs a swept [`Mover`] - something that can tell if the character is on
//! the ground and translate it with collision. Everything else (device input, the camera rig, the
//! animation graph) stays outside.
//!
//! ## Using it in Bevy
//!
//! * Add [`LocomotionPlugin`], plus a collision backend that fills [`LocomotionGroundSensor`]
//!   during [`LocomotionPipelineStages::Sensors`] and applies [`LocomotionMotor`] during
//!   [`LocomotionPipelineStages::Motors`].
//! * Spawn the character with a [`LocomotionController`].
//! * Every frame, write the character's [`LocomotionInput`] and the [`LocomotionCamera`] resource
//!   in [`LocomotionPipelineStages::UserControls`].
//! * Read [`LocomotionAnimationParameters`] to drive the animations. [`LocomotionAnimatingState`]
//!   can help deciding when to switch them.
//!
//! ## Using it without the ECS
//!
//! Build a [`LocomotionRig`] with the collaborators and call [`LocomotionRig::tick`] once per
//! frame, or hold a [`LocomotionController`] and call [`LocomotionController::update`] directly.
mod animating_helper;
mod animation;
mod camera;
mod config;
mod controller;
mod input;
pub mod models;
mod motion_mode;
mod rig;
pub mod util;

pub use animating_helper::{LocomotionAnimatingState, LocomotionAnimatingStateDirective};
pub use animation::{
    AnimationFrame, AnimationParameter, AnimationSignalMapper, AnimationSignals, AnimationSink,
    LocomotionAnimationParameters,
};
pub use camera::{CameraReference, FixedYaw, LocomotionCamera};
pub use config::{ConfigError, CrouchJumpPolicy, JumpTakeoff, LocomotionConfig, SpeedSmoothing};
pub use controller::{ControllerState, LocomotionController, LocomotionPlugin};
pub use input::{InputProvider, InputSnapshot, LocomotionInput};
pub use motion_mode::{effective_crouch, MotionIntent, MotionMode};
pub use rig::{LocomotionRig, LocomotionRigBuilder, RigBuildError};

pub use bevy_tps_locomotion_physics_integration_layer::data_for_backends::*;
pub use bevy_tps_locomotion_physics_integration_layer::math;
pub use bevy_tps_locomotion_physics_integration_layer::{LocomotionPipelineStages, LocomotionSystems};

pub mod prelude {
    pub use crate::math::{Float, Vector2, Vector3};
    pub use crate::{
        InputSnapshot, LocomotionAnimationParameters, LocomotionCamera, LocomotionConfig,
        LocomotionController, LocomotionInput, LocomotionPipelineStages, LocomotionPlugin,
        LocomotionSystems, MotionMode,
    };
}
