use bevy::log::warn;

use crate::animation::AnimationSink;
use crate::camera::CameraReference;
use crate::config::{ConfigError, LocomotionConfig};
use crate::controller::LocomotionController;
use crate::input::InputProvider;
use crate::math::Float;
use crate::Mover;

/// Returned by [`LocomotionRigBuilder::build`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RigBuildError {
    #[error("a locomotion rig needs a mover")]
    MissingMover,
    #[error("a locomotion rig needs an input provider")]
    MissingInput,
    #[error("a camera-relative locomotion rig needs a camera reference")]
    MissingCamera,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A [`LocomotionController`] bundled with the collaborators it drives.
///
/// This is the way to use the controller outside of the ECS. Missing collaborators are reported
/// once, by [`LocomotionRigBuilder::build`], and never again per frame.
pub struct LocomotionRig {
    controller: LocomotionController,
    input: Box<dyn InputProvider>,
    mover: Box<dyn Mover>,
    camera: Option<Box<dyn CameraReference>>,
    animation_sink: Option<Box<dyn AnimationSink>>,
}

impl LocomotionRig {
    pub fn builder(config: LocomotionConfig) -> LocomotionRigBuilder {
        LocomotionRigBuilder {
            config,
            input: None,
            mover: None,
            camera: None,
            animation_sink: None,
        }
    }

    /// Poll the input, read the camera, and advance the controller by one frame.
    ///
    /// A non-positive or non-finite `frame_duration` does nothing - the input provider is not
    /// polled either, so a pending jump edge is not lost.
    pub fn tick(&mut self, frame_duration: Float) {
        if !frame_duration.is_finite() {
            warn!("Ignoring locomotion rig tick with frame duration {frame_duration}");
            return;
        }
        if frame_duration <= 0.0 {
            return;
        }
        let input = self.input.poll();
        let camera_yaw = self
            .camera
            .as_ref()
            .map_or(0.0, |camera| camera.yaw_degrees());
        match self.animation_sink.as_mut() {
            Some(sink) => self.controller.update(
                &input,
                camera_yaw,
                frame_duration,
                self.mover.as_mut(),
                sink.as_mut(),
            ),
            None => self.controller.update(
                &input,
                camera_yaw,
                frame_duration,
                self.mover.as_mut(),
                &mut (),
            ),
        }
    }

    pub fn controller(&self) -> &LocomotionController {
        &self.controller
    }

    pub fn mover(&self) -> &dyn Mover {
        self.mover.as_ref()
    }
}

pub struct LocomotionRigBuilder {
    config: LocomotionConfig,
    input: Option<Box<dyn InputProvider>>,
    mover: Option<Box<dyn Mover>>,
    camera: Option<Box<dyn CameraReference>>,
    animation_sink: Option<Box<dyn AnimationSink>>,
}

impl LocomotionRigBuilder {
    pub fn input(mut self, input: impl InputProvider + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    pub fn mover(mut self, mover: impl Mover + 'static) -> Self {
        self.mover = Some(Box::new(mover));
        self
    }

    /// Required when [`camera_relative`](LocomotionConfig::camera_relative) is set.
    pub fn camera(mut self, camera: impl CameraReference + 'static) -> Self {
        self.camera = Some(Box::new(camera));
        self
    }

    /// Optional. Without a sink, the animation signals are dropped.
    pub fn animation_sink(mut self, sink: impl AnimationSink + 'static) -> Self {
        self.animation_sink = Some(Box::new(sink));
        self
    }

    pub fn build(self) -> Result<LocomotionRig, RigBuildError> {
        let mover = self.mover.ok_or(RigBuildError::MissingMover)?;
        let input = self.input.ok_or(RigBuildError::MissingInput)?;
        if self.config.camera_relative && self.camera.is_none() {
            return Err(RigBuildError::MissingCamera);
        }
        Ok(LocomotionRig {
            controller: LocomotionController::new(self.config)?,
            input,
            mover,
            camera: self.camera,
            animation_sink: self.animation_sink,
        })
    }
}
