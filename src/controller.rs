use bevy::ecs::schedule::{InternedScheduleLabel, ScheduleLabel};
use bevy::prelude::*;

use crate::animation::{
    AnimationFrame, AnimationParameter, AnimationSignalMapper, AnimationSink,
    LocomotionAnimationParameters,
};
use crate::camera::{CameraReference, LocomotionCamera};
use crate::config::{ConfigError, CrouchJumpPolicy, LocomotionConfig};
use crate::input::{InputSnapshot, LocomotionInput};
use crate::math::{AdjustPrecision, AsF32, Float, Quaternion, Vector3};
use crate::models::{JumpRequest, OrientationModel, SpeedModel, VerticalMotionModel};
use crate::motion_mode::{effective_crouch, MotionIntent, MotionMode};
use crate::{
    GroundContact, LocomotionGroundSensor, LocomotionMotor, LocomotionPipelineStages,
    LocomotionSystems, LocomotionToggle, Mover,
};

/// Runs [`LocomotionController`] components.
///
/// The plugin must run in the same schedule as the collision backend's sensor and motor systems.
pub struct LocomotionPlugin {
    schedule: InternedScheduleLabel,
}

impl LocomotionPlugin {
    pub fn new(schedule: impl ScheduleLabel) -> Self {
        Self {
            schedule: schedule.intern(),
        }
    }
}

impl Default for LocomotionPlugin {
    fn default() -> Self {
        Self::new(Update)
    }
}

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionCamera>();
        app.configure_sets(
            self.schedule,
            (
                LocomotionPipelineStages::Sensors,
                LocomotionPipelineStages::UserControls,
                LocomotionPipelineStages::Logic,
                LocomotionPipelineStages::Motors,
            )
                .chain()
                .in_set(LocomotionSystems),
        );
        app.add_systems(
            self.schedule,
            apply_controller_system.in_set(LocomotionPipelineStages::Logic),
        );
    }
}

/// The persistent per-character state, advanced only by [`LocomotionController::update`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerState {
    /// The smoothed horizontal speed.
    pub current_speed: Float,
    /// The speed picked for the last frame's [`MotionMode`].
    pub target_speed: Float,
    pub vertical_velocity: Float,
    /// The result of the last ground query.
    pub is_grounded: bool,
    /// Set by a jump that started while running, cleared on landing.
    pub run_jump_persisted: bool,
    /// Damped heading in degrees, in `(-180, 180]`.
    pub heading_angle: Float,
    /// Accumulator of the heading smoothing.
    pub turn_velocity: Float,
    pub mode: MotionMode,
    /// A jump cancelled the crouch (see [`CrouchJumpPolicy::CancelOnJump`]). Cleared when the
    /// crouch input goes inactive.
    pub crouch_suppressed: bool,
    /// Unit horizontal direction of the last frame, or zero if there was no directional input.
    pub move_direction: Vector3,
    /// What the mover was asked to do in the last frame.
    pub last_displacement: Vector3,
}

/// Converts per-frame input into motion and animation signals for a single character.
///
/// The controller does not hold on to any collaborator. Everything it talks to during a frame is
/// passed to [`update`](Self::update), and everything it remembers between frames is in its
/// [`ControllerState`].
///
/// It is also a component - see [`LocomotionPlugin`].
#[derive(Component, Debug, Clone)]
#[require(
    LocomotionInput,
    LocomotionGroundSensor,
    LocomotionMotor,
    LocomotionAnimationParameters,
    Transform
)]
pub struct LocomotionController {
    config: LocomotionConfig,
    orientation: OrientationModel,
    speed: SpeedModel,
    vertical: VerticalMotionModel,
    state: ControllerState,
}

impl LocomotionController {
    pub fn new(config: LocomotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            orientation: OrientationModel::from_config(&config),
            speed: SpeedModel::from_config(&config),
            vertical: VerticalMotionModel::from_config(&config),
            config,
            state: Default::default(),
        })
    }

    /// Start facing `azimuth` (degrees) instead of world +Z.
    pub fn with_heading(mut self, azimuth: Float) -> Self {
        self.state.heading_angle = crate::util::normalize_degrees(azimuth);
        self
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn mode(&self) -> MotionMode {
        self.state.mode
    }

    pub fn heading(&self) -> Float {
        self.state.heading_angle
    }

    /// The rotation that makes the character's +Z face the heading.
    pub fn rotation(&self) -> Quaternion {
        OrientationModel::rotation_for(self.state.heading_angle)
    }

    pub fn orientation_model(&self) -> &OrientationModel {
        &self.orientation
    }

    pub fn speed_model(&self) -> &SpeedModel {
        &self.speed
    }

    pub fn vertical_model(&self) -> &VerticalMotionModel {
        &self.vertical
    }

    /// Advance the character by one frame.
    ///
    /// `camera_yaw` is ignored unless [`camera_relative`](LocomotionConfig::camera_relative) is
    /// set. The mover is moved exactly once, with the whole displacement of the frame. A
    /// non-positive `frame_duration` does nothing at all.
    pub fn update<M, S>(
        &mut self,
        input: &InputSnapshot,
        camera_yaw: Float,
        frame_duration: Float,
        mover: &mut M,
        sink: &mut S,
    ) where
        M: Mover + ?Sized,
        S: AnimationSink + ?Sized,
    {
        if !frame_duration.is_finite() {
            warn!("Ignoring locomotion update with frame duration {frame_duration}");
            return;
        }
        if frame_duration <= 0.0 {
            return;
        }
        let input = input.sanitized();
        let state = &mut self.state;

        let grounded = Self::query_ground(mover);
        state.is_grounded = grounded;

        if !input.crouch_active {
            state.crouch_suppressed = false;
        }
        let crouching = effective_crouch(
            input.crouch_active,
            input.run_active,
            state.crouch_suppressed,
        );

        let vertical = self.vertical.step(
            &mut state.vertical_velocity,
            &mut state.run_jump_persisted,
            grounded,
            JumpRequest {
                triggered: input.jump_triggered,
                running: input.run_active,
                crouching,
            },
            frame_duration,
        );
        if vertical.jumped {
            debug!(
                "Jump with takeoff velocity {} (run-jump: {})",
                state.vertical_velocity, state.run_jump_persisted
            );
            sink.set_trigger(AnimationParameter::Jump);
            if crouching && self.config.crouch_jump_policy == CrouchJumpPolicy::CancelOnJump {
                state.crouch_suppressed = true;
            }
        }
        if vertical.landed {
            debug!("Landed, run-jump persistence ended");
        }
        let crouching = crouching && !state.crouch_suppressed;

        let reference_yaw = if self.config.camera_relative {
            camera_yaw
        } else {
            0.0
        };
        let orientation = self.orientation.step(
            &mut state.heading_angle,
            &mut state.turn_velocity,
            input.motion,
            reference_yaw,
            frame_duration,
        );
        state.move_direction = orientation.move_direction;

        let input_magnitude = input.motion_magnitude();
        let moving = self.orientation.deadzone <= input_magnitude;
        state.mode = MotionMode::resolve(&MotionIntent {
            moving,
            grounded,
            running: input.run_active,
            run_jump_persisted: state.run_jump_persisted,
            crouching,
        });
        state.target_speed = self.speed.target_speed(state.mode);
        self.speed
            .step(&mut state.current_speed, state.target_speed, frame_duration);

        let displacement = orientation.move_direction * state.current_speed * frame_duration
            + Vector3::Y * state.vertical_velocity * frame_duration;
        mover.move_by(displacement);
        state.last_displacement = displacement;

        let grounded_after_move = Self::query_ground(mover);
        if grounded_after_move && !vertical.jumped && self.vertical.land(&mut state.run_jump_persisted)
        {
            debug!("Landed, run-jump persistence ended");
        }
        state.is_grounded = grounded_after_move;

        let signals = AnimationSignalMapper::map(&AnimationFrame {
            input_magnitude,
            moving,
            grounded: grounded_after_move,
            vertical_velocity: state.vertical_velocity,
            crouching,
            run_active: input.run_active,
            aim_active: input.aim_active,
        });
        AnimationSignalMapper::forward(&signals, sink);
    }

    fn query_ground<M: Mover + ?Sized>(mover: &M) -> bool {
        match mover.ground_contact() {
            GroundContact::Grounded => true,
            GroundContact::Airborne => false,
            GroundContact::Uncertain => {
                trace!("Uncertain ground contact, treating as airborne");
                false
            }
        }
    }
}

/// Presents a character's sensor and motor components as a [`Mover`].
///
/// The backend only re-runs its ground query in the next frame's sensor stage, so the post-move
/// query of the controller sees the same contact as the pre-move one.
struct SensorMotorMover<'a> {
    sensor: &'a LocomotionGroundSensor,
    motor: &'a mut LocomotionMotor,
}

impl Mover for SensorMotorMover<'_> {
    fn ground_contact(&self) -> GroundContact {
        self.sensor.contact
    }

    fn move_by(&mut self, displacement: Vector3) {
        *self.motor += displacement;
    }
}

#[allow(clippy::type_complexity)]
fn apply_controller_system(
    time: Res<Time>,
    camera: Res<LocomotionCamera>,
    mut query: Query<(
        &mut LocomotionController,
        &mut LocomotionInput,
        &LocomotionGroundSensor,
        &mut LocomotionMotor,
        &mut LocomotionAnimationParameters,
        &mut Transform,
        Option<&LocomotionToggle>,
    )>,
) {
    let frame_duration = time.delta_secs().adjust_precision();
    if frame_duration == 0.0 {
        return;
    }
    let camera_yaw = camera.yaw_degrees();
    for (mut controller, mut input, sensor, mut motor, mut animation, mut transform, toggle) in
        query.iter_mut()
    {
        let toggle = toggle.copied().unwrap_or_default();
        if toggle == LocomotionToggle::Disabled {
            continue;
        }

        motor.clear();
        controller.update(
            &input.0,
            camera_yaw,
            frame_duration,
            &mut SensorMotorMover {
                sensor,
                motor: motor.as_mut(),
            },
            animation.as_mut(),
        );
        input.0.jump_triggered = false;

        match toggle {
            LocomotionToggle::Disabled => {}
            LocomotionToggle::SenseOnly => motor.clear(),
            LocomotionToggle::Enabled => {
                transform.rotation = controller.rotation().f32();
            }
        }
    }
}
