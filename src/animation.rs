use bevy::prelude::*;

use crate::math::Float;

/// The parameters the controller feeds to the animation graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationParameter {
    /// Float - the magnitude of the directional input.
    Speed,
    /// Bool.
    IsGrounded,
    /// Float - the vertical velocity. Only updated while airborne.
    VerticalSpeed,
    /// Bool.
    Crouching,
    /// Bool - running on the ground with directional input.
    Running,
    /// Bool - the aim button is held.
    Aiming,
    /// Trigger - a jump started this frame.
    Jump,
}

impl AnimationParameter {
    /// The conventional name of the parameter in an animation graph.
    pub fn name(self) -> &'static str {
        match self {
            Self::Speed => "Speed",
            Self::IsGrounded => "IsGrounded",
            Self::VerticalSpeed => "VerticalSpeed",
            Self::Crouching => "Crouching",
            Self::Running => "Running",
            Self::Aiming => "Aiming",
            Self::Jump => "Jump",
        }
    }
}

/// Receives animation parameters from the controller.
///
/// This mirrors the way animation graphs are usually driven - named floats, bools and triggers.
pub trait AnimationSink: Send + Sync {
    fn set_float(&mut self, parameter: AnimationParameter, value: Float);
    fn set_bool(&mut self, parameter: AnimationParameter, value: bool);
    fn set_trigger(&mut self, parameter: AnimationParameter);
}

/// Discards all the animation parameters.
impl AnimationSink for () {
    fn set_float(&mut self, _parameter: AnimationParameter, _value: Float) {}
    fn set_bool(&mut self, _parameter: AnimationParameter, _value: bool) {}
    fn set_trigger(&mut self, _parameter: AnimationParameter) {}
}

impl<S: AnimationSink + ?Sized> AnimationSink for Box<S> {
    fn set_float(&mut self, parameter: AnimationParameter, value: Float) {
        (**self).set_float(parameter, value)
    }

    fn set_bool(&mut self, parameter: AnimationParameter, value: bool) {
        (**self).set_bool(parameter, value)
    }

    fn set_trigger(&mut self, parameter: AnimationParameter) {
        (**self).set_trigger(parameter)
    }
}

/// The state of a frame as far as animation is concerned.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnimationFrame {
    /// Length of the raw directional input.
    pub input_magnitude: Float,
    /// Directional input is outside the deadzone.
    pub moving: bool,
    pub grounded: bool,
    pub vertical_velocity: Float,
    /// The effective crouch.
    pub crouching: bool,
    /// The run button is held.
    pub run_active: bool,
    pub aim_active: bool,
}

/// The values forwarded to an [`AnimationSink`] at the end of a frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AnimationSignals {
    pub speed: Float,
    pub is_grounded: bool,
    /// `None` while grounded - the vertical speed is only meaningful in the air.
    pub vertical_speed: Option<Float>,
    pub crouching: bool,
    pub running: bool,
    pub aiming: bool,
}

/// Derives [`AnimationSignals`] from the state of a frame.
pub struct AnimationSignalMapper;

impl AnimationSignalMapper {
    /// The speed parameter is the input's intent, not the smoothed physical speed, so the blend
    /// tree reacts the moment the stick moves.
    pub fn map(frame: &AnimationFrame) -> AnimationSignals {
        AnimationSignals {
            speed: frame.input_magnitude,
            is_grounded: frame.grounded,
            vertical_speed: (!frame.grounded).then_some(frame.vertical_velocity),
            crouching: frame.crouching,
            running: frame.run_active && frame.grounded && frame.moving,
            aiming: frame.aim_active,
        }
    }

    pub fn forward(signals: &AnimationSignals, sink: &mut (impl AnimationSink + ?Sized)) {
        sink.set_float(AnimationParameter::Speed, signals.speed);
        sink.set_bool(AnimationParameter::IsGrounded, signals.is_grounded);
        if let Some(vertical_speed) = signals.vertical_speed {
            sink.set_float(AnimationParameter::VerticalSpeed, vertical_speed);
        }
        sink.set_bool(AnimationParameter::Crouching, signals.crouching);
        sink.set_bool(AnimationParameter::Running, signals.running);
        sink.set_bool(AnimationParameter::Aiming, signals.aiming);
    }
}

/// The latest animation parameters of a character driven by
/// [`LocomotionPlugin`](crate::LocomotionPlugin).
///
/// User animation systems read this after
/// [`LocomotionPipelineStages::Logic`](crate::LocomotionPipelineStages::Logic) and translate it to
/// whatever animation setup they use.
#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct LocomotionAnimationParameters {
    pub speed: Float,
    pub is_grounded: bool,
    /// Keeps the last airborne value while grounded.
    pub vertical_speed: Float,
    pub crouching: bool,
    pub running: bool,
    pub aiming: bool,
    jump_pending: bool,
}

impl LocomotionAnimationParameters {
    /// Returns `true` once for every jump, then resets.
    pub fn take_jump_trigger(&mut self) -> bool {
        std::mem::replace(&mut self.jump_pending, false)
    }

    pub fn jump_pending(&self) -> bool {
        self.jump_pending
    }
}

impl AnimationSink for LocomotionAnimationParameters {
    fn set_float(&mut self, parameter: AnimationParameter, value: Float) {
        match parameter {
            AnimationParameter::Speed => self.speed = value,
            AnimationParameter::VerticalSpeed => self.vertical_speed = value,
            _ => warn!("{} is not a float parameter", parameter.name()),
        }
    }

    fn set_bool(&mut self, parameter: AnimationParameter, value: bool) {
        match parameter {
            AnimationParameter::IsGrounded => self.is_grounded = value,
            AnimationParameter::Crouching => self.crouching = value,
            AnimationParameter::Running => self.running = value,
            AnimationParameter::Aiming => self.aiming = value,
            _ => warn!("{} is not a bool parameter", parameter.name()),
        }
    }

    fn set_trigger(&mut self, parameter: AnimationParameter) {
        match parameter {
            AnimationParameter::Jump => self.jump_pending = true,
            _ => warn!("{} is not a trigger parameter", parameter.name()),
        }
    }
}
