#![allow(dead_code)]

use bevy_tps_locomotion::math::{Float, Vector3};
use bevy_tps_locomotion::{AnimationParameter, AnimationSink, GroundContact, Mover};

/// A mover that reports whatever ground contact the test sets, and records the moves.
#[derive(Default)]
pub struct ScriptedMover {
    pub contact: GroundContact,
    pub position: Vector3,
    pub moves: Vec<Vector3>,
}

impl ScriptedMover {
    pub fn grounded() -> Self {
        Self {
            contact: GroundContact::Grounded,
            ..Default::default()
        }
    }

    pub fn airborne() -> Self {
        Self {
            contact: GroundContact::Airborne,
            ..Default::default()
        }
    }
}

impl Mover for ScriptedMover {
    fn ground_contact(&self) -> GroundContact {
        self.contact
    }

    fn move_by(&mut self, displacement: Vector3) {
        self.position += displacement;
        self.moves.push(displacement);
    }
}

/// A mover over an infinite flat floor at `y = 0`.
#[derive(Default)]
pub struct FloorMover {
    pub position: Vector3,
    pub moves: usize,
}

impl Mover for FloorMover {
    fn ground_contact(&self) -> GroundContact {
        GroundContact::from_grounded(self.position.y <= 0.0)
    }

    fn move_by(&mut self, displacement: Vector3) {
        self.position += displacement;
        if self.position.y < 0.0 {
            self.position.y = 0.0;
        }
        self.moves += 1;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Float(AnimationParameter, Float),
    Bool(AnimationParameter, bool),
    Trigger(AnimationParameter),
}

/// Records everything the controller sends to the animation graph.
#[derive(Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn last_bool(&self, parameter: AnimationParameter) -> Option<bool> {
        self.calls.iter().rev().find_map(|call| match call {
            SinkCall::Bool(p, value) if *p == parameter => Some(*value),
            _ => None,
        })
    }

    pub fn last_float(&self, parameter: AnimationParameter) -> Option<Float> {
        self.calls.iter().rev().find_map(|call| match call {
            SinkCall::Float(p, value) if *p == parameter => Some(*value),
            _ => None,
        })
    }

    pub fn triggers(&self, parameter: AnimationParameter) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SinkCall::Trigger(p) if *p == parameter))
            .count()
    }
}

impl AnimationSink for RecordingSink {
    fn set_float(&mut self, parameter: AnimationParameter, value: Float) {
        self.calls.push(SinkCall::Float(parameter, value));
    }

    fn set_bool(&mut self, parameter: AnimationParameter, value: bool) {
        self.calls.push(SinkCall::Bool(parameter, value));
    }

    fn set_trigger(&mut self, parameter: AnimationParameter) {
        self.calls.push(SinkCall::Trigger(parameter));
    }
}

pub fn assert_close(actual: Float, expected: Float, tolerance: Float) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
