use std::ops::AddAssign;

use crate::math::Vector3;
use bevy::prelude::*;

/// Allows disabling the locomotion controller for a specific entity.
///
/// This can be used to let some other system temporarily take control over a character.
///
/// This component is not mandatory - if omitted, the controller will just assume it is enabled
/// for that entity.
#[derive(Component, Default, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LocomotionToggle {
    /// Do not run the controller, and do not touch the motor.
    ///
    /// The state stored in the controller component retains its last value from before
    /// `LocomotionToggle::Disabled` was set.
    Disabled,
    /// Run the controller, but leave the motor at zero and the rotation untouched.
    ///
    /// The controller state keeps evolving (speed smoothing, gravity, turning), only its output
    /// is withheld from the backend.
    SenseOnly,
    #[default]
    /// The controller behaves normally.
    Enabled,
}

/// The answer of a backend's ground query.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub enum GroundContact {
    /// The collision volume rests on a walkable surface.
    Grounded,
    /// The collision volume is not touching any walkable surface.
    Airborne,
    /// The backend could not tell (no query yet, query failed, collider missing...)
    ///
    /// The controller treats this exactly like [`GroundContact::Airborne`].
    #[default]
    Uncertain,
}

impl GroundContact {
    /// Whether the character should be considered grounded.
    ///
    /// Only a definite [`GroundContact::Grounded`] counts.
    pub fn is_grounded(self) -> bool {
        matches!(self, Self::Grounded)
    }

    pub fn from_grounded(grounded: bool) -> Self {
        if grounded {
            Self::Grounded
        } else {
            Self::Airborne
        }
    }
}

/// A swept mover - the only physics the controller relies on.
///
/// The controller calls [`ground_contact`](Self::ground_contact) before and after each move, and
/// [`move_by`](Self::move_by) exactly once per frame with the whole displacement of that frame.
pub trait Mover: Send + Sync {
    /// Query whether the character currently stands on the ground.
    fn ground_contact(&self) -> GroundContact;

    /// Translate the character by `displacement`, resolving collisions on the way.
    fn move_by(&mut self, displacement: Vector3);
}

impl<M: Mover + ?Sized> Mover for Box<M> {
    fn ground_contact(&self) -> GroundContact {
        (**self).ground_contact()
    }

    fn move_by(&mut self, displacement: Vector3) {
        (**self).move_by(displacement)
    }
}

/// Ground information for the controller.
///
/// The backend is responsible for updating this component during
/// [`LocomotionPipelineStages::Sensors`](crate::LocomotionPipelineStages::Sensors), usually by
/// checking the contacts of the character's collider or by a short downward shape cast.
#[derive(Component, Default, Debug, Clone)]
pub struct LocomotionGroundSensor {
    pub contact: GroundContact,
}

/// The displacement the backend needs to apply.
///
/// The controller resets and fills this component during
/// [`LocomotionPipelineStages::Logic`](crate::LocomotionPipelineStages::Logic). The backend is
/// responsible for reading it during
/// [`LocomotionPipelineStages::Motors`](crate::LocomotionPipelineStages::Motors) and applying it
/// as a single collision-aware move.
#[derive(Component, Default, Debug, Clone)]
pub struct LocomotionMotor {
    /// World space translation for the current frame. Already multiplied by the frame duration.
    pub displacement: Vector3,
}

impl LocomotionMotor {
    pub fn clear(&mut self) {
        self.displacement = Vector3::ZERO;
    }
}

impl AddAssign<Vector3> for LocomotionMotor {
    fn add_assign(&mut self, rhs: Vector3) {
        self.displacement += rhs;
    }
}
