use std::mem::discriminant;

use bevy::prelude::*;

/// Helper for animation systems that only want to act when the character's animation state
/// changes.
///
/// Feed it a state every frame (typically an enum derived from
/// [`LocomotionAnimationParameters`](crate::LocomotionAnimationParameters) or from
/// [`MotionMode`](crate::MotionMode)) and it tells whether to start a new animation or keep the
/// current one going:
///
/// ```
/// # use bevy_tps_locomotion::{LocomotionAnimatingState, LocomotionAnimatingStateDirective, MotionMode};
/// let mut animating_state = LocomotionAnimatingState::<MotionMode>::default();
/// assert!(matches!(
///     animating_state.by_value(MotionMode::Walking),
///     LocomotionAnimatingStateDirective::Alter { old_state: None, .. }
/// ));
/// assert!(matches!(
///     animating_state.by_value(MotionMode::Walking),
///     LocomotionAnimatingStateDirective::Maintain { .. }
/// ));
/// ```
#[derive(Component)]
pub struct LocomotionAnimatingState<State> {
    state: Option<State>,
}

impl<State> Default for LocomotionAnimatingState<State> {
    fn default() -> Self {
        Self { state: None }
    }
}

pub enum LocomotionAnimatingStateDirective<'a, State> {
    /// The state is the same as the previous frame - keep the animation, maybe adjust its speed
    /// from the state's payload.
    Maintain { state: &'a State },
    /// The state changed (or this is the first frame) - switch animation.
    Alter {
        old_state: Option<State>,
        state: &'a State,
    },
}

impl<State> LocomotionAnimatingState<State> {
    pub fn update_by(
        &mut self,
        new_state: State,
        comparison: impl FnOnce(&State, &State) -> bool,
    ) -> LocomotionAnimatingStateDirective<'_, State> {
        let old_state = self.state.take();
        let is_same = old_state
            .as_ref()
            .is_some_and(|old_state| comparison(old_state, &new_state));
        let state = &*self.state.insert(new_state);
        if is_same {
            LocomotionAnimatingStateDirective::Maintain { state }
        } else {
            LocomotionAnimatingStateDirective::Alter { old_state, state }
        }
    }

    pub fn by_value(&mut self, new_state: State) -> LocomotionAnimatingStateDirective<'_, State>
    where
        State: PartialEq,
    {
        self.update_by(new_state, |a, b| a == b)
    }

    /// Only compares enum variants, ignoring their payload.
    pub fn by_discriminant(
        &mut self,
        new_state: State,
    ) -> LocomotionAnimatingStateDirective<'_, State> {
        self.update_by(new_state, |a, b| discriminant(a) == discriminant(b))
    }

    /// The state fed on the last frame.
    pub fn get(&self) -> Option<&State> {
        self.state.as_ref()
    }
}
