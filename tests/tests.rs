use bevy_tps_locomotion::math::*;
use bevy_tps_locomotion::{
    LocomotionAnimatingState, LocomotionAnimatingStateDirective, LocomotionConfig, MotionMode,
    SpeedSmoothing,
};

#[test]
fn config_is_serializable() {
    let config = LocomotionConfig {
        running_speed: 42.0,
        speed_smoothing: SpeedSmoothing::FixedRatio { ratio: 0.25 },
        camera_relative: false,
        ..Default::default()
    };

    #[cfg(feature = "serialize")]
    {
        let serialized = ron::to_string(&config).expect("Unable to serialize the configuration");
        let deserialized: LocomotionConfig = ron::from_str(&serialized)
            .unwrap_or_else(|_| panic!("Could not deserialize {serialized}"));
        assert_eq!(deserialized, config);
    }

    assert_eq!(config.validate(), Ok(()));
}

#[test]
#[cfg(feature = "serialize")]
fn input_snapshot_is_serializable() {
    use bevy_tps_locomotion::InputSnapshot;

    let snapshot = InputSnapshot {
        motion: Vector2::new(0.5, -1.0),
        jump_triggered: true,
        crouch_active: true,
        ..Default::default()
    };
    let serialized = ron::to_string(&snapshot).expect("Unable to serialize");
    let deserialized: InputSnapshot =
        ron::from_str(&serialized).expect("Unable to deserialize the snapshot");
    assert_eq!(deserialized, snapshot);
}

#[test]
fn animating_state_by_discriminant() {
    #[derive(Debug, PartialEq)]
    enum AnimationState {
        Standing,
        Moving(Float),
    }

    let mut animating_state = LocomotionAnimatingState::<AnimationState>::default();
    assert!(animating_state.get().is_none());

    match animating_state.by_discriminant(AnimationState::Moving(1.0)) {
        LocomotionAnimatingStateDirective::Alter { old_state, state } => {
            assert_eq!(old_state, None);
            assert_eq!(state, &AnimationState::Moving(1.0));
        }
        LocomotionAnimatingStateDirective::Maintain { .. } => panic!("first state must alter"),
    }

    // Only the payload changed - adjust the animation speed, don't restart it.
    match animating_state.by_discriminant(AnimationState::Moving(2.0)) {
        LocomotionAnimatingStateDirective::Maintain { state } => {
            assert_eq!(state, &AnimationState::Moving(2.0));
        }
        LocomotionAnimatingStateDirective::Alter { .. } => panic!("same variant must maintain"),
    }

    match animating_state.by_discriminant(AnimationState::Standing) {
        LocomotionAnimatingStateDirective::Alter { old_state, .. } => {
            assert_eq!(old_state, Some(AnimationState::Moving(2.0)));
        }
        LocomotionAnimatingStateDirective::Maintain { .. } => panic!("new variant must alter"),
    }
    assert_eq!(animating_state.get(), Some(&AnimationState::Standing));
}

#[test]
fn animating_state_by_value_follows_motion_mode() {
    let mut animating_state = LocomotionAnimatingState::<MotionMode>::default();
    let modes = [
        MotionMode::Idle,
        MotionMode::Walking,
        MotionMode::Walking,
        MotionMode::Running,
        MotionMode::Running,
        MotionMode::Idle,
    ];
    let alterations = modes
        .into_iter()
        .filter(|mode| {
            matches!(
                animating_state.by_value(*mode),
                LocomotionAnimatingStateDirective::Alter { .. }
            )
        })
        .count();
    assert_eq!(alterations, 4);
}
