//! Frame-rate independent smoothing and angle helpers.
use crate::math::Float;

/// Gaps smaller than this are closed immediately by the speed smoothers.
///
/// Exponential decay never reaches its target on its own, and a character that never quite stops
/// keeps reporting a non-zero speed.
pub const SPEED_SNAP_EPSILON: Float = 1e-4;

/// Normalize an angle, in degrees, to the range `(-180, 180]`.
///
/// ```
/// # use bevy_tps_locomotion::util::normalize_degrees;
/// assert_eq!(normalize_degrees(270.0), -90.0);
/// assert_eq!(normalize_degrees(-180.0), 180.0);
/// assert_eq!(normalize_degrees(540.0), 180.0);
/// ```
pub fn normalize_degrees(angle: Float) -> Float {
    let wrapped = angle.rem_euclid(360.0);
    if 180.0 < wrapped {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// The signed shortest rotation, in degrees, that takes `current` to `target`.
///
/// ```
/// # use bevy_tps_locomotion::util::delta_degrees;
/// assert_eq!(delta_degrees(170.0, -170.0), 20.0);
/// assert_eq!(delta_degrees(-170.0, 170.0), -20.0);
/// ```
pub fn delta_degrees(current: Float, target: Float) -> Float {
    normalize_degrees(target - current)
}

/// Critically damped approach of `current` toward `target`.
///
/// `velocity` is the accumulator that carries the motion between calls - it must be kept by the
/// caller and passed back on the next frame. `smooth_time` is roughly the time it takes to reach
/// the target. A non-positive `smooth_time` snaps to the target.
///
/// The spring is solved in closed form (with an exact exponential), so advancing it by one step
/// of `2 * dt` lands at the same place as two steps of `dt`.
///
/// ```
/// # use bevy_tps_locomotion::util::smooth_damp;
/// let mut velocity = 0.0;
/// let mut value = 0.0;
/// for _ in 0..100 {
///     value = smooth_damp(value, 10.0, &mut velocity, 0.1, 0.01);
/// }
/// assert!((value - 10.0).abs() < 0.01);
/// ```
pub fn smooth_damp(
    current: Float,
    target: Float,
    velocity: &mut Float,
    smooth_time: Float,
    frame_duration: Float,
) -> Float {
    if smooth_time <= 0.0 {
        *velocity = 0.0;
        return target;
    }
    let omega = 2.0 / smooth_time;
    let decay = (-omega * frame_duration).exp();

    let offset = current - target;
    let temp = (*velocity + omega * offset) * frame_duration;
    *velocity = (*velocity - omega * temp) * decay;
    let output = target + (offset + temp) * decay;

    // Arriving past the target means the accumulator carried too much velocity - stop there.
    if (0.0 < target - current) == (target < output) {
        *velocity = 0.0;
        target
    } else {
        output
    }
}

/// Like [`smooth_damp`], but for angles in degrees.
///
/// Takes the shortest way around and returns a result normalized to `(-180, 180]`.
pub fn smooth_damp_degrees(
    current: Float,
    target: Float,
    velocity: &mut Float,
    smooth_time: Float,
    frame_duration: Float,
) -> Float {
    let unwrapped_target = current + delta_degrees(current, target);
    normalize_degrees(smooth_damp(
        current,
        unwrapped_target,
        velocity,
        smooth_time,
        frame_duration,
    ))
}

/// Exponential decay of the gap between `current` and `target`, at `rate` per second.
///
/// A rate that is not a positive finite number snaps to the target.
pub fn exponential_approach(
    current: Float,
    target: Float,
    rate: Float,
    frame_duration: Float,
) -> Float {
    if !(0.0 < rate && rate.is_finite()) {
        return target;
    }
    snap_close(target + (current - target) * (-rate * frame_duration).exp(), target)
}

/// The per-frame lerp - `ratio` of the remaining gap is closed every call regardless of the frame
/// duration.
pub fn fixed_ratio_approach(current: Float, target: Float, ratio: Float) -> Float {
    snap_close(current + (target - current) * ratio.clamp(0.0, 1.0), target)
}

fn snap_close(value: Float, target: Float) -> Float {
    if (value - target).abs() < SPEED_SNAP_EPSILON {
        target
    } else {
        value
    }
}
