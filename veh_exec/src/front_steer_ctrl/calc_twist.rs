//! Steering angle to twist conversion

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Get the angular velocity of the vehicle body equivalent to driving at
/// `lin_speed_ms` with the front wheels steered at `steer_ang_rad`.
///
/// For a non-zero steering angle the turn radius follows from the Ackermann
/// geometry, `ang = atan(L / R)` so `R = L / tan(ang)`, and with `R = v / w`
/// the angular velocity is `w = v / R`.
///
/// A steering angle of exactly `0.0` is the "drive straight" sentinel and
/// maps to an angular velocity of exactly `0.0`. This is a deliberate exact
/// comparison, not a tolerance band: any non-zero angle, however small, takes
/// the general branch and produces a correspondingly small angular velocity.
///
/// No bounding is applied here. As the steering angle approaches ±90° the
/// turn radius approaches zero and the output diverges, keeping the angle
/// inside the vehicle's steering limits is the caller's responsibility.
pub fn steer_to_ang_speed(
    lin_speed_ms: f64,
    steer_ang_rad: f64,
    wheelbase_m: f64,
) -> f64 {
    if steer_ang_rad == 0.0 {
        0.0
    }
    else {
        let turn_radius_m = wheelbase_m / steer_ang_rad.tan();
        lin_speed_ms / turn_radius_m
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_zero_steer_is_exactly_straight() {
        assert_eq!(steer_to_ang_speed(0.0, 0.0, 1.5), 0.0);
        assert_eq!(steer_to_ang_speed(1.0, 0.0, 1.5), 0.0);
        assert_eq!(steer_to_ang_speed(-3.7, 0.0, 1.5), 0.0);

        // A tiny but non-zero angle must not be treated as straight
        assert!(steer_to_ang_speed(1.0, 1e-12, 1.5) != 0.0);
    }

    #[test]
    fn test_unit_turn_radius() {
        // v = 1 m/s at 45° steering on a 1 m wheelbase turns on a 1 m radius,
        // giving w = 1 rad/s
        let ang_speed_rads = steer_to_ang_speed(1.0, FRAC_PI_4, 1.0);
        assert!((ang_speed_rads - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_odd_symmetry() {
        let angles = [0.01, 0.1, 0.5, 1.0, 1.4];

        for &steer_ang_rad in angles.iter() {
            let left = steer_to_ang_speed(2.0, steer_ang_rad, 1.5);
            let right = steer_to_ang_speed(2.0, -steer_ang_rad, 1.5);
            assert!((left + right).abs() < 1e-12);
        }
    }

    #[test]
    fn test_scales_with_speed() {
        let slow = steer_to_ang_speed(1.0, 0.3, 1.5);
        let fast = steer_to_ang_speed(2.0, 0.3, 1.5);
        assert!((fast - 2.0 * slow).abs() < 1e-12);
    }
}
