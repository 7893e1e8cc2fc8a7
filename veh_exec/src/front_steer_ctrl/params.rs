//! Parameters structure for the front steer controller

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the front steer controller.
///
/// Keys absent from the parameter file keep the defaults below.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct Params {

    // ---- GAINS ----

    /// Proportional gain forwarded to the twist controller
    pub kp: f64,

    /// Integral gain forwarded to the twist controller
    pub ki: f64,

    /// Derivative gain forwarded to the twist controller
    pub kd: f64,

    /// Clamp on the twist controller's integral terms
    pub i_max: f64,

    /// Saturation limit on each wheel torque.
    ///
    /// Units: newton meters
    pub max_torque_nm: f64,

    // ---- INITIAL SETPOINTS ----

    /// Initial linear speed setpoint.
    ///
    /// Units: meters/second
    pub init_lin_speed_ms: f64,

    /// Initial steering angle setpoint. Given in degrees in the parameter
    /// file, converted to radians when applied to the controller.
    ///
    /// Units: degrees
    pub init_steer_ang_deg: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Self {
            kp: 100.0,
            ki: 0.0,
            kd: 0.0,
            i_max: 10.0,
            max_torque_nm: 100.0,
            init_lin_speed_ms: 0.0,
            init_steer_ang_deg: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_absent_keys_keep_defaults() {
        let params: Params = toml::from_str(
            "kp = 250.0\n\
             init_steer_ang_deg = 10.0\n"
        ).unwrap();

        assert_eq!(params.kp, 250.0);
        assert_eq!(params.init_steer_ang_deg, 10.0);

        // Everything else keeps the defaults
        assert_eq!(params.ki, 0.0);
        assert_eq!(params.kd, 0.0);
        assert_eq!(params.i_max, 10.0);
        assert_eq!(params.max_torque_nm, 100.0);
        assert_eq!(params.init_lin_speed_ms, 0.0);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let params: Params = toml::from_str(
            "kp = 1.0\n\
             not_a_gain = 42.0\n"
        ).unwrap();

        assert_eq!(params.kp, 1.0);
    }
}
