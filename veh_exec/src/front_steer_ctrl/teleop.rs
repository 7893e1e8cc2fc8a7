//! Teleoperation interface for the front steer controller
//!
//! Each keystroke applies one discrete change to the setpoints:
//!
//! - `w`/`s` increase/decrease the linear speed setpoint by 0.1 m/s
//! - `a`/`d` steer left/right by one degree, clamped at the vehicle's
//!   steering limit
//! - spacebar zeroes the linear speed setpoint
//!
//! Every call returns a [`TeleopReport`] with the resulting setpoints, even
//! when the key is not recognised, so the caller always has fresh status to
//! display. The linear speed setpoint is deliberately not clamped here, only
//! the steering angle has a hardware limit to respect.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;
use std::fmt;

// Internal
use super::{FrontSteerCtrl, TELEOP_LIN_SPEED_STEP_MS, TELEOP_STEER_ANG_STEP_RAD};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Status returned by every teleop call.
#[derive(Clone, Copy, Serialize, Debug)]
pub struct TeleopReport {
    /// Name of the controller which handled the keystroke
    pub ctrl_name: &'static str,

    /// Linear speed setpoint after the keystroke.
    ///
    /// Units: meters/second
    pub setpoint_lin_speed_ms: f64,

    /// Steering angle setpoint after the keystroke.
    ///
    /// Units: radians
    pub setpoint_steer_ang_rad: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl FrontSteerCtrl {
    /// Apply one teleop keystroke to the setpoints.
    pub fn teleop_step(&mut self, keycode: char) -> TeleopReport {
        match keycode {
            'w' => self.setpoint_lin_speed_ms += TELEOP_LIN_SPEED_STEP_MS,
            's' => self.setpoint_lin_speed_ms -= TELEOP_LIN_SPEED_STEP_MS,
            'a' => {
                self.setpoint_steer_ang_rad = (self.setpoint_steer_ang_rad
                    + TELEOP_STEER_ANG_STEP_RAD)
                    .min(self.max_steer_ang_rad);
            }
            'd' => {
                self.setpoint_steer_ang_rad = (self.setpoint_steer_ang_rad
                    - TELEOP_STEER_ANG_STEP_RAD)
                    .max(-self.max_steer_ang_rad);
            }
            ' ' => self.setpoint_lin_speed_ms = 0.0,
            _ => (),
        }

        TeleopReport {
            ctrl_name: "front_steer_ctrl",
            setpoint_lin_speed_ms: self.setpoint_lin_speed_ms,
            setpoint_steer_ang_rad: self.setpoint_steer_ang_rad,
        }
    }
}

impl fmt::Display for TeleopReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "[Controller={}] Teleop keys: w/s=incr/decr lin speed. \
             a/d=left/right steering. spacebar=stop.",
            self.ctrl_name
        )?;
        write!(
            f,
            "setpoint: v={:.3} steer={:.3} deg",
            self.setpoint_lin_speed_ms,
            self.setpoint_steer_ang_rad.to_degrees()
        )
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::veh_model::{Params as VehParams, VehGeom};

    const MAX_STEER_ANG_RAD: f64 = 0.3;

    fn test_ctrl() -> FrontSteerCtrl {
        let geom = VehGeom::from_params(&VehParams {
            wheel_pos_m_vb: [
                [0.75, 0.5],
                [0.75, -0.5],
                [-0.75, 0.5],
                [-0.75, -0.5],
            ],
            wheel_radius_m: 0.25,
            max_steer_ang_rad: MAX_STEER_ANG_RAD,
            mass_kg: 500.0,
            inertia_kgm2: 300.0,
        });

        FrontSteerCtrl::new(&geom).unwrap()
    }

    #[test]
    fn test_speed_keys() {
        let mut ctrl = test_ctrl();

        ctrl.teleop_step('w');
        ctrl.teleop_step('w');
        let report = ctrl.teleop_step('w');
        assert!((report.setpoint_lin_speed_ms - 0.3).abs() < 1e-12);

        let report = ctrl.teleop_step('s');
        assert!((report.setpoint_lin_speed_ms - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_space_stops() {
        let mut ctrl = test_ctrl();

        for _ in 0..17 {
            ctrl.teleop_step('w');
        }

        let report = ctrl.teleop_step(' ');
        assert_eq!(report.setpoint_lin_speed_ms, 0.0);
    }

    #[test]
    fn test_steer_clamps_at_limit() {
        let mut ctrl = test_ctrl();

        // One degree per press, the limit is ~17.2°, so 100 presses are more
        // than enough to saturate
        for _ in 0..100 {
            ctrl.teleop_step('a');
        }
        assert_eq!(ctrl.setpoint_steer_ang_rad(), MAX_STEER_ANG_RAD);

        // Further presses stay at the limit
        let report = ctrl.teleop_step('a');
        assert_eq!(report.setpoint_steer_ang_rad, MAX_STEER_ANG_RAD);

        // And symmetrically on the right
        for _ in 0..200 {
            ctrl.teleop_step('d');
        }
        assert_eq!(ctrl.setpoint_steer_ang_rad(), -MAX_STEER_ANG_RAD);

        let report = ctrl.teleop_step('d');
        assert_eq!(report.setpoint_steer_ang_rad, -MAX_STEER_ANG_RAD);
    }

    #[test]
    fn test_speed_is_not_clamped() {
        let mut ctrl = test_ctrl();

        for _ in 0..1000 {
            ctrl.teleop_step('w');
        }
        assert!(ctrl.setpoint_lin_speed_ms() > 99.0);
    }

    #[test]
    fn test_unrecognised_key_reports_unchanged_setpoints() {
        let mut ctrl = test_ctrl();

        ctrl.teleop_step('w');
        ctrl.teleop_step('a');

        let before_lin = ctrl.setpoint_lin_speed_ms();
        let before_steer = ctrl.setpoint_steer_ang_rad();

        let report = ctrl.teleop_step('x');
        assert_eq!(report.setpoint_lin_speed_ms, before_lin);
        assert_eq!(report.setpoint_steer_ang_rad, before_steer);
    }

    #[test]
    fn test_report_display() {
        let mut ctrl = test_ctrl();
        let report = ctrl.teleop_step('w');
        let text = format!("{}", report);

        assert!(text.contains("[Controller=front_steer_ctrl]"));
        assert!(text.contains("setpoint: v=0.100"));
    }
}
