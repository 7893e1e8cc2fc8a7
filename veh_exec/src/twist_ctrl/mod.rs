//! # Twist controller module
//!
//! The twist controller drives the measured linear/angular velocity of the
//! vehicle towards the current twist setpoints. It runs one PID loop on the
//! linear speed error and one on the angular speed error, sharing a single
//! set of gains, and maps their outputs onto the wheel torques: the linear
//! term is split evenly across all wheels, the angular term is applied
//! differentially between the left and right sides. Each wheel torque is
//! saturated at the torque limit, and each integral accumulator is clamped
//! to prevent windup.
//!
//! Setpoints and gains are public fields so that an embedding controller can
//! forward its own values each cycle before invoking the control step. The
//! integral accumulators and previous errors are the only persistent state,
//! and belong exclusively to the owning controller instance.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
use crate::veh_model::{CtrlInput, CtrlOutput, VehGeom, NUM_WHEELS};
use util::maths::clamp;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Twist (linear/angular velocity) PID controller.
#[derive(Clone, Serialize, Debug)]
pub struct TwistCtrl {
    /// Desired linear speed of the vehicle body.
    ///
    /// Units: meters/second
    pub setpoint_lin_speed_ms: f64,

    /// Desired angular speed of the vehicle body about Z+.
    ///
    /// Units: radians/second
    pub setpoint_ang_speed_rads: f64,

    /// Proportional gain
    pub kp: f64,

    /// Integral gain
    pub ki: f64,

    /// Derivative gain
    pub kd: f64,

    /// Clamp on the accumulated integral terms
    pub i_max: f64,

    /// Saturation limit on each wheel torque.
    ///
    /// Units: newton meters
    pub max_torque_nm: f64,

    /// Differential sign of each wheel: +1 on the right side of the vehicle,
    /// -1 on the left.
    wheel_side: [f64; NUM_WHEELS],

    /// Integral accumulator of the linear speed loop
    lin_integral: f64,

    /// Integral accumulator of the angular speed loop
    ang_integral: f64,

    /// Linear speed error on the previous cycle
    prev_lin_error_ms: Option<f64>,

    /// Angular speed error on the previous cycle
    prev_ang_error_rads: Option<f64>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl TwistCtrl {
    /// Create a new twist controller for a vehicle with the given geometry.
    ///
    /// Setpoints and gains start at zero, the embedding controller is
    /// expected to forward its own values before each control step.
    pub fn new(geom: &VehGeom) -> Self {
        let mut wheel_side = [0f64; NUM_WHEELS];

        for i in 0..NUM_WHEELS {
            wheel_side[i] = -geom.wheel_pos_m_vb(i)[1].signum();
        }

        Self {
            setpoint_lin_speed_ms: 0f64,
            setpoint_ang_speed_rads: 0f64,
            kp: 0f64,
            ki: 0f64,
            kd: 0f64,
            i_max: 0f64,
            max_torque_nm: 0f64,
            wheel_side,
            lin_integral: 0f64,
            ang_integral: 0f64,
            prev_lin_error_ms: None,
            prev_ang_error_rads: None,
        }
    }

    /// Perform one control step, writing the wheel torque demands into the
    /// output.
    ///
    /// The steering angle field of the output is not touched by the twist
    /// controller.
    pub fn control_step(&mut self, input: &CtrlInput, output: &mut CtrlOutput) {
        let lin_error_ms = self.setpoint_lin_speed_ms - input.meas_lin_speed_ms;
        let ang_error_rads = self.setpoint_ang_speed_rads - input.meas_ang_speed_rads;

        let (kp, ki, kd, i_max) = (self.kp, self.ki, self.kd, self.i_max);

        let lin_out = pid_update(
            kp, ki, kd, i_max,
            lin_error_ms,
            input.dt_s,
            &mut self.lin_integral,
            &mut self.prev_lin_error_ms,
        );
        let ang_out = pid_update(
            kp, ki, kd, i_max,
            ang_error_rads,
            input.dt_s,
            &mut self.ang_integral,
            &mut self.prev_ang_error_rads,
        );

        for i in 0..NUM_WHEELS {
            let torque_nm = (lin_out + self.wheel_side[i] * ang_out) / NUM_WHEELS as f64;

            output.wheel_torque_nm[i] = clamp(
                &torque_nm,
                &-self.max_torque_nm,
                &self.max_torque_nm,
            );
        }
    }

    /// Reset the persistent state of both loops.
    pub fn reset(&mut self) {
        self.lin_integral = 0f64;
        self.ang_integral = 0f64;
        self.prev_lin_error_ms = None;
        self.prev_ang_error_rads = None;
    }

    /// Get the integral accumulator of the linear speed loop.
    pub fn lin_integral(&self) -> f64 {
        self.lin_integral
    }

    /// Get the integral accumulator of the angular speed loop.
    pub fn ang_integral(&self) -> f64 {
        self.ang_integral
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Perform one PID update for a single loop.
///
/// If the time step is not positive the integral is not accumulated and no
/// derivative is taken, a spike in either term on a degenerate cycle is worse
/// than skipping them for one cycle.
fn pid_update(
    kp: f64,
    ki: f64,
    kd: f64,
    i_max: f64,
    error: f64,
    dt_s: f64,
    integral: &mut f64,
    prev_error: &mut Option<f64>,
) -> f64 {
    if dt_s > 0f64 {
        *integral = clamp(&(*integral + error * dt_s), &-i_max, &i_max);
    }

    let deriv = match (*prev_error, dt_s > 0f64) {
        (Some(e), true) => (error - e) / dt_s,
        _ => 0f64,
    };

    *prev_error = Some(error);

    kp * error + ki * *integral + kd * deriv
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::veh_model::{Params, WHEEL_FL, WHEEL_FR};

    fn test_geom() -> VehGeom {
        VehGeom::from_params(&Params {
            wheel_pos_m_vb: [
                [0.75, 0.5],
                [0.75, -0.5],
                [-0.75, 0.5],
                [-0.75, -0.5],
            ],
            wheel_radius_m: 0.25,
            max_steer_ang_rad: 0.61,
            mass_kg: 500.0,
            inertia_kgm2: 300.0,
        })
    }

    fn test_ctrl() -> TwistCtrl {
        let mut ctrl = TwistCtrl::new(&test_geom());
        ctrl.kp = 10.0;
        ctrl.ki = 1.0;
        ctrl.kd = 0.0;
        ctrl.i_max = 5.0;
        ctrl.max_torque_nm = 100.0;
        ctrl
    }

    #[test]
    fn test_zero_error_zero_torque() {
        let mut ctrl = test_ctrl();

        let input = CtrlInput {
            meas_lin_speed_ms: 0.0,
            meas_ang_speed_rads: 0.0,
            dt_s: 0.1,
        };
        let mut output = CtrlOutput::default();

        ctrl.control_step(&input, &mut output);

        for i in 0..NUM_WHEELS {
            assert_eq!(output.wheel_torque_nm[i], 0.0);
        }
    }

    #[test]
    fn test_torque_saturation() {
        let mut ctrl = test_ctrl();
        ctrl.setpoint_lin_speed_ms = 1e6;

        let input = CtrlInput {
            meas_lin_speed_ms: 0.0,
            meas_ang_speed_rads: 0.0,
            dt_s: 0.1,
        };
        let mut output = CtrlOutput::default();

        ctrl.control_step(&input, &mut output);

        for i in 0..NUM_WHEELS {
            assert_eq!(output.wheel_torque_nm[i], ctrl.max_torque_nm);
        }
    }

    #[test]
    fn test_ang_setpoint_differential() {
        let mut ctrl = test_ctrl();
        ctrl.setpoint_ang_speed_rads = 1.0;

        let input = CtrlInput {
            meas_lin_speed_ms: 0.0,
            meas_ang_speed_rads: 0.0,
            dt_s: 0.1,
        };
        let mut output = CtrlOutput::default();

        ctrl.control_step(&input, &mut output);

        // A demand to turn left needs more torque on the right wheels
        assert!(output.wheel_torque_nm[WHEEL_FR] > output.wheel_torque_nm[WHEEL_FL]);
    }

    #[test]
    fn test_integral_persists_and_clamps() {
        let mut ctrl = test_ctrl();
        ctrl.setpoint_lin_speed_ms = 1.0;

        let input = CtrlInput {
            meas_lin_speed_ms: 0.0,
            meas_ang_speed_rads: 0.0,
            dt_s: 0.1,
        };
        let mut output = CtrlOutput::default();

        ctrl.control_step(&input, &mut output);
        let integral_after_one = ctrl.lin_integral();

        ctrl.control_step(&input, &mut output);
        assert!(ctrl.lin_integral() > integral_after_one);

        // Drive the integral into the clamp
        for _ in 0..1000 {
            ctrl.control_step(&input, &mut output);
        }
        assert_eq!(ctrl.lin_integral(), ctrl.i_max);

        ctrl.reset();
        assert_eq!(ctrl.lin_integral(), 0.0);
        assert_eq!(ctrl.ang_integral(), 0.0);
    }
}
