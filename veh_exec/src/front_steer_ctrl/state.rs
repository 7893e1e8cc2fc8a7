//! Implementations for the front steer controller state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::trace;
use serde::Serialize;

// Internal
use super::{steer_to_ang_speed, FrontSteerCtrlError, Params};
use crate::twist_ctrl::TwistCtrl;
use crate::veh_model::{CtrlInput, CtrlOutput, VehGeom};
use util::{module::State, params, session::Session};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Front steer controller state.
///
/// One instance exists per vehicle. The wheelbase and steering limit are
/// captured from the vehicle geometry at construction and never change, the
/// setpoints are mutated by parameter loading (once) and by teleoperation
/// (any number of times), and the embedded twist controller carries its
/// integral state across cycles.
pub struct FrontSteerCtrl {
    pub(crate) params: Params,

    /// Desired forward speed.
    ///
    /// Units: meters/second
    pub(crate) setpoint_lin_speed_ms: f64,

    /// Desired front steering angle, exactly `0.0` means drive straight.
    ///
    /// Units: radians
    pub(crate) setpoint_steer_ang_rad: f64,

    /// Distance between the front and rear axles, always positive.
    ///
    /// Units: meters
    wheelbase_m: f64,

    /// Maximum absolute steering angle, used by the teleop clamp.
    ///
    /// Units: radians
    pub(crate) max_steer_ang_rad: f64,

    /// The embedded twist controller, owned exclusively by this controller
    /// for its entire lifetime.
    pub(crate) twist_ctrl: TwistCtrl,
}

/// Status report for front steer controller processing.
#[derive(Clone, Copy, Default, Serialize, Debug)]
pub struct StatusReport {
    /// The linear speed setpoint forwarded to the twist controller.
    ///
    /// Units: meters/second
    pub setpoint_lin_speed_ms: f64,

    /// The equivalent angular speed setpoint forwarded to the twist
    /// controller.
    ///
    /// Units: radians/second
    pub setpoint_ang_speed_rads: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl FrontSteerCtrl {
    /// Create a new front steer controller for a vehicle with the given
    /// geometry.
    ///
    /// # Errors
    /// - `InvalidWheelbase` if the geometry's wheelbase is not positive, in
    ///   which case no controller is constructed.
    pub fn new(geom: &VehGeom) -> Result<Self, FrontSteerCtrlError> {
        let wheelbase_m = geom.wheelbase_m();

        if wheelbase_m <= 0.0 {
            return Err(FrontSteerCtrlError::InvalidWheelbase(wheelbase_m));
        }

        Ok(Self {
            params: Params::default(),
            setpoint_lin_speed_ms: 0.0,
            setpoint_steer_ang_rad: 0.0,
            wheelbase_m,
            max_steer_ang_rad: geom.max_steer_ang_rad(),
            twist_ctrl: TwistCtrl::new(geom),
        })
    }

    /// Get the current linear speed setpoint in meters/second.
    pub fn setpoint_lin_speed_ms(&self) -> f64 {
        self.setpoint_lin_speed_ms
    }

    /// Get the current steering angle setpoint in radians.
    pub fn setpoint_steer_ang_rad(&self) -> f64 {
        self.setpoint_steer_ang_rad
    }

    /// Get the wheelbase in meters.
    pub fn wheelbase_m(&self) -> f64 {
        self.wheelbase_m
    }
}

impl State for FrontSteerCtrl {
    type InitData = &'static str;
    type InitError = params::LoadError;

    type InputData = CtrlInput;
    type OutputData = CtrlOutput;
    type StatusReport = StatusReport;
    type ProcError = FrontSteerCtrlError;

    /// Initialise the front steer controller.
    ///
    /// Expected init data is the path to the parameter file. The initial
    /// setpoints are applied from the parameters, with the steering angle
    /// converted from degrees to radians.
    fn init(&mut self, init_data: Self::InitData, _session: &Session)
        -> Result<(), Self::InitError>
    {
        self.params = params::load(init_data)?;

        self.setpoint_lin_speed_ms = self.params.init_lin_speed_ms;
        self.setpoint_steer_ang_rad = self.params.init_steer_ang_deg.to_radians();

        Ok(())
    }

    /// Perform one control step.
    ///
    /// The current setpoints are converted into twist setpoints, the gains
    /// and setpoints are forwarded in full into the twist controller, its
    /// control step is invoked, and the steering angle in its output is
    /// overwritten with the steering setpoint.
    fn proc(&mut self, input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>
    {
        // Equivalent twist setpoints
        let lin_speed_ms = self.setpoint_lin_speed_ms;
        let ang_speed_rads = steer_to_ang_speed(
            lin_speed_ms,
            self.setpoint_steer_ang_rad,
            self.wheelbase_m,
        );

        // Forward setpoints and the full set of gains before stepping, the
        // twist controller must never run a cycle on a partial gain set
        self.twist_ctrl.setpoint_lin_speed_ms = lin_speed_ms;
        self.twist_ctrl.setpoint_ang_speed_rads = ang_speed_rads;

        self.twist_ctrl.kp = self.params.kp;
        self.twist_ctrl.ki = self.params.ki;
        self.twist_ctrl.kd = self.params.kd;
        self.twist_ctrl.i_max = self.params.i_max;
        self.twist_ctrl.max_torque_nm = self.params.max_torque_nm;

        // Let the twist controller do the torque calculations
        let mut output = CtrlOutput::default();
        self.twist_ctrl.control_step(input_data, &mut output);

        // Always report the commanded steering angle. At v = 0 the twist
        // setpoints are both zero regardless of the steering setpoint, so
        // without this a standing vehicle could never hold a turn.
        output.steer_ang_rad = self.setpoint_steer_ang_rad;

        trace!(
            "FrontSteerCtrl setpoints: v = {:.3} m/s, w = {:.3} rad/s",
            lin_speed_ms,
            ang_speed_rads
        );

        Ok((
            output,
            StatusReport {
                setpoint_lin_speed_ms: lin_speed_ms,
                setpoint_ang_speed_rads: ang_speed_rads,
            },
        ))
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::veh_model::{Params as VehParams, NUM_WHEELS};

    fn test_geom() -> VehGeom {
        VehGeom::from_params(&VehParams {
            wheel_pos_m_vb: [
                [0.75, 0.5],
                [0.75, -0.5],
                [-0.75, 0.5],
                [-0.75, -0.5],
            ],
            wheel_radius_m: 0.25,
            max_steer_ang_rad: 35f64.to_radians(),
            mass_kg: 500.0,
            inertia_kgm2: 300.0,
        })
    }

    fn test_input() -> CtrlInput {
        CtrlInput {
            meas_lin_speed_ms: 0.0,
            meas_ang_speed_rads: 0.0,
            dt_s: 0.1,
        }
    }

    #[test]
    fn test_invalid_wheelbase_rejected() {
        // Front and rear wheels at the same x position
        let geom = VehGeom::from_params(&VehParams {
            wheel_pos_m_vb: [[0.0, 0.5], [0.0, -0.5], [0.0, 0.5], [0.0, -0.5]],
            wheel_radius_m: 0.25,
            max_steer_ang_rad: 0.61,
            mass_kg: 500.0,
            inertia_kgm2: 300.0,
        });

        assert!(matches!(
            FrontSteerCtrl::new(&geom),
            Err(FrontSteerCtrlError::InvalidWheelbase(_))
        ));
    }

    #[test]
    fn test_steer_ang_always_reported() {
        let mut ctrl = FrontSteerCtrl::new(&test_geom()).unwrap();

        // Stationary vehicle holding a turn
        ctrl.setpoint_lin_speed_ms = 0.0;
        ctrl.setpoint_steer_ang_rad = 0.3;

        let (output, report) = ctrl.proc(&test_input()).unwrap();
        assert_eq!(output.steer_ang_rad, 0.3);
        assert_eq!(report.setpoint_ang_speed_rads, 0.0);

        // And while moving
        ctrl.setpoint_lin_speed_ms = 1.5;
        let (output, report) = ctrl.proc(&test_input()).unwrap();
        assert_eq!(output.steer_ang_rad, 0.3);
        assert!(report.setpoint_ang_speed_rads != 0.0);
    }

    #[test]
    fn test_gains_forwarded_before_step() {
        let mut ctrl = FrontSteerCtrl::new(&test_geom()).unwrap();

        ctrl.params = Params {
            kp: 12.0,
            ki: 3.0,
            kd: 0.5,
            i_max: 7.0,
            max_torque_nm: 42.0,
            init_lin_speed_ms: 0.0,
            init_steer_ang_deg: 0.0,
        };

        ctrl.proc(&test_input()).unwrap();

        assert_eq!(ctrl.twist_ctrl.kp, 12.0);
        assert_eq!(ctrl.twist_ctrl.ki, 3.0);
        assert_eq!(ctrl.twist_ctrl.kd, 0.5);
        assert_eq!(ctrl.twist_ctrl.i_max, 7.0);
        assert_eq!(ctrl.twist_ctrl.max_torque_nm, 42.0);
    }

    #[test]
    fn test_integral_state_persists_across_cycles() {
        let mut ctrl = FrontSteerCtrl::new(&test_geom()).unwrap();
        ctrl.params.ki = 1.0;
        ctrl.setpoint_lin_speed_ms = 1.0;

        // With a persistent error and a non-zero integral gain the torque
        // demand must grow between cycles
        let (first, _) = ctrl.proc(&test_input()).unwrap();
        let (second, _) = ctrl.proc(&test_input()).unwrap();

        for i in 0..NUM_WHEELS {
            assert!(second.wheel_torque_nm[i] > first.wheel_torque_nm[i]);
        }
    }

    #[test]
    fn test_straight_setpoint_gives_zero_ang_speed() {
        let mut ctrl = FrontSteerCtrl::new(&test_geom()).unwrap();
        ctrl.setpoint_lin_speed_ms = 3.0;
        ctrl.setpoint_steer_ang_rad = 0.0;

        let (_, report) = ctrl.proc(&test_input()).unwrap();
        assert_eq!(report.setpoint_ang_speed_rads, 0.0);
    }
}
