//! Vehicle kinematic state
//!
//! A deliberately simple planar model used by the outer simulation loop to
//! close the control loop. Wheel torques are converted into a net force and
//! yaw moment, which are integrated into body speeds and pose. This is not a
//! dynamics simulation, just enough feedback for the controllers to act on.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use nalgebra::Vector2;

// Internal
use super::{CtrlInput, CtrlOutput, Params, VehGeom, NUM_WHEELS};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Measured state of the vehicle in the local map frame.
#[derive(Clone, Copy, Default, Debug)]
pub struct VehState {
    /// Position of the vehicle body origin.
    ///
    /// Units: meters,
    /// Frame: Local map
    pub pos_m_lm: Vector2<f64>,

    /// Heading of the vehicle about Z+, zero along the local map X axis.
    ///
    /// Units: radians
    pub heading_rad: f64,

    /// Linear speed of the vehicle body.
    ///
    /// Units: meters/second
    pub lin_speed_ms: f64,

    /// Angular speed of the vehicle body about Z+.
    ///
    /// Units: radians/second
    pub ang_speed_rads: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl VehState {
    /// Build the controller input for the next cycle from the current state.
    pub fn as_ctrl_input(&self, dt_s: f64) -> CtrlInput {
        CtrlInput {
            meas_lin_speed_ms: self.lin_speed_ms,
            meas_ang_speed_rads: self.ang_speed_rads,
            dt_s,
        }
    }

    /// Integrate the actuation output over one time step.
    pub fn integrate(
        &mut self,
        output: &CtrlOutput,
        geom: &VehGeom,
        params: &Params,
        dt_s: f64,
    ) {
        // Net drive force and yaw moment from the wheel torques. A torque on
        // a wheel on the left side of the vehicle (Y+ in the body frame)
        // produces a moment turning the vehicle to the right, and vice versa.
        let mut force_n = 0f64;
        let mut moment_nm = 0f64;

        for i in 0..NUM_WHEELS {
            let wheel_force_n = output.wheel_torque_nm[i] / geom.wheel_radius_m();
            force_n += wheel_force_n;
            moment_nm -= wheel_force_n * geom.wheel_pos_m_vb(i)[1];
        }

        // Integrate speeds
        self.lin_speed_ms += force_n / params.mass_kg * dt_s;
        self.ang_speed_rads += moment_nm / params.inertia_kgm2 * dt_s;

        // Integrate pose
        self.heading_rad += self.ang_speed_rads * dt_s;
        self.pos_m_lm += Vector2::new(self.heading_rad.cos(), self.heading_rad.sin())
            * self.lin_speed_ms
            * dt_s;
    }
}
