//! Vehicle model module
//!
//! The vehicle model owns the geometry of the simulated Ackermann vehicle and
//! the input/output structures exchanged with its controllers each cycle. The
//! controllers themselves live in `twist_ctrl` and `front_steer_ctrl`.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod geom;
mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use geom::*;
pub use params::*;
pub use state::*;

// External
use serde::Serialize;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// The number of wheels on the vehicle.
pub const NUM_WHEELS: usize = 4;

/// Front left wheel index.
pub const WHEEL_FL: usize = 0;

/// Front right wheel index.
pub const WHEEL_FR: usize = 1;

/// Rear left wheel index.
pub const WHEEL_RL: usize = 2;

/// Rear right wheel index.
pub const WHEEL_RR: usize = 3;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Input to a controller's cyclic processing.
///
/// Produced by the vehicle dynamics each cycle from the measured state.
#[derive(Clone, Copy, Default, Debug)]
pub struct CtrlInput {
    /// Measured linear speed of the vehicle body.
    ///
    /// Units: meters/second
    pub meas_lin_speed_ms: f64,

    /// Measured angular speed of the vehicle body about its Z+ (upwards)
    /// axis, following the right hand rule (positive is a turn to the left).
    ///
    /// Units: radians/second
    pub meas_ang_speed_rads: f64,

    /// Time elapsed since the previous cycle.
    ///
    /// Units: seconds
    pub dt_s: f64,
}

/// Actuation command output by a controller's cyclic processing.
#[derive(Clone, Copy, Default, Serialize, Debug)]
pub struct CtrlOutput {
    /// Drive torque demand for each wheel, indexed by the `WHEEL_*`
    /// constants.
    ///
    /// Units: newton meters
    pub wheel_torque_nm: [f64; NUM_WHEELS],

    /// Front steering angle demand, positive to the left.
    ///
    /// Units: radians
    pub steer_ang_rad: f64,
}
