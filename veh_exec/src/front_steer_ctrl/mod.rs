//! # Front steer controller module
//!
//! The front steer controller lets a user (or a higher level planner) drive
//! an Ackermann vehicle with just two setpoints: a forward speed and a front
//! steering angle. Each cycle the steering angle is converted into the
//! equivalent angular velocity of the vehicle body, and the resulting twist
//! setpoints are handed to the embedded twist controller which computes the
//! wheel torques. The steering angle demand in the output is always the
//! controller's own setpoint, so that a turn can be held even while the
//! vehicle is stationary.
//!
//! Setpoints can be seeded from a parameter file and adjusted interactively
//! through the teleoperation interface.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod calc_twist;
mod params;
mod state;
mod teleop;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use calc_twist::*;
pub use params::*;
pub use state::*;
pub use teleop::*;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Change in the linear speed setpoint per teleop keystroke.
///
/// Units: meters/second
pub const TELEOP_LIN_SPEED_STEP_MS: f64 = 0.1;

/// Change in the steering angle setpoint per teleop keystroke (one degree).
///
/// Units: radians
pub const TELEOP_STEER_ANG_STEP_RAD: f64 = std::f64::consts::PI / 180.0;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during front steer controller operation.
#[derive(Debug, thiserror::Error)]
pub enum FrontSteerCtrlError {
    #[error(
        "The vehicle's wheelbase must be positive, got {0} m. Check the \
         wheel positions in the vehicle model parameters"
    )]
    InvalidWheelbase(f64),
}
