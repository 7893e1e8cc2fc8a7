//! # Vehicle control library.
//!
//! This library allows other crates in the workspace to access items defined
//! inside the vehicle executable crate.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Vehicle model - geometry of the simulated vehicle and the input/output structures exchanged
/// with its controllers
pub mod veh_model;

/// Twist controller - drives the measured linear/angular velocity towards the setpoints using a
/// pair of PID loops over the wheel torques
pub mod twist_ctrl;

/// Front steer controller - converts a desired forward speed and front steering angle into twist
/// setpoints and delegates the torque calculations to the twist controller
pub mod front_steer_ctrl;
