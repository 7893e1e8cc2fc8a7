//! Parameters structure for the vehicle model

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;
use super::NUM_WHEELS;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the vehicle model.
#[derive(Debug, Deserialize)]
pub struct Params {

    // ---- GEOMETRY ----

    /// The position of each wheel in the vehicle body frame (X+ forward,
    /// Y+ left), indexed by the `WHEEL_*` constants.
    ///
    /// Units: meters,
    /// Frame: Vehicle body
    pub wheel_pos_m_vb: [[f64; 2]; NUM_WHEELS],

    /// The radius of the vehicle's wheels.
    ///
    /// Units: meters
    pub wheel_radius_m: f64,

    // ---- CAPABILITIES ----

    /// Maximum absolute front steering angle.
    ///
    /// Units: radians
    pub max_steer_ang_rad: f64,

    // ---- DYNAMICS ----

    /// Mass of the vehicle.
    ///
    /// Units: kilograms
    pub mass_kg: f64,

    /// Moment of inertia of the vehicle about its Z+ (upwards) axis.
    ///
    /// Units: kilogram meters squared
    pub inertia_kgm2: f64,
}
