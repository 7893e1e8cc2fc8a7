//! Vehicle geometry
//!
//! Fixed geometric properties of the vehicle, built once from the vehicle
//! model parameters and never mutated afterwards.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use nalgebra::Vector2;

// Internal
use super::{Params, NUM_WHEELS, WHEEL_FL, WHEEL_RL};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Fixed geometry of the vehicle.
#[derive(Clone, Copy, Debug)]
pub struct VehGeom {
    /// Wheel positions in the vehicle body frame (X+ forward, Y+ left).
    wheel_pos_m_vb: [Vector2<f64>; NUM_WHEELS],

    /// Wheel radius in meters.
    wheel_radius_m: f64,

    /// Maximum absolute front steering angle in radians.
    max_steer_ang_rad: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl VehGeom {
    /// Build the geometry from the vehicle model parameters.
    pub fn from_params(params: &Params) -> Self {
        let mut wheel_pos_m_vb = [Vector2::zeros(); NUM_WHEELS];

        for i in 0..NUM_WHEELS {
            wheel_pos_m_vb[i] = Vector2::new(
                params.wheel_pos_m_vb[i][0],
                params.wheel_pos_m_vb[i][1],
            );
        }

        Self {
            wheel_pos_m_vb,
            wheel_radius_m: params.wheel_radius_m,
            max_steer_ang_rad: params.max_steer_ang_rad,
        }
    }

    /// Get the position of a wheel in the vehicle body frame.
    pub fn wheel_pos_m_vb(&self, wheel: usize) -> Vector2<f64> {
        self.wheel_pos_m_vb[wheel]
    }

    /// Get the distance between the front and rear axles.
    ///
    /// Measured between the front left and rear left wheel positions along
    /// the vehicle body X axis.
    pub fn wheelbase_m(&self) -> f64 {
        self.wheel_pos_m_vb[WHEEL_FL][0] - self.wheel_pos_m_vb[WHEEL_RL][0]
    }

    /// Get the wheel radius.
    pub fn wheel_radius_m(&self) -> f64 {
        self.wheel_radius_m
    }

    /// Get the maximum absolute front steering angle.
    pub fn max_steer_ang_rad(&self) -> f64 {
        self.max_steer_ang_rad
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_wheelbase() {
        let params = Params {
            wheel_pos_m_vb: [
                [0.9, 0.5],
                [0.9, -0.5],
                [-0.6, 0.5],
                [-0.6, -0.5],
            ],
            wheel_radius_m: 0.25,
            max_steer_ang_rad: 0.61,
            mass_kg: 500.0,
            inertia_kgm2: 300.0,
        };

        let geom = VehGeom::from_params(&params);

        assert!((geom.wheelbase_m() - 1.5).abs() < f64::EPSILON);
        assert_eq!(geom.wheel_pos_m_vb(WHEEL_FL), Vector2::new(0.9, 0.5));
    }
}
