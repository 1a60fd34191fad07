//! Motion-cost estimation between travel targets.
//!
//! Estimates the time to move between two points from per-axis acceleration
//! and feedrate limits, assuming each move starts and ends at standstill.
//! Per-axis times follow a trapezoidal velocity profile (accelerate, cruise,
//! decelerate) that degenerates to a triangular profile below the distance
//! at which the axis would first reach its feedrate ceiling. Axes move
//! concurrently, so the move time is the maximum across participating axes.
//!
//! When no kinematic parameters are available the solver falls back to
//! [`EuclideanCost`], which scores edges by straight-line 3D distance.

mod axis;
mod model;

pub use axis::AxisParams;
pub use model::{CostModel, EuclideanCost, KinematicCost};
