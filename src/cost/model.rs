//! Edge-cost metrics for the tour solver.

use super::axis::AxisParams;
use crate::geom::Point;

/// Scores the cost of one move between two points. The unit is whatever
/// the metric produces — seconds for a kinematic model, millimeters for
/// the Euclidean fallback — and only relative ordering matters to the
/// solver.
pub trait CostModel {
    fn cost(&self, a: &Point, b: &Point) -> f64;
}

impl<C: CostModel + ?Sized> CostModel for &C {
    fn cost(&self, a: &Point, b: &Point) -> f64 {
        (**self).cost(a, b)
    }
}

/// Straight-line 3D distance. The fallback metric when no kinematic
/// parameters are available for the head.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanCost;

impl CostModel for EuclideanCost {
    fn cost(&self, a: &Point, b: &Point) -> f64 {
        a.linear_distance_to(b)
    }
}

/// Motion-time estimate from per-axis kinematic limits.
///
/// X and Y are mandatory; Z and rotation axes are optional and only
/// participate when configured. Axes move concurrently, so the move time
/// is the maximum of the per-axis times. Which axes participate is decided
/// once at construction, keeping the per-edge evaluation branch-free apart
/// from the two `Option` checks.
#[derive(Debug, Clone)]
pub struct KinematicCost {
    x_axis: AxisParams,
    y_axis: AxisParams,
    z_axis: Option<AxisParams>,
    c_axis: Option<AxisParams>,
}

impl KinematicCost {
    /// Builds a model from the mandatory X and Y axis parameters.
    /// Z and rotation contributions default to zero.
    pub fn new(x_axis: AxisParams, y_axis: AxisParams) -> Self {
        Self {
            x_axis,
            y_axis,
            z_axis: None,
            c_axis: None,
        }
    }

    /// Adds a Z axis to the estimate.
    pub fn with_z_axis(mut self, z_axis: AxisParams) -> Self {
        self.z_axis = Some(z_axis);
        self
    }

    /// Adds a rotation axis to the estimate. The rotation delta is taken
    /// modulo 360°.
    pub fn with_rotation_axis(mut self, c_axis: AxisParams) -> Self {
        self.c_axis = Some(c_axis);
        self
    }

    /// Move time considering X and Y only.
    pub fn xy_cost(&self, a: &Point, b: &Point) -> f64 {
        let cost_x = self.x_axis.axis_time(a.x - b.x);
        let cost_y = self.y_axis.axis_time(a.y - b.y);
        cost_x.max(cost_y)
    }

    /// Move time considering X, Y and (when configured) Z.
    pub fn xyz_cost(&self, a: &Point, b: &Point) -> f64 {
        let mut cost = self.xy_cost(a, b);
        if let Some(z_axis) = &self.z_axis {
            cost = cost.max(z_axis.axis_time(a.z - b.z));
        }
        cost
    }

    /// Move time considering all configured axes.
    pub fn xyzc_cost(&self, a: &Point, b: &Point) -> f64 {
        let mut cost = self.xyz_cost(a, b);
        if let Some(c_axis) = &self.c_axis {
            cost = cost.max(c_axis.axis_time((a.rotation - b.rotation) % 360.0));
        }
        cost
    }
}

impl CostModel for KinematicCost {
    fn cost(&self, a: &Point, b: &Point) -> f64 {
        self.xyzc_cost(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(acceleration: f64, feedrate: f64) -> AxisParams {
        AxisParams::new(acceleration, feedrate).unwrap()
    }

    #[test]
    fn test_euclidean_cost() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(3.0, 4.0, 0.0);
        assert!((EuclideanCost.cost(&a, &b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_slowest_axis_gates_the_move() {
        // Same distance on both axes, but Y accelerates far slower.
        let model = KinematicCost::new(axis(3000.0, 300.0), axis(500.0, 300.0));
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(50.0, 50.0, 0.0);
        let y_only = axis(500.0, 300.0).axis_time(50.0);
        assert!((model.cost(&a, &b) - y_only).abs() < 1e-12);
    }

    #[test]
    fn test_z_axis_excluded_unless_configured() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 100.0);
        let without_z = KinematicCost::new(axis(1000.0, 300.0), axis(1000.0, 300.0));
        let with_z = without_z.clone().with_z_axis(axis(200.0, 50.0));
        assert!(with_z.cost(&a, &b) > without_z.cost(&a, &b));
        assert!((without_z.cost(&a, &b) - without_z.xy_cost(&a, &b)).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_delta_wraps_modulo_360() {
        let model = KinematicCost::new(axis(1000.0, 300.0), axis(1000.0, 300.0))
            .with_rotation_axis(axis(2000.0, 360.0));
        let a = Point::new(0.0, 0.0, 0.0).with_rotation(370.0);
        let b = Point::new(0.0, 0.0, 0.0);
        let c = Point::new(0.0, 0.0, 0.0).with_rotation(10.0);
        assert!((model.cost(&a, &b) - model.cost(&c, &b)).abs() < 1e-12);
    }

    #[test]
    fn test_xyzc_never_below_xy() {
        let model = KinematicCost::new(axis(1000.0, 300.0), axis(1000.0, 300.0))
            .with_z_axis(axis(500.0, 100.0))
            .with_rotation_axis(axis(2000.0, 720.0));
        let a = Point::new(10.0, 20.0, 5.0).with_rotation(45.0);
        let b = Point::new(200.0, 80.0, 0.0).with_rotation(-90.0);
        assert!(model.xyzc_cost(&a, &b) >= model.xyz_cost(&a, &b));
        assert!(model.xyz_cost(&a, &b) >= model.xy_cost(&a, &b));
    }

    #[test]
    fn test_cost_is_symmetric() {
        let model = KinematicCost::new(axis(1000.0, 300.0), axis(800.0, 250.0))
            .with_z_axis(axis(500.0, 100.0));
        let a = Point::new(10.0, 20.0, 5.0);
        let b = Point::new(200.0, 80.0, 0.0);
        assert!((model.cost(&a, &b) - model.cost(&b, &a)).abs() < 1e-12);
    }
}
