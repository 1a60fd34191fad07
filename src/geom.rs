//! Canonical coordinates for travel planning.
//!
//! All optimizer-internal arithmetic runs in one fixed unit (millimeters).
//! Caller coordinates are converted once at ingestion via [`LengthUnit`];
//! nothing inside the solve loop converts units.

/// A linear measurement unit, convertible to canonical millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthUnit {
    Meters,
    Centimeters,
    Millimeters,
    Microns,
    Inches,
    Mils,
}

impl LengthUnit {
    /// Multiplier taking a value in this unit to millimeters.
    pub fn millimeters_per_unit(self) -> f64 {
        match self {
            LengthUnit::Meters => 1000.0,
            LengthUnit::Centimeters => 10.0,
            LengthUnit::Millimeters => 1.0,
            LengthUnit::Microns => 0.001,
            LengthUnit::Inches => 25.4,
            LengthUnit::Mils => 0.0254,
        }
    }

    /// Converts a value expressed in this unit to millimeters.
    pub fn to_millimeters(self, value: f64) -> f64 {
        value * self.millimeters_per_unit()
    }
}

/// An immutable coordinate in canonical millimeters, plus a rotation
/// component in degrees for heads with a mapped rotational axis.
///
/// Plain-old-data on purpose: the solver touches millions of these per
/// solve, so there is no unit tag and no conversion on access.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Rotation in degrees. Ignored by purely linear cost metrics.
    pub rotation: f64,
}

impl Point {
    /// Creates a point from millimeter coordinates with zero rotation.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            rotation: 0.0,
        }
    }

    /// Creates a point from coordinates in the given unit, converting to
    /// millimeters. Rotation is angular and passes through unchanged.
    pub fn from_units(unit: LengthUnit, x: f64, y: f64, z: f64, rotation: f64) -> Self {
        Self {
            x: unit.to_millimeters(x),
            y: unit.to_millimeters(y),
            z: unit.to_millimeters(z),
            rotation,
        }
    }

    /// Returns this point with the rotation component replaced.
    pub fn with_rotation(self, rotation: f64) -> Self {
        Self { rotation, ..self }
    }

    /// Straight-line 3D distance to another point, in millimeters.
    /// The rotation component does not participate.
    pub fn linear_distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        assert!((LengthUnit::Meters.to_millimeters(1.5) - 1500.0).abs() < 1e-12);
        assert!((LengthUnit::Inches.to_millimeters(2.0) - 50.8).abs() < 1e-12);
        assert!((LengthUnit::Mils.to_millimeters(1000.0) - 25.4).abs() < 1e-12);
        assert!((LengthUnit::Millimeters.to_millimeters(7.0) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_units_converts_linear_axes_only() {
        let p = Point::from_units(LengthUnit::Centimeters, 1.0, 2.0, 3.0, 90.0);
        assert!((p.x - 10.0).abs() < 1e-12);
        assert!((p.y - 20.0).abs() < 1e-12);
        assert!((p.z - 30.0).abs() < 1e-12);
        assert!((p.rotation - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_distance() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(3.0, 4.0, 0.0);
        assert!((a.linear_distance_to(&b) - 5.0).abs() < 1e-12);

        let c = Point::new(1.0, 2.0, 2.0);
        assert!((a.linear_distance_to(&c) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_ignores_rotation() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0).with_rotation(180.0);
        assert!((a.linear_distance_to(&b) - 1.0).abs() < 1e-12);
    }
}
