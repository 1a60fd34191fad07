//! Per-axis kinematic parameters and the two-regime time formula.

/// Acceleration and feedrate limits for one machine axis, in canonical
/// units (mm/s² and mm/s for linear axes, deg/s² and deg/s for rotary).
///
/// Validated at construction: both limits must be finite and positive,
/// otherwise the derived short-distance limit would be undefined and the
/// estimate would leak NaN/Infinity into the solve loop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisParams {
    acceleration: f64,
    feedrate: f64,
    /// Travel distance below which the axis never reaches its feedrate
    /// ceiling: `feedrate² / acceleration`.
    short_distance_limit: f64,
}

impl AxisParams {
    /// Builds axis parameters from an acceleration limit and a feedrate
    /// (velocity) limit.
    ///
    /// # Errors
    ///
    /// Returns an error if either limit is non-finite or not positive.
    pub fn new(acceleration: f64, feedrate: f64) -> Result<Self, String> {
        if !acceleration.is_finite() || acceleration <= 0.0 {
            return Err(format!(
                "axis acceleration must be finite and positive, got {acceleration}"
            ));
        }
        if !feedrate.is_finite() || feedrate <= 0.0 {
            return Err(format!(
                "axis feedrate must be finite and positive, got {feedrate}"
            ));
        }
        Ok(Self {
            acceleration,
            feedrate,
            short_distance_limit: feedrate * feedrate / acceleration,
        })
    }

    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    pub fn feedrate(&self) -> f64 {
        self.feedrate
    }

    pub fn short_distance_limit(&self) -> f64 {
        self.short_distance_limit
    }

    /// Estimated time to travel `distance` along this axis, starting and
    /// ending at standstill. The sign of `distance` is irrelevant.
    ///
    /// Below the short-distance limit the profile is a pure acceleration /
    /// deceleration triangle. At or above it the axis ramps to feedrate,
    /// cruises, and ramps down; the two ramps together take
    /// `feedrate / acceleration` and the rest is covered at feedrate.
    pub fn axis_time(&self, distance: f64) -> f64 {
        let distance = distance.abs();
        if distance < self.short_distance_limit {
            2.0 * (distance / self.acceleration).sqrt()
        } else {
            self.feedrate / self.acceleration + distance / self.feedrate
        }
    }
}
