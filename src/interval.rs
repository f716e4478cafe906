//! Interval arithmetic for ray parameter ranges.
//!
//! Hit queries use the exclusive test (`surrounds`); output quantization uses
//! `clamp`.

/// Interval between `min` and `max` for range checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp the given value to be within this interval's bounds.
    ///
    /// NaN maps to `min`.
    pub fn clamp(&self, x: f64) -> f64 {
        if x > self.max {
            self.max
        } else if x >= self.min {
            x
        } else {
            self.min
        }
    }
}
