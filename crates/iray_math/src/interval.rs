/// A range of real numbers, used for ray parameters, axis extents and
/// fog weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Create an interval of the given length centered on `center`.
    pub fn centered(center: f64, length: f64) -> Self {
        let half = length / 2.0;
        Self::new(center - half, center + half)
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// The unit interval [0, 1].
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    /// Ray parameters strictly in front of the origin: `surrounds(t)` is
    /// true exactly for `0 < t < f64::MAX`.
    pub const IN_FRONT: Interval = Interval {
        min: 0.0,
        max: f64::MAX,
    };
}
