//! Chart data model.

/// One x/y pair extracted from the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    /// Category label on the x axis
    pub label: String,
    /// Numeric y value
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Linear mapping from a value domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain_min: f64,
    pub domain_max: f64,
}

impl LinearScale {
    /// Domain covering every value and zero, so bars always have a baseline.
    #[must_use]
    pub fn zero_based(points: &[DataPoint]) -> Self {
        let (min, max) = points
            .iter()
            .map(|p| p.value)
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let max = if max > min { max } else { min + 1.0 };
        Self {
            domain_min: min,
            domain_max: max,
        }
    }

    /// Position of `value` as a fraction of the range, `0.0` at `domain_min`.
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.domain_min) / (self.domain_max - self.domain_min)
    }

    /// Evenly spaced tick values, both ends included.
    #[must_use]
    pub fn ticks(&self, count: u32) -> Vec<f64> {
        let step = (self.domain_max - self.domain_min) / f64::from(count.max(1));
        (0..=count)
            .map(|i| step.mul_add(f64::from(i), self.domain_min))
            .collect()
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
