// File: crates/stride-axis/src/sample.rs
// Summary: Sample-set validation and min/max extent scan.

use crate::error::AxisError;

/// Validated extent of one metric's samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleExtent {
    pub min: f64,
    pub max: f64,
}

impl SampleExtent {
    /// Scan `values` for min/max. Fails on an empty set and on the first
    /// NaN/infinite entry; order of the samples does not matter.
    pub fn from_values(values: &[f64]) -> Result<Self, AxisError> {
        if values.is_empty() {
            return Err(AxisError::EmptySamples);
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(AxisError::NonFiniteSample { index, value });
            }
            min = min.min(value);
            max = max.max(value);
        }
        Ok(Self { min, max })
    }

    /// Width of the extent; zero for a constant sample set.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}
