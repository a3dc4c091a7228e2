// File: crates/stride-axis/src/error.rs
// Summary: Typed failures for axis computation input validation.

use thiserror::Error;

/// Rejected inputs. Every finite, non-empty sample set computes an axis;
/// anything else fails fast here instead of poisoning min/max downstream.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AxisError {
    #[error("sample set is empty; the axis needs at least one value")]
    EmptySamples,
    #[error("sample {index} is not finite ({value}); NaN/infinity would corrupt the axis bounds")]
    NonFiniteSample { index: usize, value: f64 },
}
