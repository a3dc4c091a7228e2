// File: crates/stride-axis/src/lib.rs
// Summary: Core library entry point; exports the metric axis autoscale API.

pub mod types;
pub mod kind;
pub mod sample;
pub mod axis;
pub mod format;
pub mod autoscale;
pub mod error;

pub use autoscale::{compute, nice_step};
pub use axis::AxisSpec;
pub use error::AxisError;
pub use format::{format_fixed, label_decimals};
pub use kind::ValueKind;
pub use sample::SampleExtent;
