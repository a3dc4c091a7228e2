// File: crates/stride-axis/src/autoscale.rs
// Summary: Nice-axis computation: padding, step rounding, bound snapping.

use crate::axis::AxisSpec;
use crate::error::AxisError;
use crate::format::{format_fixed, label_decimals};
use crate::kind::ValueKind;
use crate::sample::SampleExtent;
use crate::types::{NICE_MULTIPLIERS, PADDING_FRACTION, TARGET_TICKS};

/// Compute nice Y-axis bounds, step, and tick labels for one metric's
/// samples.
///
/// `values` must hold at least one finite number; empty or NaN/infinite
/// input is rejected. Every numeric shape beyond that is a supported
/// value, not an error: constant sets, sub-unit magnitudes, extents that
/// land exactly on step multiples.
pub fn compute(values: &[f64], kind: ValueKind) -> Result<AxisSpec, AxisError> {
    let extent = SampleExtent::from_values(values)?;

    // A constant sample set still gets a visible band around it: the
    // substituted range feeds the padding only, bounds stay anchored to
    // the true extent.
    let mut range = extent.range();
    if range == 0.0 {
        range = 1.0;
    }
    let padding = range * PADDING_FRACTION;
    let raw_min = extent.min - padding;
    let raw_max = extent.max + padding;

    let mut raw_step = (raw_max - raw_min) / (TARGET_TICKS - 1) as f64;
    if raw_step == 0.0 {
        raw_step = 1.0;
    }
    let step = nice_step(raw_step);

    // Snap bounds outward to step multiples; when both land on the same
    // multiple the axis must not collapse to zero width.
    let y_min = (raw_min / step).floor() * step;
    let mut y_max = (raw_max / step).ceil() * step;
    if y_max == y_min {
        y_max = y_min + step;
    }

    let decimals = label_decimals(step, kind);
    let ticks = (0..TARGET_TICKS)
        .map(|i| format_fixed(y_min + step * i as f64, decimals))
        .collect();

    Ok(AxisSpec { y_min, y_max, step, decimals, ticks })
}

/// Round `raw` up to the nearest conventional step: the first of
/// 1, 2, 2.5, 5, 10 times the power of ten at or below `raw`.
pub fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    for m in NICE_MULTIPLIERS {
        if m * magnitude >= raw {
            return m * magnitude;
        }
    }
    // log10 drift can leave `raw` a hair above every candidate.
    10.0 * magnitude
}
