// File: crates/stride-axis/src/format.rs
// Summary: Label precision selection and fixed-point tick formatting.

use crate::kind::ValueKind;

/// Decimal places for tick labels given the chosen `step`.
///
/// Sub-unit steps get enough places to tell consecutive ticks apart; the
/// kind's minimum is applied last, so this is the single point where the
/// kind-specific precision rule lives.
pub fn label_decimals(step: f64, kind: ValueKind) -> usize {
    let mut decimals = 0usize;
    if step < 1.0 {
        let places = -step.log10().floor();
        decimals = places.max(1.0) as usize;
    }
    decimals.max(kind.min_decimals())
}

/// Format `value` with exactly `decimals` digits after the point,
/// rounding halves away from zero.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    format!("{:.*}", decimals, rounded)
}
