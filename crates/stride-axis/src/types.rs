// File: crates/stride-axis/src/types.rs
// Summary: Shared axis policy constants (tick count, padding, nice table).

/// Number of labeled positions the axis always shows.
pub const TARGET_TICKS: usize = 5;

/// Fractional margin added beyond the raw data extent on each side.
pub const PADDING_FRACTION: f64 = 0.1;

/// Ordered candidate multipliers for nice-step rounding.
/// Contract: ascending, first entry 1, last entry 10. The scan in
/// `autoscale` picks the first multiplier `m` with `m * magnitude >= raw`,
/// so the order here is the tie-break.
pub const NICE_MULTIPLIERS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];
