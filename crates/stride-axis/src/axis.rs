// File: crates/stride-axis/src/axis.rs
// Summary: Axis result record with tick positions and labels.

/// Y-axis parameters for one metric chart.
///
/// `ticks` holds the formatted labels for the positions
/// `y_min, y_min + step, ..` in ascending order. Renderers draw grid
/// lines and labels from this record alone; recomputing bounds on the
/// drawing side would let the two drift apart.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpec {
    pub y_min: f64,
    pub y_max: f64,
    pub step: f64,
    pub decimals: usize,
    pub ticks: Vec<String>,
}

impl AxisSpec {
    /// Numeric tick positions matching `ticks`, lowest first.
    pub fn tick_values(&self) -> Vec<f64> {
        (0..self.ticks.len())
            .map(|i| self.y_min + self.step * i as f64)
            .collect()
    }

    /// Whether `value` falls inside the axis bounds.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.y_min && value <= self.y_max
    }
}
