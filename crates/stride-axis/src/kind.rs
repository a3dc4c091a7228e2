// File: crates/stride-axis/src/kind.rs
// Summary: Value-kind discriminator controlling label precision.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Weight,
    Other,
}

impl ValueKind {
    /// Map a metric tag to a kind. `"weight"` (any case) selects `Weight`;
    /// every other tag falls back to `Other`.
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("weight") {
            ValueKind::Weight
        } else {
            ValueKind::Other
        }
    }

    /// Minimum decimal places labels of this kind must carry.
    /// Body-weight readings keep one decimal even when the step is an integer.
    pub fn min_decimals(self) -> usize {
        match self {
            ValueKind::Weight => 1,
            ValueKind::Other => 0,
        }
    }
}
