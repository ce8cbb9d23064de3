// File: crates/chart-core/src/axis.rs
// Summary: Axis model with ranges and optional category ticks.

#[derive(Clone, Debug)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    /// When set, ticks sit at integer positions 0..n labelled with these names.
    pub categories: Option<Vec<String>>,
}

impl Axis {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max, categories: None }
    }

    pub fn default_x() -> Self { Self::new(0.0, 1.0) }

    pub fn default_y() -> Self { Self::new(0.0, 1.0) }
}
