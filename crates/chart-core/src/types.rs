// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure size, paddings).

/// Default figure width in pixels (6in at 100dpi).
pub const WIDTH: i32 = 600;
/// Default figure height in pixels (4in at 100dpi).
pub const HEIGHT: i32 = 400;
/// Pixels per typographic point at the default resolution.
pub const PX_PER_PT: f32 = 100.0 / 72.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    // Same subplot fractions as a default 6x4 figure: 12.5% / 10% / 12% / 11%.
    fn default() -> Self {
        Self::new(75, 60, 48, 44)
    }
}
