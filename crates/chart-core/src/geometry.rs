// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Plot area left over after removing `insets` from a `width` x `height` surface.
    /// Collapses to a zero-size rect rather than inverting when insets exceed the surface.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        let left = (insets.left as i32).min(width);
        let top = (insets.top as i32).min(height);
        let right = (width - insets.right as i32).max(left);
        let bottom = (height - insets.bottom as i32).max(top);
        Self { left, top, right, bottom }
    }

    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) as f32 * 0.5 }
}
