// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

use crate::axis::Axis;
use crate::geometry::RectI32;

/// Maps a data interval onto a pixel interval. `px_end` may be smaller than
/// `px_start` (the Y axis grows upward on screen).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub vmin: f64,
    pub vmax: f64,
    pub px_start: f32,
    pub px_end: f32,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, px_start: f32, px_end: f32) -> Self {
        let mut s = Self { vmin, vmax, px_start, px_end };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn horizontal(axis: &Axis, plot: &RectI32) -> Self {
        Self::new(axis.min, axis.max, plot.left as f32, plot.right as f32)
    }

    pub fn vertical(axis: &Axis, plot: &RectI32) -> Self {
        Self::new(axis.min, axis.max, plot.bottom as f32, plot.top as f32)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.px_start + t as f32 * (self.px_end - self.px_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_scale_is_flipped() {
        let s = LinearScale::new(0.0, 10.0, 300.0, 100.0);
        assert_eq!(s.to_px(0.0), 300.0);
        assert_eq!(s.to_px(10.0), 100.0);
        assert_eq!(s.to_px(5.0), 200.0);
    }

    #[test]
    fn degenerate_range_widens() {
        let s = LinearScale::new(3.0, 3.0, 0.0, 100.0);
        assert_eq!(s.vmax, 4.0);
        assert_eq!(s.to_px(3.5), 50.0);
    }
}
