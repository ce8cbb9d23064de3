// File: crates/chart-core/src/view.rs
// Summary: View state: data extents of a chart and the padded axis ranges derived from them.

use crate::series::SeriesType;
use crate::Chart;

/// Default autoscale padding, as a fraction of the data span on each side.
pub const DEFAULT_MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Tight extents over every series and arrow, or `None` for an empty chart.
    pub fn data_extents(chart: &Chart) -> Option<Self> {
        let bounds = chart
            .series
            .iter()
            .filter_map(|s| s.bounds())
            .chain(chart.arrows.iter().filter_map(|a| a.bounds()));
        let mut out: Option<Self> = None;
        for (x0, x1, y0, y1) in bounds {
            out = Some(match out {
                None => Self { x_min: x0, x_max: x1, y_min: y0, y_max: y1 },
                Some(v) => Self {
                    x_min: v.x_min.min(x0),
                    x_max: v.x_max.max(x1),
                    y_min: v.y_min.min(y0),
                    y_max: v.y_max.max(y1),
                },
            });
        }
        out.filter(|v| v.x_min.is_finite() && v.x_max.is_finite() && v.y_min.is_finite() && v.y_max.is_finite())
    }

    /// Padded view for `chart`. Bars pin the value axis at zero so they grow from
    /// the frame edge. Empty charts get the unit square.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let Some(mut v) = Self::data_extents(chart) else {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        };
        if (v.x_max - v.x_min).abs() < 1e-9 { v.x_min -= 0.5; v.x_max += 0.5; }
        if (v.y_max - v.y_min).abs() < 1e-9 { v.y_min -= 0.5; v.y_max += 0.5; }

        let has_bars = chart.series.iter().any(|s| s.series_type == SeriesType::Bar);
        let xm = (v.x_max - v.x_min) * margin;
        let ym = (v.y_max - v.y_min) * margin;
        Self {
            x_min: v.x_min - xm,
            x_max: v.x_max + xm,
            y_min: if has_bars && v.y_min == 0.0 { 0.0 } else { v.y_min - ym },
            y_max: if has_bars && v.y_max == 0.0 { 0.0 } else { v.y_max + ym },
        }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
