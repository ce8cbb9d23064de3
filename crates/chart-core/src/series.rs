// File: crates/chart-core/src/series.rs
// Summary: Series model for scatter, line, and categorical bar data.

use crate::error::ChartError;

/// Default marker area in points^2.
pub const DEFAULT_MARKER_SIZE: f32 = 36.0;
/// Bar width as a fraction of the category spacing.
pub const BAR_WIDTH: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Scatter,
    Line,
    Bar,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,   // Scatter/Line points; Bar uses (index, height)
    pub categories: Vec<String>,    // Bar only
    pub marker_size: f32,           // Scatter only, area in points^2
}

impl Series {
    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self { series_type, data_xy: data, categories: Vec::new(), marker_size: DEFAULT_MARKER_SIZE }
    }

    /// Scatter from parallel coordinate slices.
    pub fn scatter(xs: &[f64], ys: &[f64], marker_size: f32) -> Result<Self, ChartError> {
        let data = zip_checked("scatter y values", xs, ys)?;
        Ok(Self { marker_size: marker_size.max(0.0), ..Self::with_data(SeriesType::Scatter, data) })
    }

    /// Line from parallel coordinate slices.
    pub fn line(xs: &[f64], ys: &[f64]) -> Result<Self, ChartError> {
        let data = zip_checked("line y values", xs, ys)?;
        Ok(Self::with_data(SeriesType::Line, data))
    }

    /// Categorical bars; bar `i` is centred on x = i.
    pub fn bars<S: AsRef<str>>(categories: &[S], heights: &[f64]) -> Result<Self, ChartError> {
        if categories.len() != heights.len() {
            return Err(ChartError::LengthMismatch {
                what: "bar heights",
                expected: categories.len(),
                got: heights.len(),
            });
        }
        if heights.is_empty() {
            return Err(ChartError::EmptySeries("bar"));
        }
        let data = heights.iter().enumerate().map(|(i, &h)| (i as f64, h)).collect();
        Ok(Self {
            series_type: SeriesType::Bar,
            data_xy: data,
            categories: categories.iter().map(|c| c.as_ref().to_string()).collect(),
            marker_size: DEFAULT_MARKER_SIZE,
        })
    }

    /// Marker radius in points (`marker_size` is an area).
    pub fn marker_radius_pt(&self) -> f32 { self.marker_size.sqrt() * 0.5 }

    /// Data-space bounds `(x_min, x_max, y_min, y_max)` covered by the series, if any.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        if self.data_xy.is_empty() { return None; }
        let mut b = (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY);
        for &(x, y) in &self.data_xy {
            let (x0, x1, y0, y1) = match self.series_type {
                SeriesType::Bar => (x - BAR_WIDTH * 0.5, x + BAR_WIDTH * 0.5, y.min(0.0), y.max(0.0)),
                SeriesType::Scatter | SeriesType::Line => (x, x, y, y),
            };
            b = (b.0.min(x0), b.1.max(x1), b.2.min(y0), b.3.max(y1));
        }
        Some(b)
    }
}

fn zip_checked(what: &'static str, xs: &[f64], ys: &[f64]) -> Result<Vec<(f64, f64)>, ChartError> {
    if xs.len() != ys.len() {
        return Err(ChartError::LengthMismatch { what, expected: xs.len(), got: ys.len() });
    }
    Ok(xs.iter().copied().zip(ys.iter().copied()).collect())
}
