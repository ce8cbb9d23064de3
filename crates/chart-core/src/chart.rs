// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use crate::annotation::{Arrow, HAlign, TextAnnotation};
use crate::error::ChartError;
use crate::geometry::RectI32;
use crate::grid::{format_tick, linspace, nice_ticks};
use crate::scale::LinearScale;
use crate::series::{Series, SeriesType, BAR_WIDTH};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, PX_PER_PT, WIDTH};
use crate::view::{ViewState, DEFAULT_MARGIN};
use crate::Axis;

const MAX_TICKS: usize = 9;
const TICK_LEN_PT: f32 = 3.5;
const TICK_PAD_PT: f32 = 3.5;
const LABEL_PT: f32 = 10.0;
const TITLE_PT: f32 = 12.0;
const TITLE_PAD_PT: f32 = 6.0;
const LINE_WIDTH_PT: f32 = 1.5;
const SPINE_WIDTH_PT: f32 = 0.8;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Tick labels, title, and annotations. Turn off for font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub texts: Vec<TextAnnotation>,
    pub arrows: Vec<Arrow>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            texts: Vec::new(),
            arrows: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a series. A bar series also switches the X axis to its category ticks.
    pub fn add_series(&mut self, series: Series) {
        if series.series_type == SeriesType::Bar {
            self.x_axis.categories = Some(series.categories.clone());
        }
        self.series.push(series);
    }

    pub fn add_text(&mut self, text: TextAnnotation) {
        self.texts.push(text);
    }

    pub fn add_arrow(&mut self, arrow: Arrow) {
        self.arrows.push(arrow);
    }

    /// Fit both axes to the data, padding each side by `margin` of the span.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Autoscale with the default 5% margin.
    pub fn autoscale(&mut self) {
        self.autoscale_axes(DEFAULT_MARGIN);
    }

    /// Render to encoded PNG bytes. The raster surface lives only for the
    /// duration of this call.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::SurfaceUnavailable { width: opts.width, height: opts.height })?;

        self.draw(surface.canvas(), opts);

        // Snapshot and encode
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::EncodeFailed)?;
        let bytes = data.as_bytes().to_vec();
        debug!(width = opts.width, height = opts.height, bytes = bytes.len(), "rendered chart");
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), "wrote png");
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let sx = LinearScale::horizontal(&self.x_axis, &plot);
        let sy = LinearScale::vertical(&self.y_axis, &plot);

        if let Some(grid) = theme.grid {
            draw_grid(canvas, &plot, grid);
        }

        // Series and arrows are clipped to the plot area; text is not.
        canvas.save();
        canvas.clip_rect(to_rect(&plot), skia::ClipOp::Intersect, true);
        for s in &self.series {
            match s.series_type {
                SeriesType::Scatter => draw_scatter_series(canvas, &sx, &sy, s, theme.series),
                SeriesType::Line => draw_line_series(canvas, &sx, &sy, s, theme.series),
                SeriesType::Bar => draw_bar_series(canvas, &sx, &sy, s, theme.series),
            }
        }
        for a in &self.arrows {
            draw_arrow(canvas, &sx, &sy, a, theme.series);
        }
        canvas.restore();

        let x_ticks = axis_ticks(&self.x_axis);
        let y_ticks = axis_ticks(&self.y_axis);
        draw_frame(canvas, &plot, theme);
        draw_tick_marks(canvas, &plot, &sx, &sy, &x_ticks, &y_ticks, theme);

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_tick_labels(canvas, &shaper, &plot, &sx, &sy, &x_ticks, &y_ticks, theme);
            if let Some(title) = &self.title {
                let baseline = plot.top as f32 - TITLE_PAD_PT * PX_PER_PT;
                shaper.draw_aligned(canvas, title, plot.center_x(), baseline, TITLE_PT * PX_PER_PT, theme.title, HAlign::Center);
            }
            for t in &self.texts {
                shaper.draw_aligned(canvas, &t.text, sx.to_px(t.x), sy.to_px(t.y), t.size_pt * PX_PER_PT, theme.annotation, t.align);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Tick positions paired with their label text.
fn axis_ticks(axis: &Axis) -> Vec<(f64, String)> {
    match &axis.categories {
        Some(names) => names
            .iter()
            .enumerate()
            .map(|(i, n)| (i as f64, n.clone()))
            .filter(|(v, _)| *v >= axis.min && *v <= axis.max)
            .collect(),
        None => {
            let (ticks, step) = nice_ticks(axis.min, axis.max, MAX_TICKS);
            ticks.into_iter().map(|v| (v, format_tick(v, step))).collect()
        }
    }
}

fn to_rect(r: &RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, plot: &RectI32, color: skia::Color) {
    let paint = stroke_paint(color, 1.0);
    let (l, t, r, b) = (plot.left as f64, plot.top as f64, plot.right as f64, plot.bottom as f64);

    // verticals
    for x in linspace(l, r, 10) {
        canvas.draw_line((x as f32, t as f32), (x as f32, b as f32), &paint);
    }
    // horizontals
    for y in linspace(t, b, 6) {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, SPINE_WIDTH_PT * PX_PER_PT);
    canvas.draw_rect(to_rect(plot), &paint);
}

fn draw_tick_marks(
    canvas: &skia::Canvas,
    plot: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    theme: &Theme,
) {
    let paint = stroke_paint(theme.tick, SPINE_WIDTH_PT * PX_PER_PT);
    let len = TICK_LEN_PT * PX_PER_PT;
    let b = plot.bottom as f32;
    let l = plot.left as f32;
    for (v, _) in x_ticks {
        let x = sx.to_px(*v);
        canvas.draw_line((x, b), (x, b + len), &paint);
    }
    for (v, _) in y_ticks {
        let y = sy.to_px(*v);
        canvas.draw_line((l - len, y), (l, y), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    theme: &Theme,
) {
    let size = LABEL_PT * PX_PER_PT;
    let offset = (TICK_LEN_PT + TICK_PAD_PT) * PX_PER_PT;
    let x_label_mid = plot.bottom as f32 + offset + size * 0.6;
    for (v, label) in x_ticks {
        shaper.draw_middle(canvas, label, sx.to_px(*v), x_label_mid, size, theme.axis_label, HAlign::Center);
    }
    let y_label_right = plot.left as f32 - offset;
    for (v, label) in y_ticks {
        shaper.draw_middle(canvas, label, y_label_right, sy.to_px(*v), size, theme.axis_label, HAlign::Right);
    }
}

fn draw_scatter_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series, color: skia::Color) {
    let paint = fill_paint(color);
    let radius = series.marker_radius_pt() * PX_PER_PT;
    for &(x, y) in &series.data_xy {
        canvas.draw_circle((sx.to_px(x), sy.to_px(y)), radius, &paint);
    }
}

fn draw_line_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series, color: skia::Color) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((sx.to_px(x0), sy.to_px(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx.to_px(x), sy.to_px(y)));
    }

    let mut stroke = stroke_paint(color, LINE_WIDTH_PT * PX_PER_PT);
    stroke.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&path, &stroke);
}

fn draw_bar_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series, color: skia::Color) {
    let paint = fill_paint(color);
    let half = BAR_WIDTH * 0.5;
    let base = sy.to_px(0.0);
    for &(x, h) in &series.data_xy {
        let top = sy.to_px(h);
        let rect = skia::Rect::from_ltrb(sx.to_px(x - half), top.min(base), sx.to_px(x + half), top.max(base));
        canvas.draw_rect(rect, &paint);
    }
}

fn draw_arrow(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, arrow: &Arrow, color: skia::Color) {
    let outline = arrow.polygon();
    let Some(&(x0, y0)) = outline.first() else { return };

    let mut path = skia::Path::new();
    path.move_to((sx.to_px(x0), sy.to_px(y0)));
    for &(x, y) in outline.iter().skip(1) {
        path.line_to((sx.to_px(x), sy.to_px(y)));
    }
    path.close();
    canvas.draw_path(&path, &fill_paint(color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ticks_follow_bar_labels() {
        let mut chart = Chart::new();
        chart.add_series(Series::bars(&["T1", "T2", "T3"], &[1.0, 2.0, 3.0]).unwrap());
        chart.autoscale();
        let ticks = axis_ticks(&chart.x_axis);
        let labels: Vec<_> = ticks.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(labels, ["T1", "T2", "T3"]);
        assert_eq!(ticks[2].0, 2.0);
    }

    #[test]
    fn numeric_ticks_are_labelled() {
        let axis = Axis::new(-0.05, 1.05);
        let ticks = axis_ticks(&axis);
        assert_eq!(ticks.first().map(|t| t.1.as_str()), Some("0.0"));
        assert_eq!(ticks.last().map(|t| t.1.as_str()), Some("1.0"));
    }
}
