// File: crates/chart-core/tests/render_pixels.rs
// Purpose: Check rendered pixels for each series type (scatter, line, bar) and arrows.
// Labels are off so results do not depend on installed fonts.

use chart_core::geometry::RectI32;
use chart_core::scale::LinearScale;
use chart_core::{Arrow, Chart, RenderOptions, Series};
use image::RgbaImage;

const SERIES_BLUE: [u8; 4] = [0x1f, 0x77, 0xb4, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Rendered image plus a data-to-pixel mapper for the chart's plot area.
struct Rendered {
    img: RgbaImage,
    sx: LinearScale,
    sy: LinearScale,
}

impl Rendered {
    fn at(&self, x: f64, y: f64) -> [u8; 4] {
        let px = self.sx.to_px(x).round() as u32;
        let py = self.sy.to_px(y).round() as u32;
        self.img.get_pixel(px, py).0
    }
}

fn render<F: FnOnce(&mut Chart)>(build: F) -> Rendered {
    let mut chart = Chart::new();
    build(&mut chart);
    chart.autoscale();

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // deterministic
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();

    let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);
    Rendered {
        img,
        sx: LinearScale::horizontal(&chart.x_axis, &plot),
        sy: LinearScale::vertical(&chart.y_axis, &plot),
    }
}

#[test]
fn scatter_markers_and_arrow_head_are_filled() {
    let r = render(|c| {
        c.add_series(Series::scatter(&[0.0, 1.0, 0.5], &[0.5, 0.5, 1.0], 400.0).unwrap());
        c.add_arrow(Arrow::new(0.1, 0.5, 0.7, 0.0).head_width(0.05).length_includes_head(true));
    });

    assert_eq!(r.at(0.0, 0.5), SERIES_BLUE);
    assert_eq!(r.at(1.0, 0.5), SERIES_BLUE);
    assert_eq!(r.at(0.5, 1.0), SERIES_BLUE);
    // Inside the arrow head, two thirds back from the tip at x = 0.8.
    assert_eq!(r.at(0.75, 0.5), SERIES_BLUE);
    // Empty space between the markers.
    assert_eq!(r.at(0.25, 0.8), WHITE);
    assert_eq!(r.at(0.75, 0.8), WHITE);
}

#[test]
fn line_passes_through_its_vertices() {
    let r = render(|c| {
        c.add_series(Series::line(&[1.0, 2.0, 3.0, 4.0, 5.0], &[0.0, 1.0, 3.0, 4.0, 6.0]).unwrap());
    });

    for (x, y) in [(2.0, 1.0), (3.0, 3.0), (4.0, 4.0)] {
        let [red, _, blue, _] = r.at(x, y);
        assert!(blue > red + 20, "no stroke at ({x}, {y}): {:?}", r.at(x, y));
    }
    // Far from the polyline, above its left end.
    assert_eq!(r.at(1.5, 5.0), WHITE);
}

#[test]
fn bars_fill_their_category_slots() {
    let r = render(|c| {
        c.add_series(Series::bars(&["T1", "T2", "T3", "T4"], &[100.0, 120.0, 95.0, 110.0]).unwrap());
    });

    for (i, h) in [100.0, 120.0, 95.0, 110.0].into_iter().enumerate() {
        assert_eq!(r.at(i as f64, h * 0.5), SERIES_BLUE, "bar {i} body");
        // Above the bar top but still below the tallest one.
        if h < 115.0 {
            assert_eq!(r.at(i as f64, h + 4.0), WHITE, "bar {i} top");
        }
    }
    // Gap between neighbouring bars (0.8 wide on unit spacing).
    assert_eq!(r.at(0.5, 50.0), WHITE);
}

#[test]
fn rendering_is_deterministic_without_labels() {
    let build = |c: &mut Chart| c.add_series(Series::line(&[0.0, 1.0], &[1.0, 0.0]).unwrap());
    assert_eq!(render(build).img.as_raw(), render(build).img.as_raw());
}
