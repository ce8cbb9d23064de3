// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout so accented labels shape correctly.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

use crate::annotation::HAlign;

const SANS_FAMILIES: &[&str] = &["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(SANS_FAMILIES);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its alphabetic baseline on `baseline_y`, aligned horizontally around `x`.
    pub fn draw_aligned(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        baseline_y: f32,
        size: f32,
        color: skia::Color,
        align: HAlign,
    ) {
        let mut p = self.layout(text, size, color);
        let left = left_edge(x, p.longest_line(), align);
        p.paint(canvas, (left, baseline_y - p.alphabetic_baseline()));
    }

    /// Draw `text` so that its box is vertically centred on `center_y`.
    pub fn draw_middle(&self, canvas: &skia::Canvas, text: &str, x: f32, center_y: f32, size: f32, color: skia::Color, align: HAlign) {
        let mut p = self.layout(text, size, color);
        let left = left_edge(x, p.longest_line(), align);
        p.paint(canvas, (left, center_y - p.height() * 0.5));
    }
}

fn left_edge(x: f32, width: f32, align: HAlign) -> f32 {
    match align {
        HAlign::Center => x - width * 0.5,
        HAlign::Right => x - width,
    }
}
