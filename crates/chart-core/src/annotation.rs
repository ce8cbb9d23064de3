// File: crates/chart-core/src/annotation.rs
// Summary: Data-space text labels and arrows drawn on top of series.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Center,
    Right,
}

/// Text anchored at a data coordinate. Its baseline sits on `y`; it is not
/// clipped to the plot area.
#[derive(Clone, Debug)]
pub struct TextAnnotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub align: HAlign,
    /// Font size in points.
    pub size_pt: f32,
}

impl TextAnnotation {
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self { x, y, text: text.into(), align: HAlign::default(), size_pt: 10.0 }
    }
}

/// Filled arrow from `(x, y)` along `(dx, dy)`; all dimensions are in data units.
#[derive(Clone, Copy, Debug)]
pub struct Arrow {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub width: f64,
    pub head_width: f64,
    pub head_length: f64,
    /// When true the tip lands on `(x + dx, y + dy)`; otherwise the head is appended past it.
    pub length_includes_head: bool,
}

impl Arrow {
    pub fn new(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        Self {
            x,
            y,
            dx,
            dy,
            width: 0.001,
            head_width: 0.003,
            head_length: 0.0045,
            length_includes_head: false,
        }
    }

    /// Set the head width; head length follows at 1.5x.
    pub fn head_width(mut self, head_width: f64) -> Self {
        self.head_width = head_width.max(0.0);
        self.head_length = 1.5 * self.head_width;
        self
    }

    pub fn length_includes_head(mut self, yes: bool) -> Self {
        self.length_includes_head = yes;
        self
    }

    /// Outline polygon in data space, starting at the shaft's tail. Empty for a
    /// zero-length arrow.
    pub fn polygon(&self) -> Vec<(f64, f64)> {
        let len = self.dx.hypot(self.dy);
        if len <= f64::EPSILON {
            return Vec::new();
        }
        let total = if self.length_includes_head { len } else { len + self.head_length };
        let head = self.head_length.min(total);
        let neck = total - head;
        let (hw, sw) = (self.head_width * 0.5, self.width * 0.5);

        let (ux, uy) = (self.dx / len, self.dy / len);
        let (nx, ny) = (-uy, ux);
        let at = |along: f64, across: f64| {
            (self.x + along * ux + across * nx, self.y + along * uy + across * ny)
        };

        vec![
            at(0.0, sw),
            at(neck, sw),
            at(neck, hw),
            at(total, 0.0),
            at(neck, -hw),
            at(neck, -sw),
            at(0.0, -sw),
        ]
    }

    pub fn tip(&self) -> Option<(f64, f64)> {
        self.polygon().get(3).copied()
    }

    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let poly = self.polygon();
        if poly.is_empty() { return None; }
        Some(poly.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
            |b, &(x, y)| (b.0.min(x), b.1.max(x), b.2.min(y), b.3.max(y)),
        ))
    }
}
