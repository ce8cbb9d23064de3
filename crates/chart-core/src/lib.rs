// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the figure model and PNG rendering API.

pub mod annotation;
pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use annotation::{Arrow, HAlign, TextAnnotation};
pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use error::ChartError;
pub use series::{Series, SeriesType};
pub use text::TextShaper;
pub use theme::Theme;
pub use view::ViewState;
