// File: crates/chart-core/src/error.rs
// Summary: Typed errors for figure construction and raster rendering.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("{what}: expected {expected} entries, got {got}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("{0} series has no data")]
    EmptySeries(&'static str),
    #[error("failed to create {width}x{height} raster surface")]
    SurfaceUnavailable { width: i32, height: i32 },
    #[error("encode PNG failed")]
    EncodeFailed,
}
