use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum SolarError {
    /// Stdin did not parse as a float. Non-fatal: the caller falls back to a
    /// speed of 0.0, which freezes the simulation.
    #[error("speed input {input:?} is not a number")]
    InvalidSpeedInput { input: String },

    #[error("display surface unavailable: {0}")]
    DisplaySurfaceUnavailable(#[from] io::Error),

    /// A plot landed off the 320x200 surface. The rasterizer clips these
    /// silently; the variant exists for callers that want the strict check.
    #[error("pixel ({x}, {y}) is outside the 320x200 surface")]
    PixelOutOfBounds { x: i32, y: i32 },
}
