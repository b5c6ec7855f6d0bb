//! Software raster canvas plus the drawing primitives the badge artwork
//! is built from. All primitives blend source-over and clip silently at
//! the canvas edges.

mod canvas;
mod draw;
mod effects;
mod text;

pub use canvas::Canvas;
pub use text::{InkBox, TextPainter};
