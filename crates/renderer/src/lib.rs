//! Heat map rendering.
//!
//! Turns a table of values in `[0, 1]` into a PNG image:
//! - `table`: delimited text reader and the numeric grid
//! - `colormap`: value to color mapping (hue ramp or gray)
//! - `heatgrid`: cell to pixel layout with optional gridlines
//! - `png`: encoder for any pixel surface

pub mod colormap;
pub mod heatgrid;
pub mod png;
pub mod surface;
pub mod table;

pub use colormap::{Color, ColorMapper, Hsb};
pub use heatgrid::HeatGrid;
pub use surface::{ColorModel, PixelSurface};
pub use table::{Cell, Grid, TableReader};
