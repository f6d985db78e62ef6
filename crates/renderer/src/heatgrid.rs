//! Heat map rasterization.
//!
//! Each grid cell becomes a `pixel_scale` x `pixel_scale` block. With a
//! gridline interval `g > 0`, a one pixel separator is inserted after every
//! `g` cells along both axes, except after the last full group:
//!
//! ```text
//! g = 2, scale = 1, 5 cells:   c c | c c | c     -> 7 pixels
//! g = 2, scale = 1, 4 cells:   c c | c c         -> 5 pixels
//! ```

use std::io::BufRead;

use heatman_common::{HeatmanResult, RenderConfig};
use tracing::debug;

use crate::colormap::{Color, ColorMapper};
use crate::surface::PixelSurface;
use crate::table::{Grid, TableReader};

/// Number of separator lines along an axis of `cells` cells.
pub fn separator_count(cells: usize, interval: u32) -> usize {
    if interval == 0 {
        return 0;
    }
    let interval = interval as usize;
    let count = cells / interval;
    if cells % interval == 0 {
        count.saturating_sub(1)
    } else {
        count
    }
}

/// Length in pixels of an axis of `cells` cells, saturating at `usize::MAX`.
pub fn axis_length(cells: usize, pixel_scale: u32, interval: u32) -> usize {
    cells
        .saturating_mul(pixel_scale as usize)
        .saturating_add(separator_count(cells, interval))
}

/// Map a pixel coordinate back to the cell index it shows.
///
/// Returns `None` when the pixel lies on a separator line.
pub fn cell_index(pixel: usize, pixel_scale: u32, interval: u32) -> Option<usize> {
    let scale = pixel_scale as usize;
    if interval == 0 {
        return Some(pixel / scale);
    }
    let line = scale * interval as usize + 1;
    if pixel != 0 && pixel % line == line - 1 {
        return None;
    }
    Some((pixel - pixel / line) / scale)
}

/// A grid plus the settings needed to draw it.
#[derive(Debug, Clone)]
pub struct HeatGrid {
    grid: Grid,
    pixel_scale: u32,
    gridline_interval: u32,
    mapper: ColorMapper,
    width: usize,
    height: usize,
}

impl HeatGrid {
    pub fn new(grid: Grid, config: &RenderConfig) -> Self {
        Self::with_options(
            grid,
            config.pixel_scale,
            config.gridline_interval,
            ColorMapper::from(config.color_mode),
        )
    }

    /// Read a comma separated table and prepare it for drawing.
    pub fn from_table<R: BufRead>(input: R, config: &RenderConfig) -> HeatmanResult<Self> {
        let mut reader = TableReader::new(input);
        let grid = Grid::from_reader(&mut reader, config.header_mode)?;
        Ok(Self::new(grid, config))
    }

    /// Reference gradient strip. Gridlines and headers do not apply.
    pub fn scaler(config: &RenderConfig) -> Self {
        Self::with_options(
            Grid::scaler(),
            config.pixel_scale,
            0,
            ColorMapper::from(config.color_mode),
        )
    }

    /// `pixel_scale` values below 1 are treated as 1.
    pub fn with_options(
        grid: Grid,
        pixel_scale: u32,
        gridline_interval: u32,
        mapper: ColorMapper,
    ) -> Self {
        let pixel_scale = pixel_scale.max(1);
        let width = axis_length(grid.width(), pixel_scale, gridline_interval);
        let height = axis_length(grid.height(), pixel_scale, gridline_interval);

        debug!(
            cells_x = grid.width(),
            cells_y = grid.height(),
            width,
            height,
            pixel_scale,
            gridline_interval,
            "Prepared heat grid"
        );

        Self {
            grid,
            pixel_scale,
            gridline_interval,
            mapper,
            width,
            height,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pixel_scale(&self) -> u32 {
        self.pixel_scale
    }

    pub fn gridline_interval(&self) -> u32 {
        self.gridline_interval
    }

    pub fn mapper(&self) -> ColorMapper {
        self.mapper
    }

    /// Color of the cell at column `x`, row `y`.
    pub fn cell_color(&self, x: usize, y: usize) -> Color {
        match self.grid.get(x, y) {
            Some(value) => self.mapper.convert(value),
            None => Color::transparent(),
        }
    }
}

impl PixelSurface for HeatGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn color_at(&self, x: usize, y: usize) -> Color {
        let cx = cell_index(x, self.pixel_scale, self.gridline_interval);
        let cy = cell_index(y, self.pixel_scale, self.gridline_interval);
        match (cx, cy) {
            (Some(cx), Some(cy)) => self.cell_color(cx, cy),
            _ => Color::separator(),
        }
    }
}
