//! Rendering configuration.
//!
//! A [`RenderConfig`] is built once from command-line options and stays
//! read-only while the grid is rasterized.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{HeatmanError, HeatmanResult};

/// Default destination file name.
pub const DEFAULT_DESTINATION: &str = "heatman.png";

/// Header layout of the input table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// The first cell of every row is a label.
    RowOnly,
    /// The first row is a label row.
    ColumnOnly,
    /// Both a label row and a label column.
    Both,
    /// Every cell is data.
    #[default]
    None,
}

impl HeaderMode {
    /// Whether the first row of the table must be skipped.
    pub fn has_column_header(&self) -> bool {
        matches!(self, HeaderMode::ColumnOnly | HeaderMode::Both)
    }

    /// Whether the first cell of each row must be skipped.
    pub fn has_row_header(&self) -> bool {
        matches!(self, HeaderMode::RowOnly | HeaderMode::Both)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderMode::RowOnly => "row",
            HeaderMode::ColumnOnly => "column",
            HeaderMode::Both => "both",
            HeaderMode::None => "no",
        }
    }
}

impl FromStr for HeaderMode {
    type Err = HeatmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "both" => Ok(HeaderMode::Both),
            "column" => Ok(HeaderMode::ColumnOnly),
            "row" => Ok(HeaderMode::RowOnly),
            "no" => Ok(HeaderMode::None),
            _ => Err(HeatmanError::InvalidHeaderMode(s.to_string())),
        }
    }
}

impl fmt::Display for HeaderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which value-to-color mapping to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Blue (low) to red (high) hue ramp.
    #[default]
    Hsb,
    /// White (low) to black (high).
    Gray,
}

impl FromStr for ColorMode {
    type Err = HeatmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" | "color" | "hsb" => Ok(ColorMode::Hsb),
            "gray" | "grey" => Ok(ColorMode::Gray),
            _ => Err(HeatmanError::InvalidColorMode(s.to_string())),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Hsb => f.write_str("default"),
            ColorMode::Gray => f.write_str("gray"),
        }
    }
}

/// Parameters for building a heat map image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Pixels per cell side, always at least 1.
    pub pixel_scale: u32,
    /// Draw a separator line every this many cells; 0 disables them.
    pub gridline_interval: u32,
    /// Destination file of the image.
    pub destination: PathBuf,
    pub header_mode: HeaderMode,
    pub color_mode: ColorMode,
}

impl RenderConfig {
    /// Create a validated configuration.
    ///
    /// Negative gridline intervals are clamped to 0. A pixel scale below 1
    /// is rejected.
    pub fn new(
        pixel_scale: i64,
        gridline_interval: i64,
        destination: impl Into<PathBuf>,
        header_mode: HeaderMode,
        color_mode: ColorMode,
    ) -> HeatmanResult<Self> {
        let pixel_scale = u32::try_from(pixel_scale)
            .ok()
            .filter(|scale| *scale >= 1)
            .ok_or_else(|| HeatmanError::InvalidParameter {
                param: "pixel".to_string(),
                message: format!("{} is not a positive pixel size", pixel_scale),
            })?;

        let gridline_interval = u32::try_from(gridline_interval.max(0)).map_err(|_| {
            HeatmanError::InvalidParameter {
                param: "additional-line-gap".to_string(),
                message: format!("{} is too large", gridline_interval),
            }
        })?;

        Ok(Self {
            pixel_scale,
            gridline_interval,
            destination: destination.into(),
            header_mode,
            color_mode,
        })
    }

    /// Whether separator lines are drawn at all.
    pub fn has_gridlines(&self) -> bool {
        self.gridline_interval > 0
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pixel_scale: 1,
            gridline_interval: 0,
            destination: PathBuf::from(DEFAULT_DESTINATION),
            header_mode: HeaderMode::None,
            color_mode: ColorMode::Hsb,
        }
    }
}
