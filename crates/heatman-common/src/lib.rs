//! Common types shared by the heatman renderer and command-line tool.

pub mod config;
pub mod error;

pub use config::{ColorMode, HeaderMode, RenderConfig};
pub use error::{HeatmanError, HeatmanResult};

/// Version of the product, taken from the workspace manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
