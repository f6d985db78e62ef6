//! heatman: render a CSV table of values in `[0, 1]` as a heat map PNG.
//!
//! The binary in `main.rs` only parses arguments, sets up logging and maps
//! errors to exit codes; the pipeline itself lives in [`run`].

pub mod cli;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use heatman_common::{HeatmanError, HeatmanResult, RenderConfig};
use renderer::png::encode_surface;
use renderer::{HeatGrid, PixelSurface};
use tracing::info;

pub use cli::{Args, Input};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub width: usize,
    pub height: usize,
    pub bytes: usize,
}

/// Read the table (or build the scaler strip), render it and write the PNG.
///
/// Options are validated before any file is opened.
pub fn run(args: &Args) -> HeatmanResult<RenderSummary> {
    let config = args.render_config()?;
    let input = args.input()?;

    let heat = if args.scaler {
        info!("Rendering scaler strip");
        HeatGrid::scaler(&config)
    } else {
        info!(input = %input.display_name(), headers = %config.header_mode, "Reading table");
        read_heat_grid(&input, &config)?
    };

    let bytes = write_image(&heat, &config.destination)?;
    info!(
        dest = %config.destination.display(),
        width = heat.width(),
        height = heat.height(),
        bytes,
        "Wrote heat map"
    );

    Ok(RenderSummary {
        width: heat.width(),
        height: heat.height(),
        bytes,
    })
}

/// Build the heat grid from the selected input.
pub fn read_heat_grid(input: &Input, config: &RenderConfig) -> HeatmanResult<HeatGrid> {
    let result = match input {
        Input::Stdin => HeatGrid::from_table(io::stdin().lock(), config),
        Input::File(path) => {
            let file = File::open(path).map_err(|e| HeatmanError::io(path, e))?;
            HeatGrid::from_table(BufReader::new(file), config)
        }
    };

    result.map_err(|err| match err {
        HeatmanError::Stream(source) => HeatmanError::io(input.display_name(), source),
        other => other,
    })
}

/// Write the one-line failure message shown to the user.
pub fn report_failure<W: Write>(err: &HeatmanError, out: &mut W) -> io::Result<()> {
    writeln!(out, "heatman: {}", err)
}

/// Encode the surface and write it to `path`, returning the file size.
///
/// The image is encoded in memory first so a failed encode leaves no file.
pub fn write_image<S: PixelSurface + ?Sized>(surface: &S, path: &Path) -> HeatmanResult<usize> {
    let png = encode_surface(surface)?;

    let mut file = File::create(path).map_err(|e| HeatmanError::io(path, e))?;
    file.write_all(&png)
        .and_then(|_| file.flush())
        .map_err(|e| HeatmanError::io(path, e))?;

    Ok(png.len())
}
