//! Command-line options.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use heatman_common::config::DEFAULT_DESTINATION;
use heatman_common::error::{EXIT_CONFIG, EXIT_USAGE};
use heatman_common::{ColorMode, HeaderMode, HeatmanError, HeatmanResult, RenderConfig};

/// Where the table is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Name used in logs and error messages.
    pub fn display_name(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "heatman")]
#[command(version = heatman_common::VERSION)]
#[command(about = "Render a CSV table of values in [0, 1] as a heat map PNG")]
#[command(disable_help_flag = true)]
pub struct Args {
    /// Draw assistant lines every GAP cells; 0 or less draws none
    #[arg(
        short = 'a',
        long = "additional-line-gap",
        value_name = "GAP",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub additional_line_gap: i64,

    /// Heat map color type (default or gray)
    #[arg(short = 'c', long = "color", value_name = "TYPE", default_value = "default")]
    pub color: String,

    /// Destination file
    #[arg(
        short = 'd',
        long = "dest",
        value_name = "DEST",
        env = "HEATMAN_DEST",
        default_value = DEFAULT_DESTINATION
    )]
    pub dest: PathBuf,

    /// Header model of the CSV file (both, row, column, or no)
    #[arg(short = 'h', long = "headers", value_name = "HEADER", default_value = "no")]
    pub headers: String,

    /// Print this message
    #[arg(short = 'H', long = "help", action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Pixel size of a cell
    #[arg(
        short = 'p',
        long = "pixel",
        value_name = "SIZE",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    pub pixel: i64,

    /// Render the color scale strip instead of a table
    #[arg(short = 's', long = "scaler")]
    pub scaler: bool,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Input CSV file; reads stdin when omitted or "-". Values must be 0.0 to 1.0
    #[arg(value_name = "CSVFILE")]
    pub files: Vec<PathBuf>,
}

impl Args {
    /// Validate the rendering options.
    pub fn render_config(&self) -> HeatmanResult<RenderConfig> {
        let header_mode: HeaderMode = self.headers.parse()?;
        let color_mode: ColorMode = self.color.parse()?;
        RenderConfig::new(
            self.pixel,
            self.additional_line_gap,
            self.dest.clone(),
            header_mode,
            color_mode,
        )
    }

    /// The input source; more than one file is a usage error.
    pub fn input(&self) -> HeatmanResult<Input> {
        match self.files.as_slice() {
            [] => Ok(Input::Stdin),
            [path] if path.as_os_str() == "-" => Ok(Input::Stdin),
            [path] => Ok(Input::File(path.clone())),
            _ => Err(HeatmanError::Usage(format!(
                "expected at most one CSVFILE, got {}",
                self.files.len()
            ))),
        }
    }
}

/// Exit code for a failure reported by the argument parser itself.
///
/// Bad values (such as a non-numeric pixel size) count as configuration
/// errors; anything else is a usage error.
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        ErrorKind::ValueValidation | ErrorKind::InvalidValue => EXIT_CONFIG,
        _ => EXIT_USAGE,
    }
}
