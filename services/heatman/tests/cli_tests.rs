//! End-to-end tests for the heatman pipeline: argument parsing, rendering
//! and the file that lands on disk.

use clap::Parser;
use heatman::cli::parse_error_exit_code;
use heatman::{report_failure, run, Args, Input};
use heatman_common::error::{EXIT_CONFIG, EXIT_IO, EXIT_USAGE};
use heatman_common::HeatmanError;
use image::{ImageFormat, RgbaImage};
use std::path::Path;
use test_utils::fixtures::{EXTREMES_TABLE, HEADERED_TABLE};
use test_utils::{assert_rgba_near, temp_dir, write_fixture};

fn parse(args: &[&str]) -> Args {
    let mut argv = vec!["heatman"];
    argv.extend_from_slice(args);
    Args::try_parse_from(argv).expect("arguments should parse")
}

fn decode(path: &Path) -> RgbaImage {
    let bytes = std::fs::read(path).expect("output should exist");
    image::load_from_memory_with_format(&bytes, ImageFormat::Png)
        .expect("output should be a valid PNG")
        .to_rgba8()
}

// =============================================================================
// SUCCESSFUL RUNS
// =============================================================================

#[test]
fn test_headered_table_scaled() {
    let dir = temp_dir();
    let input = write_fixture(&dir, "table.csv", HEADERED_TABLE);
    let dest = dir.path().join("out.png");

    let args = parse(&[
        "-h",
        "both",
        "-p",
        "3",
        "-d",
        dest.to_str().unwrap(),
        input.to_str().unwrap(),
    ]);
    let summary = run(&args).unwrap();

    assert_eq!((summary.width, summary.height), (12, 15));
    let img = decode(&dest);
    assert_eq!(img.dimensions(), (12, 15));
    assert_eq!(summary.bytes as u64, std::fs::metadata(&dest).unwrap().len());

    // Top-left cell is 0.0 -> blue, lower-left cells are empty.
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255, 255]);
    assert_eq!(img.get_pixel(2, 2).0, [0, 0, 255, 255]);
    assert_eq!(img.get_pixel(0, 14).0, [0, 0, 0, 0]);
}

#[test]
fn test_gray_with_gridlines() {
    let dir = temp_dir();
    let input = write_fixture(&dir, "extremes.csv", EXTREMES_TABLE);
    let dest = dir.path().join("gray.png");

    let args = parse(&[
        "--color",
        "gray",
        "-a",
        "1",
        "-p",
        "2",
        "--dest",
        dest.to_str().unwrap(),
        input.to_str().unwrap(),
    ]);
    let summary = run(&args).unwrap();

    // 3 cells * 2 px + 2 separators, 1 row * 2 px.
    assert_eq!((summary.width, summary.height), (8, 2));
    let img = decode(&dest);
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(2, 0).0, [255, 255, 255, 0]);
    assert_rgba_near!(img.get_pixel(3, 1).0, [128, 128, 128, 255], 1);
    assert_eq!(img.get_pixel(7, 0).0, [0, 0, 0, 255]);
}

#[test]
fn test_scaler_ignores_gridlines() {
    let dir = temp_dir();
    let dest = dir.path().join("scaler.png");

    let args = parse(&["-s", "-a", "4", "-d", dest.to_str().unwrap()]);
    let summary = run(&args).unwrap();

    assert_eq!((summary.width, summary.height), (255, 10));
    let img = decode(&dest);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255, 255]);
    assert_eq!(img.get_pixel(254, 9).0[3], 255);
}

#[test]
fn test_negative_gap_draws_no_lines() {
    let dir = temp_dir();
    let input = write_fixture(&dir, "extremes.csv", EXTREMES_TABLE);
    let dest = dir.path().join("out.png");

    let args = parse(&[
        "-a",
        "-2",
        "-d",
        dest.to_str().unwrap(),
        input.to_str().unwrap(),
    ]);
    let summary = run(&args).unwrap();
    assert_eq!((summary.width, summary.height), (3, 1));
}

#[test]
fn test_existing_destination_is_truncated() {
    let dir = temp_dir();
    let input = write_fixture(&dir, "extremes.csv", EXTREMES_TABLE);
    let dest = write_fixture(&dir, "out.png", &"x".repeat(100_000));

    let args = parse(&["-d", dest.to_str().unwrap(), input.to_str().unwrap()]);
    let summary = run(&args).unwrap();

    assert_eq!(std::fs::metadata(&dest).unwrap().len(), summary.bytes as u64);
    assert_eq!(decode(&dest).dimensions(), (3, 1));
}

#[test]
fn test_dash_selects_stdin() {
    assert_eq!(parse(&["-"]).input().unwrap(), Input::Stdin);
    assert_eq!(parse(&[]).input().unwrap(), Input::Stdin);
}

// =============================================================================
// FAILURES AND EXIT CODES
// =============================================================================

#[test]
fn test_unknown_header_mode() {
    let dir = temp_dir();
    let input = write_fixture(&dir, "table.csv", HEADERED_TABLE);
    let dest = dir.path().join("out.png");

    let args = parse(&["-h", "sideways", "-d", dest.to_str().unwrap(), input.to_str().unwrap()]);
    let err = run(&args).unwrap_err();

    assert_eq!(err.to_string(), "sideways: unknown header model");
    assert_eq!(err.exit_code(), EXIT_CONFIG);
    assert!(!dest.exists());
}

#[test]
fn test_unknown_color_mode() {
    let dir = temp_dir();
    let dest = dir.path().join("out.png");

    let args = parse(&["-c", "rainbow", "-s", "-d", dest.to_str().unwrap()]);
    let err = run(&args).unwrap_err();

    assert_eq!(err.to_string(), "rainbow: unknown color type");
    assert_eq!(err.exit_code(), EXIT_CONFIG);
    assert!(!dest.exists());
}

#[test]
fn test_zero_pixel_scale_rejected() {
    let dir = temp_dir();
    let dest = dir.path().join("out.png");

    let args = parse(&["-p", "0", "-s", "-d", dest.to_str().unwrap()]);
    let err = run(&args).unwrap_err();

    assert!(err.is_configuration());
    assert!(!dest.exists());
}

#[test]
fn test_too_many_files() {
    let args = parse(&["a.csv", "b.csv"]);
    let err = run(&args).unwrap_err();

    assert!(matches!(err, HeatmanError::Usage(_)));
    assert_eq!(err.exit_code(), EXIT_USAGE);
}

#[test]
fn test_missing_input_file() {
    let dir = temp_dir();
    let missing = dir.path().join("nope.csv");
    let dest = dir.path().join("out.png");

    let args = parse(&["-d", dest.to_str().unwrap(), missing.to_str().unwrap()]);
    let err = run(&args).unwrap_err();

    assert!(matches!(err, HeatmanError::Io { .. }));
    assert_eq!(err.exit_code(), EXIT_IO);
    assert!(err.to_string().contains("nope.csv"));
    assert!(!dest.exists());
}

#[test]
fn test_empty_table_leaves_no_file() {
    let dir = temp_dir();
    let input = write_fixture(&dir, "empty.csv", "");
    let dest = dir.path().join("out.png");

    let args = parse(&["-d", dest.to_str().unwrap(), input.to_str().unwrap()]);
    let err = run(&args).unwrap_err();

    assert_eq!(err.exit_code(), EXIT_IO);
    assert!(!dest.exists());
}

#[test]
fn test_huge_pixel_scale_leaves_no_file() {
    let dir = temp_dir();
    let input = write_fixture(&dir, "one.csv", "0.5\n");
    let dest = dir.path().join("out.png");

    let args = parse(&[
        "-p",
        "4294967295",
        "-d",
        dest.to_str().unwrap(),
        input.to_str().unwrap(),
    ]);
    let err = run(&args).unwrap_err();

    assert!(matches!(err, HeatmanError::Encode(_)));
    assert_eq!(err.exit_code(), EXIT_IO);
    assert!(!dest.exists());
}

#[test]
fn test_non_utf8_label_still_renders() {
    let dir = temp_dir();
    let input = dir.path().join("latin1.csv");
    std::fs::write(&input, b",Caf\xe9,c2\nr1,0.1,0.2\n").unwrap();
    let dest = dir.path().join("out.png");

    let args = parse(&["-h", "both", "-d", dest.to_str().unwrap(), input.to_str().unwrap()]);
    let summary = run(&args).unwrap();

    assert_eq!((summary.width, summary.height), (2, 1));
    assert_eq!(decode(&dest).dimensions(), (2, 1));
}

#[test]
fn test_unwritable_destination() {
    let dir = temp_dir();
    let dest = dir.path().join("missing-dir").join("out.png");

    let args = parse(&["-s", "-d", dest.to_str().unwrap()]);
    let err = run(&args).unwrap_err();

    assert!(matches!(err, HeatmanError::Io { .. }));
    assert_eq!(err.exit_code(), EXIT_IO);
}

#[test]
fn test_failure_is_reported_once() {
    let args = parse(&["-c", "rainbow", "-s"]);
    let err = run(&args).unwrap_err();

    let mut out = Vec::new();
    report_failure(&err, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "heatman: rainbow: unknown color type\n");
}

#[test]
fn test_parser_exit_codes() {
    let err = Args::try_parse_from(["heatman", "-p", "big"]).unwrap_err();
    assert_eq!(parse_error_exit_code(&err), EXIT_CONFIG);

    let err = Args::try_parse_from(["heatman", "--bogus"]).unwrap_err();
    assert_eq!(parse_error_exit_code(&err), EXIT_USAGE);

    let err = Args::try_parse_from(["heatman", "-H"]).unwrap_err();
    assert_eq!(parse_error_exit_code(&err), 0);
}
