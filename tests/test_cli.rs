//! End-to-end tests for the colorfield binary.
//!
//! Tests cover:
//! - Each subcommand writes a PNG and nothing else to stdout
//! - Usage, parse and validation errors exit with code 1 and no stdout
//! - Writing to a file with --output

mod common;

use common::*;

fn assert_failed_cleanly(args: &[&str]) {
    let output = run_cli(args);
    assert_eq!(output.status.code(), Some(1), "args {:?}", args);
    assert!(output.stdout.is_empty(), "stdout not empty for {:?}", args);
    assert!(!output.stderr.is_empty(), "no diagnostic for {:?}", args);
}

#[test]
fn test_solid_to_stdout() {
    let output = run_cli(&["solid", "4", "3", "FF0000"]);
    assert!(output.status.success());

    let img = decode_png(&output.stdout);
    assert_eq!(img.dimensions(), (4, 3));
    assert!(img.pixels().all(|p| p.0 == [255, 0, 0]));
}

#[test]
fn test_gradient_to_stdout() {
    let output = run_cli(&["gradient", "64", "8", "#FF0000", "#0000FF", "0"]);
    assert!(output.status.success());

    let img = decode_png(&output.stdout);
    assert_eq!(img.dimensions(), (64, 8));
    assert_eq!(img.get_pixel(0, 4).0, [255, 0, 0]);
    assert!(img.get_pixel(63, 4).0[2] > 240);
}

#[test]
fn test_gradient_negative_angle() {
    let output = run_cli(&["gradient", "16", "16", "FF0000", "0000FF", "-90"]);
    assert!(output.status.success());

    // -90 degrees runs bottom to top
    let img = decode_png(&output.stdout);
    assert!(img.get_pixel(8, 15).0[0] > 200);
    assert!(img.get_pixel(8, 0).0[2] > 200);
}

#[test]
fn test_multipoint_to_stdout() {
    let output = run_cli(&["multipoint", "10", "10", "0:0:FF0000", "9:9:0000FF", "-2:20:00FF00"]);
    assert!(output.status.success());

    let img = decode_png(&output.stdout);
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0]);
    assert_eq!(img.get_pixel(9, 9).0, [0, 0, 255]);
}

#[test]
fn test_output_file() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("green.png");
    let path_str = path.to_string_lossy().into_owned();

    let output = run_cli(&["--output", &path_str, "solid", "3", "2", "00FF00"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let img = decode_png(&std::fs::read(&path)?);
    assert_eq!(img.dimensions(), (3, 2));
    assert!(img.pixels().all(|p| p.0 == [0, 255, 0]));

    Ok(())
}

#[test]
fn test_validation_errors() {
    assert_failed_cleanly(&["solid", "-1", "5", "FF0000"]);
    assert_failed_cleanly(&["solid", "0", "5", "FF0000"]);
    assert_failed_cleanly(&["gradient", "5", "0", "FF0000", "0000FF", "45"]);
}

#[test]
fn test_parse_errors() {
    assert_failed_cleanly(&["solid", "wide", "5", "FF0000"]);
    assert_failed_cleanly(&["solid", "5", "5", "FF00"]);
    assert_failed_cleanly(&["gradient", "5", "5", "FF0000", "0000FF", "up"]);
    assert_failed_cleanly(&["multipoint", "5", "5", "1:1:FF0000"]);
    assert_failed_cleanly(&["multipoint", "5", "5", "1:1:FF0000", "2-2-00FF00"]);
}

#[test]
fn test_image_too_large_to_allocate() {
    assert_failed_cleanly(&["solid", "4294967295", "4294967295", "FF0000"]);
}

#[test]
fn test_option_after_points_is_reported() {
    let output = run_cli(&["multipoint", "5", "5", "1:1:FF0000", "2:2:00FF00", "-v"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("options go before the subcommand"), "stderr: {}", stderr);

    // The same option placed before the subcommand works
    let output = run_cli(&["-v", "multipoint", "5", "5", "1:1:FF0000", "2:2:00FF00"]);
    assert!(output.status.success());
    assert_eq!(decode_png(&output.stdout).get_pixel(1, 1).0, [255, 0, 0]);
}

#[test]
fn test_usage_errors() {
    assert_failed_cleanly(&[]);
    assert_failed_cleanly(&["sparkle", "5", "5"]);
    assert_failed_cleanly(&["solid", "5", "5"]);
    assert_failed_cleanly(&["gradient", "5", "5", "FF0000", "0000FF"]);
    assert_failed_cleanly(&["multipoint", "5", "5"]);
}

#[test]
fn test_output_write_failure() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("no_such_dir").join("out.png");
    let path_str = path.to_string_lossy().into_owned();

    assert_failed_cleanly(&["-o", &path_str, "solid", "3", "3", "FF0000"]);
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);

    Ok(())
}
