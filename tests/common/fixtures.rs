#![allow(dead_code)]

use colorfield::{Color, FrameBuffer};
use image::RgbImage;
use std::process::{Command, Output};

/// Color constants for tests
pub const TEST_RED: Color = Color::new(1.0, 0.0, 0.0);
pub const TEST_GREEN: Color = Color::new(0.0, 1.0, 0.0);
pub const TEST_BLUE: Color = Color::new(0.0, 0.0, 1.0);

/// Runs the colorfield binary with the given arguments.
pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_colorfield"))
        .args(args)
        .output()
        .expect("Failed to run colorfield binary")
}

/// Decodes PNG bytes into an RGB image.
pub fn decode_png(bytes: &[u8]) -> RgbImage {
    image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .expect("Failed to decode PNG")
        .to_rgb8()
}

/// Creates a buffer, panicking on invalid dimensions.
pub fn make_buffer(width: u32, height: u32) -> FrameBuffer {
    FrameBuffer::new(width, height).expect("Failed to create frame buffer")
}

/// Asserts `actual` is within `tolerance` (Euclidean) of `expected`.
pub fn assert_color_near(actual: Color, expected: Color, tolerance: f32) {
    assert!(
        actual.near(&expected, tolerance),
        "expected {:?} within {} of {:?}",
        actual,
        tolerance,
        expected
    );
}
