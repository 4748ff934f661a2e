use std::io::{Cursor, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};

use crate::error::Result;
use crate::framebuffer::FrameBuffer;

/// Map a float channel to a byte, clamping values outside [0, 1].
///
/// Rounds to the nearest byte rather than truncating, so a channel such as
/// 0.999 becomes 255 where a truncating writer would emit 254.
pub fn quantize(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert the float buffer to an 8-bit RGB image
pub fn to_rgb_image(buffer: &FrameBuffer) -> RgbImage {
    let mut img = RgbImage::new(buffer.width(), buffer.height());

    for (y, row) in buffer.rows().enumerate() {
        for (x, color) in row.iter().enumerate() {
            let pixel = Rgb([quantize(color[0]), quantize(color[1]), quantize(color[2])]);
            img.put_pixel(x as u32, y as u32, pixel);
        }
    }

    img
}

/// Encode the buffer as PNG entirely in memory
pub fn encode_png(buffer: &FrameBuffer) -> Result<Vec<u8>> {
    let img = to_rgb_image(buffer);
    let mut bytes = Cursor::new(Vec::new());

    PngEncoder::new(&mut bytes).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgb8,
    )?;

    let bytes = bytes.into_inner();
    log::debug!("encoded {}x{} PNG ({} bytes)", img.width(), img.height(), bytes.len());
    Ok(bytes)
}

/// Write `bytes` to `path` through a temp file in the same directory.
/// The target only appears once fully written; the temp file is removed on failure.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::Builder::new()
        .prefix(".colorfield-")
        .suffix(".png.tmp")
        .tempfile_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Encode the buffer as PNG and save it to `path`
pub fn write_png_file(buffer: &FrameBuffer, path: &Path) -> Result<()> {
    let bytes = encode_png(buffer)?;
    write_atomically(path, &bytes)
}
