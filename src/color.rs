use crate::error::{Error, Result};
use crate::math::Vec3f;

/// RGB color with float channels, nominally in [0, 1]
pub type Color = Vec3f;

pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

/// Parse `RRGGBB` or `#RRGGBB` (case-insensitive) into a color
pub fn parse_hex(text: &str) -> Result<Color> {
    let hex = text.strip_prefix('#').unwrap_or(text);

    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::Parse(format!(
            "invalid color '{}': expected RRGGBB or #RRGGBB",
            text
        )));
    }

    let channel = |i: usize| -> Result<f32> {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map(|byte| byte as f32 / 255.0)
            .map_err(|e| Error::Parse(format!("invalid color '{}': {}", text, e)))
    };

    Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Format as `#RRGGBB`, clamping each channel
pub fn to_hex(color: &Color) -> String {
    let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02X}{:02X}{:02X}", byte(color[0]), byte(color[1]), byte(color[2]))
}
