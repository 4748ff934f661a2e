use std::str::FromStr;

use super::Fill;
use crate::color::{self, Color};
use crate::error::Error;
use crate::framebuffer::FrameBuffer;
use crate::math::Vec2f;

/// Distance below which a pixel takes a point's color outright
pub const MULTIPOINT_EPSILON: f32 = 1e-6;

/// A colored sample position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPoint {
    pub position: Vec2f,
    pub color: Color,
}

impl ColorPoint {
    pub fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: Vec2f::new(x, y),
            color,
        }
    }
}

/// Parses `x:y:RRGGBB`
impl FromStr for ColorPoint {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let malformed = || {
            Error::Parse(format!(
                "invalid point '{}': expected x:y:RRGGBB (e.g. 50:50:FF0000)",
                spec
            ))
        };

        let (x, rest) = spec.split_once(':').ok_or_else(malformed)?;
        let (y, hex) = rest.split_once(':').ok_or_else(malformed)?;

        let coord = |text: &str, axis: &str| {
            text.trim()
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    Error::Parse(format!("invalid {} coordinate '{}' in point '{}'", axis, text, spec))
                })
        };

        Ok(ColorPoint::new(coord(x, "x")?, coord(y, "y")?, color::parse_hex(hex)?))
    }
}

/// Inverse-distance-weighted blend of two or more colored points
#[derive(Debug, Clone)]
pub struct Multipoint {
    pub points: Vec<ColorPoint>,
}

impl Multipoint {
    /// Color at pixel (x, y), or `None` if no point contributed any weight
    pub fn color_at(&self, x: u32, y: u32) -> Option<Color> {
        let pixel = Vec2f::new(x as f32, y as f32);
        let mut weighted = Color::zero();
        let mut total_weight = 0.0_f32;

        for point in &self.points {
            let dist = (pixel - point.position).length();

            // Exact hit: first point in input order wins
            if dist < MULTIPOINT_EPSILON {
                return Some(point.color);
            }

            let weight = 1.0 / dist;
            weighted += point.color * weight;
            total_weight += weight;
        }

        if total_weight > 0.0 {
            Some(weighted / total_weight)
        } else {
            None
        }
    }
}

impl Fill for Multipoint {
    fn fill(&self, buffer: &mut FrameBuffer) {
        buffer.for_each_pixel(|x, y, pixel| {
            if let Some(color) = self.color_at(x, y) {
                *pixel = color;
            }
        });
    }

    fn name(&self) -> &str {
        "Multipoint"
    }
}
