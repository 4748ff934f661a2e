use crate::color;
use crate::error::{Error, Result};
use crate::fill::{ColorPoint, Fill, FillSpec, LinearGradient, Solid};
use crate::framebuffer::FrameBuffer;

/// Image dimensions plus the fill that populates them
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub width: u32,
    pub height: u32,
    pub fill: FillSpec,
}

/// Parse a width or height argument; must be a positive integer
pub fn parse_dimension(label: &str, text: &str) -> Result<u32> {
    let value: i64 = text
        .trim()
        .parse()
        .map_err(|_| Error::Parse(format!("{} '{}' is not an integer", label, text)))?;

    if value <= 0 {
        return Err(Error::Validation(format!(
            "{} must be a positive integer (got {})",
            label, value
        )));
    }

    u32::try_from(value)
        .map_err(|_| Error::Validation(format!("{} {} is too large", label, value)))
}

fn parse_degrees(text: &str) -> Result<f32> {
    text.trim()
        .parse::<f32>()
        .ok()
        .filter(|d| d.is_finite())
        .ok_or_else(|| Error::Parse(format!("angle '{}' is not a number", text)))
}

impl RenderRequest {
    pub fn new(width: u32, height: u32, fill: FillSpec) -> Self {
        Self { width, height, fill }
    }

    /// `solid <width> <height> <hex_color>`
    pub fn solid(width: &str, height: &str, hex: &str) -> Result<Self> {
        let (width, height) = parse_size(width, height)?;
        let color = color::parse_hex(hex)?;
        Ok(Self::new(width, height, FillSpec::Solid(Solid { color })))
    }

    /// `gradient <width> <height> <start_hex> <end_hex> <degrees>`
    pub fn gradient(width: &str, height: &str, start: &str, end: &str, degrees: &str) -> Result<Self> {
        let (width, height) = parse_size(width, height)?;
        let gradient = LinearGradient {
            start: color::parse_hex(start)?,
            end: color::parse_hex(end)?,
            degrees: parse_degrees(degrees)?,
        };
        Ok(Self::new(width, height, FillSpec::LinearGradient(gradient)))
    }

    /// `multipoint <width> <height> <point1> <point2> [<point3> ...]`
    pub fn multipoint<S: AsRef<str>>(width: &str, height: &str, points: &[S]) -> Result<Self> {
        let (width, height) = parse_size(width, height)?;

        let points = points
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let spec = spec.as_ref();
                spec.parse::<ColorPoint>().map_err(|e| {
                    if looks_like_option(spec) {
                        Error::Parse(format!(
                            "point {}: '{}' looks like an option; options go before the subcommand",
                            i + 1,
                            spec
                        ))
                    } else {
                        Error::Parse(format!("point {}: {}", i + 1, e))
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(width, height, FillSpec::multipoint(points)?))
    }

    /// Allocate the buffer and run the fill pass over it
    pub fn render(&self) -> Result<FrameBuffer> {
        let mut buffer = FrameBuffer::new(self.width, self.height)?;

        log::debug!("rendering {}x{} with {}", self.width, self.height, self.fill.name());
        self.fill.fill(&mut buffer);

        Ok(buffer)
    }
}

/// `-v`, `--output`, ... as opposed to a point with a negative x
fn looks_like_option(arg: &str) -> bool {
    arg.strip_prefix('-')
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c == '-' || c.is_ascii_alphabetic())
        && !arg.contains(':')
}

fn parse_size(width: &str, height: &str) -> Result<(u32, u32)> {
    Ok((parse_dimension("width", width)?, parse_dimension("height", height)?))
}
