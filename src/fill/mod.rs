pub mod gradient;
pub mod multipoint;
pub mod solid;

use crate::framebuffer::FrameBuffer;
use crate::error::{Error, Result};

pub use gradient::LinearGradient;
pub use multipoint::{ColorPoint, MULTIPOINT_EPSILON, Multipoint};
pub use solid::Solid;

/// Trait that every fill mode implements
pub trait Fill {
    /// Compute and write the color of every pixel in `buffer`
    fn fill(&self, buffer: &mut FrameBuffer);

    /// Human-readable name (used in log output)
    fn name(&self) -> &str;
}

/// A validated description of how to populate a buffer
#[derive(Debug, Clone)]
pub enum FillSpec {
    Solid(Solid),
    LinearGradient(LinearGradient),
    Multipoint(Multipoint),
}

impl FillSpec {
    /// Multipoint fill; at least two points are required
    pub fn multipoint(points: Vec<ColorPoint>) -> Result<Self> {
        if points.len() < 2 {
            return Err(Error::Parse(format!(
                "multipoint needs at least 2 points, got {}",
                points.len()
            )));
        }
        Ok(FillSpec::Multipoint(Multipoint { points }))
    }

    fn inner(&self) -> &dyn Fill {
        match self {
            FillSpec::Solid(f) => f,
            FillSpec::LinearGradient(f) => f,
            FillSpec::Multipoint(f) => f,
        }
    }
}

impl Fill for FillSpec {
    fn fill(&self, buffer: &mut FrameBuffer) {
        self.inner().fill(buffer)
    }

    fn name(&self) -> &str {
        self.inner().name()
    }
}
