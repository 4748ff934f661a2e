use super::Fill;
use crate::color::Color;
use crate::framebuffer::FrameBuffer;

/// Every pixel set to one color
#[derive(Debug, Clone)]
pub struct Solid {
    pub color: Color,
}

impl Fill for Solid {
    fn fill(&self, buffer: &mut FrameBuffer) {
        buffer.set_background(self.color);
    }

    fn name(&self) -> &str {
        "Solid"
    }
}
