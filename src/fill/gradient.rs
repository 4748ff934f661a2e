use super::Fill;
use crate::color::Color;
use crate::framebuffer::FrameBuffer;

/// Two-color linear gradient along an axis rotated by `degrees`.
///
/// 0° runs left to right, 90° top to bottom. The axis passes through the
/// buffer center and spans the full projected extent of the image.
#[derive(Debug, Clone)]
pub struct LinearGradient {
    pub start: Color,
    pub end: Color,
    pub degrees: f32,
}

/// Gradient axis laid over a particular buffer
#[derive(Debug, Clone, Copy)]
struct Axis {
    cos: f32,
    sin: f32,
    center_x: f32,
    center_y: f32,
    max_dist: f32,
}

impl Axis {
    fn new(degrees: f32, buffer: &FrameBuffer) -> Self {
        let radians = degrees.to_radians();
        let mut axis = Axis {
            cos: radians.cos(),
            sin: radians.sin(),
            center_x: buffer.width() as f32 / 2.0,
            center_y: buffer.height() as f32 / 2.0,
            max_dist: 0.0,
        };

        // The extremum depends on both angle and aspect ratio, so scan for it
        let max = buffer
            .coordinates()
            .map(|(x, y)| axis.project(x, y).abs())
            .fold(0.0_f32, f32::max);
        axis.max_dist = if max == 0.0 { 1.0 } else { max };
        axis
    }

    /// Signed distance of (x, y) from the buffer center along the axis
    fn project(&self, x: u32, y: u32) -> f32 {
        let px = x as f32 - self.center_x;
        let py = y as f32 - self.center_y;
        px * self.cos + py * self.sin
    }

    fn parameter(&self, x: u32, y: u32) -> f32 {
        let t = (self.project(x, y) + self.max_dist) / (2.0 * self.max_dist);
        t.clamp(0.0, 1.0)
    }
}

impl LinearGradient {
    /// Interpolation parameter in [0, 1] for the pixel at (x, y) of `buffer`.
    /// Scans the whole buffer; use [`LinearGradient::sampler`] for repeated queries.
    pub fn parameter_at(&self, buffer: &FrameBuffer, x: u32, y: u32) -> f32 {
        self.sampler(buffer)(x, y)
    }

    /// Lay the axis over `buffer` once and return a per-pixel parameter lookup
    pub fn sampler(&self, buffer: &FrameBuffer) -> impl Fn(u32, u32) -> f32 + use<> {
        let axis = Axis::new(self.degrees, buffer);
        move |x, y| axis.parameter(x, y)
    }

    fn color_at(&self, t: f32) -> Color {
        self.start * (1.0 - t) + self.end * t
    }
}

impl Fill for LinearGradient {
    fn fill(&self, buffer: &mut FrameBuffer) {
        let axis = Axis::new(self.degrees, buffer);
        log::debug!("gradient axis: {:?}", axis);

        buffer.for_each_pixel(|x, y, pixel| *pixel = self.color_at(axis.parameter(x, y)));
    }

    fn name(&self) -> &str {
        "Linear Gradient"
    }
}
