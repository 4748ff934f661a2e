pub mod color;
pub mod encode;
pub mod error;
pub mod fill;
pub mod framebuffer;
pub mod math;
pub mod request;

pub use color::Color;
pub use error::{Error, Result};
pub use fill::{ColorPoint, Fill, FillSpec, LinearGradient, Multipoint, Solid};
pub use framebuffer::FrameBuffer;
pub use request::RenderRequest;
