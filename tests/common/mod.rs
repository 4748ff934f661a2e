mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from colorfield for tests
pub use colorfield::{
    Color, ColorPoint, Fill, FillSpec, FrameBuffer, LinearGradient, Multipoint, RenderRequest,
    Solid,
};
