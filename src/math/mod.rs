pub mod vector;

pub use vector::{Vec2d, Vec2f, Vec3d, Vec3f, Vector};
