use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Parse(String),
    #[error("{0}")]
    Validation(String),
    #[error("pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
