use crate::color::{BLACK, Color};
use crate::error::{Error, Result};

/// Dense row-major grid of colors
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<Color>,
}

impl FrameBuffer {
    /// Create a buffer with every pixel black. Both dimensions must be positive.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Validation(format!(
                "width and height must be positive (got {}x{})",
                width, height
            )));
        }

        let too_large = || {
            Error::Validation(format!("{}x{} image is too large to allocate", width, height))
        };

        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(too_large)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| too_large())?;
        data.resize(len, BLACK);

        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of stored pixels (width * height)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; construction rejects zero dimensions
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[Color] {
        &self.data
    }

    fn index_of(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u32, y: u32) -> Result<Color> {
        let index = self.index_of(x, y)?;
        Ok(self.data[index])
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        let index = self.index_of(x, y)?;
        self.data[index] = color;
        Ok(())
    }

    /// Overwrite every pixel with `color`
    pub fn set_background(&mut self, color: Color) {
        self.data.fill(color);
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Visit every pixel in row-major order with its coordinates
    pub(crate) fn for_each_pixel(&mut self, mut f: impl FnMut(u32, u32, &mut Color)) {
        let width = self.width as usize;
        for (index, pixel) in self.data.iter_mut().enumerate() {
            let x = (index % width) as u32;
            let y = (index / width) as u32;
            f(x, y, pixel);
        }
    }

    /// Row-major coordinates of every pixel
    pub fn coordinates(&self) -> impl Iterator<Item = (u32, u32)> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}
