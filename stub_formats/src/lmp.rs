use std::fmt;

pub const LMP_HEADER_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LmpError {
    InvalidDimensions { width: u32, height: u32 },
    PixelCountOverflow,
    PixelCountMismatch { expected: usize, actual: usize },
}

impl fmt::Display for LmpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LmpError::InvalidDimensions { width, height } => {
                write!(f, "invalid lmp dimensions: {}x{}", width, height)
            }
            LmpError::PixelCountOverflow => write!(f, "lmp pixel count overflow"),
            LmpError::PixelCountMismatch { expected, actual } => write!(
                f,
                "lmp pixel count mismatch: expected {} indices, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for LmpError {}

/// Palette-indexed raster, row-major, one byte per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    pub width: u32,
    pub height: u32,
    pub indices: Vec<u8>,
}

impl IndexedImage {
    pub fn filled(width: u32, height: u32, index: u8) -> Result<Self, LmpError> {
        let count = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            indices: vec![index; count],
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.indices
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Writes `index` at (x, y). Coordinates outside the canvas are ignored.
    pub fn set_pixel(&mut self, x: i64, y: i64, index: u8) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let offset = y as usize * self.width as usize + x as usize;
        if let Some(slot) = self.indices.get_mut(offset) {
            *slot = index;
        }
    }

    pub fn encoded_len(&self) -> usize {
        LMP_HEADER_LEN + self.indices.len()
    }
}

pub fn pixel_count(width: u32, height: u32) -> Result<usize, LmpError> {
    if width == 0 || height == 0 {
        return Err(LmpError::InvalidDimensions { width, height });
    }
    let count = width
        .checked_mul(height)
        .ok_or(LmpError::PixelCountOverflow)?;
    usize::try_from(count).map_err(|_| LmpError::PixelCountOverflow)
}

/// Serializes an image as `width`, `height` (u32 LE) followed by the raw indices.
pub fn encode_lmp(image: &IndexedImage) -> Result<Vec<u8>, LmpError> {
    let expected = pixel_count(image.width, image.height)?;
    if image.indices.len() != expected {
        return Err(LmpError::PixelCountMismatch {
            expected,
            actual: image.indices.len(),
        });
    }
    let mut out = Vec::with_capacity(LMP_HEADER_LEN + expected);
    out.extend_from_slice(&image.width.to_le_bytes());
    out.extend_from_slice(&image.height.to_le_bytes());
    out.extend_from_slice(&image.indices);
    Ok(out)
}
