use crate::error::EntryError;
use crate::flip::RGBA8_BYTES_PER_PIXEL;

/// A decoded RGBA8 image, row-major and top-down.
///
/// Construction checks that the buffer holds exactly `width * height * 4` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps `data` as a `width` x `height` image.
    ///
    /// Fails with [`EntryError::SizeMismatch`] if the length does not match.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, EntryError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(RGBA8_BYTES_PER_PIXEL))
            .unwrap_or(usize::MAX);

        if data.len() != expected {
            return Err(EntryError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_exact_size() {
        let buffer = PixelBuffer::new(4, 2, vec![0; 32]).unwrap();
        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.as_bytes().len(), 32);
    }

    #[test]
    fn test_rejects_one_byte_short() {
        let result = PixelBuffer::new(64, 64, vec![0xAB; 64 * 64 * 4 - 1]);
        assert!(matches!(
            result,
            Err(EntryError::SizeMismatch {
                expected: 16384,
                actual: 16383
            })
        ));
    }

    #[test]
    fn test_rejects_oversized_buffer() {
        assert!(PixelBuffer::new(1, 1, vec![0; 5]).is_err());
    }
}
