//! Native GPU pixel formats used by the legacy cache.
//!
//! Each format truncates the 8-bit RGBA channels to its bit depth (no rounding) and
//! packs them most-significant field first. 16-bit formats are stored as
//! little-endian `u16` values, matching the legacy encoder's in-memory layout.

use crate::flip::RGBA8_BYTES_PER_PIXEL;

/// Pixel format a texture uses on the target GPU, keyed by its filename tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelFormat {
    /// Tag 0. Also used for any tag outside the known set.
    #[default]
    Rgba8,
    /// Tag 1.
    Rgb8,
    /// Tag 2.
    Rgb5a1,
    /// Tag 3.
    Rgb565,
    /// Tag 4.
    Rgba4,
}

impl PixelFormat {
    /// Maps a filename format tag to its encoding. Unknown tags pass pixels through
    /// unchanged, like RGBA8.
    pub fn from_tag(tag: u32) -> Self {
        match tag {
            1 => Self::Rgb8,
            2 => Self::Rgb5a1,
            3 => Self::Rgb565,
            4 => Self::Rgba4,
            _ => Self::Rgba8,
        }
    }

    pub fn tag(self) -> u32 {
        match self {
            Self::Rgba8 => 0,
            Self::Rgb8 => 1,
            Self::Rgb5a1 => 2,
            Self::Rgb565 => 3,
            Self::Rgba4 => 4,
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgba8 => 4,
            Self::Rgb8 => 3,
            Self::Rgb5a1 | Self::Rgb565 | Self::Rgba4 => 2,
        }
    }

    /// Encodes one RGBA8 pixel into `output`, which must be exactly
    /// [`bytes_per_pixel`](Self::bytes_per_pixel) long.
    pub fn encode_pixel(self, rgba: [u8; 4], output: &mut [u8]) {
        match self {
            Self::Rgba8 => output.copy_from_slice(&rgba),
            Self::Rgb8 => output.copy_from_slice(&rgba[..3]),
            Self::Rgb5a1 => output.copy_from_slice(&pack_rgb5a1(rgba).to_le_bytes()),
            Self::Rgb565 => output.copy_from_slice(&pack_rgb565(rgba).to_le_bytes()),
            Self::Rgba4 => output.copy_from_slice(&pack_rgba4(rgba).to_le_bytes()),
        }
    }

    /// Encodes a whole RGBA8 buffer, pixel by pixel, into a new buffer of
    /// `pixel_count * bytes_per_pixel` bytes. Trailing bytes that do not form a full
    /// pixel are ignored.
    pub fn encode_buffer(self, rgba: &[u8]) -> Vec<u8> {
        let bpp = self.bytes_per_pixel();
        let pixel_count = rgba.len() / RGBA8_BYTES_PER_PIXEL;
        let mut encoded = vec![0u8; pixel_count * bpp];

        for (pixel, output) in rgba
            .chunks_exact(RGBA8_BYTES_PER_PIXEL)
            .zip(encoded.chunks_exact_mut(bpp))
        {
            self.encode_pixel([pixel[0], pixel[1], pixel[2], pixel[3]], output);
        }

        encoded
    }
}

/// `RRRRRGGGGGGBBBBB`, alpha dropped.
pub fn pack_rgb565([r, g, b, _]: [u8; 4]) -> u16 {
    (u16::from(r >> 3) << 11) | (u16::from(g >> 2) << 5) | u16::from(b >> 3)
}

/// `RRRRRGGGGGBBBBBA`, alpha reduced to its top bit.
pub fn pack_rgb5a1([r, g, b, a]: [u8; 4]) -> u16 {
    (u16::from(r >> 3) << 11)
        | (u16::from(g >> 3) << 6)
        | (u16::from(b >> 3) << 1)
        | u16::from(a >> 7)
}

/// `RRRRGGGGBBBBAAAA`.
pub fn pack_rgba4([r, g, b, a]: [u8; 4]) -> u16 {
    (u16::from(r >> 4) << 12)
        | (u16::from(g >> 4) << 8)
        | (u16::from(b >> 4) << 4)
        | u16::from(a >> 4)
}
