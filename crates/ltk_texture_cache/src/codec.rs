//! Image container decoding and encoding.
//!
//! The migrator only needs top-down RGBA8 pixels out of a container, so the codec
//! sits behind [`ImageCodec`] and the PNG implementation is a thin wrapper over
//! the `image` crate.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};

use crate::error::EntryError;
use crate::pixels::PixelBuffer;

/// Raw result of decoding an image container.
///
/// The pixel data is not validated against the dimensions yet; see
/// [`PixelBuffer::new`].
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major, top-down.
    pub pixels: Vec<u8>,
}

/// An image container format the cache stores its entries in.
pub trait ImageCodec {
    /// Decodes container bytes into RGBA8 pixels.
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, EntryError>;

    /// Encodes RGBA8 pixels into container bytes.
    ///
    /// This is the writer half of the container, for producing cache entries.
    /// [`Migrator`](crate::Migrator) never calls it: migrated entries are copied
    /// byte for byte, so the legacy image is never re-encoded.
    fn encode(&self, pixels: &PixelBuffer) -> Result<Vec<u8>, EntryError>;
}

/// PNG codec backed by the `image` crate. Any PNG color type is converted to RGBA8.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec;

impl ImageCodec for PngCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, EntryError> {
        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .map_err(|e| EntryError::Decode(e.to_string()))?
            .to_rgba8();

        Ok(DecodedImage {
            width: image.width(),
            height: image.height(),
            pixels: image.into_raw(),
        })
    }

    fn encode(&self, pixels: &PixelBuffer) -> Result<Vec<u8>, EntryError> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(
                pixels.as_bytes(),
                pixels.width(),
                pixels.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| EntryError::Encode(e.to_string()))?;

        Ok(out)
    }
}
