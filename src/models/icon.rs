//! Decoded coin icons.

use bytes::Bytes;
use image::GenericImageView;

use crate::error::IconError;

/// An icon image held by the cache.
///
/// Keeps the original encoded bytes for rendering plus the decoded
/// dimensions; cloning is cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub symbol: String,
    pub bytes: Bytes,
    pub width: u32,
    pub height: u32,
}

impl Icon {
    pub fn new(symbol: impl Into<String>, bytes: Bytes, width: u32, height: u32) -> Self {
        Self {
            symbol: symbol.into(),
            bytes,
            width,
            height,
        }
    }

    /// Decode raw bytes into an icon, failing if they are not a supported image.
    pub fn decode(symbol: &str, bytes: Bytes) -> Result<Self, IconError> {
        let image = image::load_from_memory(&bytes).map_err(|e| IconError::Decode {
            symbol: symbol.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::new(symbol, bytes, image.width(), image.height()))
    }
}

/// Encode a blank PNG of the given size. Used by tests and mocks.
///
/// # Panics
///
/// Panics if the PNG encoder rejects the image.
#[doc(hidden)]
pub fn blank_png(width: u32, height: u32) -> Bytes {
    let mut buf = std::io::Cursor::new(Vec::new());
    image::DynamicImage::new_rgba8(width, height)
        .write_to(&mut buf, image::ImageFormat::Png)
        .expect("encode blank png");
    Bytes::from(buf.into_inner())
}
