//! QR code decoding
//!
//! The engine only needs text; how that text is pulled out of an image is
//! behind the [`QrDecoder`] trait. [`ImageQrDecoder`] is the bundled
//! implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use qrsafe::qr::{ImageQrDecoder, QrDecoder, QrSource};
//!
//! let text = ImageQrDecoder.decode(QrSource::Path(Path::new("poster.png")))?;
//! let result = analyzer.analyze(&text);
//! ```

mod image_decoder;

pub use image_decoder::ImageQrDecoder;

use std::path::Path;
use thiserror::Error;

/// Where the image comes from
#[derive(Debug, Clone, Copy)]
pub enum QrSource<'a> {
    Path(&'a Path),
    Bytes(&'a [u8]),
}

/// Errors that can occur while decoding a QR image
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("No QR code found in the image.")]
    NotFound,

    #[error("Could not read image: {0}")]
    UnreadableImage(String),
}

/// Capability to turn an image into QR payload text
pub trait QrDecoder: Send + Sync {
    fn decode(&self, source: QrSource<'_>) -> Result<String, DecodeError>;
}
