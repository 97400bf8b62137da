//! QR decoder built on `image` + `rqrr`

use crate::qr::{DecodeError, QrDecoder, QrSource};
use image::DynamicImage;
use tracing::debug;

/// Loads PNG/JPEG/BMP/WebP images and decodes the first readable QR grid
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageQrDecoder;

impl ImageQrDecoder {
    fn load(source: QrSource<'_>) -> Result<DynamicImage, DecodeError> {
        let unreadable = |e: &dyn std::fmt::Display| DecodeError::UnreadableImage(e.to_string());
        match source {
            // Sniff the format from content so extension-less files still load
            QrSource::Path(path) => image::ImageReader::open(path)
                .and_then(|reader| reader.with_guessed_format())
                .map_err(|e| unreadable(&e))?
                .decode()
                .map_err(|e| unreadable(&e)),
            QrSource::Bytes(bytes) => image::load_from_memory(bytes).map_err(|e| unreadable(&e)),
        }
    }
}

impl QrDecoder for ImageQrDecoder {
    fn decode(&self, source: QrSource<'_>) -> Result<String, DecodeError> {
        let luma = Self::load(source)?.to_luma8();
        let (width, height) = luma.dimensions();

        let mut prepared =
            rqrr::PreparedImage::prepare_from_greyscale(width as usize, height as usize, |x, y| {
                luma.get_pixel(x as u32, y as u32).0[0]
            });
        let grids = prepared.detect_grids();
        debug!("Found {} candidate QR grid(s) in {}x{} image", grids.len(), width, height);

        for grid in grids {
            match grid.decode() {
                Ok((_meta, content)) if !content.is_empty() => return Ok(content),
                Ok(_) => continue,
                Err(e) => debug!("QR grid failed to decode: {e:?}"),
            }
        }
        Err(DecodeError::NotFound)
    }
}
