//! Image preparation for the inference endpoints
//!
//! The hosted models accept raw JPEG bytes. Uploads arrive in whatever
//! format the user had on disk, so everything is normalized through a lossy
//! RGB conversion (dropping alpha and exotic color modes) and re-encoded as
//! JPEG before it goes on the wire.

use std::io::Cursor;

use image::ImageOutputFormat;
use imagecheck_core::{Error, Result};
use tracing::debug;

/// JPEG quality used for the re-encode
const JPEG_QUALITY: u8 = 85;

/// Decode an image of any supported format and re-encode it as RGB JPEG.
///
/// Undecodable input is an [`Error::Image`], never a panic.
pub fn encode_jpeg(raw: &[u8]) -> Result<Vec<u8>> {
    let decoded = image::load_from_memory(raw)
        .map_err(|e| Error::image(format!("failed to decode image: {e}")))?;

    debug!(
        width = decoded.width(),
        height = decoded.height(),
        "re-encoding upload as JPEG"
    );

    let rgb = image::DynamicImage::ImageRgb8(decoded.to_rgb8());

    let mut jpeg = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut jpeg), ImageOutputFormat::Jpeg(JPEG_QUALITY))
        .map_err(|e| Error::image(format!("failed to encode JPEG: {e}")))?;

    Ok(jpeg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_with_alpha() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([200, 10, 10, 128]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_png_with_alpha_becomes_jpeg() {
        let jpeg = encode_jpeg(&png_with_alpha()).unwrap();

        // JPEG SOI marker
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

        let round_trip = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(round_trip.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn test_jpeg_input_still_decodes() {
        let first = encode_jpeg(&png_with_alpha()).unwrap();

        // Already-JPEG input goes through the same normalization
        let second = encode_jpeg(&first).unwrap();
        assert_eq!(&second[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_garbage_input_is_image_error() {
        let result = encode_jpeg(b"not an image at all");
        assert!(matches!(result, Err(Error::Image(_))));
    }
}
