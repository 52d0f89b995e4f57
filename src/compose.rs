//! Decoding, side-by-side merging, and JPEG encoding of the two pictures.

use std::io::Cursor;

use image::{imageops, DynamicImage, ImageFormat, RgbaImage};

use crate::error::CardError;

/// Largest width or height the JPEG encoder accepts.
pub const MAX_DIMENSION: u32 = 65_535;

/// Decode both payloads and place `second` at `(offset_x, 0)` on a shared canvas.
///
/// The canvas is just large enough to hold both pictures. Pictures wider than
/// `offset_x` overlap; nothing is cropped or scaled.
///
/// # Errors
///
/// Returns [`CardError::Decode`] if either payload is not a decodable image,
/// or [`CardError::Encode`] if the canvas would exceed [`MAX_DIMENSION`].
pub fn merge(first: &[u8], second: &[u8], offset_x: u32) -> Result<RgbaImage, CardError> {
    let first = decode(first, "first")?.to_rgba8();
    let second = decode(second, "second")?.to_rgba8();

    let width = first.width().max(offset_x.saturating_add(second.width()));
    let height = first.height().max(second.height());
    tracing::debug!(width, height, offset_x, "merging pictures");
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(CardError::Encode(format!(
            "composite of {width}x{height} exceeds the {MAX_DIMENSION}px JPEG limit"
        )));
    }

    let mut canvas = RgbaImage::new(width, height);
    imageops::overlay(&mut canvas, &first, 0, 0);
    imageops::overlay(&mut canvas, &second, i64::from(offset_x), 0);
    Ok(canvas)
}

/// Encode a canvas as JPEG. Alpha is dropped.
///
/// # Errors
///
/// Returns [`CardError::Encode`] if the encoder rejects the canvas.
pub fn encode_jpeg(canvas: RgbaImage) -> Result<Vec<u8>, CardError> {
    let rgb = DynamicImage::ImageRgba8(canvas).to_rgb8();
    let mut buf = Cursor::new(Vec::new());
    rgb.write_to(&mut buf, ImageFormat::Jpeg).map_err(|e| CardError::Encode(e.to_string()))?;
    Ok(buf.into_inner())
}

/// Merge two encoded pictures and return the JPEG-encoded card.
///
/// # Errors
///
/// Returns an error if either payload fails to decode or encoding fails.
pub fn compose(first: &[u8], second: &[u8], offset_x: u32) -> Result<Vec<u8>, CardError> {
    encode_jpeg(merge(first, second, offset_x)?)
}

fn decode(data: &[u8], which: &'static str) -> Result<DynamicImage, CardError> {
    image::load_from_memory(data).map_err(|e| CardError::Decode { which, message: e.to_string() })
}
