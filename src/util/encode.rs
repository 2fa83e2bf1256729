//! Lossless output encoding
//!
//! The composited canvas is always serialized as PNG: the output must be
//! pixel-exact with no chroma subsampling or re-encoding artifacts, and
//! the frame's transparent regions require an alpha channel. Encoder
//! settings are fixed so that identical canvases produce byte-identical
//! files.

use std::io::Cursor;

use image::{
    ImageEncoder,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};

use crate::error::{RenderError, RenderResult};

/// Encodes an RGBA canvas as a lossless PNG
///
/// Uses default compression with adaptive per-scanline filtering. The
/// same canvas always yields the same bytes.
///
/// # Errors
///
/// [`RenderError::EncodingFailed`] when the encoder reports a failure.
///
/// # Examples
///
/// ```
/// use screenframe::util::encode::encode_png;
///
/// let canvas = image::RgbaImage::new(32, 32);
/// let bytes = encode_png(&canvas).unwrap();
/// assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
/// ```
pub fn encode_png(canvas: &image::RgbaImage) -> RenderResult<Vec<u8>> {
    let mut output = Vec::new();
    let encoder = PngEncoder::new_with_quality(
        Cursor::new(&mut output),
        CompressionType::Default,
        FilterType::Adaptive,
    );

    let (width, height) = canvas.dimensions();
    encoder
        .write_image(canvas.as_raw(), width, height, image::ExtendedColorType::Rgba8)
        .map_err(|e| RenderError::EncodingFailed {
            reason: e.to_string(),
        })?;

    Ok(output)
}
