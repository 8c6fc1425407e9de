use crate::foundation::error::{TextcardError, TextcardResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::compositor::FrameRgba;
use crate::scene::config::OutputFormat;
use image::ImageEncoder as _;
use std::io::Cursor;

// Fixed so JPEG output is byte-stable for a given input.
const JPEG_QUALITY: u8 = 90;

/// One encoded render: image bytes plus their MIME type.
///
/// Owned by the caller; the pipeline holds no reference after returning it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
    /// MIME type matching the requested format.
    pub mime_type: &'static str,
}

/// Serialize a composited frame in the requested format.
///
/// PNG is lossless RGBA. JPEG carries no alpha, so the frame is flattened
/// over black first (multiplying each channel by its alpha), then encoded at
/// the fixed quality factor.
pub(crate) fn encode_frame(frame: &FrameRgba, format: OutputFormat) -> TextcardResult<RenderResult> {
    if frame.width == 0 || frame.height == 0 {
        return Err(TextcardError::encoding("surface is zero-sized"));
    }
    let expected = (frame.width as usize)
        .saturating_mul(frame.height as usize)
        .saturating_mul(4);
    if frame.data.len() != expected {
        return Err(TextcardError::encoding("surface buffer size mismatch"));
    }

    let mut buf = Vec::new();
    match format {
        OutputFormat::Png => {
            image::codecs::png::PngEncoder::new(&mut Cursor::new(&mut buf))
                .write_image(
                    &frame.data,
                    frame.width,
                    frame.height,
                    image::ExtendedColorType::Rgba8,
                )
                .map_err(|e| TextcardError::encoding(format!("png encode failed: {e}")))?;
        }
        OutputFormat::Jpeg => {
            let mut rgb = Vec::with_capacity(expected / 4 * 3);
            for px in frame.data.chunks_exact(4) {
                let a = u16::from(px[3]);
                rgb.push(mul_div255_u8(u16::from(px[0]), a));
                rgb.push(mul_div255_u8(u16::from(px[1]), a));
                rgb.push(mul_div255_u8(u16::from(px[2]), a));
            }
            image::codecs::jpeg::JpegEncoder::new_with_quality(
                &mut Cursor::new(&mut buf),
                JPEG_QUALITY,
            )
            .write_image(
                &rgb,
                frame.width,
                frame.height,
                image::ExtendedColorType::Rgb8,
            )
            .map_err(|e| TextcardError::encoding(format!("jpeg encode failed: {e}")))?;
        }
    }

    Ok(RenderResult {
        bytes: buf,
        mime_type: format.mime_type(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/raster.rs"]
mod tests;
