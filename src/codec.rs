//! Pure conversion of raw pixel buffers into displayable images.
//!
//! The codec never retains a reference to its input: [`encode`] copies, and
//! [`encode_owned`] takes ownership of the bytes (used for a session's final frame,
//! whose scratch buffer is released right after).

use crate::foundation::core::{Dimensions, PixelFormat};
use crate::foundation::error::{RaypassError, RaypassResult};
use image::DynamicImage;

/// Encode a borrowed pixel buffer into an immutable image, copying the bytes.
pub fn encode(bytes: &[u8], dims: Dimensions) -> RaypassResult<DynamicImage> {
    check(bytes.len(), dims)?;
    build(bytes.to_vec(), dims)
}

/// Encode an owned pixel buffer into an immutable image without copying.
pub fn encode_owned(bytes: Vec<u8>, dims: Dimensions) -> RaypassResult<DynamicImage> {
    check(bytes.len(), dims)?;
    build(bytes, dims)
}

fn check(len: usize, dims: Dimensions) -> RaypassResult<()> {
    dims.validate()?;
    if len != dims.byte_len() {
        return Err(RaypassError::invalid_dimensions(format!(
            "{}x{} at {} bpp needs {} bytes, got {}",
            dims.width,
            dims.height,
            dims.bytes_per_pixel,
            dims.byte_len(),
            len
        )));
    }
    Ok(())
}

fn build(bytes: Vec<u8>, dims: Dimensions) -> RaypassResult<DynamicImage> {
    let (w, h) = (dims.width, dims.height);
    // `from_raw` only fails on a length mismatch, which `check` already rules out.
    let container_mismatch =
        || RaypassError::invalid_dimensions(format!("container does not fit {w}x{h}"));
    let image = match dims.pixel_format()? {
        PixelFormat::Gray => DynamicImage::ImageLuma8(
            image::GrayImage::from_raw(w, h, bytes).ok_or_else(container_mismatch)?,
        ),
        PixelFormat::Rgb => DynamicImage::ImageRgb8(
            image::RgbImage::from_raw(w, h, bytes).ok_or_else(container_mismatch)?,
        ),
        PixelFormat::Rgba => DynamicImage::ImageRgba8(
            image::RgbaImage::from_raw(w, h, bytes).ok_or_else(container_mismatch)?,
        ),
    };
    Ok(image)
}

#[cfg(test)]
#[path = "../tests/unit/codec.rs"]
mod tests;
