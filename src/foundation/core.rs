use crate::foundation::error::{RaypassError, RaypassResult};

/// Identifier of a predefined scene in the engine's internal catalog.
///
/// Scene ids are small positive integers. The orchestrator forwards them untouched;
/// catalog validation is the engine's responsibility.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SceneId(pub u32);

impl SceneId {
    /// Create a validated scene id (`id >= 1`).
    pub fn new(id: u32) -> RaypassResult<Self> {
        if id == 0 {
            return Err(RaypassError::validation("SceneId must be >= 1"));
        }
        Ok(Self(id))
    }
}

/// Pixel layout of a raw frame, one byte per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PixelFormat {
    /// Single channel luminance.
    Gray,
    /// Interleaved RGB, no alpha.
    Rgb,
    /// Interleaved RGBA, straight (non-premultiplied) alpha.
    Rgba,
}

impl PixelFormat {
    /// Map a `bytes_per_pixel` value onto a supported format.
    pub fn from_bytes_per_pixel(bytes_per_pixel: u32) -> RaypassResult<Self> {
        match bytes_per_pixel {
            1 => Ok(Self::Gray),
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            _ => Err(RaypassError::UnsupportedPixelFormat { bytes_per_pixel }),
        }
    }

    /// Number of bytes one pixel occupies in this format.
    pub fn bytes_per_pixel(self) -> u32 {
        match self {
            Self::Gray => 1,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

/// Extent and pixel size of one raw frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bytes per pixel (1, 3 or 4).
    pub bytes_per_pixel: u32,
}

impl Dimensions {
    /// Create validated dimensions: non-zero extents and a supported pixel size.
    pub fn new(width: u32, height: u32, bytes_per_pixel: u32) -> RaypassResult<Self> {
        let dims = Self {
            width,
            height,
            bytes_per_pixel,
        };
        dims.validate()?;
        Ok(dims)
    }

    /// Check extents and pixel size without constructing.
    ///
    /// Engines report dimensions over a raw struct-shaped boundary, so literal
    /// construction of invalid values stays possible; consumers re-validate here.
    pub fn validate(self) -> RaypassResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RaypassError::invalid_dimensions(format!(
                "extents must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        PixelFormat::from_bytes_per_pixel(self.bytes_per_pixel)?;
        Ok(())
    }

    /// Pixel format corresponding to `bytes_per_pixel`.
    pub fn pixel_format(self) -> RaypassResult<PixelFormat> {
        PixelFormat::from_bytes_per_pixel(self.bytes_per_pixel)
    }

    /// Total byte length of one frame: `width * height * bytes_per_pixel`.
    pub fn byte_len(self) -> usize {
        (self.width as usize) * (self.height as usize) * (self.bytes_per_pixel as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
