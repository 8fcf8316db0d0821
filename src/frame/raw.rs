use crate::foundation::core::Dimensions;
use crate::foundation::error::{RaypassError, RaypassResult};

/// One delivered pixel buffer plus its dimensions, as reported by the engine at a
/// point in time.
///
/// The borrow is only valid for the duration of the callback that delivers it; the
/// engine may reuse or invalidate the underlying storage immediately afterwards.
/// Consumers must copy the bytes (see [`ScratchBuffer::store`]) before the callback
/// returns; the lifetime parameter makes retaining the view a compile error.
///
/// Fields are plain because this mirrors the engine's raw result accessor; nothing
/// stops an engine from reporting zero extents or a torn length, so consumers run
/// [`RawFrame::validate`] before touching the bytes.
///
/// [`ScratchBuffer::store`]: crate::frame::scratch::ScratchBuffer::store
#[derive(Clone, Copy, Debug)]
pub struct RawFrame<'a> {
    /// Reported frame dimensions.
    pub dims: Dimensions,
    /// Borrowed pixel storage.
    pub bytes: &'a [u8],
}

impl<'a> RawFrame<'a> {
    /// Create a pre-validated frame view.
    pub fn new(dims: Dimensions, bytes: &'a [u8]) -> RaypassResult<Self> {
        let frame = Self { dims, bytes };
        frame.validate()?;
        Ok(frame)
    }

    /// Check that the dimensions are usable and the byte length matches them.
    pub fn validate(&self) -> RaypassResult<()> {
        self.dims.validate()?;
        if self.bytes.len() != self.dims.byte_len() {
            return Err(RaypassError::invalid_dimensions(format!(
                "{}x{} at {} bpp needs {} bytes, got {}",
                self.dims.width,
                self.dims.height,
                self.dims.bytes_per_pixel,
                self.dims.byte_len(),
                self.bytes.len()
            )));
        }
        Ok(())
    }

    /// Frame dimensions.
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Borrow the pixel bytes.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/raw.rs"]
mod tests;
