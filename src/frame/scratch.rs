use crate::foundation::core::Dimensions;
use crate::foundation::error::{RaypassError, RaypassResult};
use crate::frame::raw::RawFrame;

/// Reused byte buffer for one render session's successive frame copies.
///
/// Allocated lazily on the first frame of a session and reused without
/// reallocation for every subsequent frame with the same dimensions. The owning
/// session releases it exactly once, either by dropping it or by taking the bytes
/// for the final frame with [`ScratchBuffer::into_bytes`].
#[derive(Debug)]
pub struct ScratchBuffer {
    dims: Dimensions,
    bytes: Vec<u8>,
}

impl ScratchBuffer {
    /// Allocate a zeroed buffer sized for `dims`.
    pub fn new(dims: Dimensions) -> RaypassResult<Self> {
        dims.validate()?;
        Ok(Self {
            dims,
            bytes: vec![0u8; dims.byte_len()],
        })
    }

    /// Return `true` when this buffer can hold frames of `dims` without
    /// reallocation.
    pub fn matches(&self, dims: Dimensions) -> bool {
        self.dims == dims
    }

    /// Copy a raw frame into the buffer.
    ///
    /// The frame is validated first and must match the buffer's dimensions;
    /// dimension changes within a session go through reallocation at the call site
    /// instead.
    pub fn store(&mut self, frame: &RawFrame<'_>) -> RaypassResult<()> {
        frame.validate()?;
        if !self.matches(frame.dims()) {
            return Err(RaypassError::invalid_dimensions(format!(
                "frame is {}x{} at {} bpp, scratch buffer holds {}x{} at {} bpp",
                frame.dims().width,
                frame.dims().height,
                frame.dims().bytes_per_pixel,
                self.dims.width,
                self.dims.height,
                self.dims.bytes_per_pixel
            )));
        }
        self.bytes.copy_from_slice(frame.bytes());
        Ok(())
    }

    /// Dimensions of the held frame.
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Read-only view over the current frame copy.
    ///
    /// The view is safe to use only until the next [`ScratchBuffer::store`]; encode
    /// or copy out of it before storing again.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take ownership of the bytes, releasing the buffer.
    ///
    /// Used for the final frame of a session, where the bytes move into the encode
    /// call instead of being copied once more.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/scratch.rs"]
mod tests;
