//! PNG snapshots of a simulation frame.
//!
//! Feature-gated behind `png` (default on) so hosts that only need raw RGBA
//! buffers can depend on this crate without pulling in the `image` crate.

use glyphdust_core::bounds::Bounds;
use glyphdust_core::error::SimError;
use glyphdust_sim::Frame;
use std::path::Path;

use crate::pixel::{frame_to_rgba, raster_size};

/// Writes a frame as a PNG image.
///
/// Returns `SimError::InvalidBounds` if the raster dimensions overflow
/// `u32`, or `SimError::Io` on write failure.
pub fn write_png(frame: &Frame, bounds: &Bounds, path: &Path) -> Result<(), SimError> {
    let rgba = frame_to_rgba(frame, bounds);
    let (width, height) = raster_size(bounds);
    let w = u32::try_from(width).map_err(|_| SimError::InvalidBounds)?;
    let h = u32::try_from(height).map_err(|_| SimError::InvalidBounds)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| SimError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SimError::Io(e.to_string()))
}
