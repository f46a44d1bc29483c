#![deny(unsafe_code)]
//! CPU-side rasterization of glyphdust frames.
//!
//! The pixel buffer conversion in [`pixel`] is always available so the PNG
//! path and any host that wants raw RGBA share one implementation; PNG
//! writing is feature-gated behind `png` (default on).

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;
