#![deny(unsafe_code)]
//! Core types for the glyphdust particle simulation.
//!
//! Provides the `SimError` type, `Xorshift64` PRNG, `Bounds`/`Rect` canvas
//! geometry, the `Repulsor` value and `RepulsorSource` trait, the pure force
//! model, JSON parameter helpers, and the reproducible `Scenario` spec.

pub mod bounds;
pub mod error;
pub mod force;
pub mod params;
pub mod prng;
pub mod repulsor;
pub mod scenario;

pub use bounds::{Bounds, Rect};
pub use error::SimError;
pub use prng::Xorshift64;
pub use repulsor::{Repulsor, RepulsorSource};
pub use scenario::Scenario;
