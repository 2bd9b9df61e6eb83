//! Core data structures for munsell-solid
//!
//! This crate provides the fundamental types for rendering the Munsell
//! color solid as a 3D point cloud: the dataset record type, the hue
//! circle, and the layout that places each color in space.

pub mod error;
pub mod hue;
pub mod layout;
pub mod sample;

pub use error::*;
pub use hue::*;
pub use layout::*;
pub use sample::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};
