//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod image_name;

pub use image_name::{CollectedImage, ImageName, ImageOrigin};
