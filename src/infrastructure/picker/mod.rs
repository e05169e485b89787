//! Infrastructure implementations for ImagePicker
//!
//! This module provides concrete implementations of the `ImagePicker` trait.

mod interactive;
mod theme;

pub use interactive::InteractivePicker;
pub use theme::PickerTheme;
