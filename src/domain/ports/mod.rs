//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod container_runtime;
pub mod image_events;
pub mod image_picker;

pub use container_runtime::{
    command_line, ensure_present, inspect_args, list_args, pull_args, save_args, ContainerRuntime,
    Presence, RuntimeError, LIST_FORMAT,
};
pub use image_events::{ImageEvent, ImageEventSink, NoopEventSink};
pub use image_picker::ImagePicker;
