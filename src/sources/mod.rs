//! Image sources
//!
//! Readers for the file-based ways of naming images:
//! - `list_file` - plain text, one image per line
//! - `compose` - `services.*.image` of a compose manifest

mod compose;
mod list_file;

pub use compose::{parse_compose, read_compose_file};
pub use list_file::{parse_image_list, read_image_list};
