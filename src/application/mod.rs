//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `collect_images` - Merge and dedupe images from every source
//! - `PullUseCase` - Make sure each image is present locally
//! - `SaveUseCase` - Pull what is missing, then write tar archives

pub mod collect;
pub mod pull;
pub mod save;

pub use collect::{collect_images, collect_images_with_picker, ImageSources};
pub use pull::{PullOptions, PullReport, PullUseCase};
pub use save::{SaveOptions, SaveReport, SaveUseCase};
