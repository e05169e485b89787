//! dockerimages - collect container images and save them to tar archives
//!
//! Image names are gathered from CLI arguments, a line-delimited list file,
//! a compose manifest, or an interactive picker over local images. The
//! external container runtime (`docker` by default) does the actual work:
//! presence checks, pulls, and `save` into tar archives.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod sources;

// Re-exports for convenience
pub use application::{
    collect_images, ImageSources, PullOptions, PullReport, PullUseCase, SaveOptions, SaveReport,
    SaveUseCase,
};
pub use config::Config;
pub use domain::ports::{ContainerRuntime, ImageEvent, ImageEventSink, ImagePicker, RuntimeError};
pub use domain::services::{dedupe, ArchiveCollision, ArchiveJob, ArchivePlan};
pub use domain::value_objects::{CollectedImage, ImageName, ImageOrigin};
pub use error::{ImagesError, ImagesResult};
pub use infrastructure::runtime::CliRuntime;
pub use sources::{parse_compose, parse_image_list, read_compose_file, read_image_list};
