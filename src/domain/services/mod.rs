//! Domain Services
//!
//! Pure functions over image names. No I/O.

mod archive_plan;
mod dedupe;

pub(crate) use archive_plan::gz_path;
pub use archive_plan::{ArchiveCollision, ArchiveJob, ArchivePlan, MERGED_ARCHIVE_NAME};
pub use dedupe::dedupe;
