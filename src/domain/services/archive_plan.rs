//! Archive planning
//!
//! Decides which `save` invocations run and where their archives land.
//! Merged mode: one job, `<output>/images.tar`. Individual mode: one job per
//! image, `<output>/<stem>.tar`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::ImageName;

/// File name of the merged archive
pub const MERGED_ARCHIVE_NAME: &str = "images.tar";

/// A single `save` invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveJob {
    /// Path the runtime writes the tar to
    pub tar_path: PathBuf,
    /// Images stored in this archive, in collection order
    pub images: Vec<ImageName>,
    /// Compress to `<tar_path>.gz` after saving
    pub gzip: bool,
}

impl ArchiveJob {
    /// Path of the archive once the job is done.
    pub fn final_path(&self) -> PathBuf {
        if self.gzip {
            gz_path(&self.tar_path)
        } else {
            self.tar_path.clone()
        }
    }
}

/// Several jobs writing the same file; each save overwrites the previous one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveCollision {
    pub path: PathBuf,
    /// Images whose archives land on `path`, in job order
    pub images: Vec<ImageName>,
}

/// Ordered list of archive jobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchivePlan {
    pub jobs: Vec<ArchiveJob>,
}

impl ArchivePlan {
    pub fn new(output_dir: &Path, images: &[ImageName], merge: bool, gzip: bool) -> Self {
        if merge {
            Self::merged(output_dir, images, gzip)
        } else {
            Self::individual(output_dir, images, gzip)
        }
    }

    /// One archive holding every image.
    pub fn merged(output_dir: &Path, images: &[ImageName], gzip: bool) -> Self {
        if images.is_empty() {
            return Self { jobs: Vec::new() };
        }
        Self {
            jobs: vec![ArchiveJob {
                tar_path: output_dir.join(MERGED_ARCHIVE_NAME),
                images: images.to_vec(),
                gzip,
            }],
        }
    }

    /// One archive per image.
    pub fn individual(output_dir: &Path, images: &[ImageName], gzip: bool) -> Self {
        let jobs = images
            .iter()
            .map(|image| ArchiveJob {
                tar_path: output_dir.join(format!("{}.tar", image.archive_stem())),
                images: vec![image.clone()],
                gzip,
            })
            .collect();
        Self { jobs }
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Final archive paths in job order.
    pub fn final_paths(&self) -> Vec<PathBuf> {
        self.jobs.iter().map(ArchiveJob::final_path).collect()
    }

    /// Final paths shared by more than one job, in order of first use.
    ///
    /// Distinct names can sanitize to the same stem (`a/b:1`, `a_b:1`).
    pub fn collisions(&self) -> Vec<ArchiveCollision> {
        let mut groups: Vec<ArchiveCollision> = Vec::new();
        for job in &self.jobs {
            let path = job.final_path();
            match groups.iter_mut().find(|g| g.path == path) {
                Some(group) => group.images.extend(job.images.iter().cloned()),
                None => groups.push(ArchiveCollision {
                    path,
                    images: job.images.clone(),
                }),
            }
        }
        groups.retain(|g| g.images.len() > 1);
        groups
    }
}

/// `images.tar` -> `images.tar.gz`
pub(crate) fn gz_path(tar_path: &Path) -> PathBuf {
    let mut raw: OsString = tar_path.as_os_str().to_owned();
    raw.push(".gz");
    PathBuf::from(raw)
}
