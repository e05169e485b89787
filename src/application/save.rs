//! Save Use Case
//!
//! Orchestrates the save flow:
//! 1. Plan the archives (merged or one per image)
//! 2. Create the output directory
//! 3. For each archive: pull missing images, run `save`, optionally gzip
//!
//! Fails fast: the first pull or save error aborts the run.

use std::path::PathBuf;

use crate::domain::ports::{
    command_line, ensure_present, pull_args, save_args, ContainerRuntime, ImageEvent,
    ImageEventSink, Presence,
};
use crate::domain::services::{ArchiveJob, ArchivePlan};
use crate::domain::value_objects::{CollectedImage, ImageName};
use crate::error::{ImagesError, ImagesResult};
use crate::infrastructure::archive::gzip_in_place;

/// Options for the save use case
#[derive(Debug, Clone)]
pub struct SaveOptions {
    /// Directory the archives are written to
    pub output_dir: PathBuf,
    /// One `images.tar` instead of one archive per image
    pub merge: bool,
    /// Compress each archive to `.tar.gz`
    pub gzip: bool,
    /// `--platform` forwarded to `pull`
    pub platform: Option<String>,
    /// Report the plan instead of running it
    pub dry_run: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            merge: false,
            gzip: false,
            platform: None,
            dry_run: false,
        }
    }
}

/// What a save run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveReport {
    /// Final archive paths, in write order
    pub archives: Vec<PathBuf>,
    pub pulled: Vec<ImageName>,
    pub present: Vec<ImageName>,
    pub dry_run: bool,
}

/// Save use case - pull as needed, then archive
pub struct SaveUseCase<R: ContainerRuntime> {
    runtime: R,
}

impl<R: ContainerRuntime> SaveUseCase<R> {
    pub fn new(runtime: R) -> Self {
        Self { runtime }
    }

    pub fn execute(
        &self,
        images: &[CollectedImage],
        options: &SaveOptions,
        sink: &dyn ImageEventSink,
    ) -> ImagesResult<SaveReport> {
        sink.on_event(ImageEvent::Collected {
            images: images.to_vec(),
        });

        let names: Vec<ImageName> = images.iter().map(|i| i.name.clone()).collect();
        let plan = ArchivePlan::new(&options.output_dir, &names, options.merge, options.gzip);
        for collision in plan.collisions() {
            sink.on_event(ImageEvent::ArchiveCollision {
                path: collision.path,
                images: collision.images.iter().map(|i| i.to_string()).collect(),
            });
        }

        if options.dry_run {
            self.report_plan(&plan, options, sink);
            sink.on_event(ImageEvent::Completed {
                pulled_count: 0,
                present_count: 0,
                archive_count: 0,
                dry_run: true,
            });
            let mut archives = Vec::new();
            for path in plan.final_paths() {
                push_unique(&mut archives, path);
            }
            return Ok(SaveReport {
                archives,
                dry_run: true,
                ..SaveReport::default()
            });
        }

        std::fs::create_dir_all(&options.output_dir)?;

        let mut report = SaveReport::default();
        let image_total = names.len();
        let mut image_index = 0;
        let job_total = plan.jobs.len();

        for (job_index, job) in plan.jobs.iter().enumerate() {
            for image in &job.images {
                self.ensure(image, image_index, image_total, options, sink, &mut report)?;
                image_index += 1;
            }

            let path = self.archive(job, job_index, job_total, sink)?;
            push_unique(&mut report.archives, path);
        }

        sink.on_event(ImageEvent::Completed {
            pulled_count: report.pulled.len(),
            present_count: report.present.len(),
            archive_count: report.archives.len(),
            dry_run: false,
        });

        Ok(report)
    }

    fn ensure(
        &self,
        image: &ImageName,
        index: usize,
        total: usize,
        options: &SaveOptions,
        sink: &dyn ImageEventSink,
        report: &mut SaveReport,
    ) -> ImagesResult<()> {
        sink.on_event(ImageEvent::EnsureStarted {
            index,
            total,
            image: image.to_string(),
        });

        let presence = ensure_present(&self.runtime, image, options.platform.as_deref())
            .map_err(|source| ImagesError::Pull {
                image: image.to_string(),
                source,
            })?;

        match presence {
            Presence::AlreadyPresent => {
                sink.on_event(ImageEvent::AlreadyPresent {
                    index,
                    image: image.to_string(),
                });
                report.present.push(image.clone());
            }
            Presence::Pulled => {
                sink.on_event(ImageEvent::Pulled {
                    index,
                    image: image.to_string(),
                });
                report.pulled.push(image.clone());
            }
        }
        Ok(())
    }

    fn archive(
        &self,
        job: &ArchiveJob,
        index: usize,
        total: usize,
        sink: &dyn ImageEventSink,
    ) -> ImagesResult<PathBuf> {
        sink.on_event(ImageEvent::ArchiveStarted {
            index,
            total,
            path: job.final_path(),
            images: job.images.iter().map(|i| i.to_string()).collect(),
        });

        self.runtime
            .save(&job.tar_path, &job.images)
            .map_err(|source| ImagesError::Save {
                target: job.tar_path.clone(),
                source,
            })?;

        let path = if job.gzip {
            gzip_in_place(&job.tar_path)?
        } else {
            job.tar_path.clone()
        };

        sink.on_event(ImageEvent::Archived {
            index,
            path: path.clone(),
        });
        Ok(path)
    }

    fn report_plan(&self, plan: &ArchivePlan, options: &SaveOptions, sink: &dyn ImageEventSink) {
        let runtime = self.runtime.name();
        let platform = options.platform.as_deref();
        for job in &plan.jobs {
            for image in &job.images {
                sink.on_event(ImageEvent::Planned {
                    command: command_line(runtime, &pull_args(image, platform)),
                });
            }
            sink.on_event(ImageEvent::Planned {
                command: command_line(runtime, &save_args(&job.tar_path, &job.images)),
            });
            if job.gzip {
                sink.on_event(ImageEvent::Planned {
                    command: format!("gzip {}", job.tar_path.display()),
                });
            }
        }
    }
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}
