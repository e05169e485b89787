//! Pull Use Case
//!
//! Makes sure every collected image is present locally. Images the runtime
//! already has are left alone. Stops at the first failed pull.

use crate::domain::ports::{
    command_line, ensure_present, pull_args, ContainerRuntime, ImageEvent, ImageEventSink,
    Presence,
};
use crate::domain::value_objects::{CollectedImage, ImageName};
use crate::error::{ImagesError, ImagesResult};

/// Options for the pull use case
#[derive(Debug, Clone, Default)]
pub struct PullOptions {
    /// `--platform` forwarded to `pull`
    pub platform: Option<String>,
    /// Report the commands instead of running them
    pub dry_run: bool,
}

/// What a pull run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullReport {
    pub pulled: Vec<ImageName>,
    pub present: Vec<ImageName>,
    pub dry_run: bool,
}

/// Pull use case - ensures presence of each image in order
pub struct PullUseCase<R: ContainerRuntime> {
    runtime: R,
}

impl<R: ContainerRuntime> PullUseCase<R> {
    pub fn new(runtime: R) -> Self {
        Self { runtime }
    }

    pub fn execute(
        &self,
        images: &[CollectedImage],
        options: &PullOptions,
        sink: &dyn ImageEventSink,
    ) -> ImagesResult<PullReport> {
        sink.on_event(ImageEvent::Collected {
            images: images.to_vec(),
        });

        let platform = options.platform.as_deref();
        let mut report = PullReport {
            dry_run: options.dry_run,
            ..PullReport::default()
        };

        if options.dry_run {
            for image in images {
                sink.on_event(ImageEvent::Planned {
                    command: command_line(self.runtime.name(), &pull_args(&image.name, platform)),
                });
            }
            sink.on_event(ImageEvent::Completed {
                pulled_count: 0,
                present_count: 0,
                archive_count: 0,
                dry_run: true,
            });
            return Ok(report);
        }

        let total = images.len();
        for (index, image) in images.iter().enumerate() {
            sink.on_event(ImageEvent::EnsureStarted {
                index,
                total,
                image: image.name.to_string(),
            });

            let presence = ensure_present(&self.runtime, &image.name, platform).map_err(
                |source| ImagesError::Pull {
                    image: image.name.to_string(),
                    source,
                },
            )?;

            match presence {
                Presence::AlreadyPresent => {
                    sink.on_event(ImageEvent::AlreadyPresent {
                        index,
                        image: image.name.to_string(),
                    });
                    report.present.push(image.name.clone());
                }
                Presence::Pulled => {
                    sink.on_event(ImageEvent::Pulled {
                        index,
                        image: image.name.to_string(),
                    });
                    report.pulled.push(image.name.clone());
                }
            }
        }

        sink.on_event(ImageEvent::Completed {
            pulled_count: report.pulled.len(),
            present_count: report.present.len(),
            archive_count: 0,
            dry_run: false,
        });

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::container_runtime::testing::{Call, FakeRuntime};
    use crate::domain::ports::image_events::testing::RecordingEventSink;
    use crate::domain::ports::NoopEventSink;
    use crate::domain::value_objects::ImageOrigin;

    fn collected(raw: &[&str]) -> Vec<CollectedImage> {
        raw.iter()
            .map(|r| {
                CollectedImage::new(
                    ImageName::parse(r, &ImageOrigin::Argument).unwrap(),
                    ImageOrigin::Argument,
                )
            })
            .collect()
    }

    #[test]
    fn pulls_only_missing_images() {
        let runtime = FakeRuntime::with_present(&["nginx:latest"]);
        let use_case = PullUseCase::new(&runtime);

        let report = use_case
            .execute(
                &collected(&["nginx:latest", "redis:7"]),
                &PullOptions::default(),
                &NoopEventSink,
            )
            .unwrap();

        assert_eq!(report.present[0].as_str(), "nginx:latest");
        assert_eq!(report.pulled[0].as_str(), "redis:7");
        assert_eq!(
            runtime.calls(),
            vec![
                Call::Inspect("nginx:latest".into()),
                Call::Inspect("redis:7".into()),
                Call::Pull("redis:7".into(), None),
            ]
        );
    }

    #[test]
    fn forwards_platform_to_pull() {
        let runtime = FakeRuntime::default();
        let options = PullOptions {
            platform: Some("linux/arm64".into()),
            dry_run: false,
        };

        PullUseCase::new(&runtime)
            .execute(&collected(&["alpine"]), &options, &NoopEventSink)
            .unwrap();

        assert!(runtime
            .calls()
            .contains(&Call::Pull("alpine".into(), Some("linux/arm64".into()))));
    }

    #[test]
    fn stops_at_first_failed_pull() {
        let mut runtime = FakeRuntime::default();
        runtime.failing_pulls.insert("bad:1".into());

        let err = PullUseCase::new(&runtime)
            .execute(
                &collected(&["bad:1", "good:1"]),
                &PullOptions::default(),
                &NoopEventSink,
            )
            .unwrap_err();

        assert!(err.to_string().starts_with("failed to pull image bad:1"));
        assert!(!runtime.calls().contains(&Call::Inspect("good:1".into())));
    }

    #[test]
    fn dry_run_touches_nothing() {
        let runtime = FakeRuntime::default();
        let sink = RecordingEventSink::default();
        let options = PullOptions {
            platform: None,
            dry_run: true,
        };

        let report = PullUseCase::new(&runtime)
            .execute(&collected(&["a", "b"]), &options, &sink)
            .unwrap();

        assert!(report.dry_run);
        assert!(runtime.calls().is_empty());
        let planned: Vec<String> = sink
            .events()
            .into_iter()
            .filter_map(|e| match e {
                ImageEvent::Planned { command } => Some(command),
                _ => None,
            })
            .collect();
        assert_eq!(planned, vec!["fake pull a", "fake pull b"]);
        assert!(matches!(
            sink.events().pop(),
            Some(ImageEvent::Completed {
                pulled_count: 0,
                dry_run: true,
                ..
            })
        ));
    }

    #[test]
    fn emits_completed_summary() {
        let runtime = FakeRuntime::with_present(&["a"]);
        let sink = RecordingEventSink::default();

        PullUseCase::new(&runtime)
            .execute(&collected(&["a", "b"]), &PullOptions::default(), &sink)
            .unwrap();

        let last = sink.events().pop().unwrap();
        assert!(matches!(
            last,
            ImageEvent::Completed {
                pulled_count: 1,
                present_count: 1,
                archive_count: 0,
                dry_run: false
            }
        ));
    }
}
