//! Console Event Sink
//!
//! Human-readable progress lines for pull and save. The runtime's own
//! progress output (inherited) appears between our lines.

use std::io::{self, Write};
use std::sync::Mutex;

use dockerimages::domain::ports::{ImageEvent, ImageEventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, Tone};

pub struct ConsoleEventSink {
    ui: UiContext,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.ui.color, self.ui.unicode)
    }

    fn dim(&self, text: &str) -> String {
        paint(text, Tone::Dim, self.ui.color)
    }
}

impl ImageEventSink for ConsoleEventSink {
    fn on_event(&self, event: ImageEvent) {
        match event {
            ImageEvent::Collected { images } => {
                if self.ui.verbose == 0 {
                    return;
                }
                self.line(format!("Images ({}):", images.len()));
                for image in images {
                    let origin = format!("({})", image.origin);
                    self.line(format!("  {} {}", image.name, self.dim(&origin)));
                }
            }

            ImageEvent::EnsureStarted {
                index,
                total,
                image,
            } => {
                let counter = format!("[{}/{}]", index + 1, total);
                self.line(format!(
                    "{} {} {}",
                    self.icon(Icon::Progress),
                    self.dim(&counter),
                    image
                ));
            }

            ImageEvent::AlreadyPresent { .. } => {
                self.line(format!(
                    "  {} {}",
                    self.icon(Icon::Success),
                    self.dim("already present")
                ));
            }

            ImageEvent::Pulled { .. } => {
                self.line(format!("  {} pulled", self.icon(Icon::Success)));
            }

            ImageEvent::ArchiveCollision { path, images } => {
                self.line(format!(
                    "{} {} is shared by {}; only {} will be kept",
                    self.icon(Icon::Warning),
                    path.display(),
                    images.join(", "),
                    images.last().map(String::as_str).unwrap_or_default()
                ));
            }

            ImageEvent::ArchiveStarted {
                index,
                total,
                path,
                images,
            } => {
                let counter = format!("[{}/{}]", index + 1, total);
                self.line(format!(
                    "{} {} Saving {} image(s) to {}",
                    self.icon(Icon::Progress),
                    self.dim(&counter),
                    images.len(),
                    path.display()
                ));
                if self.ui.verbose > 0 {
                    for image in images {
                        self.line(format!("    {}", self.dim(&image)));
                    }
                }
            }

            ImageEvent::Archived { path, .. } => {
                self.line(format!(
                    "  {} wrote {}",
                    self.icon(Icon::Success),
                    path.display()
                ));
            }

            ImageEvent::Planned { command } => {
                self.line(format!("  {} {}", self.icon(Icon::Pending), command));
            }

            // The command renders its own summary box
            ImageEvent::Completed { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockerimages::{CollectedImage, ImageName, ImageOrigin};
    use std::path::PathBuf;
    use std::sync::Arc;

    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn plain_ui(verbose: u8) -> UiContext {
        UiContext {
            json: false,
            verbose,
            color: false,
            unicode: false,
        }
    }

    fn run(verbose: u8, events: Vec<ImageEvent>) -> String {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let sink = ConsoleEventSink::with_writer(plain_ui(verbose), SharedBuffer(buffer.clone()));
        for event in events {
            sink.on_event(event);
        }
        let bytes = buffer.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn collected() -> ImageEvent {
        let origin = ImageOrigin::File {
            path: PathBuf::from("images.txt"),
            line: 2,
        };
        ImageEvent::Collected {
            images: vec![CollectedImage::new(
                ImageName::parse("nginx:1.25", &origin).unwrap(),
                origin,
            )],
        }
    }

    #[test]
    fn save_progress_lines() {
        let output = run(
            0,
            vec![
                collected(),
                ImageEvent::EnsureStarted {
                    index: 0,
                    total: 2,
                    image: "nginx:1.25".into(),
                },
                ImageEvent::AlreadyPresent {
                    index: 0,
                    image: "nginx:1.25".into(),
                },
                ImageEvent::EnsureStarted {
                    index: 1,
                    total: 2,
                    image: "redis:7".into(),
                },
                ImageEvent::Pulled {
                    index: 1,
                    image: "redis:7".into(),
                },
                ImageEvent::ArchiveStarted {
                    index: 0,
                    total: 1,
                    path: PathBuf::from("out/images.tar"),
                    images: vec!["nginx:1.25".into(), "redis:7".into()],
                },
                ImageEvent::Archived {
                    index: 0,
                    path: PathBuf::from("out/images.tar"),
                },
                ImageEvent::Completed {
                    pulled_count: 1,
                    present_count: 1,
                    archive_count: 1,
                    dry_run: false,
                },
            ],
        );

        insta::assert_snapshot!(output, @r"
        [..] [1/2] nginx:1.25
          [OK] already present
        [..] [2/2] redis:7
          [OK] pulled
        [..] [1/1] Saving 2 image(s) to out/images.tar
          [OK] wrote out/images.tar
        ");
    }

    #[test]
    fn verbose_lists_origins() {
        let output = run(1, vec![collected()]);
        assert_eq!(output, "Images (1):\n  nginx:1.25 (images.txt:2)\n");
    }

    #[test]
    fn planned_commands_are_listed() {
        let output = run(
            0,
            vec![ImageEvent::Planned {
                command: "docker pull nginx".into(),
            }],
        );
        assert_eq!(output, "  [ ] docker pull nginx\n");
    }

    #[test]
    fn archive_collision_is_a_warning_line() {
        let output = run(
            0,
            vec![ImageEvent::ArchiveCollision {
                path: PathBuf::from("out/a_b_1.tar"),
                images: vec!["a/b:1".into(), "a_b:1".into()],
            }],
        );
        assert_eq!(
            output,
            "[WARN] out/a_b_1.tar is shared by a/b:1, a_b:1; only a_b:1 will be kept\n"
        );
    }
}
