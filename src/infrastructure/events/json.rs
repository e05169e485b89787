//! JSON Event Sink
//!
//! Outputs image events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{ImageEvent, ImageEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    command: &'static str,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl ImageEventSink for JsonEventSink {
    fn on_event(&self, event: ImageEvent) {
        let command = self.command;
        let json = match event {
            ImageEvent::Collected { images } => serde_json::json!({
                "event": "start",
                "command": command,
                "image_count": images.len(),
                "images": images,
            }),

            ImageEvent::EnsureStarted {
                index,
                total,
                image,
            } => serde_json::json!({
                "event": "item_start",
                "command": command,
                "index": index,
                "total": total,
                "image": image,
            }),

            ImageEvent::AlreadyPresent { index, image } => serde_json::json!({
                "event": "item_present",
                "command": command,
                "index": index,
                "image": image,
            }),

            ImageEvent::Pulled { index, image } => serde_json::json!({
                "event": "item_pulled",
                "command": command,
                "index": index,
                "image": image,
            }),

            ImageEvent::ArchiveCollision { path, images } => serde_json::json!({
                "event": "warning",
                "command": command,
                "kind": "archive_collision",
                "path": path.display().to_string(),
                "images": images,
            }),

            ImageEvent::ArchiveStarted {
                index,
                total,
                path,
                images,
            } => serde_json::json!({
                "event": "archive_start",
                "command": command,
                "index": index,
                "total": total,
                "path": path.display().to_string(),
                "images": images,
            }),

            ImageEvent::Archived { index, path } => serde_json::json!({
                "event": "archive_written",
                "command": command,
                "index": index,
                "path": path.display().to_string(),
            }),

            ImageEvent::Planned { command: planned } => serde_json::json!({
                "event": "planned",
                "command": command,
                "run": planned,
            }),

            ImageEvent::Completed {
                pulled_count,
                present_count,
                archive_count,
                dry_run,
            } => serde_json::json!({
                "event": "complete",
                "command": command,
                "status": "success",
                "dry_run": dry_run,
                "pulled": pulled_count,
                "present": present_count,
                "archives": archive_count,
            }),
        };

        self.write_event(json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{CollectedImage, ImageName, ImageOrigin};
    use std::path::PathBuf;
    use std::sync::Arc;

    /// Test writer that captures output
    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_outputs_start_event_with_origins() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("save", writer);

        let origin = ImageOrigin::File {
            path: PathBuf::from("images.txt"),
            line: 2,
        };
        sink.on_event(ImageEvent::Collected {
            images: vec![CollectedImage::new(
                ImageName::parse("nginx", &origin).unwrap(),
                origin,
            )],
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "start");
        assert_eq!(events[0]["command"], "save");
        assert_eq!(events[0]["image_count"], 1);
        assert_eq!(events[0]["images"][0]["name"], "nginx");
        assert_eq!(events[0]["images"][0]["origin"]["kind"], "file");
        assert_eq!(events[0]["images"][0]["origin"]["line"], 2);
    }

    #[test]
    fn json_sink_outputs_complete_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("pull", writer);

        sink.on_event(ImageEvent::Completed {
            pulled_count: 2,
            present_count: 1,
            archive_count: 0,
            dry_run: false,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "complete");
        assert_eq!(events[0]["dry_run"], false);
        assert_eq!(events[0]["status"], "success");
        assert_eq!(events[0]["pulled"], 2);
        assert_eq!(events[0]["present"], 1);
    }

    #[test]
    fn json_sink_outputs_archive_collision_warning() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("save", writer);

        sink.on_event(ImageEvent::ArchiveCollision {
            path: PathBuf::from("out/a_b_1.tar"),
            images: vec!["a/b:1".into(), "a_b:1".into()],
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "warning");
        assert_eq!(events[0]["kind"], "archive_collision");
        assert_eq!(events[0]["path"], "out/a_b_1.tar");
        assert_eq!(events[0]["images"][1], "a_b:1");
    }

    #[test]
    fn json_sink_writes_one_line_per_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("save", writer);

        sink.on_event(ImageEvent::Planned {
            command: "docker pull a".into(),
        });
        sink.on_event(ImageEvent::Archived {
            index: 0,
            path: PathBuf::from("out/a.tar"),
        });

        let events = lines(&buffer);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["run"], "docker pull a");
        assert_eq!(events[1]["event"], "archive_written");
    }
}
