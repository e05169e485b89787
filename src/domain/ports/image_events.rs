//! Image Event Port
//!
//! Provides an observable interface for pull and save operations.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::value_objects::CollectedImage;

/// Event emitted during pull/save operations
#[derive(Debug, Clone)]
pub enum ImageEvent {
    /// Sources were read and deduplicated
    Collected { images: Vec<CollectedImage> },

    /// Presence check for one image started
    EnsureStarted {
        index: usize,
        total: usize,
        image: String,
    },

    /// Image was already local, no pull needed
    AlreadyPresent { index: usize, image: String },

    /// Image was pulled
    Pulled { index: usize, image: String },

    /// Several images share one archive path; the last save wins
    ArchiveCollision { path: PathBuf, images: Vec<String> },

    /// A `save` invocation started
    ArchiveStarted {
        index: usize,
        total: usize,
        path: PathBuf,
        images: Vec<String>,
    },

    /// Archive written (and compressed, when requested)
    Archived { index: usize, path: PathBuf },

    /// Dry run: a runtime command that would have been executed
    Planned { command: String },

    /// Operation completed; a dry run reports zero counts
    Completed {
        pulled_count: usize,
        present_count: usize,
        archive_count: usize,
        dry_run: bool,
    },
}

/// Trait for receiving image events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait ImageEventSink {
    /// Handle an event
    fn on_event(&self, event: ImageEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ImageEventSink for NoopEventSink {
    fn on_event(&self, _event: ImageEvent) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Test event sink that records all events
    #[derive(Default)]
    pub struct RecordingEventSink {
        pub events: RefCell<Vec<ImageEvent>>,
    }

    impl RecordingEventSink {
        pub fn events(&self) -> Vec<ImageEvent> {
            self.events.borrow().clone()
        }
    }

    impl ImageEventSink for RecordingEventSink {
        fn on_event(&self, event: ImageEvent) {
            self.events.borrow_mut().push(event);
        }
    }
}
