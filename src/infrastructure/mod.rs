//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `runtime/` - Container runtime driven through its CLI
//! - `picker/` - Terminal multi-select over local images
//! - `archive/` - Post-processing of saved archives (gzip)
//! - `events/` - Event sinks (NDJSON)

pub mod archive;
pub mod events;
pub mod picker;
pub mod runtime;

// Re-export for convenience
pub use events::JsonEventSink;
pub use picker::InteractivePicker;
pub use runtime::CliRuntime;
