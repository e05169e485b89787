//! Domain Layer
//!
//! Pure logic for turning image names into archive jobs, plus the ports the
//! rest of the crate talks to the outside world through.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (ImageName, ImageOrigin)
//! - `services/` - Stateless logic (dedupe, archive planning)
//! - `ports/` - Interface definitions for infrastructure (runtime, picker, events)
//!
//! Nothing in here spawns processes or touches the file system.

pub mod ports;
pub mod services;
pub mod value_objects;
