//! Property tests for dockerimages.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "first occurrence wins".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/dedupe.rs"]
mod dedupe;

#[path = "properties/image_sources.rs"]
mod image_sources;

#[path = "properties/archive_plan.rs"]
mod archive_plan;
