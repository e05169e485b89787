//! Image picker port
//!
//! Lets the user choose a subset of the locally present images.

use crate::error::ImagesResult;

/// Interactive subset selection
pub trait ImagePicker {
    /// Return the chosen images, in the order they appear in `available`.
    ///
    /// Errors:
    /// - `SelectionCancelled` when the user aborts
    /// - `NoSelection` when the user confirms an empty selection
    fn pick(&self, available: &[String]) -> ImagesResult<Vec<String>>;
}
