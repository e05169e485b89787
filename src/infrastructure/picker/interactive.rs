//! Interactive Image Picker
//!
//! Multi-select prompt over the images the runtime reports as local.

use dialoguer::MultiSelect;
use is_terminal::IsTerminal;

use super::theme::PickerTheme;
use crate::domain::ports::ImagePicker;
use crate::error::{ImagesError, ImagesResult};

/// Rows visible at once before the list scrolls
pub const PAGE_SIZE: usize = 15;

/// Terminal multi-select picker (dialoguer).
///
/// Space toggles, Enter confirms, Esc or `q` cancels.
pub struct InteractivePicker {
    prompt: String,
    unicode: bool,
}

impl InteractivePicker {
    pub fn new(unicode: bool) -> Self {
        Self {
            prompt: "Select images to save:".to_string(),
            unicode,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

impl Default for InteractivePicker {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ImagePicker for InteractivePicker {
    fn pick(&self, available: &[String]) -> ImagesResult<Vec<String>> {
        if !std::io::stdin().is_terminal() {
            return Err(ImagesError::NotInteractive);
        }

        let theme = PickerTheme::new(self.unicode);
        let selection = MultiSelect::with_theme(&theme)
            .with_prompt(self.prompt.as_str())
            .items(available)
            .max_length(PAGE_SIZE)
            .interact_opt()
            .map_err(|err| match err {
                dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                    ImagesError::SelectionCancelled
                }
                other => ImagesError::Selection(other.to_string()),
            })?;

        let Some(indices) = selection else {
            return Err(ImagesError::SelectionCancelled);
        };
        if indices.is_empty() {
            return Err(ImagesError::NoSelection);
        }

        Ok(indices
            .into_iter()
            .filter_map(|i| available.get(i).cloned())
            .collect())
    }
}
