//! Picker theme
//!
//! Wraps `ColorfulTheme` and only changes how multi-select rows are drawn:
//! `●`/`○` with Unicode, `[x]`/`[ ]` without.

use std::fmt;

use dialoguer::theme::{ColorfulTheme, Theme};

const SELECTED: &str = "●";
const UNSELECTED: &str = "○";
const SELECTED_ASCII: &str = "[x]";
const UNSELECTED_ASCII: &str = "[ ]";

pub struct PickerTheme {
    unicode: bool,
    inner: ColorfulTheme,
}

impl PickerTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            inner: ColorfulTheme::default(),
        }
    }

    pub fn selected_icon(&self) -> &'static str {
        if self.unicode {
            SELECTED
        } else {
            SELECTED_ASCII
        }
    }

    pub fn unselected_icon(&self) -> &'static str {
        if self.unicode {
            UNSELECTED
        } else {
            UNSELECTED_ASCII
        }
    }
}

impl Theme for PickerTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_multi_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_multi_select_prompt(f, prompt)
    }

    fn format_multi_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selections: &[&str],
    ) -> fmt::Result {
        self.inner
            .format_multi_select_prompt_selection(f, prompt, selections)
    }

    fn format_multi_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        checked: bool,
        active: bool,
    ) -> fmt::Result {
        let icon = if checked {
            self.selected_icon()
        } else {
            self.unselected_icon()
        };
        let cursor = if active { ">" } else { " " };
        write!(f, "{} {} {}", cursor, icon, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_icons() {
        let theme = PickerTheme::new(true);
        assert_eq!(theme.selected_icon(), "●");
        assert_eq!(theme.unselected_icon(), "○");
    }

    #[test]
    fn ascii_icons() {
        let theme = PickerTheme::new(false);
        assert_eq!(theme.selected_icon(), "[x]");
        assert_eq!(theme.unselected_icon(), "[ ]");
    }

    #[test]
    fn active_row_has_cursor() {
        let theme = PickerTheme::new(false);
        let mut out = String::new();
        theme
            .format_multi_select_prompt_item(&mut out, "nginx:latest", true, true)
            .unwrap();
        assert_eq!(out, "> [x] nginx:latest");

        let mut out = String::new();
        theme
            .format_multi_select_prompt_item(&mut out, "redis:7", false, false)
            .unwrap();
        assert_eq!(out, "  [ ] redis:7");
    }
}
