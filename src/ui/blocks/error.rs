use std::path::{Path, PathBuf};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, Tone};
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// A source line shown under the message; `highlight` marks the culprit
#[derive(Debug, Clone, PartialEq, Eq)]
struct ContextLine {
    number: usize,
    text: String,
    highlight: bool,
}

#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    location: Option<PathBuf>,
    line: Option<usize>,
    context: Vec<ContextLine>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            line: None,
            context: Vec::new(),
            fix: None,
        }
    }

    pub fn at(mut self, file: impl Into<PathBuf>, line: Option<usize>) -> Self {
        self.location = Some(file.into());
        self.line = line;
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    /// Quote `around` lines on each side of the error line, if the file is readable
    pub fn with_file_context(mut self, around: usize) -> Self {
        if let (Some(file), Some(line)) = (&self.location, self.line) {
            self.context = read_context(file, line, around).unwrap_or_default();
        }
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} ERROR",
            Icon::Error.colored(supports_color, supports_unicode)
        );
        let mut b = Box::with_title(title).style(BoxStyle::Error);

        if let Some(file) = &self.location {
            match self.line {
                Some(line) => b.add_line(format!("{}:{}", file.display(), line)),
                None => b.add_line(file.display().to_string()),
            }
            b.add_empty();
        }
        b.add_line(self.message.clone());

        if !self.context.is_empty() {
            b.add_empty();
            for line in &self.context {
                let (prefix, text) = if line.highlight {
                    (
                        Icon::Pointer.render(supports_unicode),
                        paint(&line.text, Tone::Error, supports_color),
                    )
                } else {
                    (" ", line.text.clone())
                };
                b.add_line(format!("{prefix} {:>4} | {}", line.number, text));
            }
        }

        if let Some(fix) = &self.fix {
            b.add_empty();
            b.add_line(format!("FIX: {}", fix));
        }

        b.render(supports_color, supports_unicode)
    }
}

fn read_context(file: &Path, line: usize, around: usize) -> Option<Vec<ContextLine>> {
    let content = std::fs::read_to_string(file).ok()?;
    let lines: Vec<&str> = content.lines().collect();
    if line == 0 || line > lines.len() {
        return None;
    }

    let start = line.saturating_sub(around + 1);
    let end = (line + around).min(lines.len());

    Some(
        lines[start..end]
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let number = start + idx + 1;
                ContextLine {
                    number,
                    text: (*text).to_string(),
                    highlight: number == line,
                }
            })
            .collect(),
    )
}
