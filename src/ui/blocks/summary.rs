use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, strong, Tone};
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed end-of-command summary
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    stats: Vec<(String, usize)>,
    items: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stats: Vec::new(),
            items: Vec::new(),
            next_step: None,
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    /// Listed under the stats with a success icon
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            strong(&self.title, Tone::Success, supports_color)
        );

        let mut b = Box::with_title(header).style(BoxStyle::Success);
        b.add_empty();

        for (label, count) in &self.stats {
            b.add_line(format!("{} {}", count, label));
        }

        if !self.items.is_empty() {
            b.add_empty();
            for item in &self.items {
                b.add_line(format!(
                    "{} {}",
                    Icon::Success.colored(supports_color, supports_unicode),
                    item
                ));
            }
        }

        if let Some(next_step) = &self.next_step {
            b.add_empty();
            b.add_line(format!(
                "{} {} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                paint("Next:", Tone::Dim, supports_color),
                next_step
            ));
        }

        b.render(supports_color, supports_unicode)
    }
}
