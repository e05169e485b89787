use crate::ui::widgets::r#box::{Box, BoxStyle};

pub fn render_version(
    version: &str,
    runtime: &str,
    runtime_available: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut b = Box::with_title(format!("dockerimages v{}", version)).style(BoxStyle::Info);
    b.add_empty();
    let status = if runtime_available {
        "available"
    } else {
        "not found"
    };
    b.add_line(format!("Runtime: {} ({})", runtime, status));
    b.render(supports_color, supports_unicode)
}
