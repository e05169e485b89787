use dockerimages::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn render_config_warning(warning: &ConfigWarning, ui: &UiContext) -> String {
    let icon = Icon::Warning.colored(ui.color, ui.unicode);
    match warning {
        ConfigWarning::UnknownKey {
            key,
            file,
            line,
            suggestion,
        } => {
            let mut out = match line {
                Some(line) => format!(
                    "{} Unknown config key '{}' in {}:{}",
                    icon,
                    key,
                    file.display(),
                    line
                ),
                None => format!("{} Unknown config key '{}' in {}", icon, key, file.display()),
            };
            if let Some(suggestion) = suggestion {
                out.push_str(&format!("\n   Did you mean '{}'?", suggestion));
            }
            out
        }
        ConfigWarning::Skipped { file, message } => {
            format!("{} Ignoring {}: {}", icon, file.display(), message)
        }
    }
}

/// Config warnings go to stderr, or become `warning` events in JSON mode
pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        if ui.json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "message": render_config_warning(warning, &UiContext { color: false, ..*ui }),
            }));
        } else {
            eprintln!("{}", render_config_warning(warning, ui));
        }
    }
}
