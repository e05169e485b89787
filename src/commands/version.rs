use anyhow::Result;
use dockerimages::config::Config;
use dockerimages::presentation::create_runtime;

use crate::ui::context::UiContext;
use crate::ui::views::version::render_version;

pub fn cmd_version(config: &Config, runtime: Option<&str>, ui: &UiContext) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let runtime = create_runtime(config, runtime, ui.json);
    let available = runtime.check_available();

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "version",
            "command": "version",
            "version": version,
            "runtime": runtime.program(),
            "runtime_available": available,
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        render_version(version, runtime.program(), available, ui.color, ui.unicode)
    );
    Ok(())
}
