use dockerimages::PullReport;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_pull_header(
    runtime: &str,
    platform: Option<&str>,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run {
        "Pull Images (dry run)"
    } else {
        "Pull Images"
    };
    let mut header = CommandHeader::new(Icon::Pull, title);
    header.add("Runtime", runtime);
    if let Some(platform) = platform {
        header.add("Platform", platform);
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_pull_summary(
    report: &PullReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if report.dry_run {
        let mut summary = ResultSummary::success("Dry Run Complete");
        summary.with_next_step("Run again without --dry-run to pull.");
        return summary.render(supports_color, supports_unicode);
    }

    let mut summary = ResultSummary::success("Pull Complete");
    summary.add_stat("pulled", report.pulled.len());
    summary.add_stat("already present", report.present.len());
    summary.render(supports_color, supports_unicode)
}
