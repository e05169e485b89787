use std::path::Path;

use dockerimages::SaveReport;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

/// What the save header describes
pub struct SaveHeader<'a> {
    pub runtime: &'a str,
    pub output: &'a Path,
    pub merge: bool,
    pub gzip: bool,
    pub platform: Option<&'a str>,
    pub dry_run: bool,
}

pub fn render_save_header(
    header: &SaveHeader<'_>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if header.dry_run {
        "Save Images (dry run)"
    } else {
        "Save Images"
    };
    let mut out = CommandHeader::new(Icon::Save, title);
    out.add("Runtime", header.runtime);
    out.add("Output", header.output.display().to_string());

    let mut mode = if header.merge {
        "merged".to_string()
    } else {
        "one archive per image".to_string()
    };
    if header.gzip {
        mode.push_str(", gzip");
    }
    out.add("Mode", mode);

    if let Some(platform) = header.platform {
        out.add("Platform", platform);
    }
    out.render(supports_color, supports_unicode)
}

pub fn render_save_summary(
    report: &SaveReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if report.dry_run {
        let mut summary = ResultSummary::success("Dry Run Complete");
        summary.add_stat("archive(s) would be written", report.archives.len());
        for path in &report.archives {
            summary.add_item(path.display().to_string());
        }
        summary.with_next_step("Run again without --dry-run to save.");
        return summary.render(supports_color, supports_unicode);
    }

    let mut summary = ResultSummary::success("Save Complete");
    summary.add_stat("archive(s) written", report.archives.len());
    summary.add_stat("pulled", report.pulled.len());
    summary.add_stat("already present", report.present.len());
    for path in &report.archives {
        summary.add_item(path.display().to_string());
    }
    summary.render(supports_color, supports_unicode)
}
