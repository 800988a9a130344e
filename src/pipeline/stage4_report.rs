use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::model::profile::ModelProfile;
use crate::model::risk::Evaluation;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{build_report_context, build_summary};

pub const REPORT_FILE: &str = "metarisk_report.txt";
pub const SUMMARY_FILE: &str = "summary.json";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

pub fn render(
    eval: &Evaluation,
    profile: &ModelProfile,
    format: ReportFormat,
) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => Ok(render_report_text(&build_report_context(eval, profile))),
        ReportFormat::Json => Ok(render_summary_json(&build_summary(eval, profile))?),
    }
}

pub fn write_reports(
    eval: &Evaluation,
    profile: &ModelProfile,
    out_dir: &Path,
) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let report_path = out_dir.join(REPORT_FILE);
    write_text(&report_path, &render(eval, profile, ReportFormat::Text)?)?;

    let summary_path = out_dir.join(SUMMARY_FILE);
    write_text(&summary_path, &render(eval, profile, ReportFormat::Json)?)?;

    info!(out_dir = %out_dir.display(), "reports written");
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    if !contents.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
