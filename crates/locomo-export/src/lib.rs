//! locomo-export
//!
//! Report rendering for a classified assessment: Markdown text via Tera,
//! DOCX via docx-rs, and the JSON view for other tools.

pub mod docx;
pub mod error;
pub mod links;
pub mod render;
pub mod report;
pub mod styles;

use std::fmt;
use std::str::FromStr;

use error::ExportError;
use report::ReportContext;
use styles::DocumentStyles;

/// Output formats a report can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    Docx,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Docx => "docx",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Markdown => "markdown",
            ReportFormat::Docx => "docx",
            ReportFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for ReportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "docx" => Ok(ReportFormat::Docx),
            "json" => Ok(ReportFormat::Json),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Produce the report bytes in the requested format.
pub fn export(
    context: &ReportContext,
    format: ReportFormat,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    tracing::debug!(%format, level = context.level, "exporting report");
    match format {
        ReportFormat::Markdown => Ok(render::render_report(context)?.into_bytes()),
        ReportFormat::Docx => {
            let rendered = render::render_report(context)?;
            docx::generate_docx(&rendered, styles, &context.level_color)
        }
        ReportFormat::Json => Ok(serde_json::to_vec_pretty(context)?),
    }
}
