use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::report::ReportContext;

/// The built-in report layout.
pub const REPORT_TEMPLATE: &str = include_str!("../templates/report.md.tera");

/// Render the built-in report template.
pub fn render_report(context: &ReportContext) -> Result<String, ExportError> {
    render_template("report.md", REPORT_TEMPLATE, context)
}

/// Render a Tera template against any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax); the
/// fields of `context` become the template variables.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
