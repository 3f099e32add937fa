use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Generate a DOCX document from the rendered report text.
///
/// The report template emits a small Markdown subset:
/// - `#`, `##`, `###` headings → DOCX Heading 1–3
/// - `- item` → bullet paragraph
/// - `> note` → italic paragraph
/// - `**bold**` → bold run
/// - `---` → page break
/// - Everything else → normal paragraph
///
/// `accent` is a `#RRGGBB` colour used for headings when the styles ask
/// for it.
pub fn generate_docx(
    rendered: &str,
    styles: &DocumentStyles,
    accent: &str,
) -> Result<Vec<u8>, ExportError> {
    let accent = styles
        .accent_headings
        .then(|| accent.trim_start_matches('#'))
        .filter(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()));

    let [h1, h2, h3] = styles.heading_pt;
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", h1))
        .add_style(heading_style("Heading2", "heading 2", h2))
        .add_style(heading_style("Heading3", "heading 3", h3));
    let heading = |text: &str, style_id: &str| heading_paragraph(text, style_id, styles, accent);

    for line in rendered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let paragraph = if let Some(text) = trimmed.strip_prefix("### ") {
            heading(text, "Heading3")
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            heading(text, "Heading2")
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            heading(text, "Heading1")
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            bullet_paragraph(text, styles)
        } else if let Some(text) = trimmed.strip_prefix("> ") {
            Paragraph::new().add_run(body_run(text, styles).italic())
        } else if trimmed == "---" {
            Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
        } else {
            inline_paragraph(Paragraph::new(), trimmed, styles)
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
        .bold()
}

fn heading_paragraph(
    text: &str,
    style_id: &str,
    styles: &DocumentStyles,
    accent: Option<&str>,
) -> Paragraph {
    let mut run = Run::new()
        .add_text(text)
        .fonts(RunFonts::new().ascii(&styles.font));
    if let Some(hex) = accent {
        run = run.color(hex);
    }
    Paragraph::new().style(style_id).add_run(run)
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run("\u{2022} ", styles));
    inline_paragraph(para, text, styles)
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_pt * 2)
        .fonts(RunFonts::new().ascii(&styles.font))
}

/// Append `text` to `para`, turning `**bold**` segments into bold runs.
/// An unmatched `**` is kept as literal text.
fn inline_paragraph(mut para: Paragraph, text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let after_start = &remaining[start + 2..];
        let Some(end) = after_start.find("**") else {
            break;
        };

        let before = &remaining[..start];
        if !before.is_empty() {
            para = para.add_run(body_run(before, styles));
        }
        para = para.add_run(body_run(&after_start[..end], styles).bold());
        remaining = &after_start[end + 2..];
    }

    if !remaining.is_empty() {
        para = para.add_run(body_run(remaining, styles));
    }
    para
}
