use serde::{Deserialize, Serialize};

/// Look of the DOCX report. Sizes are in points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// One family for the whole report; large-print readers need no mixing.
    pub font: String,
    pub body_pt: usize,
    /// Heading sizes for levels 1 to 3.
    pub heading_pt: [usize; 3],
    /// Colour headings with the result's level colour.
    pub accent_headings: bool,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            font: "Noto Sans".to_string(),
            body_pt: 12,
            heading_pt: [20, 15, 13],
            accent_headings: true,
        }
    }
}
