//! Declarative document theme.
//!
//! Every styling constant the generated DOCX carries lives in one [`Theme`]
//! value: fonts, run sizes, paragraph spacing, page margins, list indents,
//! and table colors. The theme drives `styles.xml`, `numbering.xml`, and the
//! section properties in `document.xml`.

use serde::{Deserialize, Serialize};

/// Document-wide styling configuration.
///
/// Units follow WordprocessingML conventions: run sizes are half-points,
/// distances are twips (1/20 pt), and colors are `RRGGBB` hex without a
/// leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Body font family.
    pub font: String,
    /// Body run size in half-points.
    pub body_size: u32,
    pub title: ParagraphStyle,
    pub heading1: ParagraphStyle,
    pub heading2: ParagraphStyle,
    /// Page margin applied on all four sides, in twips.
    pub page_margin: u32,
    /// Left indent of bulleted list items, in twips.
    pub list_indent: u32,
    /// Hanging indent of the bullet character, in twips.
    pub list_hanging: u32,
    pub table_border_color: String,
    pub table_header_fill: String,
}

/// Styling for one named paragraph style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphStyle {
    /// Run size in half-points.
    pub size: u32,
    pub bold: bool,
    pub centered: bool,
    /// Spacing before the paragraph, in twips.
    pub spacing_before: u32,
    /// Spacing after the paragraph, in twips.
    pub spacing_after: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font: "Arial".to_string(),
            body_size: 22,
            title: ParagraphStyle {
                size: 32,
                bold: true,
                centered: true,
                spacing_before: 240,
                spacing_after: 120,
            },
            heading1: ParagraphStyle {
                size: 28,
                bold: true,
                centered: false,
                spacing_before: 240,
                spacing_after: 120,
            },
            heading2: ParagraphStyle {
                size: 24,
                bold: true,
                centered: false,
                spacing_before: 120,
                spacing_after: 120,
            },
            page_margin: 1440,
            list_indent: 720,
            list_hanging: 360,
            table_border_color: "CCCCCC".to_string(),
            table_header_fill: "E5E5E5".to_string(),
        }
    }
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            size: 22,
            bold: false,
            centered: false,
            spacing_before: 0,
            spacing_after: 0,
        }
    }
}
