/// Intermediate representation of a rich-text document.
/// Format-agnostic structure shared by the markdown front end and the DOCX
/// reader and writer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub metadata: Metadata,
    pub blocks: Vec<Block>,
}

/// Document metadata, written to the DOCX core properties.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// One structural unit of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Top-level document title.
    Title(String),
    /// Outline heading. Level 1 or 2.
    Heading { level: u8, text: String },
    /// Body text made of styled runs.
    Paragraph(Vec<Span>),
    /// Empty paragraph, preserves vertical spacing.
    Blank,
    /// Bulleted list entry.
    ListItem(Vec<Span>),
    /// Simple header-and-rows table.
    Table(Table),
}

/// A styled run of text within a paragraph: a contiguous range of characters
/// sharing one emphasis state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

/// A simple table: one optional header row plus data rows of plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Span {
    pub fn new(text: impl Into<String>, bold: bool) -> Self {
        Self {
            text: text.into(),
            bold,
        }
    }

    /// An unemphasized run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    /// A bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_title(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Title(text.into()));
    }

    pub fn add_heading(&mut self, level: u8, text: impl Into<String>) {
        self.blocks.push(Block::Heading {
            level,
            text: text.into(),
        });
    }

    pub fn add_paragraph(&mut self, spans: Vec<Span>) {
        self.blocks.push(Block::Paragraph(spans));
    }

    /// Add a paragraph holding a single unemphasized run.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Paragraph(vec![Span::plain(text)]));
    }

    pub fn add_blank(&mut self) {
        self.blocks.push(Block::Blank);
    }

    pub fn add_list_item(&mut self, spans: Vec<Span>) {
        self.blocks.push(Block::ListItem(spans));
    }

    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// Document title: explicit metadata if set, otherwise the first
    /// [`Block::Title`] in the body.
    pub fn title(&self) -> Option<&str> {
        if let Some(ref title) = self.metadata.title {
            return Some(title);
        }
        self.blocks.iter().find_map(|block| match block {
            Block::Title(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Metadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_prefers_metadata() {
        let mut doc = Document::new();
        doc.add_title("Body Title");
        assert_eq!(doc.title(), Some("Body Title"));

        doc.metadata.title = Some("Metadata Title".to_string());
        assert_eq!(doc.title(), Some("Metadata Title"));
    }

    #[test]
    fn test_title_none_without_title_block() {
        let mut doc = Document::new();
        doc.add_text("just a paragraph");
        assert_eq!(doc.title(), None);
    }
}
