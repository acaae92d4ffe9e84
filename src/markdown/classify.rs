//! Per-line classification into document blocks.

use memchr::memmem;

use crate::document::Block;

use super::spans::scan_spans;

/// Sentinel substring marking character-count metadata lines.
const CHAR_COUNT_SENTINEL: &str = "Character count:";

/// Map one raw line to zero or one [`Block`].
///
/// Rules apply in precedence order: metadata and separator lines are
/// filtered, then title and heading prefixes, then blank lines, and
/// everything else becomes a paragraph via the bold-span scan. The function
/// is total: any input string lands in exactly one of these cases.
///
/// # Examples
///
/// ```
/// use mdocx::{classify_line, Block};
///
/// assert!(matches!(classify_line("# Hello"), Some(Block::Title(t)) if t == "Hello"));
/// assert!(matches!(classify_line(""), Some(Block::Blank)));
/// assert_eq!(classify_line("Character count: 4,965"), None);
/// ```
pub fn classify_line(line: &str) -> Option<Block> {
    if memmem::find(line.as_bytes(), CHAR_COUNT_SENTINEL.as_bytes()).is_some() {
        return None;
    }
    if line == "---" {
        return None;
    }

    if let Some(text) = line.strip_prefix("# ") {
        return Some(Block::Title(text.to_string()));
    }
    if let Some(text) = line.strip_prefix("## ") {
        return Some(Block::Heading {
            level: 1,
            text: text.to_string(),
        });
    }
    if let Some(text) = line.strip_prefix("### ") {
        return Some(Block::Heading {
            level: 2,
            text: text.to_string(),
        });
    }

    if line.trim().is_empty() {
        return Some(Block::Blank);
    }

    Some(Block::Paragraph(scan_spans(line)))
}
