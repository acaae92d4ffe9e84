//! Markdown front end: line classification and rich-text building.
//!
//! This module turns the narrow markdown subset used in proposal documents
//! into the document IR. The design separates pure transformation from I/O:
//!
//! - [`classify`]: per-line classification into blocks
//! - [`spans`]: the bold-span scan splitting a line into styled runs
//!
//! [`parse_markdown`] is a pure function over an in-memory string;
//! [`read_markdown`] layers file reading and text decoding on top of it.
//!
//! ## Design Notes
//!
//! This is deliberately not a general markdown parser. The supported subset
//! is exactly what the source documents use: `# `, `## `, `### ` heading
//! prefixes, `**bold**` runs, blank lines, and two filtered sentinels
//! (lines containing `Character count:` and literal `---` separators).
//! Nested lists, links, images, escaping, and code blocks are out of scope.

mod classify;
mod spans;

pub use classify::classify_line;
pub use spans::scan_spans;

use std::path::Path;

use crate::document::Document;
use crate::error::Result;
use crate::util::decode_text;

/// Parse markdown text into a [`Document`].
///
/// Classifies each line independently, in input order. Lines are the
/// `\n`-separated rows of the input; a trailing `\r` is tolerated so CRLF
/// sources behave the same as LF sources.
///
/// # Example
///
/// ```
/// use mdocx::{parse_markdown, Block};
///
/// let doc = parse_markdown("# Overview\n\n**Goal:** launch the network.");
/// assert!(matches!(&doc.blocks[0], Block::Title(t) if t == "Overview"));
/// assert_eq!(doc.blocks.len(), 3);
/// ```
pub fn parse_markdown(text: &str) -> Document {
    let blocks = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter_map(classify_line)
        .collect();

    Document {
        blocks,
        ..Document::default()
    }
}

/// Read a markdown file from disk into a [`Document`].
///
/// Decodes UTF-8 input directly and falls back to Windows-1252 for text
/// exported from word processors.
pub fn read_markdown<P: AsRef<Path>>(path: P) -> Result<Document> {
    let bytes = std::fs::read(path)?;
    Ok(parse_markdown(&decode_text(&bytes)))
}
