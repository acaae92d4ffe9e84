//! # mdocx
//!
//! A fast, lightweight library for converting the markdown subset used in
//! proposal documents into styled Word (DOCX) files.
//!
//! ## Features
//!
//! - Classify markdown lines into titles, headings, styled paragraphs, and
//!   blank lines, with `**bold**` runs split into spans
//! - Write DOCX files styled by a single declarative [`Theme`]
//! - Read DOCX files back into the same document representation
//! - Build documents programmatically, including bullet lists and simple
//!   tables
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdocx::{read_markdown, write_docx, Theme};
//!
//! // Convert a markdown file to DOCX
//! let document = read_markdown("proposal.md").unwrap();
//! write_docx(&document, &Theme::default(), "proposal.docx").unwrap();
//! ```
//!
//! ## Working with Documents
//!
//! The [`Document`] struct is the central data type: an ordered sequence of
//! blocks, independent of both the markdown front end and the DOCX
//! container:
//!
//! ```
//! use mdocx::{Document, Span, Table};
//!
//! let mut document = Document::new();
//! document.add_title("Project Overview");
//! document.add_heading(1, "Expected Outcomes");
//! document.add_paragraph(vec![
//!     Span::bold("Immediate deliverables: "),
//!     Span::plain("signed MoU and published proceedings."),
//! ]);
//! document.add_list_item(vec![Span::plain("10+ participating institutions")]);
//!
//! let mut budget = Table::new(vec!["Item".into(), "CHF".into()]);
//! budget.add_row(vec!["Venue".into(), "5,000".into()]);
//! document.add_table(budget);
//! ```

pub mod document;
pub mod docx;
pub mod error;
pub mod markdown;
pub(crate) mod util;

pub use document::{Block, Document, Metadata, Span, Table};
pub use docx::{ParagraphStyle, Theme, read_docx, write_docx};
pub use error::{Error, Result};
pub use markdown::{classify_line, parse_markdown, read_markdown, scan_spans};
