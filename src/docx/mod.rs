//! DOCX (WordprocessingML) container support.
//!
//! A DOCX file is a ZIP package of XML parts. The writer assembles the
//! package from the document IR and a [`Theme`]; the reader walks
//! `word/document.xml` back into the IR.

mod reader;
mod theme;
mod writer;

pub use reader::{read_docx, read_docx_from_reader};
pub use theme::{ParagraphStyle, Theme};
pub use writer::{write_docx, write_docx_to_writer};
