use std::io::{Cursor, Read, Write};

use mdocx::docx::{read_docx_from_reader, write_docx_to_writer};
use mdocx::{Document, Error, Metadata, Span, Table, Theme, read_docx, write_docx};
use tempfile::NamedTempFile;

fn sample_document() -> Document {
    let mut doc = Document::new();
    doc.metadata = Metadata::new("Workshop Proposal").with_author("Programme Office");
    doc.add_title("Workshop Proposal");
    doc.add_heading(1, "Expected Outcomes");
    doc.add_paragraph(vec![
        Span::bold("Immediate deliverables: "),
        Span::plain("signed MoU and published proceedings."),
    ]);
    doc.add_blank();
    doc.add_list_item(vec![Span::plain("10+ participating institutions")]);
    doc.add_list_item(vec![Span::plain("15-20 peer-reviewed papers")]);

    let mut budget = Table::new(vec!["Item".to_string(), "CHF".to_string()]);
    budget.add_row(vec!["Venue".to_string(), "5,000".to_string()]);
    budget.add_row(vec!["Travel".to_string(), "8,000".to_string()]);
    doc.add_table(budget);

    doc
}

#[test]
fn test_package_structure() {
    let mut buffer = Cursor::new(Vec::new());
    write_docx_to_writer(&sample_document(), &Theme::default(), &mut buffer)
        .expect("Failed to write DOCX");

    let mut archive = zip::ZipArchive::new(Cursor::new(buffer.into_inner()))
        .expect("Output is not a valid ZIP");

    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "word/document.xml",
        "word/_rels/document.xml.rels",
        "word/styles.xml",
        "word/numbering.xml",
    ] {
        archive
            .by_name(part)
            .unwrap_or_else(|_| panic!("missing part: {part}"));
    }
}

#[test]
fn test_document_xml_content() {
    let mut buffer = Cursor::new(Vec::new());
    write_docx_to_writer(&sample_document(), &Theme::default(), &mut buffer)
        .expect("Failed to write DOCX");

    let mut archive = zip::ZipArchive::new(Cursor::new(buffer.into_inner())).unwrap();
    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut document_xml)
        .unwrap();

    assert!(document_xml.contains("<w:pStyle w:val=\"Title\"/>"));
    assert!(document_xml.contains("Immediate deliverables: "));
    assert!(document_xml.contains("<w:tbl>"));
    assert!(document_xml.contains("w:fill=\"E5E5E5\""));
}

#[test]
fn test_write_and_read_roundtrip() {
    let original = sample_document();

    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    write_docx(&original, &Theme::default(), temp_file.path()).expect("Failed to write DOCX");

    let restored = read_docx(temp_file.path()).expect("Failed to read written DOCX");

    assert_eq!(restored.blocks, original.blocks);
    assert_eq!(restored.metadata.title.as_deref(), Some("Workshop Proposal"));
    assert_eq!(
        restored.metadata.author.as_deref(),
        Some("Programme Office")
    );
}

#[test]
fn test_roundtrip_in_memory() {
    let original = sample_document();

    let mut buffer = Cursor::new(Vec::new());
    write_docx_to_writer(&original, &Theme::default(), &mut buffer).expect("Failed to write DOCX");

    let restored = read_docx_from_reader(Cursor::new(buffer.into_inner()))
        .expect("Failed to read DOCX from memory");
    assert_eq!(restored.blocks, original.blocks);
}

#[test]
fn test_missing_document_part_is_invalid() {
    // A ZIP that is not a DOCX: no word/document.xml inside
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buffer);
        zip.start_file("hello.txt", zip::write::SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"hi").unwrap();
        zip.finish().unwrap();
    }

    let result = read_docx_from_reader(Cursor::new(buffer.into_inner()));
    assert!(matches!(result, Err(Error::InvalidDocx(_))));
}

#[test]
fn test_theme_json_roundtrip() {
    let theme = Theme::default();
    let json = serde_json::to_string(&theme).expect("Failed to serialize theme");
    let restored: Theme = serde_json::from_str(&json).expect("Failed to deserialize theme");
    assert_eq!(restored, theme);
}

#[test]
fn test_partial_theme_json_uses_defaults() {
    let theme: Theme = serde_json::from_str(r#"{"font": "Georgia"}"#).unwrap();
    assert_eq!(theme.font, "Georgia");
    assert_eq!(theme.body_size, Theme::default().body_size);
}
