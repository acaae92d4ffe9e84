//! End-to-end conversion: markdown in, DOCX out, read back.

use mdocx::{Block, Span, Theme, parse_markdown, read_docx, write_docx};
use tempfile::NamedTempFile;

const PROPOSAL_MD: &str = "\
# Project Overview and Context

## Communication Objectives and Target Audiences
The workshop disseminates research findings to three key audiences:
**Academic Community (60%):** researchers receive latest methodologies.
**Financial Industry (40%):** representatives gain actionable insights.

### Timeline
Planning begins six months ahead.

---
Character count: 4,892 (including spaces)
";

#[test]
fn test_markdown_to_docx_and_back() {
    let document = parse_markdown(PROPOSAL_MD);

    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    write_docx(&document, &Theme::default(), temp_file.path()).expect("Failed to write DOCX");

    let restored = read_docx(temp_file.path()).expect("Failed to read DOCX");
    assert_eq!(restored.blocks, document.blocks);

    // The title line becomes the document title metadata on write
    assert_eq!(
        restored.metadata.title.as_deref(),
        Some("Project Overview and Context")
    );
}

#[test]
fn test_filtered_lines_never_reach_output() {
    let document = parse_markdown(PROPOSAL_MD);

    for block in &document.blocks {
        if let Block::Paragraph(spans) = block {
            let text: String = spans.iter().map(|s| s.text.as_str()).collect();
            assert!(!text.contains("Character count:"));
            assert_ne!(text, "---");
        }
    }
}

#[test]
fn test_structure_of_converted_proposal() {
    let document = parse_markdown(PROPOSAL_MD);

    assert_eq!(
        document.blocks[0],
        Block::Title("Project Overview and Context".to_string())
    );
    assert!(matches!(
        &document.blocks[2],
        Block::Heading { level: 1, text } if text == "Communication Objectives and Target Audiences"
    ));

    // Bold-labelled audience paragraphs keep their two-run shape
    let Block::Paragraph(spans) = &document.blocks[4] else {
        panic!("expected paragraph");
    };
    assert_eq!(
        spans,
        &vec![
            Span::bold("Academic Community (60%):"),
            Span::plain(" researchers receive latest methodologies."),
        ]
    );

    assert!(matches!(
        &document.blocks[7],
        Block::Heading { level: 2, text } if text == "Timeline"
    ));

    // Trailing newline after the filtered character-count line
    assert_eq!(document.blocks.last(), Some(&Block::Blank));
}
