use std::io::{Read, Seek};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use zip::ZipArchive;

use crate::document::{Block, Document, Metadata, Span, Table};
use crate::error::{Error, Result};

/// Read a DOCX file from disk into a [`Document`].
///
/// Reconstructs the block sequence from the WordprocessingML body: styled
/// paragraphs become titles and headings, bulleted paragraphs become list
/// items, and runs are folded back into styled spans. Core properties are
/// read into the document metadata when present.
///
/// # Example
///
/// ```no_run
/// use mdocx::read_docx;
///
/// let document = read_docx("proposal.docx")?;
/// println!("Blocks: {}", document.blocks.len());
/// # Ok::<(), mdocx::Error>(())
/// ```
pub fn read_docx<P: AsRef<Path>>(path: P) -> Result<Document> {
    let file = std::fs::File::open(path)?;
    read_docx_from_reader(file)
}

/// Read a DOCX from any [`Read`] + [`Seek`] source.
///
/// Useful for reading from memory buffers or network streams.
pub fn read_docx_from_reader<R: Read + Seek>(reader: R) -> Result<Document> {
    let mut archive = ZipArchive::new(reader)?;

    let content = match read_archive_file(&mut archive, "word/document.xml") {
        Ok(content) => content,
        Err(Error::Zip(zip::result::ZipError::FileNotFound)) => {
            return Err(Error::InvalidDocx("no word/document.xml part".into()));
        }
        Err(e) => return Err(e),
    };

    let mut document = Document::new();
    document.blocks = parse_document_xml(&content)?;

    if let Ok(core) = read_archive_file(&mut archive, "docProps/core.xml") {
        document.metadata = parse_core_xml(&core)?;
    }

    Ok(document)
}

/// Paragraph being accumulated while walking `document.xml`.
#[derive(Default)]
struct ParagraphState {
    style: Option<String>,
    is_list: bool,
    spans: Vec<Span>,
}

/// Table being accumulated: rows carry a flag for shaded (header) cells.
#[derive(Default)]
struct TableState {
    rows: Vec<(Vec<String>, bool)>,
    current_row: Vec<String>,
    row_shaded: bool,
    current_cell: String,
    in_cell: bool,
}

fn parse_document_xml(content: &str) -> Result<Vec<Block>> {
    let mut reader = Reader::from_str(content);

    let mut blocks: Vec<Block> = Vec::new();
    let mut paragraph: Option<ParagraphState> = None;
    let mut table: Option<TableState> = None;

    let mut in_run = false;
    let mut in_text = false;
    let mut run_bold = false;
    let mut run_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match local_name(e.name().as_ref()) {
                b"tbl" => table = Some(TableState::default()),
                b"tr" => {
                    if let Some(state) = table.as_mut() {
                        state.current_row.clear();
                        state.row_shaded = false;
                    }
                }
                b"tc" => {
                    if let Some(state) = table.as_mut() {
                        state.current_cell.clear();
                        state.in_cell = true;
                    }
                }
                b"p" if table.is_none() => paragraph = Some(ParagraphState::default()),
                b"pStyle" => {
                    if let Some(para) = paragraph.as_mut() {
                        para.style = attr_value(&e, b"val")?;
                    }
                }
                b"numPr" => {
                    if let Some(para) = paragraph.as_mut() {
                        para.is_list = true;
                    }
                }
                b"r" => {
                    in_run = true;
                    run_bold = false;
                    run_text.clear();
                }
                b"b" if in_run => run_bold = bool_attr(&e)?,
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match local_name(e.name().as_ref()) {
                b"p" if table.is_none() => blocks.push(Block::Blank),
                b"pStyle" => {
                    if let Some(para) = paragraph.as_mut() {
                        para.style = attr_value(&e, b"val")?;
                    }
                }
                b"numPr" => {
                    if let Some(para) = paragraph.as_mut() {
                        para.is_list = true;
                    }
                }
                b"shd" => {
                    if let Some(state) = table.as_mut()
                        && state.in_cell
                    {
                        state.row_shaded = true;
                    }
                }
                b"b" if in_run => run_bold = bool_attr(&e)?,
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    let text = String::from_utf8_lossy(e.as_ref());
                    append_text(&mut table, &mut run_text, in_run, &text);
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if in_text {
                    let entity = String::from_utf8_lossy(e.as_ref());
                    let resolved = match entity.as_ref() {
                        "apos" => "'",
                        "quot" => "\"",
                        "lt" => "<",
                        "gt" => ">",
                        "amp" => "&",
                        _ => "",
                    };
                    append_text(&mut table, &mut run_text, in_run, resolved);
                }
            }
            Ok(Event::End(e)) => match local_name(e.name().as_ref()) {
                b"t" => in_text = false,
                b"r" => {
                    in_run = false;
                    if table.is_none()
                        && let Some(para) = paragraph.as_mut()
                        && !run_text.is_empty()
                    {
                        push_span(&mut para.spans, std::mem::take(&mut run_text), run_bold);
                    }
                }
                b"p" => {
                    if table.is_none()
                        && let Some(para) = paragraph.take()
                    {
                        blocks.push(finish_paragraph(para));
                    }
                }
                b"tc" => {
                    if let Some(state) = table.as_mut() {
                        state.in_cell = false;
                        let cell = std::mem::take(&mut state.current_cell);
                        state.current_row.push(cell);
                    }
                }
                b"tr" => {
                    if let Some(state) = table.as_mut() {
                        let row = std::mem::take(&mut state.current_row);
                        state.rows.push((row, state.row_shaded));
                    }
                }
                b"tbl" => {
                    if let Some(state) = table.take() {
                        blocks.push(Block::Table(finish_table(state)));
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
    }

    Ok(blocks)
}

/// Route decoded character data to the right accumulator: a table cell when
/// inside one, the current run otherwise.
fn append_text(table: &mut Option<TableState>, run_text: &mut String, in_run: bool, text: &str) {
    if let Some(state) = table.as_mut() {
        if state.in_cell {
            state.current_cell.push_str(text);
        }
    } else if in_run {
        run_text.push_str(text);
    }
}

fn finish_paragraph(para: ParagraphState) -> Block {
    let text = || -> String { para.spans.iter().map(|s| s.text.as_str()).collect() };

    match para.style.as_deref() {
        Some("Title") => Block::Title(text()),
        Some("Heading1") => Block::Heading {
            level: 1,
            text: text(),
        },
        Some("Heading2") => Block::Heading {
            level: 2,
            text: text(),
        },
        _ => {
            if para.is_list {
                Block::ListItem(para.spans)
            } else if para.spans.is_empty() {
                Block::Blank
            } else {
                Block::Paragraph(para.spans)
            }
        }
    }
}

fn finish_table(state: TableState) -> Table {
    let mut rows = state.rows.into_iter();
    let mut table = Table::default();

    match rows.next() {
        Some((cells, true)) => table.headers = cells,
        Some((cells, false)) => table.rows.push(cells),
        None => {}
    }
    table.rows.extend(rows.map(|(cells, _)| cells));

    table
}

/// Merge adjacent runs sharing an emphasis state back into one span.
/// Word processors split runs freely; the IR only cares about state changes.
fn push_span(spans: &mut Vec<Span>, text: String, bold: bool) {
    if let Some(last) = spans.last_mut()
        && last.bold == bold
    {
        last.text.push_str(&text);
        return;
    }
    spans.push(Span::new(text, bold));
}

fn parse_core_xml(content: &str) -> Result<Metadata> {
    let mut reader = Reader::from_str(content);
    let mut metadata = Metadata::default();

    let mut current_element: Option<&'static str> = None;
    let mut buf_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match local_name(e.name().as_ref()) {
                b"title" => current_element = Some("title"),
                b"creator" => current_element = Some("creator"),
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if current_element.is_some() {
                    buf_text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if current_element.is_some() {
                    let entity = String::from_utf8_lossy(e.as_ref());
                    let resolved = match entity.as_ref() {
                        "apos" => "'",
                        "quot" => "\"",
                        "lt" => "<",
                        "gt" => ">",
                        "amp" => "&",
                        _ => "",
                    };
                    buf_text.push_str(resolved);
                }
            }
            Ok(Event::End(_)) => {
                match current_element.take() {
                    Some("title") if !buf_text.is_empty() => {
                        metadata.title = Some(buf_text.clone());
                    }
                    Some("creator") if !buf_text.is_empty() => {
                        metadata.author = Some(buf_text.clone());
                    }
                    _ => {}
                }
                buf_text.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
    }

    Ok(metadata)
}

fn read_archive_file<R: Read + Seek>(archive: &mut ZipArchive<R>, path: &str) -> Result<String> {
    let mut file = archive.by_name(path)?;
    let mut contents = Vec::new();
    file.read_to_end(&mut contents)?;
    Ok(String::from_utf8(contents)?)
}

/// Attribute value by local name, decoded to an owned string.
fn attr_value(element: &BytesStart, name: &[u8]) -> Result<Option<String>> {
    for attr in element.attributes().flatten() {
        if local_name(attr.key.as_ref()) == name {
            return Ok(Some(String::from_utf8(attr.value.to_vec())?));
        }
    }
    Ok(None)
}

/// WordprocessingML boolean properties default to true; `w:val` of `0`,
/// `false`, or `none` turns them off.
fn bool_attr(element: &BytesStart) -> Result<bool> {
    match attr_value(element, b"val")? {
        Some(value) => Ok(!matches!(value.as_str(), "0" | "false" | "none")),
        None => Ok(true),
    }
}

/// Extract local name from a potentially namespaced XML name.
fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .rposition(|&b| b == b':')
        .map(|i| &name[i + 1..])
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_name() {
        assert_eq!(local_name(b"w:p"), b"p");
        assert_eq!(local_name(b"p"), b"p");
        assert_eq!(local_name(b"cp:coreProperties"), b"coreProperties");
    }

    #[test]
    fn test_parse_styled_paragraphs() {
        let xml = r#"<w:document xmlns:w="x"><w:body>
            <w:p><w:pPr><w:pStyle w:val="Title"/></w:pPr><w:r><w:t>My Title</w:t></w:r></w:p>
            <w:p><w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve">Bold: </w:t></w:r><w:r><w:t>rest</w:t></w:r></w:p>
            <w:p/>
        </w:body></w:document>"#;

        let blocks = parse_document_xml(xml).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], Block::Title("My Title".to_string()));
        assert_eq!(
            blocks[1],
            Block::Paragraph(vec![Span::bold("Bold: "), Span::plain("rest")])
        );
        assert_eq!(blocks[2], Block::Blank);
    }

    #[test]
    fn test_parse_bold_val_off() {
        let xml = r#"<w:body><w:p><w:r><w:rPr><w:b w:val="0"/></w:rPr><w:t>not bold</w:t></w:r></w:p></w:body>"#;
        let blocks = parse_document_xml(xml).unwrap();
        assert_eq!(blocks, vec![Block::Paragraph(vec![Span::plain("not bold")])]);
    }

    #[test]
    fn test_adjacent_same_state_runs_merge() {
        let xml = r#"<w:body><w:p><w:r><w:t>one </w:t></w:r><w:r><w:t>two</w:t></w:r></w:p></w:body>"#;
        let blocks = parse_document_xml(xml).unwrap();
        assert_eq!(blocks, vec![Block::Paragraph(vec![Span::plain("one two")])]);
    }

    #[test]
    fn test_parse_list_item() {
        let xml = r#"<w:body><w:p><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr><w:r><w:t>bullet</w:t></w:r></w:p></w:body>"#;
        let blocks = parse_document_xml(xml).unwrap();
        assert_eq!(blocks, vec![Block::ListItem(vec![Span::plain("bullet")])]);
    }

    #[test]
    fn test_parse_table_with_header() {
        let xml = r#"<w:body><w:tbl>
            <w:tr><w:tc><w:tcPr><w:shd w:val="clear" w:fill="E5E5E5"/></w:tcPr><w:p><w:r><w:t>H1</w:t></w:r></w:p></w:tc></w:tr>
            <w:tr><w:tc><w:p><w:r><w:t>a</w:t></w:r></w:p></w:tc></w:tr>
        </w:tbl></w:body>"#;
        let blocks = parse_document_xml(xml).unwrap();
        let Block::Table(table) = &blocks[0] else {
            panic!("expected table");
        };
        assert_eq!(table.headers, vec!["H1"]);
        assert_eq!(table.rows, vec![vec!["a".to_string()]]);
    }

    #[test]
    fn test_entity_references_resolved() {
        let xml = r#"<w:body><w:p><w:r><w:t>Don&apos;t &amp; won&apos;t</w:t></w:r></w:p></w:body>"#;
        let blocks = parse_document_xml(xml).unwrap();
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![Span::plain("Don't & won't")])]
        );
    }
}
