use std::io::{Seek, Write};
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::document::{Block, Document, Span, Table};
use crate::error::Result;

use super::theme::{ParagraphStyle, Theme};

/// Write a [`Document`] to a DOCX file on disk.
///
/// Creates a valid WordprocessingML package with the document body, a style
/// sheet and bullet numbering generated from the [`Theme`], and core
/// properties from the document metadata.
///
/// # Example
///
/// ```no_run
/// use mdocx::{parse_markdown, write_docx, Theme};
///
/// let doc = parse_markdown("# Title\n\n**Bold:** text");
/// write_docx(&doc, &Theme::default(), "output.docx")?;
/// # Ok::<(), mdocx::Error>(())
/// ```
pub fn write_docx<P: AsRef<Path>>(document: &Document, theme: &Theme, path: P) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_docx_to_writer(document, theme, file)
}

/// Write a [`Document`] to any [`Write`] + [`Seek`] destination.
///
/// Useful for writing to memory buffers or network streams.
pub fn write_docx_to_writer<W: Write + Seek>(
    document: &Document,
    theme: &Theme,
    writer: W,
) -> Result<()> {
    let mut zip = ZipWriter::new(writer);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(CONTENT_TYPES_XML.as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(ROOT_RELS_XML.as_bytes())?;

    zip.start_file("docProps/core.xml", options)?;
    zip.write_all(generate_core(document).as_bytes())?;

    zip.start_file("word/document.xml", options)?;
    zip.write_all(generate_document(document, theme).as_bytes())?;

    zip.start_file("word/_rels/document.xml.rels", options)?;
    zip.write_all(DOCUMENT_RELS_XML.as_bytes())?;

    zip.start_file("word/styles.xml", options)?;
    zip.write_all(generate_styles(theme).as_bytes())?;

    zip.start_file("word/numbering.xml", options)?;
    zip.write_all(generate_numbering(theme).as_bytes())?;

    zip.finish()?;
    Ok(())
}

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
</Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
</Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/>
</Relationships>"#;

fn generate_core(document: &Document) -> String {
    let mut core = String::new();

    core.push_str(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/">
"#,
    );

    if let Some(title) = document.title() {
        core.push_str(&format!("  <dc:title>{}</dc:title>\n", escape_xml(title)));
    }
    if let Some(ref author) = document.metadata.author {
        core.push_str(&format!(
            "  <dc:creator>{}</dc:creator>\n",
            escape_xml(author)
        ));
    }

    core.push_str("</cp:coreProperties>\n");
    core
}

fn generate_document(document: &Document, theme: &Theme) -> String {
    let mut body = String::new();

    for block in &document.blocks {
        match block {
            Block::Title(text) => push_styled_paragraph(&mut body, "Title", text),
            Block::Heading { level, text } => {
                let style = if *level <= 1 { "Heading1" } else { "Heading2" };
                push_styled_paragraph(&mut body, style, text);
            }
            Block::Paragraph(spans) => push_paragraph(&mut body, spans),
            Block::Blank => body.push_str("    <w:p/>\n"),
            Block::ListItem(spans) => push_list_item(&mut body, spans),
            Block::Table(table) => push_table(&mut body, table, theme),
        }
    }

    let margin = theme.page_margin;
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
{body}    <w:sectPr>
      <w:pgSz w:w="12240" w:h="15840"/>
      <w:pgMar w:top="{margin}" w:right="{margin}" w:bottom="{margin}" w:left="{margin}"/>
    </w:sectPr>
  </w:body>
</w:document>
"#
    )
}

fn push_styled_paragraph(body: &mut String, style: &str, text: &str) {
    body.push_str(&format!(
        "    <w:p><w:pPr><w:pStyle w:val=\"{}\"/></w:pPr>{}</w:p>\n",
        style,
        run(text, false)
    ));
}

fn push_paragraph(body: &mut String, spans: &[Span]) {
    body.push_str("    <w:p>");
    for span in spans {
        body.push_str(&run(&span.text, span.bold));
    }
    body.push_str("</w:p>\n");
}

fn push_list_item(body: &mut String, spans: &[Span]) {
    body.push_str(
        "    <w:p><w:pPr><w:numPr><w:ilvl w:val=\"0\"/><w:numId w:val=\"1\"/></w:numPr></w:pPr>",
    );
    for span in spans {
        body.push_str(&run(&span.text, span.bold));
    }
    body.push_str("</w:p>\n");
}

fn push_table(body: &mut String, table: &Table, theme: &Theme) {
    let edge = format!(
        "w:val=\"single\" w:sz=\"4\" w:color=\"{}\"",
        escape_xml(&theme.table_border_color)
    );
    let border = format!(
        "<w:top {edge}/><w:left {edge}/><w:bottom {edge}/><w:right {edge}/><w:insideH {edge}/><w:insideV {edge}/>"
    );

    body.push_str(&format!(
        "    <w:tbl><w:tblPr><w:tblW w:w=\"5000\" w:type=\"pct\"/><w:tblBorders>{border}</w:tblBorders></w:tblPr>\n"
    ));

    if !table.headers.is_empty() {
        body.push_str("      <w:tr>");
        for header in &table.headers {
            body.push_str(&format!(
                "<w:tc><w:tcPr><w:shd w:val=\"clear\" w:fill=\"{}\"/></w:tcPr><w:p>{}</w:p></w:tc>",
                escape_xml(&theme.table_header_fill),
                run(header, true)
            ));
        }
        body.push_str("</w:tr>\n");
    }

    for row in &table.rows {
        body.push_str("      <w:tr>");
        for cell in row {
            body.push_str(&format!("<w:tc><w:p>{}</w:p></w:tc>", run(cell, false)));
        }
        body.push_str("</w:tr>\n");
    }

    body.push_str("    </w:tbl>\n");
}

fn run(text: &str, bold: bool) -> String {
    let props = if bold { "<w:rPr><w:b/></w:rPr>" } else { "" };
    format!(
        "<w:r>{}<w:t xml:space=\"preserve\">{}</w:t></w:r>",
        props,
        escape_xml(text)
    )
}

fn generate_styles(theme: &Theme) -> String {
    let mut styles = String::new();

    styles.push_str(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
"#,
    );

    styles.push_str(&format!(
        "  <w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\"/><w:sz w:val=\"{size}\"/></w:rPr></w:rPrDefault></w:docDefaults>\n",
        font = escape_xml(&theme.font),
        size = theme.body_size
    ));

    styles.push_str(
        "  <w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"Normal\"><w:name w:val=\"Normal\"/><w:qFormat/></w:style>\n",
    );

    push_paragraph_style(&mut styles, theme, "Title", &theme.title, None);
    push_paragraph_style(&mut styles, theme, "Heading1", &theme.heading1, Some(0));
    push_paragraph_style(&mut styles, theme, "Heading2", &theme.heading2, Some(1));

    styles.push_str("</w:styles>\n");
    styles
}

fn push_paragraph_style(
    styles: &mut String,
    theme: &Theme,
    id: &str,
    style: &ParagraphStyle,
    outline_level: Option<u8>,
) {
    styles.push_str(&format!(
        "  <w:style w:type=\"paragraph\" w:styleId=\"{id}\"><w:name w:val=\"{id}\"/><w:basedOn w:val=\"Normal\"/><w:qFormat/><w:pPr>"
    ));
    styles.push_str(&format!(
        "<w:spacing w:before=\"{}\" w:after=\"{}\"/>",
        style.spacing_before, style.spacing_after
    ));
    if style.centered {
        styles.push_str("<w:jc w:val=\"center\"/>");
    }
    if let Some(level) = outline_level {
        styles.push_str(&format!("<w:outlineLvl w:val=\"{level}\"/>"));
    }
    styles.push_str("</w:pPr><w:rPr>");
    styles.push_str(&format!(
        "<w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\"/>",
        font = escape_xml(&theme.font)
    ));
    if style.bold {
        styles.push_str("<w:b/>");
    }
    styles.push_str(&format!("<w:sz w:val=\"{}\"/>", style.size));
    styles.push_str("</w:rPr></w:style>\n");
}

fn generate_numbering(theme: &Theme) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:abstractNum w:abstractNumId="0">
    <w:lvl w:ilvl="0">
      <w:numFmt w:val="bullet"/>
      <w:lvlText w:val="{bullet}"/>
      <w:lvlJc w:val="left"/>
      <w:pPr><w:ind w:left="{indent}" w:hanging="{hanging}"/></w:pPr>
    </w:lvl>
  </w:abstractNum>
  <w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>
</w:numbering>
"#,
        bullet = "\u{2022}",
        indent = theme.list_indent,
        hanging = theme.list_hanging
    )
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
