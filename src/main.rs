//! mdocx - Markdown to Word converter

use std::process::ExitCode;

use clap::Parser;

use mdocx::{Block, Theme, read_docx, read_markdown, write_docx};

#[derive(Parser)]
#[command(name = "mdocx")]
#[command(version, about = "Markdown to Word (DOCX) converter", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdocx proposal.md proposal.docx       Convert markdown to DOCX
    mdocx --theme house.json in.md out.docx
    mdocx -i proposal.docx                Show document statistics")]
struct Cli {
    /// Input file (markdown, or DOCX with --info)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output DOCX file
    #[arg(value_name = "OUTPUT", required_unless_present = "info")]
    output: Option<String>,

    /// Show document statistics without converting
    #[arg(short, long)]
    info: bool,

    /// Document title metadata (defaults to the first title line)
    #[arg(long)]
    title: Option<String>,

    /// Theme configuration file (JSON)
    #[arg(long, value_name = "FILE")]
    theme: Option<String>,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.info {
        match show_info(&cli.input) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        let output = cli.output.as_deref().expect("output required");
        match convert(&cli, output) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        }
    }
}

fn show_info(path: &str) -> Result<(), String> {
    let document = read_docx(path).map_err(|e| e.to_string())?;

    println!("File: {path}");
    if let Some(title) = document.title() {
        println!("Title: {title}");
    }
    if let Some(ref author) = document.metadata.author {
        println!("Author: {author}");
    }

    let mut headings = 0;
    let mut paragraphs = 0;
    let mut list_items = 0;
    let mut tables = 0;
    for block in &document.blocks {
        match block {
            Block::Heading { .. } => headings += 1,
            Block::Paragraph(_) => paragraphs += 1,
            Block::ListItem(_) => list_items += 1,
            Block::Table(_) => tables += 1,
            Block::Title(_) | Block::Blank => {}
        }
    }
    println!("Headings: {headings}");
    println!("Paragraphs: {paragraphs}");
    println!("List items: {list_items}");
    println!("Tables: {tables}");

    Ok(())
}

fn convert(cli: &Cli, output: &str) -> Result<(), String> {
    let theme = match cli.theme {
        Some(ref path) => load_theme(path)?,
        None => Theme::default(),
    };

    let mut document = read_markdown(&cli.input).map_err(|e| e.to_string())?;
    if let Some(ref title) = cli.title {
        document.metadata.title = Some(title.clone());
    }

    write_docx(&document, &theme, output).map_err(|e| e.to_string())?;

    if !cli.quiet {
        println!("Document saved: {output}");
    }
    Ok(())
}

fn load_theme(path: &str) -> Result<Theme, String> {
    let data = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&data).map_err(|e| e.to_string())
}
