use clap::{Parser, ValueEnum};
use csspreview_lib::css_preview;
use csspreview_lib::editor::active_document::{
    char_offset_to_byte, line_column_to_byte, utf16_offset_to_byte,
};
use csspreview_lib::{ActiveDocument, DocumentId, PreviewConfig};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CSSPREVIEW_INTRO: &str = r#"
      ___ ___ ___   ___                 _
     / __/ __/ __| | _ \_ _ _____ _(_)_____ __ __
    | (__\__ \__ \ |  _/ '_/ -_) V / / -_) V  V /
     \___|___/___/ |_| |_| \___|\_/|_\___|\_/\_/

    Preview the CSS rule under your cursor.
"#;

#[derive(Error, Debug)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// How `--offset` counts positions in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OffsetUnit {
    Byte,
    Char,
    Utf16,
}

#[derive(Parser, Debug)]
#[command(name = "csspreview")]
#[command(about = "Render an HTML preview of the CSS rule at a cursor position")]
struct Args {
    /// Style sheet to read.
    input: PathBuf,

    /// Cursor offset into the file.
    #[arg(short = 'O', long, default_value_t = 0, conflicts_with = "line")]
    offset: usize,

    /// Unit of --offset.
    #[arg(long, value_enum, default_value_t = OffsetUnit::Utf16)]
    unit: OffsetUnit,

    /// Cursor line, 1-based.
    #[arg(long, requires = "column")]
    line: Option<usize>,

    /// Cursor column in characters, 1-based.
    #[arg(long, requires = "line")]
    column: Option<usize>,

    /// Where to write the HTML. Defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Language id of the document. Defaults to the file extension.
    #[arg(long)]
    language: Option<String>,

    /// Custom property whose value becomes the preview element's markup.
    #[arg(long, default_value = "--text", allow_hyphen_values = true)]
    content_property: String,

    /// Do not print the banner.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();

    // parse the args given in terminal
    let args: Args = Args::parse();

    if !args.quiet {
        eprintln!("{}", CSSPREVIEW_INTRO);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let text = fs::read_to_string(&args.input).map_err(|source| CliError::Read {
        path: args.input.clone(),
        source,
    })?;
    debug!("read {} bytes from {}", text.len(), args.input.display());

    let cursor = resolve_cursor(args, &text);
    let language = args
        .language
        .clone()
        .unwrap_or_else(|| language_from_path(&args.input));
    let config = PreviewConfig::default().with_content_property(args.content_property.clone());
    let document = ActiveDocument::new(DocumentId(0), language, text, cursor);

    let html = css_preview::generate(Some(&document), &config);

    match &args.output {
        Some(path) => {
            fs::write(path, html).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            info!("preview written to {}", path.display());
        }
        None => print!("{}", html),
    }
    Ok(())
}

/// Byte offset of the cursor described by the arguments.
fn resolve_cursor(args: &Args, text: &str) -> usize {
    if let (Some(line), Some(column)) = (args.line, args.column) {
        return line_column_to_byte(text, line, column);
    }
    match args.unit {
        OffsetUnit::Byte => args.offset.min(text.len()),
        OffsetUnit::Char => char_offset_to_byte(text, args.offset),
        OffsetUnit::Utf16 => utf16_offset_to_byte(text, args.offset),
    }
}

/// Language id guessed from the file extension, lowercased.
fn language_from_path(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default()
}
