use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

mod config;
mod output;

use config::Settings;
use doctext_ingest::Cleaner;
use output::ColorMode;

/// Extract plain text from a PDF, DOC/DOCX or TXT file and print it
#[derive(Parser, Debug)]
#[command(name = "doctext", version, about, long_about = None)]
struct Cli {
    /// Path to the PDF, DOC/DOCX or TXT file
    file_path: PathBuf,

    /// Treat only [0-9A-Za-z_] as word characters when cleaning (env: DOCTEXT_ASCII_ONLY)
    #[arg(long)]
    ascii_only: bool,

    /// Print the extracted text without cleaning it
    #[arg(long)]
    raw: bool,

    /// Write the text to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => return fail(&usage_message(&e), ColorMode::detect(false)),
    };

    let color = ColorMode::detect(cli.no_color);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&format!("{:#}", e), color),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::resolve(cli.ascii_only, cli.raw);
    let file_path = cli.file_path;

    if !file_path.exists() {
        anyhow::bail!("File {} does not exist", file_path.display());
    }

    let text = doctext_ingest::extract_text(&file_path)?;
    let text = if settings.clean {
        Cleaner::new(settings.char_class).clean(&text)
    } else {
        text
    };

    tracing::debug!(path = %file_path.display(), chars = text.len(), "extraction finished");

    let mut writer: Box<dyn Write> = if let Some(ref output_path) = cli.output {
        let file = std::fs::File::create(output_path)
            .with_context(|| format!("cannot create {}", output_path.display()))?;
        Box::new(file)
    } else {
        Box::new(std::io::stdout().lock())
    };
    output::write_text(&mut writer, &text)?;

    Ok(())
}

fn fail(message: &str, color: ColorMode) -> ExitCode {
    let mut stdout = std::io::stdout().lock();
    // Nothing more can be reported if stdout itself is gone
    let _ = output::print_error(&mut stdout, message, color);
    ExitCode::FAILURE
}

/// Collapse a clap parse error into one line for the `Error:` output.
fn usage_message(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let detail = rendered
        .lines()
        .take_while(|line| !line.starts_with("Usage:") && !line.starts_with("For more information"))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let detail = detail.trim_start_matches("error: ");
    format!("{} (usage: doctext [OPTIONS] <FILE_PATH>)", detail)
}

/// Logs go to stderr so stdout carries only the text or the `Error:` line.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
