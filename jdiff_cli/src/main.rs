use anyhow::Context;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use clap::{Parser, Subcommand};
use jdiff_common::{load_config, ClipboardWrite, DiffEntry, DiffSummary, JdiffError};
use jdiff_core::{normalize, CompareSession, DiffRenderer};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

#[derive(Parser)]
#[command(name = "jdiff")]
#[command(author = "JDiff Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Structural JSON comparison utility", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two JSON documents structurally
    Compare {
        /// Left JSON file path
        left: PathBuf,

        /// Right JSON file path
        right: PathBuf,

        /// Output the diff as JSON
        #[arg(long)]
        json: bool,

        /// Output the two-column HTML display form instead of unified text
        #[arg(long, conflicts_with = "json")]
        html: bool,

        /// Show only lines that differ
        #[arg(short = 'd', long)]
        diff_only: bool,

        /// Disable ANSI colors in output
        #[arg(long)]
        no_color: bool,

        /// Copy the unified diff to the terminal clipboard (OSC 52)
        #[arg(long)]
        copy: bool,
    },

    /// Print the canonical form of a JSON document
    Normalize {
        /// JSON file path
        file: PathBuf,

        /// Copy the canonical form to the terminal clipboard (OSC 52)
        #[arg(long)]
        copy: bool,
    },
}

/// Copies text into the hosting terminal's clipboard via the OSC 52
/// escape sequence, so it works across SSH without any display server.
struct Osc52Clipboard;

impl ClipboardWrite for Osc52Clipboard {
    fn write_text(&self, text: &str) -> Result<(), JdiffError> {
        let payload = BASE64.encode(text.as_bytes());
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "\x1b]52;c;{}\x07", payload)
            .and_then(|_| stdout.flush())
            .map_err(|e| JdiffError::Clipboard(e.to_string()))?;
        Ok(())
    }
}

#[derive(Serialize)]
struct CompareReport<'a> {
    left: String,
    right: String,
    summary: DiffSummary,
    entries: &'a [DiffEntry],
}

fn main() {
    // Initialize tracing to stderr (so JSON output can go cleanly to stdout)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Compare {
            left,
            right,
            json,
            html,
            diff_only,
            no_color,
            copy,
        } => run_compare(left, right, json, html, diff_only, no_color, copy),
        Commands::Normalize { file, copy } => run_normalize(file, copy),
    };

    match outcome {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(2);
        }
    }
}

fn run_compare(
    left: PathBuf,
    right: PathBuf,
    json: bool,
    html: bool,
    diff_only: bool,
    no_color: bool,
    copy: bool,
) -> anyhow::Result<i32> {
    let config = match load_config(false) {
        Ok(loaded) => loaded.config,
        Err(e) => {
            warn!("could not load config, using defaults: {}", e);
            Default::default()
        }
    };
    let diff_only = diff_only || config.diff_only;
    let no_color = no_color || config.no_color;

    let left_text = std::fs::read_to_string(&left)
        .with_context(|| format!("failed to read {}", left.display()))?;
    let right_text = std::fs::read_to_string(&right)
        .with_context(|| format!("failed to read {}", right.display()))?;

    let mut session = CompareSession::new();
    let result = session.compare(&left_text, &right_text)?;

    if json {
        let report = CompareReport {
            left: left.display().to_string(),
            right: right.display().to_string(),
            summary: result.summary(),
            entries: &result.entries,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if html {
        print!("{}", DiffRenderer::render_display(result));
    } else {
        let unified = DiffRenderer::render_unified(result);
        for line in unified.lines() {
            if diff_only && line.starts_with("  ") {
                continue;
            }
            println!("{}", colorize(line, no_color));
        }
    }

    if copy {
        Osc52Clipboard.write_text(&DiffRenderer::render_unified(result))?;
    }

    Ok(if result.has_differences() { 1 } else { 0 })
}

fn run_normalize(file: PathBuf, copy: bool) -> anyhow::Result<i32> {
    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let canonical = normalize(&text)
        .with_context(|| format!("failed to normalize {}", file.display()))?;
    print!("{canonical}");

    if copy {
        Osc52Clipboard.write_text(&canonical)?;
    }

    Ok(0)
}

fn colorize(line: &str, no_color: bool) -> String {
    if no_color {
        return line.to_string();
    }
    if line.starts_with("+ ") {
        format!("{GREEN}{line}{RESET}")
    } else if line.starts_with("- ") {
        format!("{RED}{line}{RESET}")
    } else {
        line.to_string()
    }
}
