//! CLI Adapter.

mod business;
mod technical;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use crate::adapters::{FilesystemArtifactStore, SystemClock};
use crate::app::api::GenerationReport;
use crate::app::{AppContext, api, logging};
use crate::domain::{AppError, OutputFormat};

#[derive(Parser)]
#[command(name = "wpgen")]
#[command(version)]
#[command(about = "Generate MIZ OKI 3.0™ whitepapers and technical documentation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an industry whitepaper, or the fixed premium/technical documents
    #[clap(visible_alias = "b")]
    Business(business::BusinessArgs),
    /// Generate the technical whitepaper, API reference and deployment guide
    #[clap(visible_alias = "t")]
    Technical(technical::TechnicalArgs),
}

/// Output kind selector shared by both generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    #[value(alias = "text", alias = "md")]
    Markdown,
    #[value(alias = "document", alias = "docx")]
    Word,
    Both,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Word => OutputFormat::Word,
            FormatArg::Both => OutputFormat::Both,
        }
    }
}

pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Business(args) => business::run_business(args),
        Commands::Technical(args) => technical::run_technical(args),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Open the workspace and install logging at the configured level.
fn open_workspace(
    workspace: &Path,
) -> Result<AppContext<FilesystemArtifactStore, SystemClock>, AppError> {
    let ctx = api::open(workspace)?;
    logging::init(ctx.config().logging.level_filter()?);
    Ok(ctx)
}

fn print_report(report: &GenerationReport, json: bool) -> Result<i32, AppError> {
    for warning in &report.warnings {
        eprintln!("Warning: {}", warning);
    }

    if json {
        let rendered = serde_json::to_string_pretty(report).map_err(std::io::Error::from)?;
        println!("{}", rendered);
    } else {
        println!("Generated {} files:", report.files.len());
        for path in &report.files {
            println!("  - {}", path.display());
        }
    }
    Ok(0)
}

fn default_workspace() -> PathBuf {
    PathBuf::from(".")
}
