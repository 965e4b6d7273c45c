use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::{FormatArg, default_workspace, open_workspace, print_report};
use crate::app::commands::technical::{self, TechnicalOptions};
use crate::domain::{AppError, TechnicalDocKind};

#[derive(Args)]
pub(super) struct TechnicalArgs {
    /// Type of documentation to generate
    #[arg(short = 't', long = "type", value_enum, default_value_t = KindArg::Whitepaper)]
    kind: KindArg,
    /// Output filename for the Markdown whitepaper
    #[arg(short, long)]
    output: Option<String>,
    /// Workspace directory
    #[arg(short, long, default_value_os_t = default_workspace())]
    workspace: PathBuf,
    /// Output format (whitepaper and all only)
    #[arg(short, long, value_enum, default_value_t = FormatArg::Markdown)]
    format: FormatArg,
    /// Print the generation report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Whitepaper,
    Api,
    Deployment,
    All,
}

impl From<KindArg> for TechnicalDocKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Whitepaper => TechnicalDocKind::Whitepaper,
            KindArg::Api => TechnicalDocKind::Api,
            KindArg::Deployment => TechnicalDocKind::Deployment,
            KindArg::All => TechnicalDocKind::All,
        }
    }
}

pub(super) fn run_technical(args: TechnicalArgs) -> Result<i32, AppError> {
    let ctx = open_workspace(&args.workspace)?;
    let options =
        TechnicalOptions { kind: args.kind.into(), format: args.format.into(), output: args.output };
    let report = technical::execute(&ctx, &options)?;
    print_report(&report, args.json)
}
