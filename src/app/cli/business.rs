use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::{FormatArg, default_workspace, open_workspace, print_report};
use crate::app::commands::business::{self, BusinessOptions};
use crate::domain::{AppError, BusinessVariant};

#[derive(Args)]
pub(super) struct BusinessArgs {
    /// Industry catalog key
    #[arg(
        short,
        long,
        default_value = "general_business",
        value_parser = ["healthcare", "media_buying", "general_business"]
    )]
    industry: String,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Word)]
    format: FormatArg,
    /// Whitepaper type
    #[arg(short = 't', long = "type", value_enum, default_value_t = VariantArg::Business)]
    variant: VariantArg,
    /// Workspace directory
    #[arg(short, long, default_value_os_t = default_workspace())]
    workspace: PathBuf,
    /// Print the generation report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    Business,
    Technical,
    Premium,
}

impl From<VariantArg> for BusinessVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Business => BusinessVariant::Business,
            VariantArg::Technical => BusinessVariant::Technical,
            VariantArg::Premium => BusinessVariant::Premium,
        }
    }
}

pub(super) fn run_business(args: BusinessArgs) -> Result<i32, AppError> {
    let ctx = open_workspace(&args.workspace)?;
    let options = BusinessOptions {
        industry: args.industry,
        format: args.format.into(),
        variant: args.variant.into(),
    };
    let report = business::execute(&ctx, &options)?;
    print_report(&report, args.json)
}
