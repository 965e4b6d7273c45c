//! `wpgen technical`: architecture whitepaper, API reference and deployment guide.

use tracing::{debug, info};

use super::{GenerationReport, structured_enabled};
use crate::app::AppContext;
use crate::app::output::{
    TechnicalLayout, api_reference_filename, datestamp, deployment_guide_filename, save,
    technical_filename, timestamp, validate_filename,
};
use crate::domain::{AppError, ArtifactKind, OutputFormat, TechnicalDocKind, core_architecture};
use crate::ports::{ArtifactStore, Clock};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechnicalOptions {
    pub kind: TechnicalDocKind,
    /// Applies to `whitepaper` and `all`. The API reference and deployment guide are Markdown only.
    pub format: OutputFormat,
    /// Filename override for the Markdown whitepaper of `whitepaper`.
    pub output: Option<String>,
}

pub fn execute<S: ArtifactStore, C: Clock>(
    ctx: &AppContext<S, C>,
    options: &TechnicalOptions,
) -> Result<GenerationReport, AppError> {
    if let Some(name) = &options.output {
        validate_filename(name)?;
    }

    let renderer = ctx.renderer();
    let config = core_architecture();
    let mut report = GenerationReport::default();

    let word = match options.kind {
        TechnicalDocKind::Whitepaper | TechnicalDocKind::All => {
            structured_enabled(&renderer, options.format, true, &mut report)?
        }
        TechnicalDocKind::Api | TechnicalDocKind::Deployment => {
            if options.format != OutputFormat::Markdown {
                debug!(kind = %options.kind, format = ?options.format, "format ignored, Markdown only");
            }
            false
        }
    };

    let layout = TechnicalLayout::new(ctx.root(), &ctx.config().output);
    layout.create(ctx.store())?;

    let now = ctx.clock().now();
    let stamp = timestamp(now);
    let date = datestamp(now);
    info!(kind = %options.kind, format = ?options.format, version = config.version, "generating technical documentation");

    let markdown = options.format.includes(ArtifactKind::Markdown);
    let store = ctx.store();

    match options.kind {
        TechnicalDocKind::Whitepaper => {
            if markdown {
                let filename = options
                    .output
                    .clone()
                    .unwrap_or_else(|| technical_filename(&stamp, ArtifactKind::Markdown));
                let rendered = renderer.technical_whitepaper(config, ArtifactKind::Markdown, now)?;
                report.files.push(save(store, &layout.output, &filename, &renderer.encode(&rendered)?)?);
            }
        }
        TechnicalDocKind::Api => {
            let rendered = renderer.api_reference(config)?;
            let filename = api_reference_filename(&date);
            report.files.push(save(store, &layout.api_docs, &filename, &renderer.encode(&rendered)?)?);
        }
        TechnicalDocKind::Deployment => {
            let rendered = renderer.deployment_guide(config)?;
            let filename = deployment_guide_filename(&date);
            report.files.push(save(store, &layout.deployment, &filename, &renderer.encode(&rendered)?)?);
        }
        TechnicalDocKind::All => {
            if markdown {
                let whitepaper = renderer.technical_whitepaper(config, ArtifactKind::Markdown, now)?;
                let filename = technical_filename(&stamp, ArtifactKind::Markdown);
                report.files.push(save(store, &layout.output, &filename, &renderer.encode(&whitepaper)?)?);

                let api = renderer.api_reference(config)?;
                let filename = api_reference_filename(&date);
                report.files.push(save(store, &layout.api_docs, &filename, &renderer.encode(&api)?)?);

                let guide = renderer.deployment_guide(config)?;
                let filename = deployment_guide_filename(&date);
                report.files.push(save(store, &layout.deployment, &filename, &renderer.encode(&guide)?)?);
            }
        }
    }

    if word {
        let rendered = renderer.technical_whitepaper(config, ArtifactKind::Word, now)?;
        let filename = technical_filename(&stamp, ArtifactKind::Word);
        report.files.push(save(store, &layout.output, &filename, &renderer.encode(&rendered)?)?);
    }

    Ok(report)
}
