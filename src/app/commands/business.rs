//! `wpgen business`: industry whitepapers and the fixed premium/technical documents.

use tracing::{debug, info};

use super::{GenerationReport, structured_enabled};
use crate::app::AppContext;
use crate::app::output::{
    BusinessLayout, business_filename, premium_filename, save, technical_filename, timestamp,
};
use crate::domain::{AppError, ArtifactKind, BusinessVariant, Industry, OutputFormat};
use crate::ports::{ArtifactStore, Clock};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessOptions {
    /// Industry selector. Unknown values fall back to the default record.
    pub industry: String,
    pub format: OutputFormat,
    pub variant: BusinessVariant,
}

impl Default for BusinessOptions {
    fn default() -> Self {
        Self {
            industry: Industry::DEFAULT.key().to_string(),
            format: OutputFormat::Word,
            variant: BusinessVariant::Business,
        }
    }
}

pub fn execute<S: ArtifactStore, C: Clock>(
    ctx: &AppContext<S, C>,
    options: &BusinessOptions,
) -> Result<GenerationReport, AppError> {
    let renderer = ctx.renderer();
    let mut report = GenerationReport::default();

    let industry = Industry::resolve(&options.industry);
    let record = industry.config();
    let has_markdown = options.variant.supports(ArtifactKind::Markdown);
    let word = structured_enabled(&renderer, options.format, has_markdown, &mut report)?;

    let layout = BusinessLayout::new(ctx.root(), &ctx.config().output);
    layout.create(ctx.store())?;

    let now = ctx.clock().now();
    let stamp = timestamp(now);
    info!(variant = %options.variant, industry = %industry, format = ?options.format, "generating whitepaper");

    for &kind in options.format.kinds() {
        if !options.variant.supports(kind) {
            report.warn(format!(
                "The {} whitepaper is only available as a Word document; no {} file was generated",
                options.variant, kind
            ));
            continue;
        }
        if kind == ArtifactKind::Word && !word {
            continue;
        }

        let rendered = renderer.business(options.variant, record, kind, now)?;
        let bytes = renderer.encode(&rendered)?;
        let filename = match options.variant {
            BusinessVariant::Business => business_filename(industry, &stamp, kind),
            BusinessVariant::Premium => premium_filename(&stamp),
            BusinessVariant::Technical => technical_filename(&stamp, kind),
        };
        debug!(%filename, %kind, "rendered");
        report.files.push(save(ctx.store(), &layout.output, &filename, &bytes)?);
    }

    Ok(report)
}
