//! Industry catalog for the business whitepaper generator.
//!
//! Every record is a `static` literal. The table is an exhaustive `match` over
//! [`Industry`], so a missing or duplicated selector is a compile error rather
//! than a runtime lookup failure.

mod industries;

use std::fmt;

use serde::Serialize;

/// A titled use case shown in the "Use Cases & Applications" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UseCase {
    pub title: &'static str,
    pub description: &'static str,
}

/// Literal content driving one business whitepaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WhitepaperConfig {
    pub title: &'static str,
    pub industry: &'static str,
    pub subtitle: &'static str,
    pub executive_summary: &'static str,
    pub key_benefits: &'static [&'static str],
    pub roi_metrics: &'static [&'static str],
    pub use_cases: &'static [UseCase],
    pub technology_features: &'static [&'static str],
    pub competitive_advantages: &'static [&'static str],
    pub implementation_timeline: &'static str,
    pub target_audience: &'static [&'static str],
}

/// Industries with a dedicated catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Industry {
    Healthcare,
    MediaBuying,
    GeneralBusiness,
}

impl Industry {
    /// All industries in catalog order.
    pub const ALL: [Industry; 3] =
        [Industry::Healthcare, Industry::MediaBuying, Industry::GeneralBusiness];

    /// Record used when a selector is not in the catalog.
    pub const DEFAULT: Industry = Industry::GeneralBusiness;

    /// Selector key, also used in generated filenames.
    pub fn key(&self) -> &'static str {
        match self {
            Industry::Healthcare => "healthcare",
            Industry::MediaBuying => "media_buying",
            Industry::GeneralBusiness => "general_business",
        }
    }

    /// Parse an industry from its selector key.
    pub fn from_key(key: &str) -> Option<Industry> {
        Industry::ALL.into_iter().find(|industry| industry.key() == key)
    }

    /// The catalog record for this industry.
    pub fn config(&self) -> &'static WhitepaperConfig {
        match self {
            Industry::Healthcare => &industries::HEALTHCARE,
            Industry::MediaBuying => &industries::MEDIA_BUYING,
            Industry::GeneralBusiness => &industries::GENERAL_BUSINESS,
        }
    }

    /// Resolve a selector key, falling back to [`Industry::DEFAULT`].
    ///
    /// Unknown selectors never fail.
    pub fn resolve(key: &str) -> Industry {
        Industry::from_key(key).unwrap_or_else(|| {
            tracing::debug!(
                selector = key,
                fallback = Industry::DEFAULT.key(),
                "Unknown industry selector, using default record"
            );
            Industry::DEFAULT
        })
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Look up the record for `key`, falling back to the default record.
pub fn lookup(key: &str) -> &'static WhitepaperConfig {
    Industry::resolve(key).config()
}
