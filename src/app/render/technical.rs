use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::adapters::MarkdownTemplates;
use crate::adapters::templates::{API_REFERENCE, DEPLOYMENT_GUIDE, TECHNICAL_WHITEPAPER};
use crate::domain::{AppError, TechWhitepaperConfig};

/// Days between generation and the "Next Review" date in the document control block.
const REVIEW_INTERVAL_DAYS: u64 = 90;

#[derive(Serialize)]
struct WhitepaperContext<'a> {
    #[serde(flatten)]
    config: &'a TechWhitepaperConfig,
    last_updated: String,
    next_review: String,
    certification_date: String,
}

pub(super) fn whitepaper(
    templates: &MarkdownTemplates,
    config: &TechWhitepaperConfig,
    today: NaiveDate,
) -> Result<String, AppError> {
    let next_review = today.checked_add_days(Days::new(REVIEW_INTERVAL_DAYS)).unwrap_or(today);
    let ctx = WhitepaperContext {
        config,
        last_updated: today.format("%B %Y").to_string(),
        next_review: next_review.format("%B %Y").to_string(),
        certification_date: today.format("%Y-%m-%d").to_string(),
    };
    templates.render(TECHNICAL_WHITEPAPER, ctx)
}

pub(super) fn api_reference(
    templates: &MarkdownTemplates,
    config: &TechWhitepaperConfig,
) -> Result<String, AppError> {
    templates.render(API_REFERENCE, config)
}

pub(super) fn deployment_guide(
    templates: &MarkdownTemplates,
    config: &TechWhitepaperConfig,
) -> Result<String, AppError> {
    templates.render(DEPLOYMENT_GUIDE, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::core_architecture;

    const TOC: [&str; 11] = [
        "ARCHITECTURE OVERVIEW",
        "CORE COMPONENTS",
        "PERFORMANCE SPECIFICATIONS",
        "SECURITY ARCHITECTURE",
        "INTEGRATION METHODS",
        "DEPLOYMENT OPTIONS",
        "SCALABILITY & PERFORMANCE",
        "API DOCUMENTATION",
        "COMPLIANCE & STANDARDS",
        "TROUBLESHOOTING GUIDE",
        "TECHNICAL SUPPORT",
    ];

    fn render_whitepaper(today: NaiveDate) -> String {
        let templates = MarkdownTemplates::embedded().expect("templates");
        whitepaper(&templates, core_architecture(), today).expect("render")
    }

    fn july() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 12).expect("valid date")
    }

    #[test]
    fn whitepaper_sections_follow_table_of_contents() {
        let text = render_whitepaper(july());
        let positions: Vec<_> = TOC
            .iter()
            .map(|section| {
                let heading = format!("\n## {section}\n");
                assert_eq!(text.matches(&heading).count(), 1, "{section}");
                text.find(&heading).unwrap_or(usize::MAX)
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(text.contains("11. [Technical Support](#technical-support)\n"));
    }

    #[test]
    fn whitepaper_dates_follow_generation_day() {
        let text = render_whitepaper(july());
        assert!(text.contains("**Last Updated:** July 2025  \n"));
        assert!(text.contains("- **Next Review**: October 2025\n"));
        assert!(text.contains("| SOC 2 Type II | ✅ Certified | 2025-07-12 |\n"));
    }

    #[test]
    fn review_date_rolls_over_the_year() {
        let today = NaiveDate::from_ymd_opt(2025, 11, 15).expect("valid date");
        let text = render_whitepaper(today);
        assert!(text.contains("- **Next Review**: February 2026\n"));
    }

    #[test]
    fn component_documentation_is_rendered_from_the_record() {
        let text = render_whitepaper(july());
        assert!(text.contains("### Autonomous Decision Controllers (ADCs)\n\n**Description:**"));
        assert!(text.contains("- **Processing Capacity**: "));
        assert!(text.contains("**Dependencies:**\nE-SHKG, Message Bus, Decision Engine\n"));
        assert!(text.contains("- **POST** `/adc/decision` - Submit decision request\n"));
        assert!(text.contains("| Decision Latency | P50: 5ms, P95: 25ms, P99: 50ms |\n"));
        assert!(text.contains("| Horizontal Scaling |"));
    }

    #[test]
    fn api_groups_are_title_cased() {
        let text = render_whitepaper(july());
        for heading in ["### Authentication APIs", "### Decisions APIs", "### Analytics APIs", "### Administration APIs"] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert!(text.contains("---\n\n### Rate Limiting\n"));
    }

    #[test]
    fn api_reference_contains_every_endpoint() {
        let templates = MarkdownTemplates::embedded().expect("templates");
        let config = core_architecture();
        let text = api_reference(&templates, config).expect("render");

        assert!(text.starts_with("# MIZ OKI 3.0™ API Reference\n## Version 3.0.1\n"));
        for group in config.api_documentation {
            for endpoint in group.endpoints {
                let line = format!("- **{}** `{}` - {}\n", endpoint.method, endpoint.path, endpoint.description);
                assert!(text.contains(&line), "missing {line}");
            }
        }
        assert!(text.contains("---\n\n## Response Formats\n"));
        assert!(text.contains("  -d '{\"username\":\"your-username\",\"password\":\"your-password\"}'\n"));
    }

    #[test]
    fn deployment_guide_lists_options_and_version() {
        let templates = MarkdownTemplates::embedded().expect("templates");
        let config = core_architecture();
        let text = deployment_guide(&templates, config).expect("render");

        for option in config.deployment_options {
            assert!(text.contains(&format!("### {}\n\n**Description:** {}", option.option, option.description)));
        }
        assert!(text.contains("---\n\n## Prerequisites\n"));
        assert!(text.contains("  --set global.imageTag=\"3.0.1\" \\\n"));
    }
}
