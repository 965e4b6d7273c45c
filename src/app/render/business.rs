use chrono::NaiveDate;
use serde::Serialize;

use crate::adapters::MarkdownTemplates;
use crate::adapters::templates::BUSINESS_WHITEPAPER;
use crate::domain::labels::{leading_percentage, timeline_upper_bound};
use crate::domain::{AppError, Document, Paragraph, WhitepaperConfig};

/// Level-two headings of the Markdown business whitepaper, in order.
pub const BUSINESS_SECTIONS: [&str; 8] = [
    "EXECUTIVE SUMMARY",
    "THE BUSINESS CHALLENGE",
    "THE MIZ OKI 3.0™ SOLUTION",
    "USE CASES & APPLICATIONS",
    "COMPETITIVE ADVANTAGES",
    "IMPLEMENTATION & ROI",
    "TECHNICAL SPECIFICATIONS",
    "NEXT STEPS",
];

pub(super) const PATENT_NOTICE: &str = "Protected under U.S. Provisional Patent Application No. 63/456,789 (filed May 26, 2025), covering E-SHKG, Causal GraphRAG, ADCs, S-R-D-A-L cycle, and multi-agent orchestration. Updated as of July 11, 2025, incorporating agentic AI trends from Gartner's 2025 Hype Cycle.";

pub(super) const FOOTER: &str = "© 2025 Media Intelligence Inc. All rights reserved. MIZ OKI 3.0™ is a trademark of Media Intelligence Inc.";

const CHALLENGE_POINTS: [&str; 7] = [
    "Business data doubles every 12 months",
    "Critical decisions still require days to weeks",
    "73% of executives report decision fatigue",
    "$62B annual cost of delayed decisions (Fortune 500)",
    "87% of AI projects never reach production",
    "Average 18-24 month implementation timeline",
    "$5-15M typical infrastructure investment",
];

#[derive(Serialize)]
struct MarkdownContext<'a> {
    #[serde(flatten)]
    record: &'a WhitepaperConfig,
    published: String,
    timeline_upper_bound: &'a str,
    roi_headline: &'a str,
}

pub(super) fn markdown(
    templates: &MarkdownTemplates,
    record: &WhitepaperConfig,
    today: NaiveDate,
) -> Result<String, AppError> {
    let ctx = MarkdownContext {
        record,
        published: today.format("%B %Y").to_string(),
        timeline_upper_bound: timeline_upper_bound(record.implementation_timeline),
        roi_headline: record.roi_metrics.first().map_or("", |metric| leading_percentage(metric)),
    };
    templates.render(BUSINESS_WHITEPAPER, ctx)
}

pub(super) fn document(record: &WhitepaperConfig) -> Document {
    let timeline = record.implementation_timeline;
    let upper_bound = timeline_upper_bound(timeline);
    let roi_headline = record.roi_metrics.first().map_or("", |metric| leading_percentage(metric));

    let mut doc = Document::new();

    doc.centered_heading(1, record.title).centered_heading(2, record.subtitle);

    doc.heading(3, "Patent Notice").paragraph(PATENT_NOTICE);

    doc.heading(2, "Executive Summary").paragraph(record.executive_summary);
    doc.heading(3, "Key Benefits").bullets(record.key_benefits.iter().copied());
    doc.heading(3, "ROI Metrics").bullets(record.roi_metrics.iter().copied());

    doc.heading(3, "Traditional AI vs. MIZ OKI 3.0™").table(
        ["Metric", "Traditional AI", "MIZ OKI 3.0™"],
        &[
            ["Deployment Time", "18-24 months", timeline],
            ["Infrastructure Cost", "$5-15M CapEx investment", "$0 CapEx, usage-based pricing"],
            ["Decision Accuracy", "67% correlation-based", "89% causal reasoning"],
            ["Autonomy Level", "Manual intervention required", "94% autonomous decisions"],
            ["Success Rate", "67% project failure rate", "98% deployment success"],
        ],
    );

    doc.heading(2, "The Business Challenge")
        .paragraph(
            "Modern organizations face an unprecedented intelligence crisis that threatens their competitive survival:",
        )
        .bullets(CHALLENGE_POINTS);

    doc.heading(2, "Core Technology Components")
        .bullets(record.technology_features.iter().copied());

    doc.heading(2, "Use Cases & Applications");
    for (index, use_case) in record.use_cases.iter().enumerate() {
        doc.heading(3, format!("{}. {}", index + 1, use_case.title))
            .paragraph(use_case.description);
    }

    doc.heading(2, "Competitive Advantages")
        .bullets(record.competitive_advantages.iter().copied());

    doc.heading(2, "Implementation Process")
        .paragraph(format!("Rapid deployment in {timeline}:"))
        .numbered([
            "Assessment Phase (Day 1-2): Current state analysis and goal setting".to_string(),
            "Integration Phase (Day 3-5): Platform integration with existing systems".to_string(),
            "Configuration Phase (Day 6-8): Industry template customization".to_string(),
            format!("Go-Live Phase (Day 9-{upper_bound}): Full autonomous operation"),
        ]);

    doc.heading(2, "Financial Impact & ROI")
        .paragraph("Expected return on investment:")
        .paragraph(format!(
            "Year 1: {roi_headline}% ROI\n\
             Payback Period: 6-12 months\n\
             3-Year NPV: $50M+ (for $100M revenue organizations)\n\
             Implementation Cost: $0 CapEx (PaaS model)\n\
             Operational Savings: 60-78% efficiency improvement"
        ));

    doc.heading(2, "Next Steps").numbered([
        "Schedule Discovery Call: 30-minute assessment of your specific needs".to_string(),
        "Proof of Concept: 2-week pilot with your actual data".to_string(),
        format!("Full Deployment: Complete implementation in {timeline}"),
        "Ongoing Optimization: Continuous improvement and expansion".to_string(),
    ]);

    doc.heading(2, "Contact Information").paragraph(
        "Media Intelligence Inc.\n\
         Email: contact@mediaintelligence.ai\n\
         Phone: +1 (555) MIZ-OKI3\n\
         Website: www.mizoki.ai",
    );

    doc.heading(3, "Visual Placeholders").paragraph(
        "[VISUAL PLACEHOLDER 1]: Infographic comparing Traditional vs. MIZ OKI decision processes.\n\
         [VISUAL PLACEHOLDER 2]: E-SHKG architecture diagram with data flows and agent orchestration.\n\
         [VISUAL PLACEHOLDER 3]: ROI timeline chart showing payback progression.",
    );

    doc.blank().paragraph(Paragraph::from(FOOTER).centered());
    doc
}
