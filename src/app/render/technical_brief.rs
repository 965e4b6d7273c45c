use crate::domain::{Document, Run};

pub(super) const TITLE: &str = "MIZ OKI 3.0™ Technical Whitepaper: Patented Architecture for Agentic Business General Intelligence";

pub(super) const DATELINE: &str = "Date: July 11, 2025. Patent: U.S. Provisional No. 63/456,789 (May 26, 2025). Incorporates 2025 trends: Agentic AI (Gartner Hype Cycle), generative/explainable AI.";

pub(super) const EXECUTIVE_SUMMARY: &str = "MIZ OKI 3.0™ is a GCP-native PaaS with E-SHKG as cognitive core, enabling agentic autonomy. \
Tech highlights: Hybrid graph for 100B+ relationships, ADCs with mathematical scoring, \
Causal GraphRAG pipeline, MoE orchestration. Supports 10B+ entities, <100ms queries, \
>90% self-healing. Updated with agentic execution (IBM 2025 insights) and generative AI integration.";

pub(super) const ESHKG_CORE: &str = "- Hybrid Stack: TigerGraph (analytics), Neo4j AuraDB (operations, <100ms queries - Claim 6), \
Vertex AI (semantics, >99.5% resolution - Claim 2).\n\
- Scale: 100B+ relationships, 10B+ entities.\n\
- Self-Healing (Claim 3): >90% autonomous via structural/semantic/causal/temporal validation.";

pub(super) const MULTI_AGENT: &str = "- Research Agents: Gather intel (e.g., Competitive Intelligence Agent).\n\
- MoE: Specialists (Strategy, Creative, Channel) with Orchestrator Agent (learnable gating).\n\
- Integration: GCP Pub/Sub, Dataflow, BigQuery.";

pub(super) const ADC_FORMULAS: [&str; 5] = [
    "SENSE-ADC: Attention_Score = Impact × Uncertainty × Urgency",
    "REASON-ADC: Analysis_Depth = (Value × Reduction) / (Time × Cost)",
    "DECIDE-ADC: Strategy_Score = Σ(Weight × Probability × Value × Ethics)",
    "ACT-ADC: Deviation monitoring with rollbacks",
    "LEARN-ADC: Priority = Error × Impact × Gap",
];

/// Point size of formula runs.
pub(super) const FORMULA_SIZE: u8 = 10;
/// Point size of code listings.
pub(super) const CODE_SIZE: u8 = 9;

pub(super) const GRAPHRAG_PIPELINE: &str = "Pipeline: Query → E-SHKG Traversal → Evidence Retrieval → Temporal Modeling → \
Confounder Detection → Generation → Verification. Achieves 3-5× accuracy vs. correlations.";

pub(super) const SRDAL_SUMMARY: &str = "Detailed flow with E-SHKG orchestration. Agentic enhancements: Dynamic task routing, real-time feedback loops.";

pub(super) const SECURITY_SUMMARY: &str = "Quantum-resistant (CRYSTALS-Kyber), SOC2/GDPR/HIPAA, immutable audits. Federated learning for cross-tenant insights.";

/// Technical brief from the business generator. Content is fixed.
pub(super) fn document() -> Document {
    let mut doc = Document::new();

    doc.centered_heading(1, TITLE).paragraph(DATELINE);

    doc.heading(2, "Executive Summary").paragraph(EXECUTIVE_SUMMARY);

    doc.heading(2, "Chapter 1: System Architecture")
        .heading(3, "E-SHKG Core (Claim 1a)")
        .paragraph(ESHKG_CORE)
        .heading(3, "Multi-Agent Framework (Claim 1b, 8)")
        .paragraph(MULTI_AGENT);

    doc.heading(2, "Chapter 2: Autonomous Decision Controllers (ADCs)")
        .paragraph("Mathematical models (Claims 2-6):")
        .bullets(ADC_FORMULAS.map(|formula| Run::monospace(formula, FORMULA_SIZE)))
        .paragraph("Enhanced with generative AI for scenario simulation (2025 breakthrough).");

    doc.heading(2, "Chapter 3: Causal GraphRAG Engine (Claims 1d, 4)").paragraph(GRAPHRAG_PIPELINE);

    doc.heading(2, "Chapter 4: S-R-D-A-L Cycle Methodology (Claim 1c)").paragraph(SRDAL_SUMMARY);

    doc.heading(2, "Chapter 5: Security and Compliance").paragraph(SECURITY_SUMMARY);

    doc.heading(2, "Chapter 6: Performance and Benchmarks").paragraph(
        "- Velocity: 50-75× (Claim 5).\n\
         - Accuracy: 89% causal.\n\
         - ROI Projections: Based on simulations.",
    );

    doc.heading(2, "Appendices").paragraph(
        "- A: E-SHKG Deep Dive (code snippets for self-healing).\n\
         - B: Causal GraphRAG Pipeline (diagrams).\n\
         - C: Patent Mapping.",
    );

    doc.heading(3, "Appendix D: Code Example (Bid Optimization)").paragraph(Run::monospace(
        "def optimal_bid(prob, roas, pressure):\n    base = (prob * target_cpa) / roas\n    return base * (1 + pressure) * time_multiplier * inventory_multiplier",
        CODE_SIZE,
    ));

    doc.heading(2, "Conclusion").paragraph("MIZ OKI 3.0™ sets the 2025 standard for agentic BGI.");

    doc.heading(3, "Visual Placeholders").paragraph(
        "[VISUAL PLACEHOLDER 2]: E-SHKG architecture diagram.\n\
         [VISUAL PLACEHOLDER 3]: S-R-D-A-L cycle flow diagram.",
    );

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::Block;

    #[test]
    fn formulas_are_monospace_bullets() {
        let doc = document();
        let bullets = doc
            .blocks()
            .iter()
            .find_map(|block| match block {
                Block::BulletList(items) => Some(items),
                _ => None,
            })
            .expect("formula list");
        assert_eq!(bullets.len(), ADC_FORMULAS.len());
        for item in bullets {
            assert_eq!(item.runs[0].font, Some("Courier New"));
            assert_eq!(item.runs[0].size, Some(FORMULA_SIZE));
        }
    }

    #[test]
    fn code_listing_keeps_indentation() {
        let doc = document();
        let listing = doc
            .blocks()
            .iter()
            .find_map(|block| match block {
                Block::Paragraph(p) if p.text().starts_with("def optimal_bid") => Some(p),
                _ => None,
            })
            .expect("code listing");
        assert!(listing.text().contains("\n    base = (prob * target_cpa) / roas\n"));
        assert_eq!(listing.runs[0].size, Some(CODE_SIZE));
    }

    #[test]
    fn has_no_tables() {
        assert_eq!(document().tables().count(), 0);
    }
}
