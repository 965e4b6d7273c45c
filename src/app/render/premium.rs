use crate::domain::Document;

use super::business::PATENT_NOTICE;

/// The premium whitepaper. Content is fixed and ignores the industry selector.
pub(super) fn document() -> Document {
    let mut doc = Document::new();

    doc.centered_heading(
        1,
        "MIZ OKI 3.0™: Autonomous Business General Intelligence Platform-as-a-Service",
    )
    .centered_heading(
        2,
        "Empowering Organizations with Causal, Agentic AI for Rapid Decision-Making in 2025 and Beyond",
    );

    doc.heading(3, "Patent Notice").paragraph(PATENT_NOTICE);

    doc.heading(2, "Executive Summary").paragraph(
        "In July 2025, with the global AI market at $391B and 97M AI-related jobs (Exploding Topics), \
         decision latency remains a $3.1T global cost (IDC). MIZ OKI 3.0™ delivers Business General \
         Intelligence (BGI) as a Platform-as-a-Service (PaaS) on Google Cloud, featuring the Enhanced \
         Self-Healing Knowledge Graph (E-SHKG) as a cognitive core and five Autonomous Decision \
         Controllers (ADCs) for agentic autonomy. Key benefits: 50-75× faster decisions, 89% causal \
         accuracy, >90% self-healing, 1,187% 3-year ROI. Now enhanced with agentic AI for dynamic \
         execution, federated learning across tenants, and healthcare templates. Applicable to media, \
         retail, manufacturing, finance, and healthcare (e.g., 342 lives saved annually in sepsis prevention).",
    );

    doc.heading(3, "Traditional vs. MIZ OKI 3.0™").table(
        ["Metric", "Traditional", "MIZ OKI 3.0™"],
        &[
            ["Deployment", "6-24 months", "2-8 weeks"],
            ["Cost", "$5-25M CapEx", "$0 CapEx, usage-based ($10K-$50K+/month)"],
            ["Accuracy", "67% correlation", "89% causal (3-5× better predictions)"],
            ["Autonomy", "Manual", "94% agentic decisions"],
        ],
    );

    doc.heading(2, "Chapter 1: The 2025 Decision Latency Crisis").paragraph(
        "Amid AI agent hype (IBM 2025 report), fragmentation across 137+ SaaS apps causes delays. \
         Costs: $12M quarterly losses in retail, $760B healthcare waste. Need for agentic BGI: \
         First-movers capture 47% more value.",
    );

    doc.heading(2, "Chapter 2: MIZ OKI 3.0™ Solution Overview")
        .heading(3, "Core Components")
        .paragraph(
            "- E-SHKG: Hybrid graph (TigerGraph/Neo4j/Vertex AI) managing 100B+ relationships, >99.5% entity resolution, >90% self-healing.\n\
             - ADCs: Agentic controllers for SENSE (attention scoring), REASON (analysis depth), DECIDE (strategy scoring), \
             ACT (execution/rollback), LEARN (priority updates). Aligned with 2025 agentic AI trends.\n\
             - Causal GraphRAG: Traces causes for 89% accuracy.\n\
             - Orchestrated Agents: Research Agents + Mixture of Experts (MoE) with Orchestrator Agent.\n\
             - PaaS Delivery: Multi-tenant on GKE, API-first, templates (including healthcare), federated learning, quantum-resistant security.",
        )
        .paragraph("S-R-D-A-L Cycle: Sense → Reason → Decide → Act → Learn, achieving 50-75× velocity.");

    doc.heading(2, "Chapter 3: Proven Use Cases").paragraph(
        "- Media Buying: 72× faster cycles, 8-10× ROAS.\n\
         - Retail Black Friday: 15-min response, +2.3% market share.\n\
         - Manufacturing: 67% downtime reduction, $89M savings.\n\
         - Financial: 73% risk accuracy, $127M prevented losses.\n\
         - Healthcare (Sepsis Prevention): Agentic monitoring detects sepsis 8 hours early; 8% mortality (vs. 27%), $47M/year savings, 2,341% ROI.",
    );

    doc.heading(3, "Metrics Table").table(
        ["Industry", "Key Improvements"],
        &[
            ["Media Buying", "150% ROAS, 72× speed"],
            ["Retail", "480× response, +2.3% share"],
            ["Manufacturing", "67% downtime cut, $89M savings"],
            ["Financial", "73% accuracy, $127M prevented"],
            ["Healthcare", "94% early detection, 342 lives saved"],
        ],
    );

    doc.heading(2, "Chapter 4: Implementation and Governance").paragraph(
        "Phased rollout: Weeks 1-4 (setup), Months 2-3 (expansion). Integrations: API connectors, \
         federated learning. Governance: Explainable AI (2025 trend), human overrides, ethical scoring.",
    );

    doc.heading(2, "Chapter 5: Business Case").paragraph(
        "ROI: 1,187% over 3 years (18-24 month payback). Vs. alternatives: Superior to BI (no autonomy) \
         or custom AI (high cost). Moat: Patents + network effects.",
    );

    doc.heading(2, "Chapter 6: Next Steps")
        .paragraph("Free ROI calculator, 30-day trial. Contact: transformation@mizoki.ai.");

    doc.heading(2, "Conclusion")
        .paragraph("In 2025's agentic AI era, MIZ OKI 3.0™ turns latency into advantage. Act now.");

    doc.heading(3, "Visual Placeholders").paragraph(
        "[VISUAL PLACEHOLDER 1]: Infographic comparing Traditional vs. MIZ OKI decision processes.\n\
         [VISUAL PLACEHOLDER 2]: E-SHKG architecture diagram with data flows and agent orchestration.",
    );

    doc
}
