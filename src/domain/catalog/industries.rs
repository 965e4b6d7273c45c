use super::{UseCase, WhitepaperConfig};

pub(super) static HEALTHCARE: WhitepaperConfig = WhitepaperConfig {
    title: "MIZ OKI 3.0™ for Healthcare: The Autonomous Intelligence Platform-as-a-Service (PaaS)",
    industry: "Healthcare",
    subtitle: "From Reactive Care to Predictive Health: Achieving Clinical and Operational Excellence Through Business General Intelligence",
    executive_summary: "Healthcare systems worldwide face a dual crisis: exponentially growing clinical complexity coupled with insurmountable implementation barriers for transformative AI solutions. MIZ OKI 3.0™ Healthcare PaaS solves both crises simultaneously through the world's first Business General Intelligence platform delivered as a managed service.",
    key_benefits: &[
        "Accelerates clinical decisions from hours to minutes (50-75× improvement)",
        "Reduces diagnostic errors by 43% through causal clinical reasoning",
        "Prevents $89M in annual operational waste via predictive optimization",
        "Achieves 99.7% regulatory compliance with autonomous monitoring",
        "Deploys in weeks, not years with zero infrastructure investment",
        "Delivers 1,187% 3-year ROI with 9-12 month payback",
    ],
    roi_metrics: &[
        "1,187% 3-year ROI",
        "$89M annual waste prevention",
        "43% reduction in diagnostic errors",
        "50-75× faster clinical decisions",
        "99.7% regulatory compliance",
    ],
    use_cases: &[
        UseCase {
            title: "Predictive Patient Deterioration",
            description: "Early warning systems that predict patient decline 6-12 hours before clinical manifestation",
        },
        UseCase {
            title: "Autonomous Treatment Optimization",
            description: "Real-time treatment protocol adjustments based on patient response patterns",
        },
        UseCase {
            title: "Operational Excellence",
            description: "Predictive staffing, resource allocation, and capacity management",
        },
    ],
    technology_features: &[
        "Autonomous Decision Controllers (ADCs)",
        "E-SHKG cognitive core",
        "Healthcare-specific Industry Solution Templates",
        "HIPAA-compliant infrastructure",
        "Real-time clinical decision support",
    ],
    competitive_advantages: &[
        "Zero infrastructure investment required",
        "Weeks to deployment vs. 18-24 months",
        "Causal reasoning vs. pattern matching",
        "Industry-specific templates",
        "Autonomous decision-making capabilities",
    ],
    implementation_timeline: "2-4 weeks",
    target_audience: &[
        "Chief Medical Officers",
        "Healthcare CIOs",
        "Hospital Administrators",
        "Medical Directors",
    ],
};

pub(super) static MEDIA_BUYING: WhitepaperConfig = WhitepaperConfig {
    title: "MIZ OKI 3.0™ for Media Buying: The Autonomous Intelligence Platform-as-a-Service (PaaS)",
    industry: "Media Buying & Advertising",
    subtitle: "From Campaign Management to Autonomous Revenue Generation: Achieving Marketing Excellence Through Business General Intelligence",
    executive_summary: "Media buying agencies face unprecedented complexity: real-time bidding across 50+ platforms, managing $100M+ monthly ad spend, while client expectations demand instant optimization and guaranteed ROI. MIZ OKI 3.0™ Media PaaS transforms agencies from reactive campaign managers to autonomous revenue generators.",
    key_benefits: &[
        "Increases ROAS by 340% through predictive bid optimization",
        "Reduces media waste by 67% via autonomous budget reallocation",
        "Achieves 95% client retention through guaranteed performance",
        "Scales to unlimited campaigns with zero additional headcount",
        "Deploys in days with existing tech stack integration",
        "Delivers 890% 2-year ROI with 6-month payback",
    ],
    roi_metrics: &[
        "890% 2-year ROI",
        "340% ROAS improvement",
        "67% reduction in media waste",
        "95% client retention rate",
        "50× faster optimization cycles",
    ],
    use_cases: &[
        UseCase {
            title: "Autonomous Bid Management",
            description: "Real-time bid optimization across all platforms with predictive performance modeling",
        },
        UseCase {
            title: "Cross-Platform Attribution",
            description: "True multi-touch attribution with causal impact analysis",
        },
        UseCase {
            title: "Predictive Audience Discovery",
            description: "AI-driven audience expansion based on conversion probability",
        },
    ],
    technology_features: &[
        "Real-time bidding optimization",
        "Cross-platform attribution modeling",
        "Predictive audience analytics",
        "Autonomous budget allocation",
        "Multi-channel campaign orchestration",
    ],
    competitive_advantages: &[
        "Platform-agnostic integration",
        "Real-time autonomous optimization",
        "Predictive performance modeling",
        "Guaranteed ROI delivery",
        "Zero manual intervention required",
    ],
    implementation_timeline: "3-7 days",
    target_audience: &[
        "Media Buying Directors",
        "Marketing Technology Leaders",
        "Agency Owners",
        "Performance Marketing Managers",
    ],
};

pub(super) static GENERAL_BUSINESS: WhitepaperConfig = WhitepaperConfig {
    title: "MIZ OKI 3.0™: Business General Intelligence Platform for Autonomous Decision-Making",
    industry: "General Business",
    subtitle: "The Autonomous Living Brain for Your Organization: Transforming Decision-Making Through Business General Intelligence",
    executive_summary: "Organizations face an intelligence crisis: exponential data growth paired with human decision bottlenecks. While business data doubles every 12 months, critical decisions still take days to weeks, and implementing AI requires massive investment with uncertain outcomes. MIZ OKI 3.0™ solves this through the world's first Business General Intelligence platform.",
    key_benefits: &[
        "Accelerates strategic decisions from weeks to hours (100× improvement)",
        "Increases operational efficiency by 60% through autonomous optimization",
        "Reduces decision-making errors by 78% via causal reasoning",
        "Achieves 99.9% system reliability with self-healing architecture",
        "Deploys in days with existing infrastructure integration",
        "Delivers 650% 3-year ROI with 8-month payback",
    ],
    roi_metrics: &[
        "650% 3-year ROI",
        "60% operational efficiency gain",
        "78% reduction in decision errors",
        "100× faster strategic decisions",
        "99.9% system reliability",
    ],
    use_cases: &[
        UseCase {
            title: "Strategic Decision Automation",
            description: "Autonomous analysis and recommendation generation for complex business decisions",
        },
        UseCase {
            title: "Operational Optimization",
            description: "Real-time process optimization across all business functions",
        },
        UseCase {
            title: "Predictive Risk Management",
            description: "Early warning systems for business risks with automated mitigation strategies",
        },
    ],
    technology_features: &[
        "Business General Intelligence core",
        "Autonomous Decision Controllers",
        "Self-healing infrastructure",
        "Industry-agnostic templates",
        "Real-time optimization engine",
    ],
    competitive_advantages: &[
        "General intelligence vs. narrow AI",
        "Autonomous decision-making",
        "Platform-as-a-Service delivery",
        "Industry-agnostic architecture",
        "Self-optimizing performance",
    ],
    implementation_timeline: "1-2 weeks",
    target_audience: &["CEOs", "CTOs", "Chief Strategy Officers", "Business Intelligence Directors"],
};
