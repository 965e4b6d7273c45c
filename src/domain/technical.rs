//! Static configuration for the technical documentation generator.

use std::fmt;

use serde::{Serialize, Serializer};

/// Value of a component specification entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecValue {
    Text(&'static str),
    List(&'static [&'static str]),
    Flag(bool),
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecValue::Text(text) => f.write_str(text),
            SpecValue::List(items) => f.write_str(&items.join(", ")),
            SpecValue::Flag(true) => f.write_str("Yes"),
            SpecValue::Flag(false) => f.write_str("No"),
        }
    }
}

impl Serialize for SpecValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A `snake_case` key with its literal value. Keys are title-cased at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry<V: 'static> {
    pub key: &'static str,
    pub value: V,
}

const fn text(key: &'static str, value: &'static str) -> Entry<SpecValue> {
    Entry { key, value: SpecValue::Text(value) }
}

const fn metric(key: &'static str, value: &'static str) -> Entry<&'static str> {
    Entry { key, value }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

const fn endpoint(
    method: &'static str,
    path: &'static str,
    description: &'static str,
) -> Endpoint {
    Endpoint { method, path, description }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechnicalSpecification {
    pub component: &'static str,
    pub description: &'static str,
    pub specifications: &'static [Entry<SpecValue>],
    pub performance_metrics: &'static [Entry<&'static str>],
    pub dependencies: &'static [&'static str],
    pub api_endpoints: &'static [Endpoint],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntegrationMethod {
    pub method: &'static str,
    pub description: &'static str,
    pub use_case: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeploymentOption {
    pub option: &'static str,
    pub description: &'static str,
    pub timeline: &'static str,
    pub management: &'static str,
}

/// Endpoints documented under one API category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApiGroup {
    pub category: &'static str,
    pub endpoints: &'static [Endpoint],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TroubleshootingEntry {
    pub issue: &'static str,
    pub symptoms: &'static str,
    pub diagnosis: &'static str,
    pub resolution: &'static str,
}

/// Literal content driving the technical documentation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechWhitepaperConfig {
    pub title: &'static str,
    pub version: &'static str,
    pub architecture_overview: &'static str,
    pub core_components: &'static [TechnicalSpecification],
    pub performance_benchmarks: &'static [Entry<&'static str>],
    pub security_features: &'static [&'static str],
    pub integration_methods: &'static [IntegrationMethod],
    pub deployment_options: &'static [DeploymentOption],
    pub scalability_metrics: &'static [Entry<&'static str>],
    pub compliance_standards: &'static [&'static str],
    pub api_documentation: &'static [ApiGroup],
    pub troubleshooting_guide: &'static [TroubleshootingEntry],
}

/// The core architecture configuration.
pub fn core_architecture() -> &'static TechWhitepaperConfig {
    &CORE_ARCHITECTURE
}

const ADC_SPEC: TechnicalSpecification = TechnicalSpecification {
    component: "Autonomous Decision Controllers (ADCs)",
    description: "Self-governing decision-making units that operate independently while maintaining system coherence",
    specifications: &[
        text("processing_capacity", "10,000 decisions/second per ADC"),
        text("memory_footprint", "512MB base + dynamic allocation"),
        text("cpu_cores", "4-16 cores per ADC instance"),
        text("response_time", "<10ms for real-time decisions"),
        Entry {
            key: "supported_languages",
            value: SpecValue::List(&["Python", "JavaScript", "Go", "Rust"]),
        },
        Entry { key: "clustering_support", value: SpecValue::Flag(true) },
        text("fault_tolerance", "99.99% availability"),
    ],
    performance_metrics: &[
        metric("throughput", "1M+ decisions/hour"),
        metric("latency", "P95 < 50ms, P99 < 100ms"),
        metric("accuracy", "99.7% decision accuracy"),
        metric("uptime", "99.99% SLA"),
    ],
    dependencies: &["E-SHKG", "Message Bus", "Decision Engine"],
    api_endpoints: &[
        endpoint("POST", "/adc/decision", "Submit decision request"),
        endpoint("GET", "/adc/status", "Get ADC health status"),
        endpoint("PUT", "/adc/config", "Update ADC configuration"),
    ],
};

const ESHKG_SPEC: TechnicalSpecification = TechnicalSpecification {
    component: "E-SHKG (Enhanced Semantic Hypergraph Knowledge Graph)",
    description: "Multi-dimensional knowledge representation system enabling causal reasoning and contextual understanding",
    specifications: &[
        text("graph_capacity", "10B+ nodes, 100B+ edges"),
        text("query_performance", "<100ms for complex traversals"),
        text("storage_engine", "Distributed graph database"),
        text("memory_model", "In-memory + persistent storage"),
        text("consistency_model", "Eventual consistency with causal ordering"),
        Entry {
            key: "supported_formats",
            value: SpecValue::List(&["RDF", "Property Graph", "Hypergraph"]),
        },
        text("compression_ratio", "85% space savings vs. traditional graphs"),
    ],
    performance_metrics: &[
        metric("query_throughput", "100K+ queries/second"),
        metric("indexing_speed", "1M+ facts/second ingestion"),
        metric("storage_efficiency", "85% compression ratio"),
        metric("inference_accuracy", "97.3% causal inference accuracy"),
    ],
    dependencies: &["Graph Database", "Reasoning Engine", "NLP Pipeline"],
    api_endpoints: &[
        endpoint("POST", "/eshkg/query", "Execute knowledge graph query"),
        endpoint("PUT", "/eshkg/ingest", "Ingest new knowledge"),
        endpoint("GET", "/eshkg/schema", "Get graph schema"),
    ],
};

const PLATFORM_SPEC: TechnicalSpecification = TechnicalSpecification {
    component: "MIZ OKI 3.0™ Platform Core",
    description: "Central orchestration layer managing all platform services and business logic",
    specifications: &[
        text("architecture", "Microservices with event-driven communication"),
        text("container_runtime", "Kubernetes native"),
        text("service_mesh", "Istio with mTLS"),
        text("api_gateway", "GraphQL + REST endpoints"),
        text("message_broker", "Apache Kafka with exactly-once semantics"),
        text("database", "Multi-model (Document, Graph, Time-series)"),
        text("caching", "Redis Cluster with persistence"),
    ],
    performance_metrics: &[
        metric("request_throughput", "1M+ requests/second"),
        metric("concurrent_users", "100K+ simultaneous users"),
        metric("data_processing", "10TB+/day throughput"),
        metric("global_latency", "<200ms worldwide"),
    ],
    dependencies: &["Container Runtime", "Service Mesh", "Message Bus"],
    api_endpoints: &[
        endpoint("POST", "/api/v3/execute", "Execute business logic"),
        endpoint("GET", "/api/v3/health", "Platform health check"),
        endpoint("POST", "/api/v3/analytics", "Analytics query"),
    ],
};

static CORE_ARCHITECTURE: TechWhitepaperConfig = TechWhitepaperConfig {
    title: "MIZ OKI 3.0™ Technical Architecture & Implementation Guide",
    version: "3.0.1",
    architecture_overview: "MIZ OKI 3.0™ employs a revolutionary three-tier architecture that delivers Business General Intelligence:

**Tier 1: Cognitive Layer (E-SHKG)**
- Enhanced Semantic Hypergraph Knowledge Graph for multi-dimensional reasoning
- Causal inference engine with temporal logic capabilities
- Real-time knowledge ingestion and schema evolution

**Tier 2: Decision Layer (ADCs)**
- Autonomous Decision Controllers operating in parallel
- Self-organizing decision networks with emergent behavior
- Context-aware decision making with explainable AI

**Tier 3: Platform Layer (Core Services)**
- Microservices architecture with event-driven communication
- Cloud-native deployment with auto-scaling capabilities
- Enterprise security with zero-trust architecture",
    core_components: &[ADC_SPEC, ESHKG_SPEC, PLATFORM_SPEC],
    performance_benchmarks: &[
        metric("decision_latency", "P50: 5ms, P95: 25ms, P99: 50ms"),
        metric("throughput", "1M+ decisions/hour per deployment"),
        metric("accuracy", "99.7% decision accuracy across all domains"),
        metric("availability", "99.99% uptime with auto-recovery"),
        metric("scalability", "Linear scaling to 1000+ nodes"),
        metric("data_processing", "Real-time processing of 100GB+/hour"),
    ],
    security_features: &[
        "Zero-trust security architecture with continuous verification",
        "End-to-end encryption with AES-256 and perfect forward secrecy",
        "Multi-factor authentication with biometric support",
        "Role-based access control (RBAC) with attribute-based policies",
        "Real-time threat detection with ML-powered anomaly detection",
        "Automated compliance monitoring and reporting",
        "Secure multi-tenancy with isolated execution environments",
        "Audit logging with tamper-proof blockchain storage",
    ],
    integration_methods: &[
        IntegrationMethod {
            method: "REST API Integration",
            description: "Standard HTTP REST APIs with OpenAPI 3.0 specification",
            use_case: "Simple CRUD operations and status queries",
        },
        IntegrationMethod {
            method: "GraphQL Integration",
            description: "Flexible query language for complex data relationships",
            use_case: "Complex queries with specific field selection",
        },
        IntegrationMethod {
            method: "Event-Driven Integration",
            description: "Apache Kafka-based streaming for real-time data flow",
            use_case: "High-volume, real-time data processing",
        },
        IntegrationMethod {
            method: "SDK Integration",
            description: "Native SDKs for Python, JavaScript, Java, and .NET",
            use_case: "Application embedding and custom development",
        },
    ],
    deployment_options: &[
        DeploymentOption {
            option: "Cloud-Native SaaS",
            description: "Fully managed deployment on AWS/Azure/GCP",
            timeline: "24-48 hours",
            management: "Zero infrastructure management required",
        },
        DeploymentOption {
            option: "Private Cloud",
            description: "Dedicated cloud deployment in customer's VPC",
            timeline: "1-2 weeks",
            management: "Managed service with customer VPC isolation",
        },
        DeploymentOption {
            option: "On-Premises",
            description: "Customer data center deployment with Kubernetes",
            timeline: "2-4 weeks",
            management: "Customer infrastructure with MIZ support",
        },
        DeploymentOption {
            option: "Hybrid Deployment",
            description: "Mixed cloud and on-premises with data sovereignty",
            timeline: "3-6 weeks",
            management: "Split architecture with secure connectivity",
        },
    ],
    scalability_metrics: &[
        metric("horizontal_scaling", "Auto-scaling from 1 to 1000+ nodes"),
        metric("vertical_scaling", "Dynamic resource allocation per workload"),
        metric("geographic_scaling", "Multi-region deployment with <200ms latency"),
        metric("data_scaling", "Petabyte-scale data processing capability"),
        metric("user_scaling", "100K+ concurrent users per deployment"),
    ],
    compliance_standards: &[
        "SOC 2 Type II",
        "ISO 27001",
        "GDPR",
        "HIPAA",
        "PCI DSS",
        "FedRAMP Moderate",
        "NIST Cybersecurity Framework",
        "CCPA",
        "ISO 9001",
        "ISO 20000",
        "COBIT",
        "ITIL v4",
    ],
    api_documentation: &[
        ApiGroup {
            category: "authentication",
            endpoints: &[
                endpoint("POST", "/auth/token", "Obtain JWT access token"),
                endpoint("POST", "/auth/refresh", "Refresh expired token"),
                endpoint("DELETE", "/auth/logout", "Invalidate session"),
            ],
        },
        ApiGroup {
            category: "decisions",
            endpoints: &[
                endpoint("POST", "/decisions/submit", "Submit decision request"),
                endpoint("GET", "/decisions/{id}", "Get decision result"),
                endpoint("GET", "/decisions/history", "Get decision history"),
            ],
        },
        ApiGroup {
            category: "analytics",
            endpoints: &[
                endpoint("POST", "/analytics/query", "Execute analytics query"),
                endpoint("GET", "/analytics/dashboards", "List available dashboards"),
                endpoint("POST", "/analytics/reports", "Generate custom report"),
            ],
        },
        ApiGroup {
            category: "administration",
            endpoints: &[
                endpoint("GET", "/admin/health", "System health status"),
                endpoint("PUT", "/admin/config", "Update system configuration"),
                endpoint("GET", "/admin/metrics", "Get performance metrics"),
            ],
        },
    ],
    troubleshooting_guide: &[
        TroubleshootingEntry {
            issue: "High Decision Latency",
            symptoms: "Response times > 100ms consistently",
            diagnosis: "Check ADC cluster health and E-SHKG query performance",
            resolution: "Scale ADC instances or optimize knowledge graph queries",
        },
        TroubleshootingEntry {
            issue: "Integration Failures",
            symptoms: "API calls returning 5xx errors",
            diagnosis: "Verify authentication tokens and network connectivity",
            resolution: "Refresh tokens and check firewall/proxy settings",
        },
        TroubleshootingEntry {
            issue: "Memory Leaks",
            symptoms: "Increasing memory usage over time",
            diagnosis: "Monitor ADC and E-SHKG memory consumption",
            resolution: "Restart affected components and review memory configuration",
        },
    ],
};
