pub mod color;
pub mod dataset;
pub mod distribution;
pub mod graph;
pub mod metrics;
pub mod score_matrix;
pub mod treatment;

pub use color::Color;
pub use dataset::TreatmentDataset;
pub use distribution::{
    BoxSummary, SampleDistribution, SampleGroupSpec, SamplePair, SampleRequest, SampleSource,
    generate_from_source, generate_side_effect_samples,
};
pub use graph::{
    AttributeKind, GraphEdge, GraphNode, NodeKind, NodeNaming, RelationshipGraph,
    build_relationship_graph, format_compact, format_currency_compact,
};
pub use metrics::{ComparativeMetrics, build_comparative_metrics};
pub use score_matrix::{RADAR_METRICS, ScoreMatrix, build_score_matrix};
pub use treatment::{
    MAX_RATING, REACH_BUDGET_USD, ReachConsistency, TreatmentRatings, TreatmentRecord,
};
