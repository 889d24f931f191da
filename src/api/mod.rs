mod chart_emitter;
mod chart_spec;
mod dashboard;
mod dashboard_config;
mod json_contract;

pub use chart_emitter::{
    COST_SERIES, EFFECTIVENESS_SERIES, REACH_SERIES, comparison_table, grouped_bar_chart,
    radar_chart, reach_pie_chart, relationship_graph_chart, side_effect_violin_chart,
};
pub use chart_spec::{
    AxisSide, AxisSpec, BarMode, ChartKind, ChartOptions, ChartSpec, GraphPayload, SeriesSpec,
};
pub use dashboard::{Dashboard, DashboardSection, build_dashboard, build_dashboard_with_rng};
pub use dashboard_config::{DashboardConfig, PageLayout, SampleGroupStyle, ThemeConfig};
pub use json_contract::{
    CHART_SPEC_JSON_SCHEMA_V1, ChartSpecJsonContractV1, DASHBOARD_JSON_SCHEMA_V1,
    DashboardJsonContractV1,
};
