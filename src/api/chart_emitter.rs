use crate::core::{BoxSummary, Color, ComparativeMetrics, RelationshipGraph, SamplePair, ScoreMatrix};
use crate::error::DashboardResult;

use super::{
    AxisSide, AxisSpec, BarMode, ChartKind, ChartOptions, ChartSpec, GraphPayload,
    SampleGroupStyle, SeriesSpec,
};

pub const REACH_SERIES: &str = "Patients per $100K";
pub const EFFECTIVENESS_SERIES: &str = "Effectiveness (%)";
pub const COST_SERIES: &str = "Cost per patient (USD)";

/// Patients reached (left axis) next to effectiveness (right axis), grouped per treatment.
pub fn grouped_bar_chart(metrics: &ComparativeMetrics) -> DashboardResult<ChartSpec> {
    let spec = ChartSpec::new(
        ChartKind::GroupedBar,
        "Number of Patients Treated & Effectiveness Comparison",
    )
    .with_x_labels(metrics.names.clone())
    .with_axis(AxisSpec::new("x", "Treatment Type", AxisSide::Bottom))
    .with_axis(AxisSpec::new("y", REACH_SERIES, AxisSide::Left))
    .with_axis(AxisSpec::new("y2", EFFECTIVENESS_SERIES, AxisSide::Right).overlaying("y"))
    .with_series(SeriesSpec::new(REACH_SERIES, metrics.reach.clone()).on_axis("y"))
    .with_series(SeriesSpec::new(EFFECTIVENESS_SERIES, metrics.effectiveness.clone()).on_axis("y2"))
    .with_colors(metrics.colors.clone())
    .with_options(ChartOptions {
        bar_mode: Some(BarMode::Group),
        show_legend: true,
        ..ChartOptions::default()
    });
    spec.validate()?;
    Ok(spec)
}

/// Share of patients reachable with a $100K investment, as a donut.
pub fn reach_pie_chart(metrics: &ComparativeMetrics) -> DashboardResult<ChartSpec> {
    let spec = ChartSpec::new(
        ChartKind::Pie,
        "Number of Patients Treated with $100K Investment",
    )
    .with_x_labels(metrics.names.clone())
    .with_series(SeriesSpec::new(REACH_SERIES, metrics.reach.clone()))
    .with_colors(metrics.colors.clone())
    .with_options(ChartOptions {
        hole: Some(0.4),
        show_legend: true,
        ..ChartOptions::default()
    });
    spec.validate()?;
    Ok(spec)
}

/// Violin with box overlay and all points, one category per sample group.
pub fn side_effect_violin_chart(
    samples: &SamplePair,
    groups: &[SampleGroupStyle; 2],
    metric: &str,
) -> DashboardResult<ChartSpec> {
    let [first, second] = groups;
    let mut spec = ChartSpec::new(
        ChartKind::Violin,
        format!("{metric} Distribution: {} vs. {}", first.label, second.label),
    )
    .with_x_labels(vec![first.label.clone(), second.label.clone()])
    .with_axis(AxisSpec::new("x", "Treatment", AxisSide::Bottom))
    .with_axis(AxisSpec::new("y", metric, AxisSide::Left))
    .with_colors(vec![first.color, second.color])
    .with_options(ChartOptions {
        show_box: true,
        show_points: true,
        show_legend: true,
        ..ChartOptions::default()
    });
    for (style, values) in [(first, &samples.first), (second, &samples.second)] {
        spec = spec.with_series(
            SeriesSpec::new(style.label.clone(), values.clone())
                .on_axis("y")
                .with_summary(BoxSummary::from_values(values)),
        );
    }
    spec.validate()?;
    Ok(spec)
}

/// Filled spider chart, one trace per matrix row over the matrix columns.
///
/// `colors` is matched to rows by position; pass an empty slice to let the
/// renderer pick its palette.
pub fn radar_chart(matrix: &ScoreMatrix, colors: &[Color]) -> DashboardResult<ChartSpec> {
    let mut spec = ChartSpec::new(
        ChartKind::Radar,
        "Radar Chart: Comparative Strengths by Scientific Metrics",
    )
    .with_x_labels(matrix.column_labels().to_vec())
    .with_colors(colors.to_vec())
    .with_options(ChartOptions {
        fill: true,
        show_legend: true,
        radial_axis_visible: true,
        ..ChartOptions::default()
    });
    for (label, scores) in matrix.row_labels().iter().zip(matrix.rows()) {
        spec = spec.with_series(SeriesSpec::new(label.clone(), scores.clone()));
    }
    spec.validate()?;
    Ok(spec)
}

pub fn relationship_graph_chart(
    graph: &RelationshipGraph,
    height_px: u32,
) -> DashboardResult<ChartSpec> {
    let payload = GraphPayload {
        nodes: graph.nodes().cloned().collect(),
        edges: graph.edges().to_vec(),
    };
    let spec = ChartSpec::new(ChartKind::NetworkGraph, "Neural Network Cost-Effectiveness Map")
        .with_graph(payload)
        .with_options(ChartOptions {
            height_px: Some(height_px),
            ..ChartOptions::default()
        });
    spec.validate()?;
    Ok(spec)
}

/// Treatments as rows, one column per metric series.
pub fn comparison_table(metrics: &ComparativeMetrics) -> DashboardResult<ChartSpec> {
    let spec = ChartSpec::new(ChartKind::Table, "Comparative Table")
        .with_x_labels(metrics.names.clone())
        .with_series(SeriesSpec::new(COST_SERIES, metrics.cost.clone()))
        .with_series(SeriesSpec::new(REACH_SERIES, metrics.reach.clone()))
        .with_series(SeriesSpec::new(EFFECTIVENESS_SERIES, metrics.effectiveness.clone()))
        .with_colors(metrics.colors.clone());
    spec.validate()?;
    Ok(spec)
}
