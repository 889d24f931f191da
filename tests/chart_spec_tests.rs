use treatment_dashboard::DashboardError;
use treatment_dashboard::api::{
    AxisSide, ChartKind, ChartSpec, EFFECTIVENESS_SERIES, REACH_SERIES, SampleGroupStyle,
    SeriesSpec, comparison_table, grouped_bar_chart, radar_chart, reach_pie_chart,
    relationship_graph_chart, side_effect_violin_chart,
};
use treatment_dashboard::core::{
    Color, NodeNaming, ReachConsistency, SampleRequest, SampleSource, TreatmentDataset,
    build_comparative_metrics, build_relationship_graph, build_score_matrix,
    generate_from_source,
};

fn dataset() -> TreatmentDataset {
    TreatmentDataset::builtin(ReachConsistency::Relaxed).expect("builtin")
}

#[test]
fn grouped_bar_uses_dual_axes() {
    let metrics = build_comparative_metrics(dataset().records());
    let chart = grouped_bar_chart(&metrics).expect("bar chart");

    assert_eq!(chart.kind, ChartKind::GroupedBar);
    assert_eq!(chart.x_labels, metrics.names);
    assert_eq!(chart.series.len(), 2);

    let reach = chart.series_named(REACH_SERIES).expect("reach series");
    assert_eq!(reach.values, vec![83.0, 1.6, 8.0]);
    assert_eq!(reach.axis.as_deref(), Some("y"));

    let effectiveness = chart
        .series_named(EFFECTIVENESS_SERIES)
        .expect("effectiveness series");
    assert_eq!(effectiveness.values, vec![90.0, 35.0, 45.0]);
    assert_eq!(effectiveness.axis.as_deref(), Some("y2"));

    let x = chart.axes.iter().find(|a| a.id == "x").expect("x axis");
    assert_eq!(x.side, AxisSide::Bottom);

    let y2 = chart.axes.iter().find(|a| a.id == "y2").expect("y2 axis");
    assert_eq!(y2.side, AxisSide::Right);
    assert_eq!(y2.overlaying.as_deref(), Some("y"));
}

#[test]
fn pie_is_a_donut_over_reach() {
    let metrics = build_comparative_metrics(dataset().records());
    let chart = reach_pie_chart(&metrics).expect("pie");
    assert_eq!(chart.kind, ChartKind::Pie);
    assert_eq!(chart.options.hole, Some(0.4));
    assert_eq!(chart.series[0].values, metrics.reach);
    assert_eq!(chart.colors.len(), 3);
}

#[test]
fn violin_labels_groups_and_attaches_box_summaries() {
    let samples = generate_from_source(&SampleRequest::default(), SampleSource::Seeded { seed: 3 })
        .expect("samples");
    let groups = [
        SampleGroupStyle::new("Risperidone", Color::rgb(0x63, 0x6e, 0xfa)),
        SampleGroupStyle::new("NeuroConnect", Color::rgb(0x00, 0xcc, 0x96)),
    ];
    let chart = side_effect_violin_chart(&samples, &groups, "BMI Change").expect("violin");

    assert_eq!(
        chart.title,
        "BMI Change Distribution: Risperidone vs. NeuroConnect"
    );
    assert!(chart.options.show_box && chart.options.show_points);
    let x = chart.axes.iter().find(|a| a.id == "x").expect("x axis");
    assert_eq!(x.side, AxisSide::Bottom);
    assert_eq!(chart.series[0].name, "Risperidone");
    assert_eq!(chart.series[0].values.len(), 85);
    assert_eq!(chart.series[1].values.len(), 15);

    let summary = chart.series[1].summary.expect("box summary");
    assert!(summary.min <= summary.q1 && summary.q1 <= summary.median);
    assert!(summary.median <= summary.q3 && summary.q3 <= summary.max);
}

#[test]
fn radar_has_one_filled_trace_per_treatment() {
    let dataset = dataset();
    let matrix = build_score_matrix(dataset.records()).expect("matrix");
    let colors: Vec<Color> = dataset.records().iter().map(|r| r.color).collect();
    let chart = radar_chart(&matrix, &colors).expect("radar");

    assert_eq!(chart.kind, ChartKind::Radar);
    assert!(chart.options.fill);
    assert_eq!(chart.x_labels.len(), 5);
    let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["NeuroConnect", "ABA", "Risperidone"]);
}

#[test]
fn radar_rejects_color_count_mismatch() {
    let matrix = build_score_matrix(dataset().records()).expect("matrix");
    let err = radar_chart(&matrix, &[Color::rgb(1, 2, 3)]).expect_err("one color, three rows");
    assert!(matches!(err, DashboardError::InvalidChart(_)));
}

#[test]
fn graph_chart_carries_nodes_edges_and_height() {
    let graph = build_relationship_graph(dataset().records(), NodeNaming::Namespaced)
        .expect("graph");
    let chart = relationship_graph_chart(&graph, 500).expect("graph chart");
    let payload = chart.graph.as_ref().expect("payload");
    assert_eq!(payload.nodes.len(), 12);
    assert_eq!(payload.edges.len(), 9);
    assert_eq!(chart.options.height_px, Some(500));
}

#[test]
fn comparison_table_has_three_metric_columns() {
    let metrics = build_comparative_metrics(dataset().records());
    let chart = comparison_table(&metrics).expect("table");
    assert_eq!(chart.kind, ChartKind::Table);
    assert_eq!(chart.series.len(), 3);
    assert_eq!(chart.series[0].values, vec![1_200.0, 60_000.0, 12_500.0]);
}

#[test]
fn validate_rejects_series_length_mismatch() {
    let chart = ChartSpec::new(ChartKind::GroupedBar, "bars")
        .with_x_labels(vec!["a".to_owned(), "b".to_owned()])
        .with_series(SeriesSpec::new("s", vec![1.0]));
    let err = chart.validate().expect_err("length mismatch");
    assert!(format!("{err}").contains("1 values for 2 x labels"));
}

#[test]
fn validate_rejects_unknown_axis_reference() {
    let chart = ChartSpec::new(ChartKind::GroupedBar, "bars")
        .with_x_labels(vec!["a".to_owned()])
        .with_series(SeriesSpec::new("s", vec![1.0]).on_axis("y9"));
    assert!(chart.validate().is_err());
}

#[test]
fn validate_rejects_empty_title_and_non_finite_values() {
    let untitled = ChartSpec::new(ChartKind::Violin, " ")
        .with_series(SeriesSpec::new("s", vec![1.0]));
    assert!(untitled.validate().is_err());

    let nan = ChartSpec::new(ChartKind::Violin, "v")
        .with_series(SeriesSpec::new("s", vec![f64::NAN]));
    assert!(nan.validate().is_err());
}

#[test]
fn validate_requires_graph_payload_for_network_charts() {
    let chart = ChartSpec::new(ChartKind::NetworkGraph, "graph");
    assert!(chart.validate().is_err());
}

#[test]
fn validate_rejects_pie_with_two_series() {
    let chart = ChartSpec::new(ChartKind::Pie, "pie")
        .with_x_labels(vec!["a".to_owned()])
        .with_series(SeriesSpec::new("s1", vec![1.0]))
        .with_series(SeriesSpec::new("s2", vec![1.0]));
    assert!(chart.validate().is_err());
}

#[test]
fn chart_json_contract_round_trips_and_validates() {
    let graph = build_relationship_graph(dataset().records(), NodeNaming::Namespaced)
        .expect("graph");
    let chart = relationship_graph_chart(&graph, 500).expect("graph chart");

    let json = chart.to_json_contract_v1_pretty().expect("serialize");
    assert_eq!(ChartSpec::from_json_compat_str(&json).expect("envelope"), chart);

    let bare = chart.to_json_pretty().expect("bare");
    assert!(bare.contains("\"kind\": \"network_graph\""));
    assert!(bare.contains("\"color\": \"#ef553b\""));
    assert_eq!(ChartSpec::from_json_compat_str(&bare).expect("bare parse"), chart);
}

#[test]
fn chart_json_parse_rejects_duplicate_graph_nodes() {
    let graph = build_relationship_graph(dataset().records(), NodeNaming::Namespaced)
        .expect("graph");
    let chart = relationship_graph_chart(&graph, 500).expect("graph chart");
    let json = chart
        .to_json_pretty()
        .expect("bare")
        .replace("\"id\": \"ABA/cost\"", "\"id\": \"ABA\"");

    let err = ChartSpec::from_json_compat_str(&json).expect_err("duplicate id");
    assert_eq!(err, DashboardError::DuplicateNodeIdentifier("ABA".to_owned()));
}
