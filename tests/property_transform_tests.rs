use proptest::prelude::*;
use treatment_dashboard::core::{
    NodeNaming, SampleRequest, SampleSource, ScoreMatrix, TreatmentRatings, TreatmentRecord,
    build_comparative_metrics, build_relationship_graph, build_score_matrix,
    generate_from_source,
};

fn record_strategy() -> impl Strategy<Value = (f64, f64, [f64; 5])> {
    (
        1.0f64..1_000_000.0,
        0.0f64..=100.0,
        prop::array::uniform5(0.0f64..=10.0),
    )
}

fn records_from(rows: &[(f64, f64, [f64; 5])]) -> Vec<TreatmentRecord> {
    rows.iter()
        .enumerate()
        .map(|(i, (cost, effectiveness, r))| {
            TreatmentRecord::new(format!("T{i}"), *cost, *effectiveness)
                .with_ratings(TreatmentRatings::new(r[0], r[1], r[2], r[3], r[4]))
        })
        .collect()
}

proptest! {
    #[test]
    fn metrics_preserve_length_and_order(rows in prop::collection::vec(record_strategy(), 0..16)) {
        let records = records_from(&rows);
        let metrics = build_comparative_metrics(&records);

        prop_assert_eq!(metrics.len(), records.len());
        for (i, record) in records.iter().enumerate() {
            prop_assert_eq!(&metrics.names[i], &record.name);
            prop_assert_eq!(metrics.cost[i], record.cost_per_patient);
            prop_assert_eq!(metrics.effectiveness[i], record.effectiveness_pct);
        }
    }

    #[test]
    fn score_rows_match_metric_count_and_are_idempotent(
        rows in prop::collection::vec(record_strategy(), 1..8)
    ) {
        let records = records_from(&rows);
        let matrix = build_score_matrix(&records).expect("matrix");

        prop_assert_eq!(matrix.shape(), (records.len(), 5));
        for row in matrix.rows() {
            prop_assert_eq!(row.len(), matrix.column_labels().len());
        }
        prop_assert_eq!(build_score_matrix(&records).expect("rebuild"), matrix);
    }

    #[test]
    fn double_transpose_is_identity(
        rows in 1usize..6,
        columns in 1usize..6,
        seed in prop::collection::vec(-100.0f64..100.0, 36)
    ) {
        let data: Vec<(String, Vec<f64>)> = (0..rows)
            .map(|r| (format!("r{r}"), (0..columns).map(|c| seed[r * 6 + c]).collect()))
            .collect();
        let matrix = ScoreMatrix::from_rows((0..columns).map(|c| format!("c{c}")), data)
            .expect("matrix");

        prop_assert_eq!(matrix.transpose().transpose(), matrix);
    }

    #[test]
    fn namespaced_graph_gives_each_treatment_three_edges(
        rows in prop::collection::vec(record_strategy(), 1..10)
    ) {
        let records = records_from(&rows);
        let graph = build_relationship_graph(&records, NodeNaming::Namespaced).expect("graph");

        prop_assert_eq!(graph.node_count(), records.len() * 4);
        for record in &records {
            prop_assert_eq!(graph.out_degree(record.label()), 3);
        }
    }

    #[test]
    fn seeded_generation_is_deterministic(
        seed in any::<u64>(),
        first in 1usize..200,
        second in 1usize..200
    ) {
        let request = SampleRequest::default().with_sizes(first, second);
        let source = SampleSource::Seeded { seed };
        let a = generate_from_source(&request, source).expect("first");
        let b = generate_from_source(&request, source).expect("second");

        prop_assert_eq!(a.first.len(), first);
        prop_assert_eq!(a.second.len(), second);
        prop_assert_eq!(a, b);
    }
}
