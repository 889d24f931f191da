use treatment_dashboard::DashboardError;
use treatment_dashboard::core::{ReachConsistency, TreatmentDataset, TreatmentRecord};

#[test]
fn builtin_dataset_loads_three_treatments() {
    let dataset = TreatmentDataset::builtin(ReachConsistency::Relaxed).expect("builtin");
    assert_eq!(dataset.len(), 3);
    let aba = dataset.get("ABA Therapy").expect("aba present");
    assert_eq!(aba.label(), "ABA");
    assert_eq!(aba.color.to_hex(), "#ef553b");
}

#[test]
fn builtin_dataset_fits_five_percent_reach_tolerance() {
    let consistency = ReachConsistency::Enforced {
        tolerance_ratio: 0.05,
    };
    TreatmentDataset::builtin(consistency).expect("all rows within 5%");
}

#[test]
fn strict_reach_tolerance_rejects_aba_row() {
    let consistency = ReachConsistency::Enforced {
        tolerance_ratio: 0.01,
    };
    let err = TreatmentDataset::builtin(consistency).expect_err("aba deviates 4%");
    match err {
        DashboardError::InvalidDataset(message) => assert!(message.contains("ABA Therapy")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_dataset_is_rejected() {
    let err = TreatmentDataset::new(Vec::new(), ReachConsistency::Relaxed)
        .expect_err("empty dataset");
    assert!(matches!(err, DashboardError::InvalidDataset(_)));
}

#[test]
fn duplicate_names_are_rejected() {
    let records = vec![
        TreatmentRecord::new("A", 100.0, 40.0),
        TreatmentRecord::new("A", 200.0, 20.0),
    ];
    let err = TreatmentDataset::new(records, ReachConsistency::Relaxed).expect_err("duplicate");
    assert!(format!("{err}").contains("more than once"));
}

#[test]
fn negative_tolerance_is_a_config_error() {
    let records = vec![TreatmentRecord::new("A", 100.0, 40.0)];
    let err = TreatmentDataset::new(
        records,
        ReachConsistency::Enforced {
            tolerance_ratio: -1.0,
        },
    )
    .expect_err("negative tolerance");
    assert!(matches!(err, DashboardError::InvalidConfig(_)));
}

#[test]
fn json_dataset_derives_missing_reach_and_ratings() {
    let input = r##"{
        "treatments": [
            { "name": "A", "color": "#112233", "cost_per_patient": 500.0, "effectiveness_pct": 60.0 }
        ]
    }"##;
    let dataset = TreatmentDataset::from_json_str(
        input,
        ReachConsistency::Enforced {
            tolerance_ratio: 0.0,
        },
    )
    .expect("valid json");
    let record = &dataset.records()[0];
    assert_eq!(record.patients_per_100k(), 200.0);
    assert_eq!(record.ratings.cost, 5.0);
}

#[test]
fn json_dataset_rejects_malformed_color() {
    let input = r#"{
        "treatments": [
            { "name": "A", "color": "red", "cost_per_patient": 500.0, "effectiveness_pct": 60.0 }
        ]
    }"#;
    let err = TreatmentDataset::from_json_str(input, ReachConsistency::Relaxed)
        .expect_err("bad color");
    assert!(format!("{err}").contains("failed to parse dataset json"));
}

#[test]
fn missing_dataset_file_reports_path() {
    let err = TreatmentDataset::from_json_path(
        "does/not/exist/treatments.json",
        ReachConsistency::Relaxed,
    )
    .expect_err("missing file");
    assert!(format!("{err}").contains("does/not/exist/treatments.json"));
}
