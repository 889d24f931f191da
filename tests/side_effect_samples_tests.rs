use rand::SeedableRng;
use rand::rngs::StdRng;
use treatment_dashboard::DashboardError;
use treatment_dashboard::core::{
    SampleGroupSpec, SampleRequest, SampleSource, generate_from_source,
    generate_side_effect_samples,
};

#[test]
fn default_request_draws_85_and_15_samples() {
    let pair = generate_from_source(&SampleRequest::default(), SampleSource::Seeded { seed: 1 })
        .expect("default request");
    assert_eq!(pair.first.len(), 85);
    assert_eq!(pair.second.len(), 15);
}

#[test]
fn fixed_seed_reproduces_both_samples() {
    let request = SampleRequest::default();
    let mut rng_a = StdRng::seed_from_u64(2024);
    let mut rng_b = StdRng::seed_from_u64(2024);

    let a = generate_side_effect_samples(&request, &mut rng_a).expect("first run");
    let b = generate_side_effect_samples(&request, &mut rng_b).expect("second run");
    assert_eq!(a, b);
}

#[test]
fn different_seeds_diverge() {
    let request = SampleRequest::default();
    let a = generate_from_source(&request, SampleSource::Seeded { seed: 1 }).expect("seed 1");
    let b = generate_from_source(&request, SampleSource::Seeded { seed: 2 }).expect("seed 2");
    assert_ne!(a.first, b.first);
}

#[test]
fn entropy_source_respects_sizes() {
    let request = SampleRequest::default().with_sizes(10, 3);
    let pair = generate_from_source(&request, SampleSource::Entropy).expect("entropy");
    assert_eq!(pair.first.len(), 10);
    assert_eq!(pair.second.len(), 3);
}

#[test]
fn zero_sample_size_is_rejected() {
    let request = SampleRequest::default().with_sizes(85, 0);
    let err = generate_from_source(&request, SampleSource::default()).expect_err("size 0");
    assert_eq!(
        err,
        DashboardError::InvalidSampleSize {
            group: "second".to_owned(),
            size: 0,
        }
    );
}

#[test]
fn negative_std_dev_is_rejected() {
    let request = SampleRequest {
        first: SampleGroupSpec::normal(5, 0.0, -1.0),
        second: SampleGroupSpec::normal(5, 0.0, 1.0),
    };
    let err = generate_from_source(&request, SampleSource::default()).expect_err("bad std_dev");
    assert!(matches!(err, DashboardError::InvalidDataset(_)));
}

#[test]
fn sample_means_track_distribution_parameters() {
    let request = SampleRequest::default().with_sizes(4_000, 4_000);
    let pair = generate_from_source(&request, SampleSource::Seeded { seed: 99 }).expect("large");

    let mean = |values: &[f64]| values.iter().sum::<f64>() / values.len() as f64;
    assert!((mean(&pair.first) - 5.0).abs() < 0.2);
    assert!((mean(&pair.second) - 0.3).abs() < 0.02);
}
