use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{DashboardError, DashboardResult};

/// Parametric source for one synthetic sample group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SampleDistribution {
    Normal { mean: f64, std_dev: f64 },
}

impl SampleDistribution {
    fn validate(self, group: &str) -> DashboardResult<Normal<f64>> {
        match self {
            Self::Normal { mean, std_dev } => {
                if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
                    return Err(DashboardError::InvalidDataset(format!(
                        "`{group}` normal distribution needs finite mean and std_dev >= 0"
                    )));
                }
                Normal::new(mean, std_dev).map_err(|e| {
                    DashboardError::InvalidDataset(format!("`{group}` distribution: {e}"))
                })
            }
        }
    }
}

/// Size and shape of one sample group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleGroupSpec {
    pub size: usize,
    pub distribution: SampleDistribution,
}

impl SampleGroupSpec {
    #[must_use]
    pub const fn normal(size: usize, mean: f64, std_dev: f64) -> Self {
        Self {
            size,
            distribution: SampleDistribution::Normal { mean, std_dev },
        }
    }
}

/// Request for the two side-effect samples.
///
/// Defaults model BMI change: 85 risperidone patients around `N(5, 2)` and
/// 15 NeuroConnect patients around `N(0.3, 0.2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRequest {
    pub first: SampleGroupSpec,
    pub second: SampleGroupSpec,
}

impl Default for SampleRequest {
    fn default() -> Self {
        Self {
            first: SampleGroupSpec::normal(85, 5.0, 2.0),
            second: SampleGroupSpec::normal(15, 0.3, 0.2),
        }
    }
}

impl SampleRequest {
    #[must_use]
    pub fn with_sizes(mut self, first: usize, second: usize) -> Self {
        self.first.size = first;
        self.second.size = second;
        self
    }

    pub fn validate(&self) -> DashboardResult<()> {
        for (group, spec) in [("first", self.first), ("second", self.second)] {
            if spec.size == 0 {
                return Err(DashboardError::InvalidSampleSize {
                    group: group.to_owned(),
                    size: spec.size,
                });
            }
            spec.distribution.validate(group)?;
        }
        Ok(())
    }
}

/// Where sample randomness comes from.
///
/// Entropy is never implied: callers wanting non-reproducible output ask for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SampleSource {
    Seeded { seed: u64 },
    Entropy,
}

impl Default for SampleSource {
    fn default() -> Self {
        Self::Seeded { seed: 42 }
    }
}

impl SampleSource {
    #[must_use]
    pub fn rng(self) -> StdRng {
        match self {
            Self::Seeded { seed } => StdRng::seed_from_u64(seed),
            Self::Entropy => StdRng::from_entropy(),
        }
    }
}

/// Two unlabeled sample groups; labels are attached by the chart emitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePair {
    pub first: Vec<f64>,
    pub second: Vec<f64>,
}

/// Draws both sample groups from `rng`, first group first.
pub fn generate_side_effect_samples<R: Rng + ?Sized>(
    request: &SampleRequest,
    rng: &mut R,
) -> DashboardResult<SamplePair> {
    request.validate()?;
    let first = draw(request.first, "first", rng)?;
    let second = draw(request.second, "second", rng)?;
    trace!(
        first = first.len(),
        second = second.len(),
        "generated side-effect samples"
    );
    Ok(SamplePair { first, second })
}

/// Convenience wrapper that owns the generator for one `SampleSource`.
pub fn generate_from_source(
    request: &SampleRequest,
    source: SampleSource,
) -> DashboardResult<SamplePair> {
    let mut rng = source.rng();
    generate_side_effect_samples(request, &mut rng)
}

fn draw<R: Rng + ?Sized>(
    spec: SampleGroupSpec,
    group: &str,
    rng: &mut R,
) -> DashboardResult<Vec<f64>> {
    let normal = spec.distribution.validate(group)?;
    Ok((0..spec.size).map(|_| normal.sample(rng)).collect())
}

/// Five-number summary plus mean, the box overlay of a violin plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
}

impl BoxSummary {
    /// Quartiles use linear interpolation between closest ranks.
    ///
    /// Returns `None` for empty input or when any value is not finite.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() || values.iter().any(|v| !v.is_finite()) {
            return None;
        }
        let mut sorted: Vec<OrderedFloat<f64>> = values.iter().copied().map(OrderedFloat).collect();
        sorted.sort_unstable();
        let sorted: Vec<f64> = sorted.into_iter().map(OrderedFloat::into_inner).collect();

        let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
        Some(Self {
            min: sorted[0],
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
            mean,
        })
    }
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}
