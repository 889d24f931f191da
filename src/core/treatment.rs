use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::error::{DashboardError, DashboardResult};

/// Investment amount the reach metric is expressed against.
pub const REACH_BUDGET_USD: f64 = 100_000.0;

/// Upper bound of every qualitative rating.
pub const MAX_RATING: f64 = 10.0;

/// Qualitative 0..=10 scores feeding the multi-factor comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreatmentRatings {
    pub cost: f64,
    pub effectiveness: f64,
    /// Side-effect profile; higher is safer.
    pub safety: f64,
    pub scalability: f64,
    pub time_to_implement: f64,
}

impl TreatmentRatings {
    #[must_use]
    pub const fn new(
        cost: f64,
        effectiveness: f64,
        safety: f64,
        scalability: f64,
        time_to_implement: f64,
    ) -> Self {
        Self {
            cost,
            effectiveness,
            safety,
            scalability,
            time_to_implement,
        }
    }

    /// Scores in radar metric order.
    #[must_use]
    pub fn as_array(self) -> [f64; 5] {
        [
            self.cost,
            self.effectiveness,
            self.safety,
            self.scalability,
            self.time_to_implement,
        ]
    }

    fn validate(self, treatment: &str) -> DashboardResult<()> {
        for (name, value) in [
            ("cost", self.cost),
            ("effectiveness", self.effectiveness),
            ("safety", self.safety),
            ("scalability", self.scalability),
            ("time_to_implement", self.time_to_implement),
        ] {
            if !value.is_finite() || !(0.0..=MAX_RATING).contains(&value) {
                return Err(DashboardError::InvalidDataset(format!(
                    "`{treatment}` rating `{name}` must be finite and in [0, 10]"
                )));
            }
        }
        Ok(())
    }
}

impl Default for TreatmentRatings {
    fn default() -> Self {
        Self::new(5.0, 5.0, 5.0, 5.0, 5.0)
    }
}

/// One row of the comparative dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentRecord {
    pub name: String,
    #[serde(default)]
    pub short_label: Option<String>,
    pub color: Color,
    pub cost_per_patient: f64,
    #[serde(default)]
    pub patients_per_100k: Option<f64>,
    pub effectiveness_pct: f64,
    #[serde(default)]
    pub ratings: TreatmentRatings,
}

impl TreatmentRecord {
    /// Creates a record whose reach is derived from `cost_per_patient`.
    #[must_use]
    pub fn new(name: impl Into<String>, cost_per_patient: f64, effectiveness_pct: f64) -> Self {
        Self {
            name: name.into(),
            short_label: None,
            color: Color::rgb(0x63, 0x6e, 0xfa),
            cost_per_patient,
            patients_per_100k: None,
            effectiveness_pct,
            ratings: TreatmentRatings::default(),
        }
    }

    #[must_use]
    pub fn with_short_label(mut self, label: impl Into<String>) -> Self {
        self.short_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Pins reach to a published figure instead of the derived value.
    #[must_use]
    pub fn with_patients_per_100k(mut self, reach: f64) -> Self {
        self.patients_per_100k = Some(reach);
        self
    }

    #[must_use]
    pub fn with_ratings(mut self, ratings: TreatmentRatings) -> Self {
        self.ratings = ratings;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        self.short_label.as_deref().unwrap_or(&self.name)
    }

    /// Patients treatable per $100K, explicit when given, else derived.
    #[must_use]
    pub fn patients_per_100k(&self) -> f64 {
        self.patients_per_100k
            .unwrap_or(REACH_BUDGET_USD / self.cost_per_patient)
    }

    /// Relative gap between `cost × reach` and the $100K budget.
    #[must_use]
    pub fn reach_deviation_ratio(&self) -> f64 {
        ((self.cost_per_patient * self.patients_per_100k()) - REACH_BUDGET_USD).abs()
            / REACH_BUDGET_USD
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if self.name.trim().is_empty() {
            return Err(DashboardError::InvalidDataset(
                "treatment name must not be empty".to_owned(),
            ));
        }
        if self.short_label.as_deref().is_some_and(|l| l.trim().is_empty()) {
            return Err(DashboardError::InvalidDataset(format!(
                "`{}` short label must not be empty",
                self.name
            )));
        }
        if !self.cost_per_patient.is_finite() || self.cost_per_patient <= 0.0 {
            return Err(DashboardError::InvalidDataset(format!(
                "`{}` cost_per_patient must be finite and > 0",
                self.name
            )));
        }
        let reach = self.patients_per_100k();
        if !reach.is_finite() || reach <= 0.0 {
            return Err(DashboardError::InvalidDataset(format!(
                "`{}` patients_per_100k must be finite and > 0",
                self.name
            )));
        }
        if !self.effectiveness_pct.is_finite() || !(0.0..=100.0).contains(&self.effectiveness_pct)
        {
            return Err(DashboardError::InvalidDataset(format!(
                "`{}` effectiveness_pct must be finite and in [0, 100]",
                self.name
            )));
        }
        self.ratings.validate(&self.name)
    }
}

/// How strictly `cost_per_patient × patients_per_100k ≈ 100_000` is held.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ReachConsistency {
    /// Deviations are reported through `tracing` and otherwise accepted.
    #[default]
    Relaxed,
    /// Deviations above `tolerance_ratio` reject the dataset.
    Enforced { tolerance_ratio: f64 },
}
