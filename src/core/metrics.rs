use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Color, TreatmentRecord};

/// Column-oriented view of the dataset for categorical charts.
///
/// Every vector has one entry per treatment, in dataset order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparativeMetrics {
    pub names: Vec<String>,
    pub cost: Vec<f64>,
    pub reach: Vec<f64>,
    pub effectiveness: Vec<f64>,
    pub colors: Vec<Color>,
}

impl ComparativeMetrics {
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Splits treatment records into the paired series used by bar, pie and table views.
#[must_use]
pub fn build_comparative_metrics(records: &[TreatmentRecord]) -> ComparativeMetrics {
    let mut metrics = ComparativeMetrics {
        names: Vec::with_capacity(records.len()),
        cost: Vec::with_capacity(records.len()),
        reach: Vec::with_capacity(records.len()),
        effectiveness: Vec::with_capacity(records.len()),
        colors: Vec::with_capacity(records.len()),
    };
    for record in records {
        metrics.names.push(record.name.clone());
        metrics.cost.push(record.cost_per_patient);
        metrics.reach.push(record.patients_per_100k());
        metrics.effectiveness.push(record.effectiveness_pct);
        metrics.colors.push(record.color);
    }
    debug!(treatments = metrics.len(), "built comparative metrics");
    metrics
}
