use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{ReachConsistency, TreatmentRecord};
use crate::error::{DashboardError, DashboardResult};

const BUILTIN_DATASET_JSON: &str = include_str!("../../data/treatments.json");

#[derive(Debug, Deserialize, Serialize)]
struct DatasetFile {
    treatments: Vec<TreatmentRecord>,
}

/// Immutable, validated comparative dataset.
///
/// Construction is the only validation point; there are no mutators, so a
/// `TreatmentDataset` that exists always satisfies the record invariants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreatmentDataset {
    records: Vec<TreatmentRecord>,
}

impl TreatmentDataset {
    pub fn new(
        records: Vec<TreatmentRecord>,
        consistency: ReachConsistency,
    ) -> DashboardResult<Self> {
        validate_records(&records, consistency)?;
        debug!(record_count = records.len(), "treatment dataset loaded");
        Ok(Self { records })
    }

    /// The three-treatment comparison shipped with the crate.
    pub fn builtin(consistency: ReachConsistency) -> DashboardResult<Self> {
        Self::from_json_str(BUILTIN_DATASET_JSON, consistency)
    }

    pub fn from_json_str(input: &str, consistency: ReachConsistency) -> DashboardResult<Self> {
        let file: DatasetFile = serde_json::from_str(input).map_err(|e| {
            DashboardError::InvalidDataset(format!("failed to parse dataset json: {e}"))
        })?;
        Self::new(file.treatments, consistency)
    }

    pub fn from_json_path(
        path: impl AsRef<Path>,
        consistency: ReachConsistency,
    ) -> DashboardResult<Self> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|e| {
            DashboardError::InvalidDataset(format!("failed to read `{}`: {e}", path.display()))
        })?;
        Self::from_json_str(&input, consistency)
    }

    #[must_use]
    pub fn records(&self) -> &[TreatmentRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TreatmentRecord> {
        self.records.iter().find(|record| record.name == name)
    }
}

pub(crate) fn validate_records(
    records: &[TreatmentRecord],
    consistency: ReachConsistency,
) -> DashboardResult<()> {
    if records.is_empty() {
        return Err(DashboardError::InvalidDataset(
            "dataset must contain at least one treatment".to_owned(),
        ));
    }
    if let ReachConsistency::Enforced { tolerance_ratio } = consistency {
        if !tolerance_ratio.is_finite() || tolerance_ratio < 0.0 {
            return Err(DashboardError::InvalidConfig(
                "reach tolerance_ratio must be finite and >= 0".to_owned(),
            ));
        }
    }

    let mut names = HashSet::with_capacity(records.len());
    let mut labels = HashSet::with_capacity(records.len());
    for record in records {
        record.validate()?;
        if !names.insert(record.name.as_str()) {
            return Err(DashboardError::InvalidDataset(format!(
                "treatment `{}` appears more than once",
                record.name
            )));
        }
        if !labels.insert(record.label()) {
            return Err(DashboardError::InvalidDataset(format!(
                "treatment label `{}` appears more than once",
                record.label()
            )));
        }

        let deviation = record.reach_deviation_ratio();
        match consistency {
            ReachConsistency::Relaxed => {
                if deviation > f64::EPSILON {
                    warn!(
                        treatment = %record.name,
                        deviation,
                        "cost x reach does not match the $100K budget"
                    );
                }
            }
            ReachConsistency::Enforced { tolerance_ratio } => {
                if deviation > tolerance_ratio {
                    return Err(DashboardError::InvalidDataset(format!(
                        "`{}` cost x reach deviates {:.2}% from $100K (tolerance {:.2}%)",
                        record.name,
                        deviation * 100.0,
                        tolerance_ratio * 100.0
                    )));
                }
            }
        }
    }

    Ok(())
}
