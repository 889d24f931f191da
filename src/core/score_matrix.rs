use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::core::TreatmentRecord;
use crate::error::{DashboardError, DashboardResult};

/// Radar axes, in the order every treatment's scores are laid out.
pub const RADAR_METRICS: [&str; 5] = [
    "Cost",
    "Effectiveness",
    "Side Effects",
    "Scalability",
    "Time to Implement",
];

/// Dense labeled table: `values[row][column]`.
///
/// Both label sets are non-empty and unique, and every row has exactly
/// `column_labels.len()` entries, so renderers can zip rows with column
/// labels blindly and `transpose` preserves all of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreMatrix {
    row_labels: Vec<String>,
    column_labels: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl ScoreMatrix {
    pub fn from_rows<L, C>(column_labels: C, rows: Vec<(L, Vec<f64>)>) -> DashboardResult<Self>
    where
        L: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let column_labels: Vec<String> = column_labels.into_iter().map(Into::into).collect();
        if column_labels.is_empty() {
            return Err(DashboardError::InvalidDataset(
                "score matrix needs at least one metric".to_owned(),
            ));
        }
        if rows.is_empty() {
            return Err(DashboardError::InvalidDataset(
                "score matrix needs at least one row".to_owned(),
            ));
        }
        let mut seen_columns = HashSet::with_capacity(column_labels.len());
        if let Some(duplicate) = column_labels.iter().find(|l| !seen_columns.insert(l.as_str())) {
            return Err(DashboardError::InvalidDataset(format!(
                "metric `{duplicate}` appears more than once"
            )));
        }

        let mut row_labels = Vec::with_capacity(rows.len());
        let mut values = Vec::with_capacity(rows.len());
        for (label, scores) in rows {
            let label: String = label.into();
            if row_labels.contains(&label) {
                return Err(DashboardError::InvalidDataset(format!(
                    "row `{label}` appears more than once"
                )));
            }
            if scores.len() != column_labels.len() {
                return Err(DashboardError::InvalidDataset(format!(
                    "`{label}` has {} scores, expected {}",
                    scores.len(),
                    column_labels.len()
                )));
            }
            if scores.iter().any(|v| !v.is_finite()) {
                return Err(DashboardError::InvalidDataset(format!(
                    "`{label}` scores must be finite"
                )));
            }
            row_labels.push(label);
            values.push(scores);
        }

        Ok(Self {
            row_labels,
            column_labels,
            values,
        })
    }

    #[must_use]
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    #[must_use]
    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    #[must_use]
    pub fn row(&self, label: &str) -> Option<&[f64]> {
        self.row_labels
            .iter()
            .position(|l| l == label)
            .map(|index| self.values[index].as_slice())
    }

    /// `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.row_labels.len(), self.column_labels.len())
    }

    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Swaps row and column roles, e.g. treatment-major to metric-major.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let (rows, columns) = self.shape();
        let values = (0..columns)
            .map(|column| (0..rows).map(|row| self.values[row][column]).collect())
            .collect();
        Self {
            row_labels: self.column_labels.clone(),
            column_labels: self.row_labels.clone(),
            values,
        }
    }
}

/// Lays out each treatment's five ratings along `RADAR_METRICS`.
///
/// Rows are keyed by the treatment's short label, in dataset order.
pub fn build_score_matrix(records: &[TreatmentRecord]) -> DashboardResult<ScoreMatrix> {
    let rows: Vec<(String, Vec<f64>)> = records
        .iter()
        .map(|record| (record.label().to_owned(), record.ratings.as_array().to_vec()))
        .collect();
    let matrix = ScoreMatrix::from_rows(RADAR_METRICS, rows)?;
    debug!(
        treatments = matrix.shape().0,
        metrics = matrix.shape().1,
        "built score matrix"
    );
    Ok(matrix)
}
