use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

use super::{ChartSpec, Dashboard};

pub const DASHBOARD_JSON_SCHEMA_V1: u32 = 1;
pub const CHART_SPEC_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardJsonContractV1 {
    pub schema_version: u32,
    pub dashboard: Dashboard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpecJsonContractV1 {
    pub schema_version: u32,
    pub chart: ChartSpec,
}

impl Dashboard {
    pub fn to_json_contract_v1_pretty(&self) -> DashboardResult<String> {
        let payload = DashboardJsonContractV1 {
            schema_version: DASHBOARD_JSON_SCHEMA_V1,
            dashboard: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DashboardError::Serialization(format!("failed to serialize dashboard contract v1: {e}"))
        })
    }

    /// Accepts either a bare dashboard or a versioned contract envelope.
    pub fn from_json_compat_str(input: &str) -> DashboardResult<Self> {
        if let Ok(dashboard) = serde_json::from_str::<Dashboard>(input) {
            dashboard.validate()?;
            return Ok(dashboard);
        }
        let payload: DashboardJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            DashboardError::Serialization(format!("failed to parse dashboard json payload: {e}"))
        })?;
        if payload.schema_version != DASHBOARD_JSON_SCHEMA_V1 {
            return Err(DashboardError::Serialization(format!(
                "unsupported dashboard schema version: {}",
                payload.schema_version
            )));
        }
        payload.dashboard.validate()?;
        Ok(payload.dashboard)
    }
}

impl ChartSpec {
    pub fn to_json_pretty(&self) -> DashboardResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::Serialization(format!("failed to serialize chart spec json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> DashboardResult<String> {
        let payload = ChartSpecJsonContractV1 {
            schema_version: CHART_SPEC_JSON_SCHEMA_V1,
            chart: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DashboardError::Serialization(format!("failed to serialize chart spec contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> DashboardResult<Self> {
        if let Ok(chart) = serde_json::from_str::<ChartSpec>(input) {
            chart.validate()?;
            return Ok(chart);
        }
        let payload: ChartSpecJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            DashboardError::Serialization(format!("failed to parse chart spec json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SPEC_JSON_SCHEMA_V1 {
            return Err(DashboardError::Serialization(format!(
                "unsupported chart spec schema version: {}",
                payload.schema_version
            )));
        }
        payload.chart.validate()?;
        Ok(payload.chart)
    }
}
