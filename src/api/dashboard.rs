use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{
    TreatmentDataset, build_comparative_metrics, build_relationship_graph, build_score_matrix,
    generate_side_effect_samples,
};
use crate::core::dataset::validate_records;
use crate::error::DashboardResult;
use crate::render::Renderer;

use super::{
    ChartKind, ChartSpec, DashboardConfig, comparison_table, grouped_bar_chart, radar_chart,
    reach_pie_chart, relationship_graph_chart, side_effect_violin_chart,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSection {
    pub heading: String,
    pub chart: ChartSpec,
}

/// Complete, ordered set of chart specifications plus the configuration the
/// presentation layer should apply to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub config: DashboardConfig,
    pub sections: Vec<DashboardSection>,
}

impl Dashboard {
    #[must_use]
    pub fn chart(&self, kind: ChartKind) -> Option<&ChartSpec> {
        self.sections
            .iter()
            .map(|section| &section.chart)
            .find(|chart| chart.kind == kind)
    }

    pub fn charts(&self) -> impl Iterator<Item = &ChartSpec> {
        self.sections.iter().map(|section| &section.chart)
    }

    /// Hands the configuration, then every chart in page order, to `renderer`.
    pub fn render_with<R: Renderer + ?Sized>(&self, renderer: &mut R) -> DashboardResult<()> {
        renderer.configure(&self.config)?;
        for chart in self.charts() {
            renderer.render(chart)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> DashboardResult<()> {
        self.config.validate()?;
        for chart in self.charts() {
            chart.validate()?;
        }
        Ok(())
    }
}

/// Builds every dashboard chart, drawing samples from `config.sample_source`.
pub fn build_dashboard(
    dataset: &TreatmentDataset,
    config: &DashboardConfig,
) -> DashboardResult<Dashboard> {
    let mut rng = config.sample_source.rng();
    build_dashboard_with_rng(dataset, config, &mut rng)
}

/// Same as `build_dashboard`, with the sample generator supplied by the caller.
pub fn build_dashboard_with_rng<G: Rng + ?Sized>(
    dataset: &TreatmentDataset,
    config: &DashboardConfig,
    rng: &mut G,
) -> DashboardResult<Dashboard> {
    config.validate()?;
    let records = dataset.records();
    validate_records(records, config.reach_consistency)?;

    let metrics = build_comparative_metrics(records);
    let samples = generate_side_effect_samples(&config.sample_request, rng)?;
    let matrix = build_score_matrix(records)?;
    let graph = build_relationship_graph(records, config.node_naming)?;

    let sections = vec![
        section("Cost-Effectiveness Overview", grouped_bar_chart(&metrics)?),
        section("Patient Reach per $100K", reach_pie_chart(&metrics)?),
        section(
            "Side Effects Distribution (Statistical View)",
            side_effect_violin_chart(&samples, &config.sample_groups, &config.sample_metric)?,
        ),
        section(
            "Multi-Factor Comparison: Cost, Efficacy, Safety",
            radar_chart(&matrix, &metrics.colors)?,
        ),
        section(
            "Neural Network Cost-Effectiveness Map",
            relationship_graph_chart(&graph, config.graph_height_px)?,
        ),
        section("Comparative Table", comparison_table(&metrics)?),
    ];
    debug!(sections = sections.len(), "assembled dashboard sections");
    info!(
        treatments = records.len(),
        charts = sections.len(),
        "dashboard built"
    );

    Ok(Dashboard {
        config: config.clone(),
        sections,
    })
}

fn section(heading: &str, chart: ChartSpec) -> DashboardSection {
    DashboardSection {
        heading: heading.to_owned(),
        chart,
    }
}
