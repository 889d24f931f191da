use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::{BoxSummary, Color, GraphEdge, GraphNode};
use crate::error::{DashboardError, DashboardResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    GroupedBar,
    Pie,
    Violin,
    Radar,
    NetworkGraph,
    Table,
}

impl ChartKind {
    /// Kinds whose series are indexed by `x_labels`.
    #[must_use]
    pub const fn is_categorical(self) -> bool {
        matches!(self, Self::GroupedBar | Self::Pie | Self::Radar | Self::Table)
    }

    /// Kinds whose `colors` key the x categories rather than the series.
    #[must_use]
    pub const fn colors_by_category(self) -> bool {
        matches!(self, Self::GroupedBar | Self::Pie | Self::Table)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSide {
    Left,
    Right,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub id: String,
    pub title: String,
    pub side: AxisSide,
    /// Id of the axis this one is drawn on top of (dual-axis charts).
    #[serde(default)]
    pub overlaying: Option<String>,
}

impl AxisSpec {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, side: AxisSide) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            side,
            overlaying: None,
        }
    }

    #[must_use]
    pub fn overlaying(mut self, axis_id: impl Into<String>) -> Self {
        self.overlaying = Some(axis_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub name: String,
    pub values: Vec<f64>,
    #[serde(default)]
    pub axis: Option<String>,
    #[serde(default)]
    pub summary: Option<BoxSummary>,
}

impl SeriesSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            axis: None,
            summary: None,
        }
    }

    #[must_use]
    pub fn on_axis(mut self, axis_id: impl Into<String>) -> Self {
        self.axis = Some(axis_id.into());
        self
    }

    #[must_use]
    pub fn with_summary(mut self, summary: Option<BoxSummary>) -> Self {
        self.summary = summary;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarMode {
    #[default]
    Group,
}

/// Kind-specific presentation hints. Renderers ignore what they cannot draw.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default)]
    pub bar_mode: Option<BarMode>,
    /// Donut hole as a fraction of the pie radius.
    #[serde(default)]
    pub hole: Option<f64>,
    #[serde(default)]
    pub show_box: bool,
    #[serde(default)]
    pub show_points: bool,
    #[serde(default)]
    pub fill: bool,
    #[serde(default)]
    pub show_legend: bool,
    #[serde(default)]
    pub radial_axis_visible: bool,
    #[serde(default)]
    pub height_px: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphPayload {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Backend-agnostic description of one visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    #[serde(default)]
    pub x_labels: Vec<String>,
    #[serde(default)]
    pub series: Vec<SeriesSpec>,
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub axes: Vec<AxisSpec>,
    #[serde(default)]
    pub options: ChartOptions,
    #[serde(default)]
    pub graph: Option<GraphPayload>,
}

impl ChartSpec {
    #[must_use]
    pub fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            x_labels: Vec::new(),
            series: Vec::new(),
            colors: Vec::new(),
            axes: Vec::new(),
            options: ChartOptions::default(),
            graph: None,
        }
    }

    #[must_use]
    pub fn with_x_labels(mut self, labels: Vec<String>) -> Self {
        self.x_labels = labels;
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesSpec) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisSpec) -> Self {
        self.axes.push(axis);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_graph(mut self, graph: GraphPayload) -> Self {
        self.graph = Some(graph);
        self
    }

    #[must_use]
    pub fn series_named(&self, name: &str) -> Option<&SeriesSpec> {
        self.series.iter().find(|series| series.name == name)
    }

    /// Checks the structural contract a renderer relies on.
    pub fn validate(&self) -> DashboardResult<()> {
        if self.title.trim().is_empty() {
            return Err(invalid(self.kind, "title must not be empty"));
        }

        for series in &self.series {
            if series.values.iter().any(|v| !v.is_finite()) {
                return Err(invalid(
                    self.kind,
                    &format!("series `{}` values must be finite", series.name),
                ));
            }
            if self.kind.is_categorical() && series.values.len() != self.x_labels.len() {
                return Err(invalid(
                    self.kind,
                    &format!(
                        "series `{}` has {} values for {} x labels",
                        series.name,
                        series.values.len(),
                        self.x_labels.len()
                    ),
                ));
            }
            if let Some(axis) = &series.axis {
                if !self.axes.iter().any(|a| &a.id == axis) {
                    return Err(invalid(
                        self.kind,
                        &format!("series `{}` references unknown axis `{axis}`", series.name),
                    ));
                }
            }
        }

        for axis in &self.axes {
            if let Some(base) = &axis.overlaying {
                if base == &axis.id || !self.axes.iter().any(|a| &a.id == base) {
                    return Err(invalid(
                        self.kind,
                        &format!("axis `{}` overlays unknown axis `{base}`", axis.id),
                    ));
                }
            }
        }

        if !self.colors.is_empty() {
            let targets = if self.kind.colors_by_category() {
                self.x_labels.len()
            } else {
                self.series.len()
            };
            if self.colors.len() != targets {
                return Err(invalid(
                    self.kind,
                    &format!("{} colors for {targets} color targets", self.colors.len()),
                ));
            }
        }

        match self.kind {
            ChartKind::Pie => self.validate_pie(),
            ChartKind::Violin => self.validate_violin(),
            ChartKind::NetworkGraph => self.validate_graph(),
            ChartKind::GroupedBar | ChartKind::Radar | ChartKind::Table => {
                if self.series.is_empty() {
                    return Err(invalid(self.kind, "at least one series is required"));
                }
                Ok(())
            }
        }
    }

    fn validate_pie(&self) -> DashboardResult<()> {
        let [series] = self.series.as_slice() else {
            return Err(invalid(self.kind, "pie charts take exactly one series"));
        };
        if series.values.iter().any(|v| *v < 0.0) {
            return Err(invalid(self.kind, "pie slice values must be >= 0"));
        }
        if let Some(hole) = self.options.hole {
            if !hole.is_finite() || !(0.0..1.0).contains(&hole) {
                return Err(invalid(self.kind, "pie hole must be in [0, 1)"));
            }
        }
        Ok(())
    }

    fn validate_violin(&self) -> DashboardResult<()> {
        if self.series.is_empty() {
            return Err(invalid(self.kind, "at least one sample group is required"));
        }
        if self.series.iter().any(|s| s.values.is_empty()) {
            return Err(invalid(self.kind, "sample groups must not be empty"));
        }
        Ok(())
    }

    fn validate_graph(&self) -> DashboardResult<()> {
        let Some(graph) = &self.graph else {
            return Err(invalid(self.kind, "graph payload is required"));
        };
        let mut ids = HashSet::with_capacity(graph.nodes.len());
        for node in &graph.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(DashboardError::DuplicateNodeIdentifier(node.id.clone()));
            }
        }
        for edge in &graph.edges {
            if !ids.contains(edge.from.as_str()) || !ids.contains(edge.to.as_str()) {
                return Err(invalid(
                    self.kind,
                    &format!("edge `{}` -> `{}` has a dangling endpoint", edge.from, edge.to),
                ));
            }
        }
        Ok(())
    }
}

fn invalid(kind: ChartKind, message: &str) -> DashboardError {
    DashboardError::InvalidChart(format!("{kind:?}: {message}"))
}
