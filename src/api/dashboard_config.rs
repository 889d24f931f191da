use serde::{Deserialize, Serialize};

use crate::core::{Color, NodeNaming, ReachConsistency, SampleRequest, SampleSource};
use crate::error::{DashboardError, DashboardResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLayout {
    #[default]
    Wide,
    Centered,
}

/// Colors and plotting template handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub template: String,
    pub background: Color,
    pub font_color: Color,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            template: "plotly_dark".to_owned(),
            background: Color::rgb(0x0d, 0x11, 0x17),
            font_color: Color::rgb(0xff, 0xff, 0xff),
        }
    }
}

/// Legend label and color for one side-effect sample group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleGroupStyle {
    pub label: String,
    pub color: Color,
}

impl SampleGroupStyle {
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// Public dashboard bootstrap configuration.
///
/// Everything the original page kept as process-wide state lives here and is
/// passed explicitly to builders and renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_page_title")]
    pub page_title: String,
    #[serde(default = "default_heading")]
    pub heading: String,
    #[serde(default)]
    pub layout: PageLayout,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub sample_request: SampleRequest,
    #[serde(default)]
    pub sample_source: SampleSource,
    #[serde(default = "default_sample_groups")]
    pub sample_groups: [SampleGroupStyle; 2],
    #[serde(default = "default_sample_metric")]
    pub sample_metric: String,
    #[serde(default)]
    pub reach_consistency: ReachConsistency,
    #[serde(default)]
    pub node_naming: NodeNaming,
    #[serde(default = "default_graph_height_px")]
    pub graph_height_px: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_title: default_page_title(),
            heading: default_heading(),
            layout: PageLayout::default(),
            theme: ThemeConfig::default(),
            sample_request: SampleRequest::default(),
            sample_source: SampleSource::default(),
            sample_groups: default_sample_groups(),
            sample_metric: default_sample_metric(),
            reach_consistency: ReachConsistency::default(),
            node_naming: NodeNaming::default(),
            graph_height_px: default_graph_height_px(),
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a fixed seed for the side-effect samples.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.sample_source = SampleSource::Seeded { seed };
        self
    }

    #[must_use]
    pub fn with_sample_source(mut self, source: SampleSource) -> Self {
        self.sample_source = source;
        self
    }

    #[must_use]
    pub fn with_sample_request(mut self, request: SampleRequest) -> Self {
        self.sample_request = request;
        self
    }

    #[must_use]
    pub fn with_sample_sizes(mut self, first: usize, second: usize) -> Self {
        self.sample_request = self.sample_request.with_sizes(first, second);
        self
    }

    #[must_use]
    pub fn with_reach_consistency(mut self, consistency: ReachConsistency) -> Self {
        self.reach_consistency = consistency;
        self
    }

    #[must_use]
    pub fn with_node_naming(mut self, naming: NodeNaming) -> Self {
        self.node_naming = naming;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ThemeConfig) -> Self {
        self.theme = theme;
        self
    }

    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            DashboardError::InvalidConfig(format!("failed to parse dashboard config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DashboardResult<()> {
        for (name, value) in [
            ("page_title", &self.page_title),
            ("theme.template", &self.theme.template),
            ("sample_metric", &self.sample_metric),
            ("sample_groups[0].label", &self.sample_groups[0].label),
            ("sample_groups[1].label", &self.sample_groups[1].label),
        ] {
            if value.trim().is_empty() {
                return Err(DashboardError::InvalidConfig(format!(
                    "`{name}` must not be empty"
                )));
            }
        }
        if self.sample_groups[0].label == self.sample_groups[1].label {
            return Err(DashboardError::InvalidConfig(
                "sample group labels must differ".to_owned(),
            ));
        }
        if self.graph_height_px == 0 {
            return Err(DashboardError::InvalidConfig(
                "graph_height_px must be > 0".to_owned(),
            ));
        }
        if let ReachConsistency::Enforced { tolerance_ratio } = self.reach_consistency {
            if !tolerance_ratio.is_finite() || tolerance_ratio < 0.0 {
                return Err(DashboardError::InvalidConfig(
                    "reach tolerance_ratio must be finite and >= 0".to_owned(),
                ));
            }
        }
        self.sample_request.validate()
    }
}

fn default_page_title() -> String {
    "NeuroConnect: Cost-Scalability Dashboard".to_owned()
}

fn default_heading() -> String {
    "NeuroConnect vs Traditional Autism Treatments".to_owned()
}

fn default_sample_groups() -> [SampleGroupStyle; 2] {
    [
        SampleGroupStyle::new("Risperidone", Color::rgb(0x63, 0x6e, 0xfa)),
        SampleGroupStyle::new("NeuroConnect", Color::rgb(0x00, 0xcc, 0x96)),
    ]
}

fn default_sample_metric() -> String {
    "BMI Change".to_owned()
}

fn default_graph_height_px() -> u32 {
    500
}
