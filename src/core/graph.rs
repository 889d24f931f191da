use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Color, TreatmentRecord};
use crate::error::{DashboardError, DashboardResult};

/// Descriptive facet a treatment links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Cost,
    Reach,
    Effectiveness,
}

impl AttributeKind {
    pub const ALL: [Self; 3] = [Self::Cost, Self::Reach, Self::Effectiveness];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Cost => "cost",
            Self::Reach => "reach",
            Self::Effectiveness => "effectiveness",
        }
    }

    /// Hover title shown next to the node label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Cost => "Cost per patient",
            Self::Reach => "Patients per $100K",
            Self::Effectiveness => "Effectiveness",
        }
    }

    #[must_use]
    pub fn display_label(self, record: &TreatmentRecord) -> String {
        match self {
            Self::Cost => format_currency_compact(record.cost_per_patient),
            Self::Reach => format!("{} treated", format_compact(record.patients_per_100k())),
            Self::Effectiveness => format!("{}% effective", format_compact(record.effectiveness_pct)),
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "attribute", rename_all = "snake_case")]
pub enum NodeKind {
    Treatment,
    Attribute(AttributeKind),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub title: String,
    pub color: Color,
    pub kind: NodeKind,
    /// Name of the treatment this node belongs to.
    pub group: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

/// How attribute node identifiers are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeNaming {
    /// `<treatment label>/<attribute>`; coinciding values never collide.
    #[default]
    Namespaced,
    /// The display label doubles as identifier, so equal values collide.
    Plain,
}

/// Directed graph with insertion-ordered, unique node identifiers.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RelationshipGraph {
    nodes: IndexMap<String, GraphNode>,
    edges: Vec<GraphEdge>,
}

impl RelationshipGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node; an existing identifier is an error, never a merge.
    pub fn add_node(&mut self, node: GraphNode) -> DashboardResult<()> {
        match self.nodes.entry(node.id.clone()) {
            Entry::Occupied(existing) => Err(DashboardError::DuplicateNodeIdentifier(
                existing.key().clone(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(node);
                Ok(())
            }
        }
    }

    pub fn add_edge(&mut self, from: &str, to: &str) -> DashboardResult<()> {
        for endpoint in [from, to] {
            if !self.nodes.contains_key(endpoint) {
                return Err(DashboardError::InvalidDataset(format!(
                    "edge endpoint `{endpoint}` is not a graph node"
                )));
            }
        }
        self.edges.push(GraphEdge {
            from: from.to_owned(),
            to: to.to_owned(),
        });
        Ok(())
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    #[must_use]
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn edges_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.edges.iter().filter(move |edge| edge.from == id)
    }

    #[must_use]
    pub fn out_degree(&self, id: &str) -> usize {
        self.edges_from(id).count()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Links every treatment to its cost, reach and effectiveness nodes.
///
/// Hub nodes use the treatment's short label as identifier. Attribute nodes
/// inherit the treatment color.
pub fn build_relationship_graph(
    records: &[TreatmentRecord],
    naming: NodeNaming,
) -> DashboardResult<RelationshipGraph> {
    let mut graph = RelationshipGraph::new();
    for record in records {
        let hub_id = record.label().to_owned();
        graph.add_node(GraphNode {
            id: hub_id.clone(),
            label: hub_id.clone(),
            title: record.name.clone(),
            color: record.color,
            kind: NodeKind::Treatment,
            group: record.name.clone(),
        })?;

        for attribute in AttributeKind::ALL {
            let label = attribute.display_label(record);
            let id = match naming {
                NodeNaming::Namespaced => format!("{hub_id}/{}", attribute.key()),
                NodeNaming::Plain => label.clone(),
            };
            graph.add_node(GraphNode {
                id: id.clone(),
                label,
                title: attribute.title().to_owned(),
                color: record.color,
                kind: NodeKind::Attribute(attribute),
                group: record.name.clone(),
            })?;
            graph.add_edge(&hub_id, &id)?;
        }
    }
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        ?naming,
        "built relationship graph"
    );
    Ok(graph)
}

/// `1200 -> "$1.2K"`, `60000 -> "$60K"`, `950 -> "$950"`.
#[must_use]
pub fn format_currency_compact(amount: f64) -> String {
    // Unit comes from the rounded value: 999_990 is `$1M`.
    if round_tenths(amount / 1_000.0).abs() >= 1_000.0 {
        format!("${}M", format_compact(amount / 1_000_000.0))
    } else if round_tenths(amount).abs() >= 1_000.0 {
        format!("${}K", format_compact(amount / 1_000.0))
    } else {
        format!("${}", format_compact(amount))
    }
}

/// Rounds to one decimal and drops a trailing `.0`.
#[must_use]
pub fn format_compact(value: f64) -> String {
    let rounded = round_tenths(value);
    if rounded == rounded.trunc() {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
