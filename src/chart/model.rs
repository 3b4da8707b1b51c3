//! Sankey chart data types.

use crate::error::{ChartfmtError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A node in the Sankey diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SankeyNode {
    /// Identifier referenced by links.
    pub node_id: u32,
    /// Display name.
    pub name: String,
}

/// A weighted flow between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyLink {
    /// Id of the node the flow leaves.
    pub source: u32,
    /// Id of the node the flow enters.
    pub target: u32,
    /// Size of the flow.
    pub value: f64,
}

/// Nodes and links of a chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SankeyData {
    /// Chart nodes.
    #[serde(default)]
    pub nodes: Vec<SankeyNode>,
    /// Chart links.
    #[serde(default)]
    pub links: Vec<SankeyLink>,
}

/// A complete chart definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SankeyChart {
    /// Optional title.
    #[serde(rename = "chartTitle", default, skip_serializing_if = "Option::is_none")]
    pub chart_title: Option<String>,
    /// Nodes and links.
    #[serde(rename = "SankeyChartData")]
    pub data: SankeyData,
}

impl SankeyNode {
    /// Create a new node.
    pub fn new(node_id: u32, name: impl Into<String>) -> Self {
        Self {
            node_id,
            name: name.into(),
        }
    }
}

impl SankeyLink {
    /// Create a new link.
    pub fn new(source: u32, target: u32, value: f64) -> Self {
        Self {
            source,
            target,
            value,
        }
    }
}

impl SankeyChart {
    /// Create a chart from nodes and links.
    pub fn new(nodes: Vec<SankeyNode>, links: Vec<SankeyLink>) -> Self {
        Self {
            chart_title: None,
            data: SankeyData { nodes, links },
        }
    }

    /// Set the chart title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.chart_title = Some(title.into());
        self
    }

    /// Check that node ids are unique, that links only reference known
    /// nodes and that link values are finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::with_capacity(self.data.nodes.len());
        for node in &self.data.nodes {
            if !ids.insert(node.node_id) {
                return Err(ChartfmtError::DuplicateNode(node.node_id));
            }
        }

        for (index, link) in self.data.links.iter().enumerate() {
            for node_id in [link.source, link.target] {
                if !ids.contains(&node_id) {
                    return Err(ChartfmtError::UnknownNode {
                        link: index,
                        node_id,
                    });
                }
            }
            if !link.value.is_finite() || link.value < 0.0 {
                return Err(ChartfmtError::InvalidLinkValue {
                    link: index,
                    value: link.value,
                });
            }
        }

        Ok(())
    }

    /// Look up a node by id.
    pub fn node(&self, node_id: u32) -> Option<&SankeyNode> {
        self.data.nodes.iter().find(|node| node.node_id == node_id)
    }

    /// Size of every node, in node order: the larger of its inflow and outflow.
    pub fn node_sizes(&self) -> Vec<f64> {
        self.data
            .nodes
            .iter()
            .map(|node| {
                let (incoming, outgoing) =
                    self.data
                        .links
                        .iter()
                        .fold((0.0, 0.0), |(incoming, outgoing), link| {
                            let incoming = if link.target == node.node_id {
                                incoming + link.value
                            } else {
                                incoming
                            };
                            let outgoing = if link.source == node.node_id {
                                outgoing + link.value
                            } else {
                                outgoing
                            };
                            (incoming, outgoing)
                        });
                f64::max(incoming, outgoing)
            })
            .collect()
    }
}
