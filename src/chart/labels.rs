//! Formatted link and node labels.

use super::SankeyChart;
use crate::format::NumberFormatter;

/// Label text for one link.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkLabel {
    /// Source node name.
    pub from: String,
    /// Target node name.
    pub to: String,
    /// Raw link value.
    pub value: f64,
    /// Formatted value.
    pub text: String,
}

/// Label text for one node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeLabel {
    /// Node name.
    pub name: String,
    /// Node size.
    pub size: f64,
    /// Formatted size.
    pub text: String,
}

impl SankeyChart {
    fn node_name(&self, node_id: u32) -> String {
        self.node(node_id)
            .map_or_else(|| node_id.to_string(), |node| node.name.clone())
    }

    /// Labels for every link, in link order.
    pub fn link_labels(&self, formatter: &NumberFormatter) -> Vec<LinkLabel> {
        self.data
            .links
            .iter()
            .map(|link| LinkLabel {
                from: self.node_name(link.source),
                to: self.node_name(link.target),
                value: link.value,
                text: formatter.format(Some(link.value)),
            })
            .collect()
    }

    /// Labels for every node, in node order.
    pub fn node_labels(&self, formatter: &NumberFormatter) -> Vec<NodeLabel> {
        self.data
            .nodes
            .iter()
            .zip(self.node_sizes())
            .map(|(node, size)| NodeLabel {
                name: node.name.clone(),
                size,
                text: formatter.format(Some(size)),
            })
            .collect()
    }
}
