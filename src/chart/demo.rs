//! Built-in demo chart.

use super::{SankeyChart, SankeyLink, SankeyNode};

impl SankeyChart {
    /// Seven nodes and eight links whose values span hundreds to billions.
    pub fn demo() -> Self {
        let names = ["First", "Second", "Third", "Fourth", "Five", "Six", "Seven"];
        let nodes = names
            .iter()
            .zip(0u32..)
            .map(|(name, id)| SankeyNode::new(id, *name))
            .collect();

        let links = vec![
            SankeyLink::new(0, 1, 1_234_567_890.0),
            SankeyLink::new(0, 2, 100_000_000.0),
            SankeyLink::new(0, 5, 1_234.0),
            SankeyLink::new(0, 6, 100.0),
            SankeyLink::new(1, 3, 1_000_000_000.0),
            SankeyLink::new(1, 4, 234_567_890.0),
            SankeyLink::new(2, 3, 1_000.0),
            SankeyLink::new(2, 4, 9_999_000.0),
        ];

        Self::new(nodes, links).with_title("Sankey Chart")
    }
}
