//! Sankey chart data and its formatted labels.
//!
//! The JSON layout mirrors the chart component's props: a `chartTitle` and a
//! `SankeyChartData` object holding `nodes` and `links`.

mod demo;
mod labels;
mod model;
mod reader;

pub use labels::{LinkLabel, NodeLabel};
pub use model::{SankeyChart, SankeyData, SankeyLink, SankeyNode};
pub use reader::ChartReader;
