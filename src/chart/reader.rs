//! Chart data file reader.

use super::SankeyChart;
use crate::error::{ChartfmtError, Result};
use std::path::Path;

/// Reads chart definitions from JSON files.
#[derive(Debug)]
pub struct ChartReader;

impl ChartReader {
    /// Read and validate a chart file.
    pub fn read_file(path: &Path) -> Result<SankeyChart> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ChartfmtError::file_open(path.to_path_buf(), e))?;
        Self::read_str(&contents, path)
    }

    /// Parse and validate chart JSON; `path` is only used in errors.
    pub fn read_str(contents: &str, path: &Path) -> Result<SankeyChart> {
        let chart: SankeyChart =
            serde_json::from_str(contents).map_err(|source| ChartfmtError::ChartParse {
                path: path.to_path_buf(),
                source,
            })?;
        chart.validate()?;

        tracing::debug!(
            path = %path.display(),
            nodes = chart.data.nodes.len(),
            links = chart.data.links.len(),
            "loaded chart"
        );
        Ok(chart)
    }
}
