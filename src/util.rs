//! Text layout helpers for label listings.

use crate::chart::{LinkLabel, NodeLabel, SankeyChart};
use crate::format::NumberFormatter;
use unicode_width::UnicodeWidthStr;

/// Render two columns, padding the first to its widest entry by display width.
pub fn render_table(heading: &str, rows: &[(String, String)]) -> String {
    let mut text = format!("{}:\n", heading);
    let width = rows.iter().map(|(key, _)| key.width()).max().unwrap_or(0);

    for (key, value) in rows {
        let padding = " ".repeat(width - key.width());
        let line = format!("  {}{}  {}", key, padding, value);
        text.push_str(line.trim_end());
        text.push('\n');
    }

    text
}

fn link_rows(labels: &[LinkLabel]) -> Vec<(String, String)> {
    labels
        .iter()
        .map(|label| (format!("{} → {}", label.from, label.to), label.text.clone()))
        .collect()
}

fn node_rows(labels: &[NodeLabel]) -> Vec<(String, String)> {
    labels
        .iter()
        .map(|label| (label.name.clone(), label.text.clone()))
        .collect()
}

/// Render a chart's title, link labels and node labels.
pub fn render_chart(chart: &SankeyChart, formatter: &NumberFormatter) -> String {
    let mut text = String::new();

    if let Some(ref title) = chart.chart_title {
        text.push_str(&format!("{}\n", title));
        text.push_str(&"=".repeat(title.width()));
        text.push_str("\n\n");
    }

    text.push_str(&render_table(
        "Links",
        &link_rows(&chart.link_labels(formatter)),
    ));
    text.push('\n');
    text.push_str(&render_table(
        "Nodes",
        &node_rows(&chart.node_labels(formatter)),
    ));

    text
}
