use serde_json::json;

use super::GraphFormatter;
use crate::core::{DependencyGraph, Result};

/// Machine-readable graph dump with a small metadata header.
pub struct JsonCompactFormatter {
    /// Pretty-print instead of emitting a single line
    pretty: bool,
}

impl JsonCompactFormatter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonCompactFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for JsonCompactFormatter {
    fn format_graph(&self, graph: &DependencyGraph) -> Result<String> {
        let modules: Vec<_> = graph.nodes().collect();

        let output = json!({
            "meta": {
                "modules": graph.len(),
                "edges": graph.edge_count(),
            },
            "modules": modules,
        });

        let mut rendered = if self.pretty {
            serde_json::to_string_pretty(&output)
        } else {
            serde_json::to_string(&output)
        }?;
        rendered.push('\n');
        Ok(rendered)
    }
}
