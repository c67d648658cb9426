use std::fmt::Write;

use super::GraphFormatter;
use crate::core::{DependencyGraph, Result};

pub const DEFAULT_TITLE: &str = "Dependencies";

/// Graphviz digraph with one unattributed edge per dependency.
#[derive(Debug)]
pub struct DotFormatter {
    title: String,
}

impl DotFormatter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl GraphFormatter for DotFormatter {
    fn format_graph(&self, graph: &DependencyGraph) -> Result<String> {
        let mut output = format!("digraph \"{}\" {{\n", self.title);
        for (module, dep) in graph.edges() {
            let _ = writeln!(output, "\"{module}\" -> \"{dep}\"");
        }
        output.push_str("}\n");
        Ok(output)
    }
}
