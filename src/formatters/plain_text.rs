use std::fmt::Write;

use super::GraphFormatter;
use crate::core::{DependencyGraph, Result};

pub const ARROW: &str = "---> ";

/// One line per module followed by an arrow line per dependency.
#[derive(Debug, Default)]
pub struct PlainTextFormatter;

impl PlainTextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl GraphFormatter for PlainTextFormatter {
    fn format_graph(&self, graph: &DependencyGraph) -> Result<String> {
        let mut output = String::new();
        for node in graph.nodes() {
            let _ = writeln!(output, "{}", node.id);
            for dep in &node.dependencies {
                let _ = writeln!(output, "{ARROW} {dep}");
            }
        }
        Ok(output)
    }
}
