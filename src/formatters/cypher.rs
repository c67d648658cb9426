use std::fmt::Write;

use super::GraphFormatter;
use crate::core::{DependencyGraph, Result};

/// Neo4j creation script: a `CREATE` per module, then one `CREATE` clause
/// holding every relationship. The clause line is written even when the
/// graph has no edges.
#[derive(Debug, Default)]
pub struct CypherFormatter;

impl CypherFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl GraphFormatter for CypherFormatter {
    fn format_graph(&self, graph: &DependencyGraph) -> Result<String> {
        let mut output = String::new();
        for id in graph.ids() {
            let _ = writeln!(output, "CREATE ({id}:Module {{name: '{id}'}})");
        }

        let relationships: Vec<String> = graph
            .edges()
            .into_iter()
            .map(|(module, dep)| format!("\t({module})-[:DEPENDS ]->({dep})"))
            .collect();

        output.push_str("CREATE\n");
        if !relationships.is_empty() {
            output.push_str(&relationships.join(",\n"));
            output.push('\n');
        }
        Ok(output)
    }
}
