pub mod cypher;
pub mod dot;
pub mod json_compact;
pub mod plain_text;

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::core::{DependencyGraph, Result};

pub use cypher::CypherFormatter;
pub use dot::DotFormatter;
pub use json_compact::JsonCompactFormatter;
pub use plain_text::PlainTextFormatter;

/// Renders a finished graph as text. Formatters never mutate the graph.
pub trait GraphFormatter {
    fn format_graph(&self, graph: &DependencyGraph) -> Result<String>;

    fn write_to(&self, graph: &DependencyGraph, out: &mut dyn Write) -> Result<()> {
        out.write_all(self.format_graph(graph)?.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn format_to_file(&self, graph: &DependencyGraph, output_path: &Path) -> Result<()> {
        fs::write(output_path, self.format_graph(graph)?)?;
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    PlainText,
    Dot,
    Cypher,
    JsonCompact,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::PlainText => "plain-text",
            OutputFormat::Dot => "dot",
            OutputFormat::Cypher => "cypher",
            OutputFormat::JsonCompact => "json-compact",
        }
    }

    /// `title` is only used by the DOT output.
    pub fn formatter(self, title: &str) -> Box<dyn GraphFormatter> {
        match self {
            OutputFormat::PlainText => Box::new(PlainTextFormatter::new()),
            OutputFormat::Dot => Box::new(DotFormatter::new(title)),
            OutputFormat::Cypher => Box::new(CypherFormatter::new()),
            OutputFormat::JsonCompact => Box::new(JsonCompactFormatter::new()),
        }
    }
}
