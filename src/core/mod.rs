pub mod analyzer;
pub mod config;
pub mod error;
pub mod graph;
pub mod scanner;
pub mod transform;
pub mod walker;

pub use analyzer::ModuleGraphAnalyzer;
pub use config::{malformed_replacements, parse_replacements, ReplacementRule, ScanConfig};
pub use error::{ModgraphError, Result};
pub use graph::{DependencyGraph, Node};
pub use scanner::FileScanner;
pub use transform::NameTransformer;
pub use walker::TreeWalker;
