//! # MODGRAPH
//!
//! Module dependency graph extraction driven by two regular expressions.
//!
//! Every file with the configured extension is scanned line by line: one
//! pattern captures the file's own module id, the other captures each module
//! it depends on. Names are canonicalized through ordered replacement rules
//! and depth truncation, then files sharing a module id are merged into a
//! single node.
//!
//! ## Output Formats
//!
//! - **Plain text**: module ids with arrow-prefixed dependency lines
//! - **DOT**: Graphviz digraph
//! - **Cypher**: Neo4j creation script
//! - **JSON-Compact**: modules and dependency lists for programmatic use

pub mod core;
pub mod formatters;
