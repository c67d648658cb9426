use std::path::Path;

use super::config::ScanConfig;
use super::error::Result;
use super::{DependencyGraph, FileScanner, TreeWalker};

/// Runs the walk, scan and merge pipeline over a source tree.
pub struct ModuleGraphAnalyzer {
    tree_walker: TreeWalker,
    file_scanner: FileScanner,
}

impl ModuleGraphAnalyzer {
    pub fn new(config: &ScanConfig) -> Result<Self> {
        Ok(Self {
            tree_walker: TreeWalker::new(config.extension.clone()),
            file_scanner: config.compile()?,
        })
    }

    /// Scans every matching file under `root_path` and merges the results.
    ///
    /// Each file is scanned and merged before the next one is visited. An
    /// unreadable root or a file that fails to open or read aborts the run
    /// and no graph is returned.
    pub fn analyze(&self, root_path: &Path) -> Result<DependencyGraph> {
        log::info!(
            "Scanning {} for {} files",
            root_path.display(),
            self.tree_walker.extension()
        );

        let mut graph = DependencyGraph::new();
        let mut file_count = 0usize;

        for path in self.tree_walker.walk(root_path) {
            let path = path?;
            let node = self.file_scanner.scan(&path)?;
            log::debug!(
                "{} -> module `{}` with {} dependencies",
                path.display(),
                node.id,
                node.dependencies.len()
            );
            graph.merge(node);
            file_count += 1;
        }

        log::info!(
            "Scanned {} files into {} modules and {} edges",
            file_count,
            graph.len(),
            graph.edge_count()
        );

        Ok(graph)
    }
}
