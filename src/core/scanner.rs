use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::{ModgraphError, Result};
use super::graph::Node;
use super::transform::NameTransformer;

/// Extracts one [`Node`] per source file by matching each line against the
/// module-id and dependency patterns.
///
/// Matching is strictly per line: a declaration split over several lines is
/// not recognized.
#[derive(Debug, Clone)]
pub struct FileScanner {
    module_id: Regex,
    dependency: Regex,
    ignore: Option<Regex>,
    transformer: NameTransformer,
}

impl FileScanner {
    pub fn new(
        module_id: Regex,
        dependency: Regex,
        ignore: Option<Regex>,
        transformer: NameTransformer,
    ) -> Self {
        Self {
            module_id,
            dependency,
            ignore,
            transformer,
        }
    }

    pub fn transformer(&self) -> &NameTransformer {
        &self.transformer
    }

    pub fn scan(&self, path: &Path) -> Result<Node> {
        let file = File::open(path).map_err(|source| ModgraphError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.scan_reader(BufReader::new(file), path)
    }

    /// Scans any buffered source; `path` is only used for error reporting.
    pub fn scan_reader<R: BufRead>(&self, mut reader: R, path: &Path) -> Result<Node> {
        let mut raw_id: Option<String> = None;
        let mut node = Node::default();
        let mut buf = Vec::with_capacity(256);

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| ModgraphError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
            if read == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches('\n').trim_end_matches('\r');

            // later declarations override earlier ones
            if let Some(id) = first_capture(&self.module_id, line) {
                raw_id = Some(id.to_string());
            }

            if let Some(dependency) = first_capture(&self.dependency, line) {
                if self.is_ignored(dependency) {
                    log::trace!("Ignoring dependency {dependency} in {}", path.display());
                    continue;
                }
                node.add_dependency(self.transformer.transform(dependency));
            }
        }

        if let Some(raw_id) = raw_id {
            node.id = self.transformer.transform(&raw_id);
        } else {
            log::debug!("No module id found in {}", path.display());
        }

        Ok(node)
    }

    fn is_ignored(&self, dependency: &str) -> bool {
        self.ignore
            .as_ref()
            .is_some_and(|ignore| ignore.is_match(dependency))
    }
}

fn first_capture<'a>(regex: &Regex, line: &'a str) -> Option<&'a str> {
    regex
        .captures(line)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
}
