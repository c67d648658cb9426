use regex::Regex;

use super::error::{ModgraphError, Result};
use super::scanner::FileScanner;
use super::transform::NameTransformer;

pub const DEFAULT_EXTENSION: &str = ".elm";
pub const DEFAULT_MODULE_ID_PATTERN: &str = r"module ([a-zA-Z0-9\.]+) ";
pub const DEFAULT_DEPENDENCY_PATTERN: &str = r"import ([a-zA-Z0-9\.]+) ";
pub const DEFAULT_SEPARATOR: char = '.';

/// Separates `newName!!!pattern` pairs in a replacement specification.
pub const RULE_DELIMITER: &str = "@@@";
/// Separates the two fields of a single pair.
pub const FIELD_DELIMITER: &str = "!!!";

/// Settings for one extraction run. Built once, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub extension: String,
    pub module_id_pattern: String,
    pub dependency_pattern: String,
    pub ignore_pattern: Option<String>,
    pub replacements: Option<String>,
    /// Number of separator-delimited levels kept in a name; 0 keeps everything.
    pub max_depth: usize,
    pub separator: char,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            module_id_pattern: DEFAULT_MODULE_ID_PATTERN.to_string(),
            dependency_pattern: DEFAULT_DEPENDENCY_PATTERN.to_string(),
            ignore_pattern: None,
            replacements: None,
            max_depth: 0,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl ScanConfig {
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_module_id_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.module_id_pattern = pattern.into();
        self
    }

    pub fn with_dependency_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.dependency_pattern = pattern.into();
        self
    }

    pub fn with_ignore_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.ignore_pattern = Some(pattern.into());
        self
    }

    pub fn with_replacements(mut self, replacements: impl Into<String>) -> Self {
        self.replacements = Some(replacements.into());
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Replacement pairs that [`ScanConfig::compile`] will skip.
    pub fn malformed_replacements(&self) -> Vec<&str> {
        self.replacements
            .as_deref()
            .map(malformed_replacements)
            .unwrap_or_default()
    }

    /// Compiles the patterns into a ready-to-use scanner.
    ///
    /// The module-id and dependency patterns are mandatory and must each
    /// carry exactly one capture group. The ignore pattern and replacement
    /// rules degrade to "never matches" when they fail to compile.
    pub fn compile(&self) -> Result<FileScanner> {
        let module_id = capture_pattern("module-id", &self.module_id_pattern)?;
        let dependency = capture_pattern("dependency", &self.dependency_pattern)?;

        let ignore = self
            .ignore_pattern
            .as_deref()
            .filter(|pattern| !pattern.is_empty())
            .and_then(|pattern| match Regex::new(pattern) {
                Ok(regex) => Some(regex),
                Err(err) => {
                    log::warn!("Ignore pattern `{pattern}` does not compile, ignoring it: {err}");
                    None
                }
            });

        let rules = self
            .replacements
            .as_deref()
            .map(parse_replacements)
            .unwrap_or_default();

        let transformer = NameTransformer::new(rules, self.max_depth, self.separator);
        Ok(FileScanner::new(module_id, dependency, ignore, transformer))
    }
}

fn capture_pattern(name: &'static str, pattern: &str) -> Result<Regex> {
    let regex = Regex::new(pattern).map_err(|source| ModgraphError::InvalidPattern {
        name,
        pattern: pattern.to_string(),
        source,
    })?;

    // captures_len counts the implicit whole-match group
    let found = regex.captures_len() - 1;
    if found != 1 {
        return Err(ModgraphError::CaptureGroups {
            name,
            pattern: pattern.to_string(),
            found,
        });
    }
    Ok(regex)
}

/// One `newName!!!pattern` entry. A pattern that failed to compile is kept
/// so rule positions stay stable, but it never matches.
#[derive(Debug, Clone)]
pub struct ReplacementRule {
    pub replacement: String,
    pub pattern: String,
    regex: Option<Regex>,
}

impl ReplacementRule {
    pub fn new(replacement: impl Into<String>, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let regex = match Regex::new(&pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                log::warn!("Replacement pattern `{pattern}` does not compile, rule disabled: {err}");
                None
            }
        };
        Self {
            replacement: replacement.into(),
            pattern,
            regex,
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.as_ref().is_some_and(|regex| regex.is_match(name))
    }
}

/// Splits a replacement specification into ordered rules.
///
/// Pairs with the wrong number of fields are skipped; see
/// [`malformed_replacements`] for reporting them.
pub fn parse_replacements(spec: &str) -> Vec<ReplacementRule> {
    split_pairs(spec)
        .filter_map(|pair| pair.ok())
        .map(|(replacement, pattern)| ReplacementRule::new(replacement, pattern))
        .collect()
}

/// The parts of a replacement specification that are not `newName!!!pattern`.
pub fn malformed_replacements(spec: &str) -> Vec<&str> {
    split_pairs(spec).filter_map(|pair| pair.err()).collect()
}

fn split_pairs(spec: &str) -> impl Iterator<Item = std::result::Result<(&str, &str), &str>> {
    spec.split(RULE_DELIMITER)
        .filter(move |_| !spec.is_empty())
        .map(|part| {
            let mut fields = part.split(FIELD_DELIMITER);
            match (fields.next(), fields.next(), fields.next()) {
                (Some(replacement), Some(pattern), None) => Ok((replacement, pattern)),
                _ => Err(part),
            }
        })
}
