use super::config::ReplacementRule;

/// Canonicalizes raw matched names into graph node ids.
#[derive(Debug, Clone)]
pub struct NameTransformer {
    rules: Vec<ReplacementRule>,
    max_depth: usize,
    separator: char,
}

impl NameTransformer {
    pub fn new(rules: Vec<ReplacementRule>, max_depth: usize, separator: char) -> Self {
        Self {
            rules,
            max_depth,
            separator,
        }
    }

    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    /// The first rule whose pattern matches anywhere in `name` wins and its
    /// replacement is returned as is, skipping truncation. Otherwise the name
    /// is cut at the `max_depth`-th separator when it has that many.
    pub fn transform(&self, name: &str) -> String {
        if let Some(rule) = self.rules.iter().find(|rule| rule.matches(name)) {
            return rule.replacement.clone();
        }

        if self.max_depth > 0 {
            if let Some((cut, _)) = name.match_indices(self.separator).nth(self.max_depth - 1) {
                return name[..cut].to_string();
            }
        }

        name.to_string()
    }
}
