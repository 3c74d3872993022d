// src/rules/list.rs

use std::fmt;

use anyhow::{Context, Result};

use crate::rules::rule::Rule;

/// An ordered, immutable list of compiled rules evaluated with logical OR.
#[derive(Clone, Default)]
pub struct RuleList {
    name: &'static str,
    rules: Vec<Rule>,
}

impl fmt::Debug for RuleList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleList")
            .field("name", &self.name)
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl RuleList {
    /// Compile every raw rule, keeping configuration order.
    ///
    /// `name` is only used in diagnostics (e.g. `"ignored_paths"`).
    pub fn compile<S: AsRef<str>>(name: &'static str, raw_rules: &[S]) -> Result<Self> {
        let mut rules = Vec::with_capacity(raw_rules.len());
        for raw in raw_rules {
            let raw = raw.as_ref();
            let rule = Rule::parse(raw)
                .with_context(|| format!("invalid rule {raw:?} in {name}"))?;
            rules.push(rule);
        }
        Ok(Self { name, rules })
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns true if any rule matches the entry.
    pub fn matches(&self, rel_path: &str, entry_name: &str) -> bool {
        self.matched_rule(rel_path, entry_name).is_some()
    }

    /// First rule (in configuration order) matching the entry, if any.
    pub fn matched_rule(&self, rel_path: &str, entry_name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.matches(rel_path, entry_name))
    }

    /// Rule hiding `rel_path` or any of its ancestors below the root.
    ///
    /// The walker never descends into a hidden directory, so anything below
    /// one is hidden as well, even when the rule only matches the ancestor's
    /// name (e.g. a file rule matching a directory).
    pub fn rule_hiding_path(&self, rel_path: &str) -> Option<&Rule> {
        let rel_path = rel_path.trim_matches('/');
        if rel_path.is_empty() {
            return None;
        }

        let mut end = 0;
        for segment in rel_path.split('/') {
            end += segment.len();
            let prefix = &rel_path[..end];
            if let Some(rule) = self.matched_rule(prefix, segment) {
                return Some(rule);
            }
            end += 1;
        }
        None
    }
}
