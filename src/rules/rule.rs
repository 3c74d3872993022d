// src/rules/rule.rs

use std::fmt;

use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobMatcher};

/// How a rule is interpreted once normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Trailing `/`: matches any path segment equal to the body, at any depth.
    Directory,
    /// No `*`: the entry name must equal the body exactly.
    ExactFile,
    /// Contains `*`: the entry name must match the body as a whole.
    WildcardFile,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RuleKind::Directory => "directory",
            RuleKind::ExactFile => "exact-file",
            RuleKind::WildcardFile => "wildcard-file",
        };
        f.write_str(s)
    }
}

#[derive(Clone)]
enum NameMatcher {
    Segment,
    Exact,
    Wildcard(GlobMatcher),
}

/// A single ignore rule, compiled once at load time.
///
/// Normalization:
/// - a leading `./` is stripped;
/// - a trailing `/` marks a directory rule and is stripped.
///
/// File rules are evaluated against the entry name only, never against the
/// full relative path. A doubled `**` gets no recursive meaning: it behaves
/// like a single `*` within the final segment.
#[derive(Clone)]
pub struct Rule {
    raw: String,
    kind: RuleKind,
    body: String,
    matcher: NameMatcher,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("raw", &self.raw)
            .field("kind", &self.kind)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

impl Rule {
    /// Parse and compile a raw rule string.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut body = raw.strip_prefix("./").unwrap_or(raw);

        let is_dir = body.ends_with('/');
        if is_dir {
            body = &body[..body.len() - 1];
        }

        let (kind, matcher) = if is_dir {
            (RuleKind::Directory, NameMatcher::Segment)
        } else if body.contains('*') {
            let glob = compile_wildcard(body)
                .with_context(|| format!("compiling wildcard rule {raw:?}"))?;
            (RuleKind::WildcardFile, NameMatcher::Wildcard(glob))
        } else {
            (RuleKind::ExactFile, NameMatcher::Exact)
        };

        Ok(Self {
            raw: raw.to_string(),
            kind,
            body: body.to_string(),
            matcher,
        })
    }

    /// The rule exactly as written in the configuration.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Normalized body (prefix `./` and trailing `/` removed).
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns true if this rule matches an entry.
    ///
    /// - `rel_path` is relative to the scan root and uses `/` separators,
    ///   e.g. `"packages/app/node_modules"`.
    /// - `entry_name` is the final segment of that path.
    pub fn matches(&self, rel_path: &str, entry_name: &str) -> bool {
        match &self.matcher {
            NameMatcher::Segment => rel_path.split('/').any(|seg| seg == self.body),
            NameMatcher::Exact => entry_name == self.body,
            NameMatcher::Wildcard(glob) => glob.is_match(entry_name),
        }
    }
}

/// Build an anchored matcher where `*` is the only metacharacter.
///
/// Runs of `*` collapse into one so `**` never turns into a recursive
/// prefix. Everything else is matched literally.
fn compile_wildcard(body: &str) -> Result<GlobMatcher> {
    let mut pattern = String::with_capacity(body.len() + 8);
    let mut prev_star = false;

    for c in body.chars() {
        match c {
            '*' => {
                if !prev_star {
                    pattern.push('*');
                }
                prev_star = true;
                continue;
            }
            '?' | '[' | ']' | '{' | '}' => {
                pattern.push('[');
                pattern.push(c);
                pattern.push(']');
            }
            c => pattern.push(c),
        }
        prev_star = false;
    }

    let glob = GlobBuilder::new(&pattern)
        .literal_separator(true)
        .backslash_escape(false)
        .case_insensitive(false)
        .build()?;
    Ok(glob.compile_matcher())
}
