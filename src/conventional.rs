use crate::error::{CommitBumpError, Result};
use regex::Regex;

/// Human-readable template of the accepted header shape, used in
/// conformance error reporting.
pub const CONVENTIONAL_PATTERN: &str = "<type>(<scope?>): <description>";

/// Configuration for building a conventional-commit header matcher.
///
/// `types` is the accepted commit-type vocabulary and must be non-empty.
/// `scopes`, when non-empty, restricts the parenthesized scope segment to
/// the listed identifiers; when empty, any scope text is allowed. The
/// scope segment itself is optional unless `force_scope` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternConfig {
    pub types: Vec<String>,
    pub scopes: Vec<String>,
    pub force_scope: bool,
}

impl PatternConfig {
    /// Build a pattern config over a type vocabulary with no scope constraint.
    pub fn types_only(types: &[String]) -> Self {
        PatternConfig {
            types: types.to_vec(),
            scopes: Vec::new(),
            force_scope: false,
        }
    }
}

/// Predicate over commit messages for a fixed type/scope configuration.
///
/// Accepts a message iff its header starts with one of the configured
/// types, optionally followed by a `(scope)` segment, followed by the
/// literal `: ` separator. Matching is anchored to the start of the
/// string and case-sensitive; trailing description text is never
/// inspected.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Compile a matcher from the given pattern configuration.
    ///
    /// Type and scope identifiers are matched literally (regex
    /// metacharacters in configuration are escaped, not interpreted).
    ///
    /// # Errors
    /// Fails with a pattern error when the type vocabulary is empty.
    pub fn build(config: &PatternConfig) -> Result<Matcher> {
        if config.types.is_empty() {
            return Err(CommitBumpError::pattern(
                "at least one commit type keyword is required",
            ));
        }

        let types = config
            .types
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");

        // An empty scope list means "no constraint", not "empty scope only"
        let scope = if config.scopes.is_empty() {
            "[^)]*".to_string()
        } else {
            config
                .scopes
                .iter()
                .map(|s| regex::escape(s))
                .collect::<Vec<_>>()
                .join("|")
        };

        let scope_repetition = if config.force_scope { "" } else { "?" };

        let pattern = format!("^(?:{types})(?:\\((?:{scope})\\)){scope_repetition}: ");
        let regex = Regex::new(&pattern)
            .map_err(|e| CommitBumpError::pattern(format!("invalid header pattern: {e}")))?;

        Ok(Matcher { regex })
    }

    /// Test whether a commit message satisfies this matcher.
    pub fn is_match(&self, message: &str) -> bool {
        self.regex.is_match(message)
    }
}
