use crate::conventional::{Matcher, PatternConfig};
use crate::error::{CommitBumpError, Result};

/// Represents the semantic version component a commit implies should be
/// incremented.
///
/// There is deliberately no "none" variant: a message whose type falls
/// into no configured keyword group is a classification failure, not a
/// fourth category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpType {
    Major,
    Minor,
    Patch,
}

impl BumpType {
    /// Lowercase name as published on the output channel.
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpType::Major => "major",
            BumpType::Minor => "minor",
            BumpType::Patch => "patch",
        }
    }
}

impl std::fmt::Display for BumpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a commit message into a bump type from three keyword groups.
///
/// One matcher is built per group, each with an unconstrained scope, and
/// the message is tested in strict major → minor → patch order; the first
/// acceptance wins. A keyword listed in more than one group therefore
/// resolves to the largest bump. Scope filtering is not applied here; it
/// belongs to the caller's conformance check.
///
/// # Errors
/// Fails with a no-match error carrying the message when no group
/// accepts it, or with a pattern error when a group is empty.
pub fn classify(
    message: &str,
    major: &[String],
    minor: &[String],
    patch: &[String],
) -> Result<BumpType> {
    let groups = [
        (BumpType::Major, major),
        (BumpType::Minor, minor),
        (BumpType::Patch, patch),
    ];

    for (bump, keywords) in groups {
        let matcher = Matcher::build(&PatternConfig::types_only(keywords))?;
        if matcher.is_match(message) {
            return Ok(bump);
        }
    }

    Err(CommitBumpError::no_match(message))
}
