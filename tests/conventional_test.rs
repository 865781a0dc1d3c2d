// tests/conventional_test.rs
use commit_bump::{CommitBumpError, Matcher, PatternConfig};

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_matches_conventional_messages() {
    let matcher =
        Matcher::build(&PatternConfig::types_only(&strings(&["feat", "fix", "chore"]))).unwrap();

    for message in [
        "feat: add new feature",
        "fix(scope): fix a bug",
        "chore: update dependencies",
    ] {
        assert!(matcher.is_match(message), "Should match '{}'", message);
    }
}

#[test]
fn test_rejects_non_conventional_messages() {
    let matcher =
        Matcher::build(&PatternConfig::types_only(&strings(&["feat", "fix", "chore"]))).unwrap();

    for message in ["update README", "add new feature", "fix bug"] {
        assert!(!matcher.is_match(message), "Should not match '{}'", message);
    }
}

#[test]
fn test_leading_type_elsewhere_does_not_count() {
    let matcher = Matcher::build(&PatternConfig::types_only(&strings(&["fix"]))).unwrap();
    assert!(!matcher.is_match("revert fix: something"));
    assert!(!matcher.is_match(" fix: leading whitespace"));
}

#[test]
fn test_not_anchored_at_end() {
    let matcher = Matcher::build(&PatternConfig::types_only(&strings(&["feat"]))).unwrap();
    assert!(matcher.is_match("feat: header\n\nbody paragraph\n\nfooter: value"));
}

#[test]
fn test_type_must_match_byte_for_byte() {
    let matcher = Matcher::build(&PatternConfig::types_only(&strings(&["feat"]))).unwrap();
    assert!(!matcher.is_match("Feat: capitalized"));
    assert!(!matcher.is_match("feature: longer word sharing the prefix"));
}

#[test]
fn test_scope_filtering_optional_scope() {
    let config = PatternConfig {
        types: strings(&["feat"]),
        scopes: strings(&["a", "b"]),
        force_scope: false,
    };
    let matcher = Matcher::build(&config).unwrap();

    assert!(matcher.is_match("feat(a): x"));
    assert!(matcher.is_match("feat: x"));
    assert!(!matcher.is_match("feat(c): x"));
}

#[test]
fn test_scope_filtering_forced_scope() {
    let config = PatternConfig {
        types: strings(&["feat"]),
        scopes: strings(&["a", "b"]),
        force_scope: true,
    };
    let matcher = Matcher::build(&config).unwrap();

    assert!(matcher.is_match("feat(a): x"));
    assert!(!matcher.is_match("feat: x"));
    assert!(!matcher.is_match("feat(c): x"));
}

#[test]
fn test_forced_scope_with_allowed_list() {
    let config = PatternConfig {
        types: strings(&["feat", "fix"]),
        scopes: strings(&["core"]),
        force_scope: true,
    };
    let matcher = Matcher::build(&config).unwrap();

    assert!(matcher.is_match("feat(core): x"));
    assert!(!matcher.is_match("feat: x"));
    assert!(!matcher.is_match("feat(ui): x"));
}

#[test]
fn test_empty_scope_list_means_unconstrained() {
    let config = PatternConfig {
        types: strings(&["feat"]),
        scopes: Vec::new(),
        force_scope: false,
    };
    let matcher = Matcher::build(&config).unwrap();

    assert!(matcher.is_match("feat(anything): x"));
    assert!(matcher.is_match("feat(): x"));
    assert!(matcher.is_match("feat: x"));
}

#[test]
fn test_scope_exact_match_not_substring() {
    let config = PatternConfig {
        types: strings(&["feat"]),
        scopes: strings(&["core"]),
        force_scope: false,
    };
    let matcher = Matcher::build(&config).unwrap();

    assert!(!matcher.is_match("feat(corex): x"));
    assert!(!matcher.is_match("feat(xcore): x"));
}

#[test]
fn test_empty_type_vocabulary_fails_fast() {
    let result = Matcher::build(&PatternConfig::default());
    assert!(matches!(result, Err(CommitBumpError::Pattern(_))));
}
