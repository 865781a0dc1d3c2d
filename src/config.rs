use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for commit-bump.
///
/// Contains the keyword groups mapped to each bump type and the scope
/// constraints applied during the conformance check.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub keywords: KeywordsConfig,

    #[serde(default)]
    pub scope: ScopeConfig,
}

/// Returns the default keywords that classify as a major bump.
fn default_major_keywords() -> Vec<String> {
    vec!["major".to_string(), "breaking".to_string()]
}

/// Returns the default keywords that classify as a minor bump.
fn default_minor_keywords() -> Vec<String> {
    vec!["minor".to_string(), "feat".to_string(), "ft".to_string()]
}

/// Returns the default keywords that classify as a patch bump.
fn default_patch_keywords() -> Vec<String> {
    vec![
        "patch".to_string(),
        "fix".to_string(),
        "chore".to_string(),
        "docs".to_string(),
    ]
}

/// Keyword groups mapped to each bump type.
///
/// Each group is an ordered list of commit-type identifiers. Overlap
/// between groups is not rejected; classification resolves it in favor
/// of the larger bump.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct KeywordsConfig {
    #[serde(default = "default_major_keywords")]
    pub major: Vec<String>,

    #[serde(default = "default_minor_keywords")]
    pub minor: Vec<String>,

    #[serde(default = "default_patch_keywords")]
    pub patch: Vec<String>,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        KeywordsConfig {
            major: default_major_keywords(),
            minor: default_minor_keywords(),
            patch: default_patch_keywords(),
        }
    }
}

impl KeywordsConfig {
    /// All keywords across the three groups, in major, minor, patch order.
    ///
    /// Used to build the single conformance matcher that a message must
    /// satisfy before classification.
    pub fn union(&self) -> Vec<String> {
        let mut all = Vec::with_capacity(self.major.len() + self.minor.len() + self.patch.len());
        all.extend(self.major.iter().cloned());
        all.extend(self.minor.iter().cloned());
        all.extend(self.patch.iter().cloned());
        all
    }
}

/// Scope constraints applied during the conformance check.
///
/// An empty `allowed` list permits any scope. `force` makes the scope
/// segment mandatory.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ScopeConfig {
    #[serde(default)]
    pub allowed: Vec<String>,

    #[serde(default)]
    pub force: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            keywords: KeywordsConfig::default(),
            scope: ScopeConfig::default(),
        }
    }
}

/// Parses a comma-separated keyword list into trimmed, non-empty identifiers.
///
/// This is the only place raw configuration text is split; the core
/// receives ready-made identifier sequences and never re-parses strings.
/// An input of only commas and whitespace yields an empty list.
pub fn parse_keyword_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `commit-bump.toml` in current directory
/// 3. `~/.config/.commit-bump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./commit-bump.toml").exists() {
        fs::read_to_string("./commit-bump.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".commit-bump.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
