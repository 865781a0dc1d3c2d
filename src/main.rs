use anyhow::Result;
use clap::Parser;

mod bump;
mod config;
mod conventional;
mod error;
mod output;
mod ui;

use conventional::{Matcher, PatternConfig, CONVENTIONAL_PATTERN};
use error::CommitBumpError;

#[derive(clap::Parser)]
#[command(
    name = "commit-bump",
    about = "Classify a commit message against conventional commits and derive a semver bump"
)]
struct Args {
    #[arg(
        short,
        long,
        env = "INPUT_MESSAGE",
        help = "Commit message to classify"
    )]
    message: String,

    #[arg(
        long,
        env = "INPUT_KEYWORDS_MAJOR",
        help = "Comma-separated commit types that imply a major bump"
    )]
    keywords_major: Option<String>,

    #[arg(
        long,
        env = "INPUT_KEYWORDS_MINOR",
        help = "Comma-separated commit types that imply a minor bump"
    )]
    keywords_minor: Option<String>,

    #[arg(
        long,
        env = "INPUT_KEYWORDS_PATCH",
        help = "Comma-separated commit types that imply a patch bump"
    )]
    keywords_patch: Option<String>,

    #[arg(
        long,
        env = "INPUT_KEYWORDS_SCOPE",
        help = "Comma-separated allowed scopes (any scope allowed when omitted)"
    )]
    keywords_scope: Option<String>,

    #[arg(
        long,
        env = "INPUT_FORCE_SCOPE",
        help = "Pass the literal string 'true' to make the scope segment mandatory"
    )]
    force_scope: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Suppress terminal reporting")]
    quiet: bool,
}

/// Apply a raw override to a keyword group, keeping the existing value
/// when the override is absent or parses to nothing.
fn apply_override(target: &mut Vec<String>, raw: Option<&str>) {
    if let Some(raw) = raw {
        let parsed = config::parse_keyword_list(raw);
        if !parsed.is_empty() {
            *target = parsed;
        }
    }
}

fn main() {
    let args = Args::parse();
    let quiet = args.quiet;

    match run(args) {
        Ok(bump) => {
            if !quiet {
                ui::display_success(&format!("Classified as '{}' bump", bump));
            }
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            output::set_failed(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<bump::BumpType> {
    // Load configuration
    let mut cfg = config::load_config(args.config.as_deref())
        .map_err(|e| CommitBumpError::config(e.to_string()))?;

    // Environment/CLI inputs take precedence over the config file
    apply_override(&mut cfg.keywords.major, args.keywords_major.as_deref());
    apply_override(&mut cfg.keywords.minor, args.keywords_minor.as_deref());
    apply_override(&mut cfg.keywords.patch, args.keywords_patch.as_deref());
    apply_override(&mut cfg.scope.allowed, args.keywords_scope.as_deref());

    // Only the literal string "true" enables mandatory scope
    if let Some(force) = args.force_scope.as_deref() {
        cfg.scope.force = force == "true";
    }

    if !args.quiet {
        ui::display_status("Checking message against the conventional commit pattern...");
    }

    // Conformance check: a single matcher over the union of all keyword
    // groups, with the scope constraint applied
    let conformance = Matcher::build(&PatternConfig {
        types: cfg.keywords.union(),
        scopes: cfg.scope.allowed.clone(),
        force_scope: cfg.scope.force,
    })?;

    if !conformance.is_match(&args.message) {
        return Err(CommitBumpError::conformance(&args.message, CONVENTIONAL_PATTERN).into());
    }

    // Classification itself is scope-blind; only the conformance check
    // above enforces scope constraints
    let bump = bump::classify(
        &args.message,
        &cfg.keywords.major,
        &cfg.keywords.minor,
        &cfg.keywords.patch,
    )?;

    if !args.quiet {
        ui::display_classification(&args.message, bump);
    }

    output::set_output("bump", bump.as_str())?;

    Ok(bump)
}
