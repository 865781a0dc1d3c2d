use crate::error::Result;
use std::env;
use std::fs::OpenOptions;
use std::io::Write;

/// Publishes a single output value on the automation platform's channel.
///
/// When `GITHUB_OUTPUT` points at a file, the value is appended there in
/// `name=value` form, the format workflow steps consume. Outside a
/// workflow run the pair is printed to stdout so local invocations still
/// show the result.
pub fn set_output(name: &str, value: &str) -> Result<()> {
    if let Ok(path) = env::var("GITHUB_OUTPUT") {
        if !path.is_empty() {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{}={}", name, value)?;
            return Ok(());
        }
    }

    println!("{}={}", name, value);
    Ok(())
}

/// Reports a terminal failure through the workflow annotation channel.
///
/// Emits an `::error::` line, which the platform renders as a step error
/// annotation. The caller is responsible for exiting with a non-zero
/// status; no output value is published on failure.
pub fn set_failed(message: &str) {
    // Annotation text must stay on one line
    println!("::error::{}", message.replace('\n', "%0A"));
}
