pub mod bump;
pub mod config;
pub mod conventional;
pub mod error;
pub mod output;
pub mod ui;

pub use bump::{classify, BumpType};
pub use conventional::{Matcher, PatternConfig, CONVENTIONAL_PATTERN};
pub use error::{CommitBumpError, Result};
