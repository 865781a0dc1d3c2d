use crate::bump::BumpType;

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

pub fn display_classification(message: &str, bump: BumpType) {
    let header = message.lines().next().unwrap_or(message);
    let short_msg: String = header.chars().take(60).collect();

    println!("\n\x1b[1mClassifying commit message\x1b[0m");
    println!("  Message: {}", short_msg);
    println!("  Bump:    \x1b[32m{}\x1b[0m", bump);
}
