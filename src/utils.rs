//! Console logging helpers used by the demo binaries.

use colored::Colorize;

pub fn log(msg: &str) {
    println!("{} {}", "[INFO]".green(), msg);
}

pub fn warn(msg: &str) {
    println!("{} {}", "[WARN]".yellow(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), msg);
}
