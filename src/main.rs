//! Binary entry point for `new-module`.

use colored::Colorize;
use std::process;

fn main() {
    if let Err(e) = new_module::run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
