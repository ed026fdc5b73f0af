//! Theme Compiler Binary

use std::process;
use themec::{ThemeCli, ThemeError};

fn main() {
    let mut cli = ThemeCli::new();

    match cli.run() {
        Ok(()) => {}
        Err(ThemeError::Io(e)) => {
            eprintln!("IO Error: {}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Compilation failed: {}", e);
            process::exit(1);
        }
    }
}
