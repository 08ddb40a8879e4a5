//! Null-safety demonstration binary.
//!
//! Accepts (and ignores) any command-line arguments, then prints the four
//! demonstration lines to stdout.

use std::io;

use anyhow::Result;
use nullsafe::demo;

fn main() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&mut out)?;
    Ok(())
}
