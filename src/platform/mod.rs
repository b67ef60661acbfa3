//! Platform Abstraction Layer
//!
//! The interpreter never renders anything. A platform provides a
//! [`Console`] that shows transcript lines, and [`flush`] hands it whatever
//! the terminal produced since the last call:
//!
//! - Browser (via wasm-bindgen, web-sys): `<div>` per line in the page
//! - Native (the `gitlearn-cli` binary): stdout

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::error::GitLearnResult;
use crate::shell::{Terminal, TerminalLine};

/// Where transcript lines end up
pub trait Console {
    /// Append lines after everything already shown
    fn write_lines(&mut self, lines: &[TerminalLine]) -> GitLearnResult<()>;

    /// Remove everything shown so far
    fn clear(&mut self) -> GitLearnResult<()>;
}

/// Push pending transcript changes to a console
pub fn flush(term: &mut Terminal, console: &mut impl Console) -> GitLearnResult<()> {
    let update = term.take_updates();
    if update.cleared {
        console.clear()?;
    }
    if !update.lines.is_empty() {
        console.write_lines(&update.lines)?;
    }
    Ok(())
}
