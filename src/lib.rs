//! gitlearn - a git command simulator for the browser
//!
//! Design principles:
//! - Teach the shape of git commands, not the internals
//! - Every output line is deterministic except commit ids and dates
//! - The interpreter never renders; platforms do
//!
//! Platform support:
//! - Browser (wasm32-unknown-unknown): DOM transcript, mission buttons
//! - Native: `gitlearn-cli` REPL over stdin/stdout

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod mission;
pub mod platform;
pub mod repo;
pub mod shell;

#[cfg(target_arch = "wasm32")]
mod boot;

pub use config::SimConfig;
pub use error::{CommandError, GitLearnError, GitLearnResult};
pub use shell::Terminal;

/// Initialize panic hook for better error messages in browser console
#[cfg(target_arch = "wasm32")]
fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Boot the simulator. This is the WASM entry point.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    init_panic_hook();
    platform::web::ConsoleLogger::init(log::LevelFilter::Info);
    if let Err(e) = boot::boot() {
        log::error!("boot failed: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn to_js(e: GitLearnError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Run a command line as if typed into the terminal
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn gitlearn_submit(line: &str) -> Result<(), JsValue> {
    boot::submit(line).map_err(to_js)
}

/// Start mission `n`, reveal the terminal and focus its input
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn gitlearn_start_mission(n: u32) -> Result<(), JsValue> {
    boot::start_mission(n).map_err(to_js)
}

/// Session state as JSON
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn gitlearn_snapshot() -> Result<String, JsValue> {
    boot::snapshot().map_err(to_js)
}
