//! Browser Platform Implementation
//!
//! Provides platform support for running in web browsers via:
//! - DOM elements for the transcript
//! - An optional JSON `<script>` block for configuration
//! - The browser console for `log` records

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use super::Console;
use crate::config::{DomConfig, SimConfig};
use crate::error::{GitLearnError, GitLearnResult};
use crate::shell::TerminalLine;

/// Id of the optional config block
pub const CONFIG_ELEMENT_ID: &str = "gitlearn-config";

/// Look up an element that must exist
pub fn element_by_id(document: &Document, id: &str) -> GitLearnResult<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| GitLearnError::MissingElement(id.to_string()))
}

/// The text input commands are typed into
pub fn input_element(document: &Document, dom: &DomConfig) -> GitLearnResult<HtmlInputElement> {
    element_by_id(document, &dom.input_id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| GitLearnError::MissingElement(format!("{} (not an <input>)", dom.input_id)))
}

/// Read `<script type="application/json" id="gitlearn-config">`, or defaults
pub fn read_config(document: &Document) -> GitLearnResult<SimConfig> {
    match document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(script) => {
            let json = script.text_content().unwrap_or_default();
            SimConfig::from_json(&json)
        }
        None => Ok(SimConfig::default()),
    }
}

/// Show the terminal section and put the cursor in the input box
pub fn reveal_terminal(document: &Document, dom: &DomConfig) -> GitLearnResult<()> {
    if let Some(section) = document.get_element_by_id(&dom.section_id) {
        section.class_list().remove_1("hidden")?;
    }
    let input: HtmlElement = input_element(document, dom)?.unchecked_into();
    input.focus()?;
    Ok(())
}

/// Transcript rendered as one `<div>` per line
pub struct DomConsole {
    document: Document,
    output: Element,
    line_class: String,
}

impl DomConsole {
    pub fn new(document: &Document, dom: &DomConfig) -> GitLearnResult<Self> {
        Ok(Self {
            document: document.clone(),
            output: element_by_id(document, &dom.output_id)?,
            line_class: dom.line_class.clone(),
        })
    }
}

impl Console for DomConsole {
    fn write_lines(&mut self, lines: &[TerminalLine]) -> GitLearnResult<()> {
        for line in lines {
            let div = self.document.create_element("div")?;
            div.set_class_name(&self.line_class);
            div.set_text_content(Some(&line.text));
            self.output.append_child(&div)?;
        }
        self.output.set_scroll_top(self.output.scroll_height());
        Ok(())
    }

    fn clear(&mut self) -> GitLearnResult<()> {
        self.output.set_inner_html("");
        Ok(())
    }
}

/// `log` backend writing to the browser console
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    /// Install as the global logger. A second call keeps the first logger.
    pub fn init(level: log::LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from(format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&msg),
            log::Level::Warn => web_sys::console::warn_1(&msg),
            log::Level::Info => web_sys::console::info_1(&msg),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}
