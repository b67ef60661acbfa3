//! Boot sequence
//!
//! Reads the page config, creates the one terminal session for the page
//! and wires the input box and mission buttons to it.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::config::DomConfig;
use crate::error::{GitLearnError, GitLearnResult};
use crate::platform::flush;
use crate::platform::web::{self, DomConsole};
use crate::shell::Terminal;

struct Session {
    terminal: Terminal,
    console: DomConsole,
    document: Document,
    dom: DomConfig,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

/// Run `f` against the session, then render whatever it printed
fn with_session<R>(f: impl FnOnce(&mut Session) -> R) -> GitLearnResult<R> {
    SESSION.with(|cell| {
        let mut slot = cell.borrow_mut();
        let session = slot
            .as_mut()
            .ok_or_else(|| GitLearnError::Js("terminal not booted".to_string()))?;
        let out = f(session);
        flush(&mut session.terminal, &mut session.console)?;
        Ok(out)
    })
}

/// Boot the simulator
pub fn boot() -> GitLearnResult<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| GitLearnError::MissingElement("document".to_string()))?;

    let config = web::read_config(&document)?;
    let dom = config.dom.clone();
    let console = DomConsole::new(&document, &dom)?;
    let input = web::input_element(&document, &dom)?;

    SESSION.with(|cell| {
        *cell.borrow_mut() = Some(Session {
            terminal: Terminal::new(config),
            console,
            document: document.clone(),
            dom: dom.clone(),
        });
    });
    with_session(|_| ())?;

    bind_input(&input)?;
    bind_mission_buttons(&document, &dom)?;
    log::info!("gitlearn booted");
    Ok(())
}

fn bind_input(input: &HtmlInputElement) -> GitLearnResult<()> {
    let target = input.clone();
    let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
        let key = event.key();
        if key == "ArrowUp" || key == "ArrowDown" {
            event.prevent_default();
        }
        let typed = target.value();
        match with_session(|s| s.terminal.handle_key(&key, &typed)) {
            Ok(Some(value)) => target.set_value(&value),
            Ok(None) => {}
            Err(e) => log::error!("{}", e),
        }
    }) as Box<dyn FnMut(_)>);

    input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget(); // lives for the page
    Ok(())
}

fn bind_mission_buttons(document: &Document, dom: &DomConfig) -> GitLearnResult<()> {
    let buttons = document.query_selector_all(&dom.mission_button_selector)?;
    for i in 0..buttons.length() {
        let Some(button) = buttons.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(number) = button
            .get_attribute("data-mission")
            .and_then(|n| n.trim().parse::<u32>().ok())
        else {
            log::warn!("mission button without a usable data-mission");
            continue;
        };

        let closure = Closure::wrap(Box::new(move |_event: web_sys::MouseEvent| {
            if let Err(e) = start_mission(number) {
                log::error!("{}", e);
            }
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Submit a line as if typed
pub fn submit(line: &str) -> GitLearnResult<()> {
    with_session(|s| {
        s.terminal.submit(line);
    })
}

/// Start a mission, then show and focus the terminal
pub fn start_mission(number: u32) -> GitLearnResult<()> {
    with_session(|s| {
        s.terminal.start_mission(number);
        web::reveal_terminal(&s.document, &s.dom)
    })?
}

/// JSON snapshot of the session
pub fn snapshot() -> GitLearnResult<String> {
    with_session(|s| s.terminal.snapshot_json())?
}
