pub mod canvas;
pub mod components;
pub mod dom;
pub mod frame;
pub mod runner;

use std::cell::RefCell;

use pagefx::PageConfig;
use wasm_bindgen::prelude::*;

pub use runner::PageRunner;

thread_local! {
    static PAGE: RefCell<Option<PageRunner>> = RefCell::new(None);
}

/// Start every page effect. Call once after the DOM is parsed; calling again
/// tears the previous instance down first.
#[wasm_bindgen]
pub fn page_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    page_teardown();

    match PageRunner::init(&PageConfig::default()) {
        Ok(runner) => {
            log::info!("pagefx: initialized ({})", runner.summary());
            PAGE.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
        }
        Err(err) => log::warn!("pagefx: no page to attach to: {:?}", err),
    }
}

/// Stop every effect and detach all listeners.
#[wasm_bindgen]
pub fn page_teardown() {
    let previous = PAGE.with(|cell| cell.borrow_mut().take());
    if previous.is_some() {
        drop(previous);
        log::info!("pagefx: torn down");
    }
}

/// Status line for debugging from the console.
#[wasm_bindgen]
pub fn page_status() -> String {
    PAGE.with(|cell| {
        cell.borrow()
            .as_ref()
            .map_or_else(|| "not initialized".to_string(), PageRunner::summary)
    })
}
