use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::domain::logging::LogComponent;
use crate::infrastructure::{
    rendering::PlotlySurface,
    services::{BrowserTimeProvider, ConsoleLogger},
};
use crate::presentation::{BrowserShell, subscribe_global_coordinator};

pub mod application;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;

thread_local! {
    static BROWSER_SHELL: RefCell<Option<BrowserShell>> = const { RefCell::new(None) };
}

/// Wire logging, the page-wide coordinator and the browser shell
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(ConsoleLogger::for_build()));
    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));

    application::initialize_global_coordinator(Box::new(PlotlySurface::new()));

    let mut shell = BrowserShell::new();
    match subscribe_global_coordinator(&mut shell) {
        Ok(()) => {
            BROWSER_SHELL.with(|slot| *slot.borrow_mut() = Some(shell));
            log_info!(LogComponent::Presentation("Initialize"), "Holdings charts wired to display shell");
        }
        Err(e) => {
            log_error!(LogComponent::Presentation("Initialize"), "{}", e);
        }
    }
}
