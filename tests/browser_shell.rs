#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use holdings_chart_wasm::presentation::{BrowserShell, DisplayShell, ShellSignal};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn counter() -> (Rc<Cell<u32>>, Box<dyn FnMut()>) {
    let count = Rc::new(Cell::new(0));
    let handle = Rc::clone(&count);
    (count, Box::new(move || handle.set(handle.get() + 1)))
}

#[wasm_bindgen_test]
fn ready_fires_at_once_when_document_is_parsed() {
    let document = web_sys::window().unwrap().document().unwrap();
    assert_ne!(document.ready_state(), "loading");

    let (fired, handler) = counter();
    let mut shell = BrowserShell::new();
    shell.subscribe(ShellSignal::Ready, handler).unwrap();

    assert_eq!(fired.get(), 1);
}

#[wasm_bindgen_test]
fn window_resize_reaches_handler_until_shell_is_dropped() {
    let window = web_sys::window().unwrap();
    let (fired, handler) = counter();
    let mut shell = BrowserShell::new();
    shell.subscribe(ShellSignal::Resize, handler).unwrap();

    window.dispatch_event(&web_sys::Event::new("resize").unwrap()).unwrap();
    window.dispatch_event(&web_sys::Event::new("resize").unwrap()).unwrap();
    assert_eq!(fired.get(), 2);

    drop(shell);
    window.dispatch_event(&web_sys::Event::new("resize").unwrap()).unwrap();
    assert_eq!(fired.get(), 2);
}
