//! Display-shell signals and their subscription to the chart coordinator.
//!
//! The page shell emits `Ready` once, when every chart container exists, and
//! `Resize` any number of times when the viewport changes. Handlers are plain
//! closures, so the whole wiring can be driven by [`ManualShell`] in tests.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;

use crate::application::{HoldingsChartCoordinator, with_global_coordinator_mut};
use crate::domain::{chart::VisualizationSurface, errors::PresentationError, logging::LogComponent};
use crate::event_utils::{EventOptions, WindowListener, listen_window};
use crate::{log_debug, log_warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellSignal {
    Ready,
    Resize,
}

pub type SignalHandler = Box<dyn FnMut()>;

/// Source of the ready and resize signals
pub trait DisplayShell {
    fn subscribe(&mut self, signal: ShellSignal, handler: SignalHandler) -> Result<(), PresentationError>;
}

/// Shell whose signals are fired by hand
#[derive(Default)]
pub struct ManualShell {
    ready: Vec<SignalHandler>,
    resize: Vec<SignalHandler>,
    ready_fired: bool,
}

impl ManualShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the handlers for `signal`, returning how many ran.
    /// `Ready` only fires once; later calls run nothing.
    pub fn fire(&mut self, signal: ShellSignal) -> usize {
        let handlers = match signal {
            ShellSignal::Ready if self.ready_fired => return 0,
            ShellSignal::Ready => {
                self.ready_fired = true;
                &mut self.ready
            }
            ShellSignal::Resize => &mut self.resize,
        };
        for handler in handlers.iter_mut() {
            handler();
        }
        handlers.len()
    }

    pub fn handler_count(&self, signal: ShellSignal) -> usize {
        match signal {
            ShellSignal::Ready => self.ready.len(),
            ShellSignal::Resize => self.resize.len(),
        }
    }
}

impl DisplayShell for ManualShell {
    fn subscribe(&mut self, signal: ShellSignal, handler: SignalHandler) -> Result<(), PresentationError> {
        match signal {
            ShellSignal::Ready => self.ready.push(handler),
            ShellSignal::Resize => self.resize.push(handler),
        }
        Ok(())
    }
}

/// Shell backed by the live document and window
///
/// `Ready` maps to `DOMContentLoaded`, or runs right away when the document
/// has already been parsed. `Resize` maps to the window `resize` event.
/// Listeners live as long as the shell.
#[derive(Default)]
pub struct BrowserShell {
    window_listeners: Vec<WindowListener>,
    document_listeners: Vec<EventListener>,
}

impl BrowserShell {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplayShell for BrowserShell {
    fn subscribe(&mut self, signal: ShellSignal, mut handler: SignalHandler) -> Result<(), PresentationError> {
        match signal {
            ShellSignal::Ready => {
                let document = web_sys::window()
                    .and_then(|w| w.document())
                    .ok_or_else(|| PresentationError::ShellSubscriptionFailed("document not available".to_string()))?;
                if document.ready_state() == "loading" {
                    let listener = EventListener::once(&document, "DOMContentLoaded", move |_| handler());
                    self.document_listeners.push(listener);
                } else {
                    log_debug!(LogComponent::Presentation("Shell"), "Document already parsed, ready now");
                    handler();
                }
            }
            ShellSignal::Resize => {
                let listener = listen_window(leptos::ev::resize, &EventOptions::default(), move |_| handler())?;
                self.window_listeners.push(listener);
            }
        }
        Ok(())
    }
}

/// Subscribe a shared coordinator to both shell signals.
pub fn subscribe_coordinator<S, D>(
    shell: &mut D,
    coordinator: Rc<RefCell<HoldingsChartCoordinator<S>>>,
) -> Result<(), PresentationError>
where
    S: VisualizationSurface + 'static,
    D: DisplayShell + ?Sized,
{
    let on_ready = Rc::clone(&coordinator);
    shell.subscribe(
        ShellSignal::Ready,
        Box::new(move || {
            on_ready.borrow_mut().on_ready();
        }),
    )?;
    shell.subscribe(
        ShellSignal::Resize,
        Box::new(move || {
            coordinator.borrow_mut().on_resize();
        }),
    )
}

/// Subscribe the page-wide coordinator to both shell signals.
pub fn subscribe_global_coordinator<D: DisplayShell + ?Sized>(shell: &mut D) -> Result<(), PresentationError> {
    shell.subscribe(
        ShellSignal::Ready,
        Box::new(|| {
            if with_global_coordinator_mut(|c| c.on_ready()).is_none() {
                log_warn!(LogComponent::Presentation("Shell"), "Ready signal before coordinator setup");
            }
        }),
    )?;
    shell.subscribe(
        ShellSignal::Resize,
        Box::new(|| {
            with_global_coordinator_mut(|c| c.on_resize());
        }),
    )
}
