#![cfg(target_arch = "wasm32")]

use std::sync::{Mutex, Once};

use holdings_chart_wasm::application::{HoldingsChartCoordinator, RenderHoldingsChartUseCase};
use holdings_chart_wasm::domain::chart::{StackedAreaFigure, VisualizationSurface};
use holdings_chart_wasm::domain::holdings::{ContainerId, DatasetKey};
use holdings_chart_wasm::domain::logging::{LogEntry, LogLevel, Logger, init_logger};
use holdings_chart_wasm::infrastructure::rendering::PlotlySurface;
use serde_json::{Value, json};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// Stand-in for Plotly.js: records calls and attaches `data` like the real library.
#[wasm_bindgen(inline_js = r#"
export function install_plotly_stub() {
    const calls = { newPlot: [], resize: [] };
    globalThis.__plotlyCalls = calls;
    globalThis.Plotly = {
        newPlot(el, data, layout, config) {
            el.data = data;
            el.layout = layout;
            calls.newPlot.push({ id: el.id, data, layout, config });
            return Promise.resolve(el);
        },
        Plots: {
            resize(el) {
                calls.resize.push(el.id);
                if (el.getAttribute("data-hidden")) {
                    return Promise.reject(new Error("Resize must be passed a displayed plot div element"));
                }
                return Promise.resolve();
            },
        },
    };
}

export function plotly_calls_json() {
    return JSON.stringify(globalThis.__plotlyCalls);
}
"#)]
extern "C" {
    fn install_plotly_stub();
    fn plotly_calls_json() -> String;
}

static CAPTURED: Mutex<Vec<LogEntry>> = Mutex::new(Vec::new());
static INSTALL: Once = Once::new();

struct CapturingLogger;

impl Logger for CapturingLogger {
    fn log(&self, entry: LogEntry) {
        CAPTURED.lock().unwrap().push(entry);
    }
}

fn add_container(id: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_id(id);
    document.body().unwrap().append_child(&div).unwrap();
    div
}

fn recorded_calls() -> Value {
    serde_json::from_str(&plotly_calls_json()).unwrap()
}

fn figure_for(key: DatasetKey, container: &ContainerId) -> StackedAreaFigure {
    let def = key.definition();
    RenderHoldingsChartUseCase::new().figure(container, def.key.dataset().unwrap(), def.title, def.include_central_bank)
}

/// Wait one macrotask so spawned promise observers have run.
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn container_lookup_follows_the_document() {
    add_container("lookup-chart");
    let surface = PlotlySurface::new();

    assert!(surface.has_container(&ContainerId::new("lookup-chart")));
    assert!(!surface.has_container(&ContainerId::new("absent-chart")));
    assert!(!surface.holds_chart(&ContainerId::new("lookup-chart")));
}

#[wasm_bindgen_test]
fn missing_container_renders_nothing() {
    install_plotly_stub();
    let mut surface = PlotlySurface::new();
    let def = DatasetKey::Equities.definition();
    let outcome = RenderHoldingsChartUseCase::new()
        .execute(
            &mut surface,
            &ContainerId::new("nowhere-chart"),
            def.key.dataset().unwrap(),
            def.title,
            def.include_central_bank,
        )
        .unwrap();

    assert!(!outcome.is_rendered());
    assert!(surface.resize(&ContainerId::new("nowhere-chart")).is_err());
    assert_eq!(recorded_calls()["newPlot"], json!([]));
}

#[wasm_bindgen_test]
fn submit_hands_plotly_plain_json_and_marks_the_chart() {
    install_plotly_stub();
    add_container("submit-chart");
    let id = ContainerId::new("submit-chart");
    let mut surface = PlotlySurface::new();
    assert!(!surface.holds_chart(&id));

    surface.submit(&figure_for(DatasetKey::Treasury, &id)).unwrap();
    assert!(surface.holds_chart(&id));

    let calls = recorded_calls();
    let plot = &calls["newPlot"][0];
    assert_eq!(plot["id"], "submit-chart");
    assert_eq!(plot["data"].as_array().map(|d| d.len()), Some(7));
    assert_eq!(plot["data"][0]["stackgroup"], "one");
    assert_eq!(plot["data"][0]["type"], "scatter");
    assert_eq!(plot["data"][6]["name"], "Foreign");
    assert_eq!(plot["layout"]["hovermode"], "x unified");
    assert_eq!(plot["config"]["modeBarButtonsToRemove"], json!(["lasso2d", "select2d"]));
    assert_eq!(plot["config"]["displaylogo"], false);
}

#[wasm_bindgen_test]
fn each_resize_signal_relayouts_rendered_charts_once() {
    install_plotly_stub();
    add_container("treasury-chart");
    let mut coordinator = HoldingsChartCoordinator::new(PlotlySurface::new());

    let report = coordinator.on_ready();
    assert_eq!(report.rendered_count(), 1);
    assert_eq!(coordinator.on_resize(), 1);
    assert_eq!(coordinator.on_resize(), 1);

    let calls = recorded_calls();
    assert_eq!(calls["resize"], json!(["treasury-chart", "treasury-chart"]));
    assert_eq!(calls["newPlot"].as_array().map(|p| p.len()), Some(1));
}

#[wasm_bindgen_test]
async fn rejected_resize_is_logged_against_its_container() {
    INSTALL.call_once(|| init_logger(Box::new(CapturingLogger)));
    install_plotly_stub();
    let element = add_container("hidden-chart");
    element.set_attribute("data-hidden", "true").unwrap();
    let id = ContainerId::new("hidden-chart");
    let mut surface = PlotlySurface::new();

    surface.submit(&figure_for(DatasetKey::Equities, &id)).unwrap();
    assert!(surface.resize(&id).is_ok());
    settle().await;

    let captured = CAPTURED.lock().unwrap();
    assert!(captured.iter().any(|e| {
        e.level == LogLevel::Error
            && e.container.as_deref() == Some("hidden-chart")
            && e.message.contains("Plots.resize rejected")
    }));
}
