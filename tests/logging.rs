use std::sync::{Mutex, Once};

use holdings_chart_wasm::application::HoldingsChartCoordinator;
use holdings_chart_wasm::domain::holdings::DatasetValidationService;
use holdings_chart_wasm::domain::logging::{LogComponent, LogEntry, LogLevel, Logger, init_logger};
use holdings_chart_wasm::infrastructure::rendering::RecordingSurface;
use holdings_chart_wasm::infrastructure::services::ConsoleLogger;

static CAPTURED: Mutex<Vec<LogEntry>> = Mutex::new(Vec::new());
static INSTALL: Once = Once::new();

struct CapturingLogger;

impl Logger for CapturingLogger {
    fn log(&self, entry: LogEntry) {
        CAPTURED.lock().unwrap().push(entry);
    }
}

fn install() {
    INSTALL.call_once(|| init_logger(Box::new(CapturingLogger)));
}

fn captured_where(pred: impl Fn(&LogEntry) -> bool) -> Vec<LogEntry> {
    CAPTURED.lock().unwrap().iter().filter(|e| pred(e)).cloned().collect()
}

#[test]
fn console_line_format() {
    let entry = LogEntry::new(LogLevel::Warn, LogComponent::Application("ChartCoordinator"), "resize failed");
    assert_eq!(
        ConsoleLogger::format_entry(&entry, "10:00:00.000"),
        "[10:00:00.000] WARN  APP:ChartCoordinator | resize failed"
    );

    let entry = entry.for_container("treasury-chart");
    assert_eq!(
        ConsoleLogger::format_entry(&entry, "10:00:00.000"),
        "[10:00:00.000] WARN  APP:ChartCoordinator #treasury-chart | resize failed"
    );
}

#[test]
fn build_profile_picks_level() {
    let expected = if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info };
    let logger = ConsoleLogger::for_build();
    assert_eq!(logger.min_level(), expected);
    assert!(logger.accepts(LogLevel::Error));
    assert!(!logger.accepts(LogLevel::Trace));
}

#[test]
fn lenient_drop_is_logged_as_warning() {
    install();
    let json = r#"{"years": [2000], "sectors": {"Households": [1.0], "Family Offices": [0.0]}}"#;
    DatasetValidationService::lenient().validate_json(json).unwrap();

    let warnings = captured_where(|e| {
        e.level == LogLevel::Warn
            && e.component == LogComponent::Domain("DatasetValidation")
            && e.message.contains("Family Offices")
    });
    assert!(!warnings.is_empty());
}

#[test]
fn surface_errors_are_tagged_with_their_container() {
    install();
    let mut surface = RecordingSurface::with_containers(["equities-chart", "corporate-bonds-chart"]);
    surface.fail_submits_for("corporate-bonds-chart");
    surface.fail_resizes_for("equities-chart");
    let mut coordinator = HoldingsChartCoordinator::new(surface);

    coordinator.on_ready();
    coordinator.on_resize();

    let submit_errors = captured_where(|e| {
        e.level == LogLevel::Error && e.container.as_deref() == Some("corporate-bonds-chart")
    });
    assert!(submit_errors.iter().any(|e| e.message.contains("injected submit failure")));

    let resize_errors = captured_where(|e| {
        e.level == LogLevel::Error && e.container.as_deref() == Some("equities-chart")
    });
    assert!(resize_errors.iter().any(|e| e.message.contains("injected resize failure")));
}
