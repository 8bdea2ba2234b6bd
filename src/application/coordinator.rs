use std::cell::RefCell;

use super::use_cases::{RenderHoldingsChartUseCase, RenderOutcome};
use crate::domain::{
    chart::VisualizationSurface,
    errors::{AppError, AppResult},
    holdings::{ChartDefinition, ContainerId, DatasetKey, chart_catalog, known_container_ids},
    logging::LogComponent,
};
use crate::{log_error, log_info, log_warn};

/// Result of rendering one catalog entry on the ready signal
#[derive(Debug, Clone, PartialEq)]
pub struct ChartReport {
    pub container_id: ContainerId,
    pub result: AppResult<RenderOutcome>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReadyReport {
    pub charts: Vec<ChartReport>,
}

impl ReadyReport {
    pub fn rendered_count(&self) -> usize {
        self.charts
            .iter()
            .filter(|c| matches!(&c.result, Ok(outcome) if outcome.is_rendered()))
            .count()
    }

    pub fn missing_count(&self) -> usize {
        self.charts
            .iter()
            .filter(|c| matches!(c.result, Ok(RenderOutcome::ContainerMissing { .. })))
            .count()
    }

    pub fn failures(&self) -> Vec<(&ContainerId, &AppError)> {
        self.charts
            .iter()
            .filter_map(|c| c.result.as_ref().err().map(|e| (&c.container_id, e)))
            .collect()
    }
}

/// Drives the holdings charts of one page from the shell's ready and resize signals
pub struct HoldingsChartCoordinator<S: VisualizationSurface> {
    surface: S,
    catalog: Vec<ChartDefinition>,
    known_containers: Vec<ContainerId>,
    render_chart: RenderHoldingsChartUseCase,
}

impl<S: VisualizationSurface> HoldingsChartCoordinator<S> {
    /// Coordinator over the embedded catalog.
    pub fn new(surface: S) -> Self {
        Self::with_catalog(surface, chart_catalog())
    }

    pub fn with_catalog(surface: S, catalog: Vec<ChartDefinition>) -> Self {
        let mut known_containers = known_container_ids();
        for def in &catalog {
            if !known_containers.contains(&def.container_id) {
                known_containers.push(def.container_id.clone());
            }
        }
        Self { surface, catalog, known_containers, render_chart: RenderHoldingsChartUseCase::new() }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn catalog(&self) -> &[ChartDefinition] {
        &self.catalog
    }

    pub fn known_containers(&self) -> &[ContainerId] {
        &self.known_containers
    }

    /// Ready handler: render every catalog chart whose container exists.
    ///
    /// Each chart is independent; a failure is logged and reported without
    /// stopping the rest.
    pub fn on_ready(&mut self) -> ReadyReport {
        let catalog = self.catalog.clone();
        let charts: Vec<ChartReport> = catalog
            .iter()
            .map(|def| ChartReport {
                container_id: def.container_id.clone(),
                result: self.render_definition(def),
            })
            .collect();

        let report = ReadyReport { charts };
        log_info!(
            LogComponent::Application("ChartCoordinator"),
            "Ready: {} rendered, {} containers absent, {} failed",
            report.rendered_count(),
            report.missing_count(),
            report.failures().len()
        );
        report
    }

    /// Resize handler: ask every known container holding a chart to relayout.
    ///
    /// Returns how many charts were resized.
    pub fn on_resize(&mut self) -> usize {
        let mut resized = 0;
        for id in &self.known_containers {
            if !self.surface.holds_chart(id) {
                continue;
            }
            match self.surface.resize(id) {
                Ok(()) => resized += 1,
                Err(e) => {
                    log_error!(LogComponent::Application("ChartCoordinator"), container = id.value(); "{}", e);
                }
            }
        }
        resized
    }

    /// Render an embedded dataset into its own container.
    pub fn render_key(&mut self, key: DatasetKey) -> AppResult<RenderOutcome> {
        self.render_definition(&key.definition())
    }

    /// Render an embedded dataset into an arbitrary container.
    pub fn render_key_into(&mut self, key: DatasetKey, container_id: &ContainerId) -> AppResult<RenderOutcome> {
        let def = ChartDefinition { container_id: container_id.clone(), ..key.definition() };
        if !self.known_containers.contains(container_id) {
            self.known_containers.push(container_id.clone());
        }
        self.render_definition(&def)
    }

    fn render_definition(&mut self, def: &ChartDefinition) -> AppResult<RenderOutcome> {
        let dataset = def.key.dataset().map_err(|e| {
            log_warn!(
                LogComponent::Application("ChartCoordinator"),
                container = def.container_id.value();
                "Dataset '{}' failed validation: {}",
                def.key,
                e
            );
            AppError::from(e)
        })?;
        self.render_chart.execute(
            &mut self.surface,
            &def.container_id,
            dataset,
            def.title,
            def.include_central_bank,
        )
    }
}

// Page-wide coordinator (thread-local for WASM)
thread_local! {
    static GLOBAL_COORDINATOR: RefCell<Option<HoldingsChartCoordinator<Box<dyn VisualizationSurface>>>> =
        const { RefCell::new(None) };
}

/// Install the page-wide coordinator over `surface`, replacing any previous one.
pub fn initialize_global_coordinator(surface: Box<dyn VisualizationSurface>) {
    GLOBAL_COORDINATOR.with(|global| {
        *global.borrow_mut() = Some(HoldingsChartCoordinator::new(surface));
    });
}

pub fn with_global_coordinator<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&HoldingsChartCoordinator<Box<dyn VisualizationSurface>>) -> R,
{
    GLOBAL_COORDINATOR.with(|global| global.borrow().as_ref().map(f))
}

pub fn with_global_coordinator_mut<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut HoldingsChartCoordinator<Box<dyn VisualizationSurface>>) -> R,
{
    GLOBAL_COORDINATOR.with(|global| global.borrow_mut().as_mut().map(f))
}
