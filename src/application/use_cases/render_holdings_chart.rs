use crate::domain::{
    chart::{SkippedSector, StackedAreaFigure, StackedAreaProjectionService, VisualizationSurface},
    errors::AppResult,
    holdings::{ContainerId, HoldingsDataset, Sector},
    logging::LogComponent,
};
use crate::{log_debug, log_error, log_info, log_warn};

/// Allowed drift of a year's share total from 1.0 before it is reported.
pub const SHARE_TOTAL_TOLERANCE: f64 = 0.005;

/// What a render call did
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    Rendered(RenderSummary),
    /// The host document has no such container; nothing was submitted.
    ContainerMissing { container_id: ContainerId },
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }

    pub fn summary(&self) -> Option<&RenderSummary> {
        match self {
            Self::Rendered(summary) => Some(summary),
            Self::ContainerMissing { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub container_id: ContainerId,
    pub trace_count: usize,
    /// Stacking order of the submitted traces, bottom first.
    pub sectors: Vec<Sector>,
    pub skipped: Vec<SkippedSector>,
}

/// Renders one holdings dataset as a stacked share chart
#[derive(Debug, Clone, Default)]
pub struct RenderHoldingsChartUseCase {
    projection: StackedAreaProjectionService,
}

impl RenderHoldingsChartUseCase {
    pub fn new() -> Self {
        Self { projection: StackedAreaProjectionService::new() }
    }

    /// Figure for a dataset, without touching any surface.
    pub fn figure(
        &self,
        container_id: &ContainerId,
        dataset: &HoldingsDataset,
        title: &str,
        include_central_bank: bool,
    ) -> StackedAreaFigure {
        self.projection.project(container_id, dataset, title, include_central_bank).figure
    }

    /// Project `dataset` and submit it to `container_id`, replacing any chart already there.
    ///
    /// A container the document does not have is not an error. Surface failures
    /// are logged against the container and returned.
    pub fn execute<S: VisualizationSurface + ?Sized>(
        &self,
        surface: &mut S,
        container_id: &ContainerId,
        dataset: &HoldingsDataset,
        title: &str,
        include_central_bank: bool,
    ) -> AppResult<RenderOutcome> {
        if !surface.has_container(container_id) {
            log_debug!(
                LogComponent::Application("RenderHoldingsChart"),
                "Container {} not in document, skipping",
                container_id
            );
            return Ok(RenderOutcome::ContainerMissing { container_id: container_id.clone() });
        }

        for gap in dataset.normalization_gaps(SHARE_TOTAL_TOLERANCE) {
            log_warn!(
                LogComponent::Application("RenderHoldingsChart"),
                "Shares for {} in {} sum to {:.3}, plotting as given",
                gap.year.value(),
                container_id,
                gap.total
            );
        }

        let projection = self.projection.project(container_id, dataset, title, include_central_bank);
        for skipped in &projection.skipped {
            log_debug!(
                LogComponent::Application("RenderHoldingsChart"),
                "{}: no trace for {} ({:?})",
                container_id,
                skipped.sector,
                skipped.reason
            );
        }

        if let Err(e) = surface.submit(&projection.figure) {
            log_error!(LogComponent::Application("RenderHoldingsChart"), container = container_id.value(); "{}", e);
            return Err(e.into());
        }

        let figure = projection.figure;
        log_info!(
            LogComponent::Application("RenderHoldingsChart"),
            "Rendered '{}' into {} with {} traces",
            title,
            container_id,
            figure.trace_count()
        );

        Ok(RenderOutcome::Rendered(RenderSummary {
            container_id: container_id.clone(),
            trace_count: figure.trace_count(),
            sectors: figure.sectors(),
            skipped: projection.skipped,
        }))
    }
}
