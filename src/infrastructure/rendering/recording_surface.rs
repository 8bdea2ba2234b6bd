use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{
    chart::{StackedAreaFigure, VisualizationSurface},
    errors::{RenderingError, RenderingResult},
    holdings::ContainerId,
};

/// In-memory surface standing in for a host document
///
/// Keeps the last figure per container and counts every submit and resize.
/// Failures can be injected per container. Used by native tests and by
/// callers that want the figures without a browser.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    containers: BTreeSet<ContainerId>,
    figures: BTreeMap<ContainerId, StackedAreaFigure>,
    submits: BTreeMap<ContainerId, usize>,
    resizes: BTreeMap<ContainerId, usize>,
    failing_submits: BTreeSet<ContainerId>,
    failing_resizes: BTreeSet<ContainerId>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_containers<I, C>(ids: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ContainerId>,
    {
        Self { containers: ids.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    pub fn add_container(&mut self, id: impl Into<ContainerId>) {
        self.containers.insert(id.into());
    }

    pub fn fail_submits_for(&mut self, id: impl Into<ContainerId>) {
        self.failing_submits.insert(id.into());
    }

    pub fn fail_resizes_for(&mut self, id: impl Into<ContainerId>) {
        self.failing_resizes.insert(id.into());
    }

    pub fn figure(&self, id: &ContainerId) -> Option<&StackedAreaFigure> {
        self.figures.get(id)
    }

    pub fn submit_count(&self, id: &ContainerId) -> usize {
        self.submits.get(id).copied().unwrap_or(0)
    }

    pub fn resize_count(&self, id: &ContainerId) -> usize {
        self.resizes.get(id).copied().unwrap_or(0)
    }

    pub fn total_submits(&self) -> usize {
        self.submits.values().sum()
    }

    pub fn total_resizes(&self) -> usize {
        self.resizes.values().sum()
    }
}

impl VisualizationSurface for RecordingSurface {
    fn has_container(&self, container_id: &ContainerId) -> bool {
        self.containers.contains(container_id)
    }

    fn holds_chart(&self, container_id: &ContainerId) -> bool {
        self.figures.contains_key(container_id)
    }

    fn submit(&mut self, figure: &StackedAreaFigure) -> RenderingResult<()> {
        let id = &figure.container_id;
        if !self.containers.contains(id) {
            return Err(RenderingError::SurfaceSubmitFailed {
                container_id: id.value().to_string(),
                reason: "no such container".to_string(),
            });
        }
        *self.submits.entry(id.clone()).or_default() += 1;
        if self.failing_submits.contains(id) {
            // A failed plot leaves the container empty.
            self.figures.remove(id);
            return Err(RenderingError::SurfaceSubmitFailed {
                container_id: id.value().to_string(),
                reason: "injected submit failure".to_string(),
            });
        }
        self.figures.insert(id.clone(), figure.clone());
        Ok(())
    }

    fn resize(&mut self, container_id: &ContainerId) -> RenderingResult<()> {
        if !self.figures.contains_key(container_id) {
            return Err(RenderingError::SurfaceResizeFailed {
                container_id: container_id.value().to_string(),
                reason: "no chart in container".to_string(),
            });
        }
        *self.resizes.entry(container_id.clone()).or_default() += 1;
        if self.failing_resizes.contains(container_id) {
            return Err(RenderingError::SurfaceResizeFailed {
                container_id: container_id.value().to_string(),
                reason: "injected resize failure".to_string(),
            });
        }
        Ok(())
    }
}
