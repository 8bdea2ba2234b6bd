use super::entities::StackedAreaFigure;
use crate::domain::errors::RenderingResult;
use crate::domain::holdings::ContainerId;

/// Host-document charting surface, keyed by container id
///
/// Implementations only ever touch the container they are handed.
pub trait VisualizationSurface {
    /// Whether the host document has a container with this id.
    fn has_container(&self, container_id: &ContainerId) -> bool;

    /// Whether the container currently holds a rendered chart.
    fn holds_chart(&self, container_id: &ContainerId) -> bool;

    /// Create the chart in the figure's container, replacing any previous one.
    fn submit(&mut self, figure: &StackedAreaFigure) -> RenderingResult<()>;

    /// Recompute an existing chart's layout for the current container size.
    /// Data is not resubmitted.
    fn resize(&mut self, container_id: &ContainerId) -> RenderingResult<()>;
}

impl<S: VisualizationSurface + ?Sized> VisualizationSurface for Box<S> {
    fn has_container(&self, container_id: &ContainerId) -> bool {
        (**self).has_container(container_id)
    }

    fn holds_chart(&self, container_id: &ContainerId) -> bool {
        (**self).holds_chart(container_id)
    }

    fn submit(&mut self, figure: &StackedAreaFigure) -> RenderingResult<()> {
        (**self).submit(figure)
    }

    fn resize(&mut self, container_id: &ContainerId) -> RenderingResult<()> {
        (**self).resize(container_id)
    }
}
