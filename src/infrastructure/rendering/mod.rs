pub mod plotly_surface;
pub mod recording_surface;

pub use plotly_surface::PlotlySurface;
pub use recording_surface::RecordingSurface;
