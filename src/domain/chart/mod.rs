//! Chart aggregate: palette, display order, theme, traces and projection.

pub mod entities;
pub mod services;
pub mod surface;
pub mod theme;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use surface::*;
pub use theme::*;
pub use value_objects::*;
