//! Holdings aggregate: sectors, share series, datasets and the embedded catalog.

pub mod catalog;
pub mod entities;
pub mod services;
pub mod value_objects;

pub use catalog::*;
pub use entities::*;
pub use services::*;
pub use value_objects::*;
