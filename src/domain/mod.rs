pub mod chart;
pub mod errors;
pub mod holdings;
pub mod logging;
