pub mod render_holdings_chart;

pub use render_holdings_chart::*;
