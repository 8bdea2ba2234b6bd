use super::theme::{ChartLayout, InteractionConfig};
use super::value_objects::Color;
use crate::domain::holdings::{ContainerId, Sector};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceType {
    Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceMode {
    Lines,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
}

/// One sector's band in a stacked share chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaTrace {
    pub x: Vec<i32>,
    pub y: Vec<f64>,
    pub name: String,
    #[serde(rename = "type")]
    pub trace_type: TraceType,
    pub mode: TraceMode,
    /// Traces sharing a group are stacked on top of each other.
    pub stackgroup: String,
    pub fillcolor: Color,
    pub line: LineStyle,
    pub hovertemplate: String,
    #[serde(skip)]
    pub sector: Sector,
}

impl AreaTrace {
    pub fn last_value(&self) -> Option<f64> {
        self.y.last().copied()
    }
}

/// Everything submitted to a visualization surface for one container
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedAreaFigure {
    #[serde(skip)]
    pub container_id: ContainerId,
    #[serde(rename = "data")]
    pub traces: Vec<AreaTrace>,
    pub layout: ChartLayout,
    pub config: InteractionConfig,
}

impl StackedAreaFigure {
    pub fn trace_count(&self) -> usize {
        self.traces.len()
    }

    pub fn sectors(&self) -> Vec<Sector> {
        self.traces.iter().map(|t| t.sector).collect()
    }

    pub fn trace(&self, sector: Sector) -> Option<&AreaTrace> {
        self.traces.iter().find(|t| t.sector == sector)
    }

    pub fn title(&self) -> Option<&str> {
        self.layout.title.as_ref().map(|t| t.text.as_str())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
