use super::entities::{AreaTrace, LineStyle, StackedAreaFigure, TraceMode, TraceType};
use super::theme::{CHART_CONFIG, ChartLayout};
use super::value_objects::{DisplayOrder, SECTOR_PALETTE};
use crate::domain::holdings::{ContainerId, HoldingsDataset, Sector};

pub const STACK_GROUP: &str = "one";
pub const TRACE_LINE_WIDTH: f64 = 0.5;

/// Hover label: bold sector name over the share as a one-decimal percentage.
pub fn hover_template(sector: Sector) -> String {
    format!("<b>{}</b><br>%{{y:.1%}}<extra></extra>", sector)
}

/// Why a sector produced no trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// In the display order, but the dataset has no series for it.
    NotInDataset,
    /// In the dataset, but the active display order leaves it out.
    NotInDisplayOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedSector {
    pub sector: Sector,
    pub reason: SkipReason,
}

/// A figure plus the sectors left out of it
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub figure: StackedAreaFigure,
    pub skipped: Vec<SkippedSector>,
}

/// Domain service projecting a dataset onto a 100%-stacked area figure
///
/// Projection is lenient: the display order drives the traces, and any
/// mismatch between the order and the dataset drops that sector and is
/// reported in [`Projection::skipped`] instead of failing. The output only
/// depends on the inputs, so projecting twice yields equal figures.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackedAreaProjectionService;

impl StackedAreaProjectionService {
    pub fn new() -> Self {
        Self
    }

    pub fn project(
        &self,
        container_id: &ContainerId,
        dataset: &HoldingsDataset,
        title: &str,
        include_central_bank: bool,
    ) -> Projection {
        let order = DisplayOrder::for_flag(include_central_bank);
        let years = dataset.year_values();
        let mut traces = Vec::with_capacity(order.sectors().len());
        let mut skipped = Vec::new();

        for &sector in order.sectors() {
            match dataset.series(sector) {
                Some(series) => traces.push(Self::area_trace(sector, years.clone(), series.values())),
                None => skipped.push(SkippedSector { sector, reason: SkipReason::NotInDataset }),
            }
        }

        skipped.extend(
            dataset
                .sectors()
                .filter(|sector| !order.contains(*sector))
                .map(|sector| SkippedSector { sector, reason: SkipReason::NotInDisplayOrder }),
        );

        Projection {
            figure: StackedAreaFigure {
                container_id: container_id.clone(),
                traces,
                layout: ChartLayout::titled(title),
                config: CHART_CONFIG.clone(),
            },
            skipped,
        }
    }

    fn area_trace(sector: Sector, x: Vec<i32>, y: Vec<f64>) -> AreaTrace {
        let color = SECTOR_PALETTE.color(sector);
        AreaTrace {
            x,
            y,
            name: sector.to_string(),
            trace_type: TraceType::Scatter,
            mode: TraceMode::Lines,
            stackgroup: STACK_GROUP.to_string(),
            fillcolor: color,
            line: LineStyle { color, width: TRACE_LINE_WIDTH },
            hovertemplate: hover_template(sector),
            sector,
        }
    }
}
