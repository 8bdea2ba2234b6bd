//! Shared visual theme and interaction settings.
//!
//! Field names follow the charting library's layout schema, so these types
//! serialize straight into the layout and config objects it expects.

use super::value_objects::Color;
use once_cell::sync::Lazy;
use serde::Serialize;

pub const FONT_FAMILY: &str = "Source Sans Pro, sans-serif";
pub const TITLE_FONT_SIZE: u32 = 18;
pub const PERCENT_TICK_FORMAT: &str = ".0%";
pub const SHARE_RANGE: [f64; 2] = [0.0, 1.0];

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HoverMode {
    #[serde(rename = "x unified")]
    XUnified,
    #[serde(rename = "closest")]
    Closest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    #[serde(rename = "h")]
    Horizontal,
    #[serde(rename = "v")]
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Top,
    Bottom,
    Center,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub orientation: Orientation,
    pub yanchor: Anchor,
    pub y: f64,
    pub xanchor: Anchor,
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub showgrid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<Color>,
    pub showline: bool,
    pub linecolor: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub font: Font,
}

impl Title {
    pub fn chart(text: &str) -> Self {
        Self {
            text: text.to_string(),
            font: Font { family: None, size: Some(TITLE_FONT_SIZE), color: Some(Color::TITLE) },
        }
    }
}

/// Layout applied to every holdings chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub font: Font,
    pub paper_bgcolor: Color,
    pub plot_bgcolor: Color,
    pub margin: Margin,
    pub hovermode: HoverMode,
    pub legend: Legend,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
}

impl ChartLayout {
    /// Shared defaults with a chart title on top.
    pub fn titled(title: &str) -> Self {
        Self { title: Some(Title::chart(title)), ..LAYOUT_DEFAULTS.clone() }
    }
}

pub static LAYOUT_DEFAULTS: Lazy<ChartLayout> = Lazy::new(|| ChartLayout {
    font: Font { family: Some(FONT_FAMILY.to_string()), size: None, color: None },
    paper_bgcolor: Color::TRANSPARENT,
    plot_bgcolor: Color::TRANSPARENT,
    margin: Margin { l: 60, r: 40, t: 60, b: 100 },
    hovermode: HoverMode::XUnified,
    legend: Legend {
        orientation: Orientation::Horizontal,
        yanchor: Anchor::Top,
        y: -0.15,
        xanchor: Anchor::Center,
        x: 0.5,
    },
    xaxis: Axis {
        showgrid: false,
        gridcolor: None,
        showline: true,
        linecolor: Color::AXIS_LINE,
        tickformat: None,
        range: None,
    },
    yaxis: Axis {
        showgrid: true,
        gridcolor: Some(Color::GRID),
        showline: true,
        linecolor: Color::AXIS_LINE,
        tickformat: Some(PERCENT_TICK_FORMAT.to_string()),
        range: Some(SHARE_RANGE),
    },
    title: None,
});

/// Mode bar and responsiveness settings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionConfig {
    pub responsive: bool,
    pub display_mode_bar: bool,
    pub mode_bar_buttons_to_remove: Vec<String>,
    pub displaylogo: bool,
}

pub static CHART_CONFIG: Lazy<InteractionConfig> = Lazy::new(|| InteractionConfig {
    responsive: true,
    display_mode_bar: true,
    mode_bar_buttons_to_remove: vec!["lasso2d".to_string(), "select2d".to_string()],
    displaylogo: false,
});
