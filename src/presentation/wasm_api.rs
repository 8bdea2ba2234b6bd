//! Functions exported to the host page.

use std::str::FromStr;

use wasm_bindgen::prelude::*;

use crate::application::{RenderHoldingsChartUseCase, RenderOutcome, with_global_coordinator_mut};
use crate::domain::{
    errors::{AppError, DomainError, PresentationError},
    holdings::{ContainerId, DatasetKey},
};

impl From<AppError> for JsValue {
    fn from(error: AppError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

fn parse_key(dataset_key: &str) -> Result<DatasetKey, AppError> {
    DatasetKey::from_str(dataset_key).map_err(|_| DomainError::UnknownDataset(dataset_key.to_string()).into())
}

/// Render an embedded dataset into `container_id`.
///
/// Resolves to `"rendered"` or `"container-missing"`.
#[wasm_bindgen]
pub fn render_holdings_chart(container_id: &str, dataset_key: &str) -> Result<JsValue, JsValue> {
    let key = parse_key(dataset_key)?;
    let container_id = ContainerId::new(container_id);
    let outcome = with_global_coordinator_mut(|c| c.render_key_into(key, &container_id))
        .ok_or(AppError::from(PresentationError::CoordinatorUnavailable))??;

    Ok(JsValue::from_str(match outcome {
        RenderOutcome::Rendered(_) => "rendered",
        RenderOutcome::ContainerMissing { .. } => "container-missing",
    }))
}

#[wasm_bindgen]
pub fn resize_holdings_charts() -> usize {
    with_global_coordinator_mut(|c| c.on_resize()).unwrap_or(0)
}

/// Figure JSON for an embedded dataset, as it would be handed to Plotly.
#[wasm_bindgen]
pub fn holdings_figure_json(dataset_key: &str) -> Result<String, JsValue> {
    holdings_figure_json_for(dataset_key).map_err(JsValue::from)
}

pub fn holdings_figure_json_for(dataset_key: &str) -> Result<String, AppError> {
    let def = parse_key(dataset_key)?.definition();
    let dataset = def.key.dataset()?;
    let figure = RenderHoldingsChartUseCase::new().figure(
        &def.container_id,
        dataset,
        def.title,
        def.include_central_bank,
    );
    figure
        .to_json()
        .map_err(|e| PresentationError::Serialization(e.to_string()).into())
}
