use js_sys::{Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Element;

use crate::domain::{
    chart::{StackedAreaFigure, VisualizationSurface},
    errors::{RenderingError, RenderingResult},
    holdings::ContainerId,
    logging::LogComponent,
};
use crate::{log_debug, log_error};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn plotly_new_plot(
        root: &Element,
        data: &JsValue,
        layout: &JsValue,
        config: &JsValue,
    ) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["Plotly", "Plots"], js_name = resize)]
    fn plotly_plots_resize(root: &Element) -> Result<Promise, JsValue>;
}

/// Plotly.js surface over the live document
///
/// The page is expected to load Plotly before this module starts. A container
/// holds a chart once Plotly has attached its `data` property to the element.
#[derive(Debug, Default)]
pub struct PlotlySurface;

impl PlotlySurface {
    pub fn new() -> Self {
        Self
    }

    fn element(container_id: &ContainerId) -> Option<Element> {
        web_sys::window()?.document()?.get_element_by_id(container_id.value())
    }

    fn to_js<T: Serialize>(container_id: &ContainerId, value: &T) -> RenderingResult<JsValue> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        value.serialize(&serializer).map_err(|e| RenderingError::SerializationFailed {
            container_id: container_id.value().to_string(),
            reason: e.to_string(),
        })
    }

    fn describe(error: &JsValue) -> String {
        error.as_string().unwrap_or_else(|| format!("{:?}", error))
    }

    /// Plotly settles some calls later; a rejection is logged against the container.
    fn observe(container_id: &ContainerId, action: &'static str, promise: Promise) {
        let id = container_id.value().to_string();
        wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => {
                    log_debug!(LogComponent::Infrastructure("Plotly"), container = id.as_str(); "{} settled", action);
                }
                Err(e) => {
                    log_error!(
                        LogComponent::Infrastructure("Plotly"),
                        container = id.as_str();
                        "{} rejected: {}",
                        action,
                        PlotlySurface::describe(&e)
                    );
                }
            }
        });
    }
}

impl VisualizationSurface for PlotlySurface {
    fn has_container(&self, container_id: &ContainerId) -> bool {
        Self::element(container_id).is_some()
    }

    fn holds_chart(&self, container_id: &ContainerId) -> bool {
        Self::element(container_id)
            .and_then(|el| Reflect::get(&el, &JsValue::from_str("data")).ok())
            .is_some_and(|data| !data.is_undefined() && !data.is_null())
    }

    fn submit(&mut self, figure: &StackedAreaFigure) -> RenderingResult<()> {
        let container_id = &figure.container_id;
        let element = Self::element(container_id).ok_or_else(|| RenderingError::SurfaceSubmitFailed {
            container_id: container_id.value().to_string(),
            reason: "container disappeared before submit".to_string(),
        })?;

        let data = Self::to_js(container_id, &figure.traces)?;
        let layout = Self::to_js(container_id, &figure.layout)?;
        let config = Self::to_js(container_id, &figure.config)?;

        let promise = plotly_new_plot(&element, &data, &layout, &config).map_err(|e| {
            RenderingError::SurfaceSubmitFailed {
                container_id: container_id.value().to_string(),
                reason: Self::describe(&e),
            }
        })?;

        Self::observe(container_id, "newPlot", promise);
        Ok(())
    }

    fn resize(&mut self, container_id: &ContainerId) -> RenderingResult<()> {
        let failed = |reason: String| RenderingError::SurfaceResizeFailed {
            container_id: container_id.value().to_string(),
            reason,
        };
        let element = Self::element(container_id).ok_or_else(|| failed("container not found".to_string()))?;
        let promise = plotly_plots_resize(&element).map_err(|e| failed(Self::describe(&e)))?;
        Self::observe(container_id, "Plots.resize", promise);
        Ok(())
    }
}
