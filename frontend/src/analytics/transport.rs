use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Date, Function, Reflect};
use web_sys::window;

use super::event::EventParams;
use crate::config::AnalyticsConfig;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("gtag is not loaded")]
    NotLoaded,
    #[error("browser {0} is unavailable")]
    Unavailable(&'static str),
    #[error("could not encode event parameters: {0}")]
    Encode(String),
    #[error("javascript call failed: {0}")]
    Js(String),
}

fn js_error(err: JsValue) -> TransportError {
    TransportError::Js(format!("{:?}", err))
}

/// Outbound channel for analytics records.
pub trait AnalyticsTransport {
    /// Installs the transport on the page. Called at most once per session.
    fn load(&self, config: &AnalyticsConfig) -> Result<(), TransportError>;
    fn is_ready(&self) -> bool;
    fn send(&self, name: &str, params: &EventParams) -> Result<(), TransportError>;
}

/// Google tag (`gtag.js`) transport. Events are queued on `window.dataLayer`
/// until the tag script has loaded.
pub struct GtagTransport;

impl GtagTransport {
    fn gtag() -> Option<Function> {
        let window = window()?;
        Reflect::get(&window, &JsValue::from_str("gtag"))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }
}

impl AnalyticsTransport for GtagTransport {
    fn load(&self, config: &AnalyticsConfig) -> Result<(), TransportError> {
        let window = window().ok_or(TransportError::Unavailable("window"))?;

        let data_layer_key = JsValue::from_str("dataLayer");
        let data_layer = Reflect::get(&window, &data_layer_key).map_err(js_error)?;
        if !Array::is_array(&data_layer) {
            Reflect::set(&window, &data_layer_key, &Array::new()).map_err(js_error)?;
        }

        // gtag.js only understands `arguments` objects on the data layer
        let gtag = Function::new_no_args("window.dataLayer.push(arguments);");
        Reflect::set(&window, &JsValue::from_str("gtag"), &gtag).map_err(js_error)?;
        gtag.call2(&JsValue::NULL, &JsValue::from_str("js"), &Date::new_0())
            .map_err(js_error)?;
        gtag.call2(
            &JsValue::NULL,
            &JsValue::from_str("config"),
            &JsValue::from_str(&config.tracking_id),
        )
        .map_err(js_error)?;

        let document = window.document().ok_or(TransportError::Unavailable("document"))?;
        let head = document.head().ok_or(TransportError::Unavailable("document head"))?;
        let script = document.create_element("script").map_err(js_error)?;
        script.set_attribute("async", "").map_err(js_error)?;
        script
            .set_attribute("src", &config.tag_script_url())
            .map_err(js_error)?;
        head.append_child(&script).map_err(js_error)?;
        Ok(())
    }

    fn is_ready(&self) -> bool {
        Self::gtag().is_some()
    }

    fn send(&self, name: &str, params: &EventParams) -> Result<(), TransportError> {
        let gtag = Self::gtag().ok_or(TransportError::NotLoaded)?;
        let params = params
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|err| TransportError::Encode(format!("{:?}", err)))?;
        gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(name),
            &params,
        )
        .map_err(js_error)?;
        Ok(())
    }
}
