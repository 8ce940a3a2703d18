use anyhow::{anyhow, Result};
use serde::Serialize;
use wasm_bindgen::JsValue;

use consulmap_core::{Basemap, ViewConfig};

pub(crate) fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| e.into())
}

/// `undefined`/`null` means defaults; anything else must be a config object.
pub(crate) fn parse_config(config: JsValue) -> Result<ViewConfig> {
    if config.is_undefined() || config.is_null() {
        return Ok(ViewConfig::default());
    }
    let config: ViewConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| anyhow!("invalid view config: {e}"))?;
    config.validate()?;
    Ok(config)
}

pub(crate) fn parse_basemap(name: &str) -> Result<Basemap> {
    Ok(name.parse::<Basemap>()?)
}
