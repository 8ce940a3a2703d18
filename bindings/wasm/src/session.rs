use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use consulmap_core::{CommandQueue, MapEvent, ViewSession};

use crate::common::*;

/// One page's map session. The page forwards Leaflet events in and applies
/// the drained render commands out.
#[wasm_bindgen]
pub struct WasmSession {
    inner: ViewSession<CommandQueue>,
}

#[wasm_bindgen]
impl WasmSession {
    /// config: optional object with the same fields as the JSON view config.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmSession, JsValue> {
        let config = parse_config(config).map_err(js_err)?;
        Ok(WasmSession { inner: ViewSession::new(config, CommandQueue::new()) })
    }

    /// Bind the fetched GeoJSON text. Returns the number of regions; on
    /// failure the error is also written to the console and the map stays
    /// without regions.
    pub fn load_regions(&mut self, geojson: &str) -> Result<u32, JsValue> {
        let count = self.inner.load_regions(geojson).map_err(js_err)?;
        Ok(count as u32)
    }

    /// Generic entry point: `{ type: "pointerEnter", region, x, y }` etc.
    pub fn handle(&mut self, event: JsValue) -> Result<bool, JsValue> {
        let event: MapEvent = serde_wasm_bindgen::from_value(event).map_err(js_err)?;
        Ok(self.inner.handle(event))
    }

    pub fn pointer_enter(&mut self, region: String, x: f64, y: f64) -> bool {
        self.inner.handle(MapEvent::PointerEnter { region, x, y })
    }

    pub fn pointer_move(&mut self, region: String, x: f64, y: f64) -> bool {
        self.inner.handle(MapEvent::PointerMove { region, x, y })
    }

    pub fn pointer_leave(&mut self, region: String) -> bool {
        self.inner.handle(MapEvent::PointerLeave { region })
    }

    /// Radio-group selection: "light", "dark" or "satellite".
    pub fn select_basemap(&mut self, name: &str) -> Result<bool, JsValue> {
        let basemap = parse_basemap(name).map_err(js_err)?;
        Ok(self.inner.select_basemap(basemap))
    }

    pub fn legend_enter(&mut self, consulate: &str) -> bool { self.inner.legend_enter(consulate) }

    pub fn legend_leave(&mut self) -> bool { self.inner.legend_leave() }

    pub fn toggle_legend(&mut self) -> bool { self.inner.handle(MapEvent::LegendToggle) }

    /// Render commands recorded since the last call, oldest first.
    pub fn drain_commands(&mut self) -> Result<JsValue, JsValue> {
        let commands = self.inner.backend_mut().drain();
        to_js(&commands)
    }

    pub fn tooltip(&self) -> Result<JsValue, JsValue> { to_js(&self.inner.tooltip().state()) }

    pub fn popup(&self, region: &str) -> Result<JsValue, JsValue> {
        let popup = self.inner.regions()
            .and_then(|r| r.find_by_name(region))
            .and_then(|id| self.inner.popup(id));
        to_js(&popup)
    }

    pub fn legend(&self) -> Result<JsValue, JsValue> { to_js(self.inner.legend()) }

    pub fn basemap(&self) -> String { self.inner.basemap().to_string() }

    pub fn config(&self) -> Result<JsValue, JsValue> { to_js(self.inner.config()) }
}
