// wasm-bindgen imports for the parts of Leaflet (`L`) the page uses
use js_sys::Array;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::MapError;
use crate::model::Coordinate;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, Debug)]
    pub type LeafletMap;

    #[derive(Clone, Debug)]
    pub type Layer;

    #[wasm_bindgen(extends = Layer)]
    #[derive(Clone, Debug)]
    pub type Marker;

    #[derive(Clone, Debug)]
    pub type Control;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn l_map(element_id: &str, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn l_tile_layer(url_template: &str, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["L", "control"], js_name = zoom)]
    fn l_zoom_control(options: &JsValue) -> Result<Control, JsValue>;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn l_marker(latlng: &Array) -> Marker;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view_raw(this: &LeafletMap, center: &Array, zoom: u8);

    #[wasm_bindgen(method, js_name = removeLayer)]
    pub fn remove_layer(this: &LeafletMap, layer: &Layer);

    #[wasm_bindgen(catch, method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &LeafletMap, animate: bool) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_layer_to(this: &Layer, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_control_to(this: &Control, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Layer, content: &JsValue);

    #[wasm_bindgen(method, js_name = openPopup)]
    pub fn open_popup(this: &Layer);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: [f64; 2],
    pub zoom: u8,
    pub zoom_control: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileOptions<'a> {
    pub attribution: &'a str,
    pub max_zoom: u8,
    pub min_zoom: u8,
}

#[derive(Serialize)]
pub struct ControlOptions<'a> {
    pub position: &'a str,
}

fn latlng(c: Coordinate) -> Array {
    Array::of2(&JsValue::from_f64(c.lat), &JsValue::from_f64(c.lng))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, MapError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| MapError::Library(e.to_string()))
}

fn lib_err(e: JsValue) -> MapError {
    MapError::Library(format!("{:?}", e))
}

impl LeafletMap {
    pub fn create(element_id: &str, options: &MapOptions) -> Result<Self, MapError> {
        l_map(element_id, &to_js(options)?).map_err(lib_err)
    }

    pub fn add_tile_layer(&self, url_template: &str, options: &TileOptions<'_>) -> Result<(), MapError> {
        let layer = l_tile_layer(url_template, &to_js(options)?).map_err(lib_err)?;
        layer.add_layer_to(self);
        Ok(())
    }

    pub fn add_zoom_control(&self, position: &str) -> Result<(), MapError> {
        let control = l_zoom_control(&to_js(&ControlOptions { position })?).map_err(lib_err)?;
        control.add_control_to(self);
        Ok(())
    }

    pub fn set_view(&self, center: Coordinate, zoom: u8) {
        self.set_view_raw(&latlng(center), zoom);
    }

    pub fn add_marker(&self, at: Coordinate, popup: &JsValue) -> Marker {
        let marker = l_marker(&latlng(at));
        marker.add_layer_to(self);
        marker.bind_popup(popup);
        marker
    }
}
