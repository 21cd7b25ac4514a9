//! Owner of every piece of mutable map-chain state: the Leaflet handle,
//! the markers, the last resolved position and the per-action request
//! guards. One instance lives for the lifetime of the map panel.

use tracing::{debug, error, info};
use wasm_bindgen::JsValue;

use super::leaflet::{LeafletMap, MapOptions, Marker, TileOptions};
use crate::config::MapConfig;
use crate::error::MapError;
use crate::model::{Coordinate, RankedFacility};
use crate::state::RequestGuard;
use crate::util::format_distance;

#[derive(Default)]
pub struct MapSession {
    map: Option<LeafletMap>,
    user_marker: Option<Marker>,
    facility_markers: Vec<(i64, Marker)>,
    location: Option<Coordinate>,
    pub locate: RequestGuard,
    pub search: RequestGuard,
}

impl MapSession {
    /// Creates the Leaflet map on the configured element.
    pub fn attach(&mut self, config: &MapConfig) -> Result<(), MapError> {
        let present = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&config.element_id))
            .is_some();
        if !present {
            return Err(MapError::MissingElement(config.element_id.clone()));
        }
        let c = config.default_center;
        let map = LeafletMap::create(
            &config.element_id,
            &MapOptions {
                center: [c.lat, c.lng],
                zoom: config.default_zoom,
                zoom_control: false,
            },
        )?;
        map.add_tile_layer(
            &config.tile_url,
            &TileOptions {
                attribution: &config.attribution,
                max_zoom: config.max_zoom,
                min_zoom: config.min_zoom,
            },
        )?;
        map.add_zoom_control("topright")?;
        self.map = Some(map);
        info!("map initialized");
        Ok(())
    }

    pub fn location(&self) -> Option<Coordinate> {
        self.location
    }

    /// Records a new user position. Any search still running was issued
    /// for the previous position and is cancelled.
    pub fn set_location(&mut self, at: Coordinate, zoom: u8) {
        self.location = Some(at);
        self.search.cancel();
        let Some(map) = &self.map else {
            return;
        };
        map.set_view(at, zoom);
        if let Some(old) = self.user_marker.take() {
            map.remove_layer(&old);
        }
        let marker = map.add_marker(at, &popup_heading("Your Location"));
        marker.open_popup();
        self.user_marker = Some(marker);
    }

    pub fn clear_facilities(&mut self) {
        let markers = std::mem::take(&mut self.facility_markers);
        if let Some(map) = &self.map {
            for (_, marker) in &markers {
                map.remove_layer(marker);
            }
        }
    }

    /// Replaces all facility markers with one per entry.
    pub fn show_facilities(&mut self, entries: &[RankedFacility]) {
        self.clear_facilities();
        let Some(map) = &self.map else {
            return;
        };
        self.facility_markers = entries
            .iter()
            .map(|r| (r.facility.id, map.add_marker(r.facility.coordinate, &facility_popup(r))))
            .collect();
        debug!(count = self.facility_count(), "facility markers drawn");
    }

    pub fn facility_count(&self) -> usize {
        self.facility_markers.len()
    }

    /// Centers on the facility and opens its popup. Returns false when no
    /// marker carries `id`.
    pub fn focus(&self, id: i64, at: Coordinate, zoom: u8) -> bool {
        let Some(map) = &self.map else {
            return false;
        };
        map.set_view(at, zoom);
        match self.facility_markers.iter().find(|(mid, _)| *mid == id) {
            Some((_, marker)) => {
                marker.open_popup();
                true
            }
            None => false,
        }
    }

    /// Recomputes the rendered size after the container was shown.
    pub fn refresh(&self) {
        if let Some(map) = &self.map {
            match map.invalidate_size(true) {
                Ok(()) => debug!("map refreshed"),
                Err(e) => error!("error refreshing map: {:?}", e),
            }
        }
    }
}

fn popup_heading(text: &str) -> JsValue {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return JsValue::from_str(text);
    };
    match doc.create_element("strong") {
        Ok(el) => {
            el.set_text_content(Some(text));
            el.into()
        }
        Err(_) => JsValue::from_str(text),
    }
}

// Built from DOM nodes so OSM-provided names are never parsed as markup.
fn facility_popup(r: &RankedFacility) -> JsValue {
    let f = &r.facility;
    let lines = [
        ("strong", f.name.clone()),
        ("div", f.kind.label().to_string()),
        ("div", f.address_or_default().to_string()),
        ("em", format_distance(r.distance_km)),
    ];
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return JsValue::from_str(&f.name);
    };
    let Ok(root) = doc.create_element("div") else {
        return JsValue::from_str(&f.name);
    };
    for (tag, text) in lines {
        if let Ok(el) = doc.create_element(tag) {
            el.set_text_content(Some(&text));
            let _ = root.append_child(&el);
        }
    }
    root.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_location_cancels_running_search() {
        let mut s = MapSession::default();
        let stale = s.search.begin().unwrap();
        s.set_location(Coordinate::new(12.97, 77.59), 13);
        assert_eq!(s.location(), Some(Coordinate::new(12.97, 77.59)));
        assert!(!s.search.is_busy());
        assert!(!s.search.finish(stale));
    }

    #[test]
    fn detached_session_is_inert() {
        let mut s = MapSession::default();
        s.clear_facilities();
        s.show_facilities(&[]);
        assert_eq!(s.facility_count(), 0);
        assert!(!s.focus(1, Coordinate::new(0.0, 0.0), 16));
        s.refresh();
    }
}
