//! Overpass API client for nearby hospitals and clinics.

use std::collections::HashMap;
use std::collections::HashSet;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;
use tracing::{debug, info};

use super::FacilitySource;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::model::{Coordinate, Facility, FacilityKind};

/// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const FILTERS: [(&str, &str); 4] = [
    ("amenity", "hospital"),
    ("amenity", "clinic"),
    ("healthcare", "hospital"),
    ("healthcare", "clinic"),
];

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    id: i64,
    lat: Option<f64>,
    lon: Option<f64>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

pub fn build_query(center: Coordinate, radius_m: u32, timeout_s: u32) -> String {
    let mut q = format!("[out:json][timeout:{timeout_s}];\n(\n");
    for (key, value) in FILTERS {
        q.push_str(&format!(
            "  node[\"{key}\"=\"{value}\"](around:{radius_m},{},{});\n",
            center.lat, center.lng
        ));
    }
    q.push_str(");\nout body;\n");
    q
}

pub fn query_url(endpoint: &str, query: &str) -> String {
    format!("{endpoint}?data={}", utf8_percent_encode(query, URI_COMPONENT))
}

/// Parses an Overpass JSON body into facilities. Elements without a
/// position are skipped and repeated node ids are kept once.
pub fn parse_response(body: &str) -> Result<Vec<Facility>, SearchError> {
    let response: OverpassResponse =
        serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))?;
    let mut seen = HashSet::new();
    let facilities = response
        .elements
        .into_iter()
        .filter(|el| el.kind.as_deref().is_none_or(|k| k == "node"))
        .filter_map(|el| {
            let coordinate = Coordinate::new(el.lat?, el.lon?);
            if !coordinate.is_valid() || !seen.insert(el.id) {
                return None;
            }
            Some(to_facility(el.id, coordinate, &el.tags))
        })
        .collect();
    Ok(facilities)
}

fn to_facility(id: i64, coordinate: Coordinate, tags: &HashMap<String, String>) -> Facility {
    let tag = |k: &str| tags.get(k).map(String::as_str).filter(|v| !v.trim().is_empty());
    let kind = if tag("amenity") == Some("hospital") || tag("healthcare") == Some("hospital") {
        FacilityKind::Hospital
    } else {
        FacilityKind::Clinic
    };
    Facility {
        id,
        coordinate,
        name: tag("name").unwrap_or("Medical Facility").to_string(),
        kind,
        address: tag("addr:street").or_else(|| tag("addr:full")).map(str::to_string),
    }
}

#[derive(Clone, Debug)]
pub struct OverpassClient {
    endpoint: String,
    timeout_s: u32,
}

impl OverpassClient {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            timeout_s: config.query_timeout_s,
        }
    }

    async fn fetch_text(&self, url: &str) -> Result<String, SearchError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestInit, RequestMode, Response};

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|e| SearchError::Network(format!("request error: {:?}", e)))?;
        let window = web_sys::window().ok_or_else(|| SearchError::Network("no window".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| SearchError::Network(format!("fetch error: {:?}", e)))?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| SearchError::Network("response is not a Response".into()))?;
        if !resp.ok() {
            return Err(SearchError::Network(format!("HTTP {}", resp.status())));
        }
        let text = JsFuture::from(
            resp.text()
                .map_err(|e| SearchError::Network(format!("body error: {:?}", e)))?,
        )
        .await
        .map_err(|e| SearchError::Network(format!("body error: {:?}", e)))?;
        text.as_string()
            .ok_or_else(|| SearchError::Parse("response body is not text".into()))
    }
}

impl FacilitySource for OverpassClient {
    async fn search(&self, center: Coordinate, radius_m: u32) -> Result<Vec<Facility>, SearchError> {
        let url = query_url(&self.endpoint, &build_query(center, radius_m, self.timeout_s));
        debug!(%url, "querying overpass");
        let body = self.fetch_text(&url).await?;
        let facilities = parse_response(&body)?;
        info!(count = facilities.len(), radius_m, "overpass search finished");
        Ok(facilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_covers_all_tags_and_radius() {
        let q = build_query(Coordinate::new(12.97, 77.59), 5000, 25);
        assert!(q.starts_with("[out:json][timeout:25];"));
        assert!(q.contains(r#"node["amenity"="hospital"](around:5000,12.97,77.59);"#));
        assert!(q.contains(r#"node["amenity"="clinic"](around:5000,12.97,77.59);"#));
        assert!(q.contains(r#"node["healthcare"="hospital"](around:5000,12.97,77.59);"#));
        assert!(q.contains(r#"node["healthcare"="clinic"](around:5000,12.97,77.59);"#));
        assert!(q.trim_end().ends_with("out body;"));
    }

    #[test]
    fn url_encodes_like_encode_uri_component() {
        let url = query_url("https://overpass-api.de/api/interpreter", r#"[out:json];node["a"="b"](around:5,1.5,-2);"#);
        assert_eq!(
            url,
            "https://overpass-api.de/api/interpreter?data=%5Bout%3Ajson%5D%3Bnode%5B%22a%22%3D%22b%22%5D(around%3A5%2C1.5%2C-2)%3B"
        );
    }

    #[test]
    fn parses_tags_with_fallbacks() {
        let body = r#"{
            "version": 0.6,
            "elements": [
                {"type": "node", "id": 1, "lat": 12.98, "lon": 77.6,
                 "tags": {"amenity": "hospital", "name": "City Hospital", "addr:street": "MG Road"}},
                {"type": "node", "id": 2, "lat": 12.99, "lon": 77.61,
                 "tags": {"healthcare": "hospital", "addr:full": "12 Main St"}},
                {"type": "node", "id": 3, "lat": 12.96, "lon": 77.58,
                 "tags": {"amenity": "clinic", "name": "Corner Clinic"}}
            ]
        }"#;
        let f = parse_response(body).unwrap();
        assert_eq!(f.len(), 3);

        assert_eq!(f[0].name, "City Hospital");
        assert_eq!(f[0].kind, FacilityKind::Hospital);
        assert_eq!(f[0].address.as_deref(), Some("MG Road"));

        assert_eq!(f[1].name, "Medical Facility");
        assert_eq!(f[1].kind, FacilityKind::Hospital);
        assert_eq!(f[1].address.as_deref(), Some("12 Main St"));

        assert_eq!(f[2].kind, FacilityKind::Clinic);
        assert_eq!(f[2].address, None);
        assert_eq!(f[2].address_or_default(), "Address not available");
    }

    #[test]
    fn skips_positionless_and_duplicate_elements() {
        let body = r#"{"elements": [
            {"type": "node", "id": 7, "lat": 1.0, "lon": 2.0, "tags": {"amenity": "clinic"}},
            {"type": "node", "id": 7, "lat": 1.0, "lon": 2.0},
            {"type": "way", "id": 8, "nodes": [1, 2]},
            {"type": "node", "id": 9}
        ]}"#;
        let f = parse_response(body).unwrap();
        assert_eq!(f.len(), 1);
        assert_eq!(f[0].id, 7);
    }

    #[test]
    fn empty_elements_is_ok() {
        assert!(parse_response(r#"{"elements": []}"#).unwrap().is_empty());
    }

    #[test]
    fn malformed_body_is_parse_error() {
        assert!(matches!(parse_response("<html>rate limited</html>"), Err(SearchError::Parse(_))));
        assert!(matches!(parse_response(r#"{"remark": "x"}"#), Err(SearchError::Parse(_))));
    }
}
