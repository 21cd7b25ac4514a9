//! Site configuration.
//!
//! Every field has a default; a page may override any subset by embedding
//! `<script id="site-config" type="application/json">{...}</script>`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::{Coordinate, DirectoryEntry, FaqItem};

pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub map: MapConfig,
    pub search: SearchConfig,
    pub geolocation: GeolocationConfig,
    pub menu: MenuConfig,
    pub translate: TranslateConfig,
    pub visitor_storage_key: String,
    pub faq: Vec<FaqItem>,
    pub directory: Vec<DirectoryEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub element_id: String,
    pub default_center: Coordinate,
    pub default_zoom: u8,
    /// Zoom applied after the user's position is found.
    pub located_zoom: u8,
    /// Zoom applied when a facility is picked from the list.
    pub focus_zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    /// Delay before recomputing the map size once its container is visible.
    pub refresh_delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub endpoint: String,
    pub radius_m: u32,
    pub display_limit: usize,
    /// Server-side timeout passed inside the query.
    pub query_timeout_s: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeolocationConfig {
    pub high_accuracy: bool,
    pub timeout_ms: u32,
    pub maximum_age_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub open_delay_ms: u32,
    pub close_delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    pub element_id: String,
    pub page_language: String,
    pub included_languages: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            map: MapConfig::default(),
            search: SearchConfig::default(),
            geolocation: GeolocationConfig::default(),
            menu: MenuConfig::default(),
            translate: TranslateConfig::default(),
            visitor_storage_key: "visitorCount".to_string(),
            faq: default_faq(),
            directory: default_directory(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            element_id: "map".to_string(),
            default_center: Coordinate::new(20.5937, 78.9629),
            default_zoom: 5,
            located_zoom: 13,
            focus_zoom: 16,
            min_zoom: 3,
            max_zoom: 18,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                .to_string(),
            refresh_delay_ms: 300,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://overpass-api.de/api/interpreter".to_string(),
            radius_m: 5000,
            display_limit: 8,
            query_timeout_s: 25,
        }
    }
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: 10_000,
            maximum_age_ms: 60_000,
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            open_delay_ms: 10,
            close_delay_ms: 300,
        }
    }
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            element_id: "google_translate_element".to_string(),
            page_language: "en".to_string(),
            included_languages: ["en", "hi", "es", "fr", "de", "zh", "ar", "ru", "ja", "ko"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the embedded config block; absent or malformed falls back to defaults.
    pub fn from_page() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(cfg) => {
                    debug!("loaded site config from #{CONFIG_ELEMENT_ID}");
                    cfg
                }
                Err(err) => {
                    warn!("ignoring malformed site config: {err}");
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

fn default_faq() -> Vec<FaqItem> {
    [
        (
            "When should I call an ambulance?",
            "Call for chest pain, difficulty breathing, severe bleeding, sudden weakness or numbness, loss of consciousness, or any injury you cannot safely manage yourself.",
        ),
        (
            "What should I tell the emergency operator?",
            "Give your exact location first, then describe what happened, how many people are hurt, and whether they are conscious and breathing. Stay on the line until told otherwise.",
        ),
        (
            "How do I find the nearest hospital?",
            "Open the menu, press \"Locate Me\" and then \"Find Hospitals\". The closest facilities are listed first; tap one to see it on the map.",
        ),
        (
            "Why use the timer?",
            "Track how long symptoms have lasted or time intervals during first aid, and report the figure to the responders.",
        ),
    ]
    .into_iter()
    .map(|(q, a)| FaqItem {
        question: q.to_string(),
        answer: a.to_string(),
    })
    .collect()
}

fn default_directory() -> Vec<DirectoryEntry> {
    [
        ("National Emergency", "112"),
        ("Police", "100"),
        ("Fire", "101"),
        ("Ambulance", "102"),
        ("Emergency Medical Services", "108"),
        ("Women Helpline", "1091"),
        ("Child Helpline", "1098"),
        ("Disaster Management", "1078"),
    ]
    .into_iter()
    .map(|(label, number)| DirectoryEntry {
        label: label.to_string(),
        number: number.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.search.radius_m, 5000);
        assert_eq!(cfg.search.display_limit, 8);
        assert_eq!(cfg.geolocation.timeout_ms, 10_000);
        assert_eq!(cfg.geolocation.maximum_age_ms, 60_000);
        assert_eq!(cfg.visitor_storage_key, "visitorCount");
        assert_eq!(cfg.translate.included_languages.join(","), "en,hi,es,fr,de,zh,ar,ru,ja,ko");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = SiteConfig::from_json(
            r#"{"search": {"radius_m": 2000}, "translate": {"included_languages": ["en", "kn"]}}"#,
        )
        .unwrap();
        assert_eq!(cfg.search.radius_m, 2000);
        assert_eq!(cfg.search.display_limit, 8);
        assert_eq!(cfg.translate.page_language, "en");
        assert_eq!(cfg.translate.included_languages, vec!["en", "kn"]);
        assert_eq!(cfg.map.default_zoom, 5);
        assert!(!cfg.faq.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{not json").is_err());
    }
}
