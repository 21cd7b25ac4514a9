//! Core data types shared by the map chain, the widgets and the config.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components finite and inside geographic bounds.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityKind {
    Hospital,
    Clinic,
}

impl FacilityKind {
    pub fn label(self) -> &'static str {
        match self {
            FacilityKind::Hospital => "Hospital",
            FacilityKind::Clinic => "Clinic",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    /// OpenStreetMap node id.
    pub id: i64,
    pub coordinate: Coordinate,
    pub name: String,
    pub kind: FacilityKind,
    pub address: Option<String>,
}

impl Facility {
    pub fn address_or_default(&self) -> &str {
        self.address.as_deref().unwrap_or("Address not available")
    }
}

/// A facility paired with its distance from the search center.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedFacility {
    pub facility: Facility,
    pub distance_km: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub label: String,
    pub number: String,
}
