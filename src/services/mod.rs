//! Platform and network adapters.
//!
//! The async traits let the locate/search flow run against fakes; the
//! browser-backed implementations live next to them.

pub mod geolocation;
pub mod overpass;
pub mod storage;
pub mod translate;

use crate::error::{LocateError, SearchError};
use crate::model::{Coordinate, Facility};

pub use geolocation::BrowserLocator;
pub use overpass::OverpassClient;
pub use storage::{LocalStore, record_visit};

#[allow(async_fn_in_trait)]
pub trait Locator {
    async fn locate(&self) -> Result<Coordinate, LocateError>;
}

#[allow(async_fn_in_trait)]
pub trait FacilitySource {
    async fn search(&self, center: Coordinate, radius_m: u32) -> Result<Vec<Facility>, SearchError>;
}
