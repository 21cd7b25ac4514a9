// Ranking of search results by distance from the user
use crate::error::SearchError;
use crate::geo::haversine_km;
use crate::model::{Coordinate, Facility, RankedFacility};
use crate::services::FacilitySource;

/// Nearest first, keeping input order for equal distances, truncated to `limit`.
pub fn rank(center: Coordinate, facilities: Vec<Facility>, limit: usize) -> Vec<RankedFacility> {
    let mut ranked: Vec<RankedFacility> = facilities
        .into_iter()
        .map(|facility| RankedFacility {
            distance_km: haversine_km(center, facility.coordinate),
            facility,
        })
        .collect();
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked.truncate(limit);
    ranked
}

/// Runs one search around `center` and ranks the result.
pub async fn search_nearby(
    source: &impl FacilitySource,
    center: Coordinate,
    radius_m: u32,
    limit: usize,
) -> Result<Vec<RankedFacility>, SearchError> {
    let facilities = source.search(center, radius_m).await?;
    if facilities.is_empty() {
        return Err(SearchError::EmptyResult { radius_m });
    }
    Ok(rank(center, facilities, limit))
}
