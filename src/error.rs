use thiserror::Error;

/// Failure of a one-shot position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocateError {
    #[error("Please allow location access in your browser settings.")]
    PermissionDenied,
    #[error("Location information is unavailable.")]
    PositionUnavailable,
    #[error("Location request timed out.")]
    Timeout,
    #[error("Geolocation is not supported by your browser.")]
    Unsupported,
    #[error("An unknown error occurred.")]
    Unknown,
}

impl LocateError {
    /// Maps a `GeolocationPositionError.code` to its kind.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => LocateError::PermissionDenied,
            2 => LocateError::PositionUnavailable,
            3 => LocateError::Timeout,
            _ => LocateError::Unknown,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            LocateError::Unsupported => self.to_string(),
            other => format!("Unable to get your location. {other}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no location has been resolved yet")]
    MissingLocation,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Parse(String),
    #[error("no facilities within {radius_m} m")]
    EmptyResult { radius_m: u32 },
}

impl SearchError {
    pub fn user_message(&self) -> String {
        match self {
            SearchError::MissingLocation => {
                "Please click \"Locate Me\" first to find your location.".to_string()
            }
            SearchError::Network(_) | SearchError::Parse(_) => {
                "Error loading medical facilities. Please check your internet connection and try again."
                    .to_string()
            }
            SearchError::EmptyResult { radius_m } => format!(
                "No medical facilities found within {}. Try moving to a more populated area.",
                crate::util::format_radius(*radius_m)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage access failed: {0}")]
    Access(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map element #{0} not found on this page")]
    MissingElement(String),
    #[error("mapping library error: {0}")]
    Library(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_classify() {
        assert_eq!(LocateError::from_code(1), LocateError::PermissionDenied);
        assert_eq!(LocateError::from_code(2), LocateError::PositionUnavailable);
        assert_eq!(LocateError::from_code(3), LocateError::Timeout);
        assert_eq!(LocateError::from_code(0), LocateError::Unknown);
        assert_eq!(LocateError::from_code(42), LocateError::Unknown);
    }

    #[test]
    fn locate_messages() {
        assert_eq!(
            LocateError::Timeout.user_message(),
            "Unable to get your location. Location request timed out."
        );
        assert_eq!(
            LocateError::Unsupported.user_message(),
            "Geolocation is not supported by your browser."
        );
    }

    #[test]
    fn empty_result_mentions_radius() {
        let msg = SearchError::EmptyResult { radius_m: 5000 }.user_message();
        assert!(msg.starts_with("No medical facilities found within 5km."));
    }
}
