use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("Permission to access the location was denied")]
    PermissionDenied,
    #[error("The location is unavailable")]
    PositionUnavailable,
    #[error("Timeout while requesting the location")]
    Timeout,
    #[error("Geolocation is not supported")]
    Unsupported,
}

impl GeolocationError {
    /// Maps the `code` of a `GeolocationPositionError`.
    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            _ => Self::Unsupported,
        }
    }
}
