use super::prelude::*;

pub const GEOLOCATION_FAILED_MESSAGE: &str = "Failed to load your location.";

/// Handles the single geolocation reading requested by the search bar.
///
/// A successful reading replaces the stored position as a whole.
/// A failed reading alerts the user once and leaves the store untouched.
pub fn store_current_position<S, A>(
    lifetime: &Lifetime,
    store: &S,
    alert: &A,
    reading: Result<MapPoint, GeolocationError>,
) -> Option<Position>
where
    S: PositionStore,
    A: AlertGateway,
{
    if !lifetime.is_alive() {
        log::debug!("Drop geolocation reading: search bar is no longer mounted");
        return None;
    }
    let reading = reading.and_then(|point| {
        if point.is_valid() {
            Ok(point)
        } else {
            Err(GeolocationError::PositionUnavailable)
        }
    });
    match reading {
        Ok(point) => {
            let position = Position::around(point);
            log::debug!("Current position: {:?}", position.to_array());
            store.set_position(position);
            Some(position)
        }
        Err(err) => {
            log::warn!("Unable to get current position: {err}");
            alert.alert(GEOLOCATION_FAILED_MESSAGE);
            None
        }
    }
}
