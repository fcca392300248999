use medimap_boundary::SearchArea;

/// Degrees of latitude per kilometre.
pub const LAT_DEG_PER_KM: f64 = 0.0091;

/// Degrees of longitude per kilometre.
pub const LNG_DEG_PER_KM: f64 = 0.0113;

/// Radius of the area around the user that is searched.
pub const SEARCH_RADIUS_KM: f64 = 5.0;

const EARTH_MEAN_RADIUS_KM: f64 = 6_371.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    #[must_use]
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    /// Great-circle distance (haversine).
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos()
                * other.lat.to_radians().cos()
                * (d_lng / 2.0).sin().powi(2);
        2.0 * EARTH_MEAN_RADIUS_KM * a.sqrt().asin()
    }
}

/// The user's location together with the edges of the area around it.
///
/// The edge names follow the hospital service: `east` and `west`
/// hold latitudes, `south` and `north` hold longitudes.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat   : f64,
    pub lng   : f64,
    pub east  : f64,
    pub west  : f64,
    pub south : f64,
    pub north : f64,
}

impl Position {
    #[must_use]
    pub fn around(center: MapPoint) -> Self {
        Self::with_radius(center, SEARCH_RADIUS_KM)
    }

    #[must_use]
    pub fn with_radius(center: MapPoint, radius_km: f64) -> Self {
        let MapPoint { lat, lng } = center;
        let lat_ext = LAT_DEG_PER_KM * radius_km;
        let lng_ext = LNG_DEG_PER_KM * radius_km;
        Self {
            lat,
            lng,
            east: lat + lat_ext,
            west: lat - lat_ext,
            south: lng - lng_ext,
            north: lng + lng_ext,
        }
    }

    #[must_use]
    pub const fn center(&self) -> MapPoint {
        MapPoint::from_lat_lng_deg(self.lat, self.lng)
    }

    /// `[lat, lng, east, west, south, north]`
    #[must_use]
    pub const fn to_array(&self) -> [f64; 6] {
        [
            self.lat, self.lng, self.east, self.west, self.south, self.north,
        ]
    }

    #[must_use]
    pub fn contains(&self, point: MapPoint) -> bool {
        (self.west..=self.east).contains(&point.lat())
            && (self.south..=self.north).contains(&point.lng())
    }
}

impl From<&Position> for SearchArea {
    fn from(from: &Position) -> Self {
        let Position {
            east,
            west,
            south,
            north,
            ..
        } = *from;
        Self {
            e: east,
            w: west,
            s: south,
            n: north,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{actual} is not close to {expected}"
        );
    }

    #[test]
    fn five_km_area_around_position() {
        for (lat, lng) in [
            (36.35, 127.32),
            (0.0, 0.0),
            (-33.86, 151.21),
            (52.52, -13.4),
        ] {
            let pos = Position::around(MapPoint::from_lat_lng_deg(lat, lng));
            assert_close(pos.lat, lat);
            assert_close(pos.lng, lng);
            assert_close(pos.east, lat + 0.0455);
            assert_close(pos.west, lat - 0.0455);
            assert_close(pos.south, lng - 0.0565);
            assert_close(pos.north, lng + 0.0565);
        }
    }

    #[test]
    fn tuple_order() {
        let pos = Position::with_radius(MapPoint::from_lat_lng_deg(10.0, 20.0), 1.0);
        let [lat, lng, east, west, south, north] = pos.to_array();
        assert_close(lat, 10.0);
        assert_close(lng, 20.0);
        assert_close(east, 10.0091);
        assert_close(west, 9.9909);
        assert_close(south, 19.9887);
        assert_close(north, 20.0113);
    }

    #[test]
    fn contains_points_inside_the_area() {
        let pos = Position::around(MapPoint::from_lat_lng_deg(36.35, 127.32));
        assert!(pos.contains(pos.center()));
        assert!(pos.contains(MapPoint::from_lat_lng_deg(36.39, 127.37)));
        assert!(!pos.contains(MapPoint::from_lat_lng_deg(36.40, 127.32)));
        assert!(!pos.contains(MapPoint::from_lat_lng_deg(36.35, 127.25)));
    }

    #[test]
    fn search_area_from_position() {
        let pos = Position::around(MapPoint::from_lat_lng_deg(1.0, 2.0));
        let area = SearchArea::from(&pos);
        assert_close(area.e, pos.east);
        assert_close(area.w, pos.west);
        assert_close(area.s, pos.south);
        assert_close(area.n, pos.north);
    }

    #[test]
    fn validate_points() {
        assert!(MapPoint::from_lat_lng_deg(90.0, -180.0).is_valid());
        assert!(!MapPoint::from_lat_lng_deg(90.1, 0.0).is_valid());
        assert!(!MapPoint::from_lat_lng_deg(0.0, 180.5).is_valid());
    }

    #[test]
    fn haversine_distance() {
        let a = MapPoint::from_lat_lng_deg(0.0, 0.0);
        let b = MapPoint::from_lat_lng_deg(0.0, 1.0);
        assert!((a.distance_km(&b) - 111.19).abs() < 0.01);
        assert_close(a.distance_km(&a), 0.0);
    }
}
