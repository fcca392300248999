use medimap_boundary::HospitalBasic;

use crate::geo::{MapPoint, Position};

pub trait Located {
    fn map_point(&self) -> MapPoint;
}

impl Located for HospitalBasic {
    fn map_point(&self) -> MapPoint {
        MapPoint::from_lat_lng_deg(self.hospital_y, self.hospital_x)
    }
}

pub trait InSearchArea {
    fn in_search_area(&self, position: &Position) -> bool;
}

impl<T> InSearchArea for T
where
    T: Located,
{
    fn in_search_area(&self, position: &Position) -> bool {
        position.contains(self.map_point())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    pub fn new_hospital(id: i64, lat: f64, lng: f64) -> HospitalBasic {
        HospitalBasic {
            hospital_id: id,
            hospital_name: format!("Hospital {id}"),
            hospital_x: lng,
            hospital_y: lat,
            hospital_address: None,
            hospital_tel: None,
        }
    }

    #[test]
    fn hospital_coordinates_are_swapped_into_lat_lng() {
        let h = new_hospital(1, 36.3, 127.4);
        assert_eq!(h.map_point(), MapPoint::from_lat_lng_deg(36.3, 127.4));
    }

    #[test]
    fn filter_by_search_area() {
        let pos = Position::around(MapPoint::from_lat_lng_deg(36.35, 127.32));
        let hospitals = [
            new_hospital(1, 36.35, 127.33),
            new_hospital(2, 36.50, 127.33),
            new_hospital(3, 36.34, 127.30),
        ];
        assert_eq!(
            hospitals
                .iter()
                .filter(|h| h.in_search_area(&pos))
                .count(),
            2
        );
    }
}
