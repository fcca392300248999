use crate::{geo::MapPoint, util::filter::Located};

pub trait DistanceTo {
    fn distance_to(&self, from: &MapPoint) -> f64;
}

impl<T> DistanceTo for T
where
    T: Located,
{
    fn distance_to(&self, from: &MapPoint) -> f64 {
        self.map_point().distance_km(from)
    }
}

pub trait SortByDistanceTo {
    fn sort_by_distance_to(&mut self, from: &MapPoint);
}

impl<T> SortByDistanceTo for [T]
where
    T: DistanceTo,
{
    fn sort_by_distance_to(&mut self, from: &MapPoint) {
        self.sort_by(|a, b| a.distance_to(from).total_cmp(&b.distance_to(from)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::filter::tests::new_hospital;

    #[test]
    fn sort_hospitals_by_distance() {
        let me = MapPoint::from_lat_lng_deg(36.35, 127.32);
        let mut hospitals = vec![
            new_hospital(1, 36.40, 127.32),
            new_hospital(2, 36.35, 127.33),
            new_hospital(3, 36.20, 127.10),
            new_hospital(4, 36.36, 127.32),
        ];
        hospitals.sort_by_distance_to(&me);
        let ids: Vec<_> = hospitals.iter().map(|h| h.hospital_id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn sort_empty_list() {
        let mut hospitals: Vec<medimap_boundary::HospitalBasic> = vec![];
        hospitals.sort_by_distance_to(&MapPoint::default());
        assert!(hospitals.is_empty());
    }
}
