use medimap_boundary::{HospitalBasic, HospitalDesc, SearchRequest};

use crate::geo::Position;

pub trait AlertGateway {
    /// Shows a blocking message to the user.
    fn alert(&self, message: &str);
}

pub trait NavigationGateway {
    fn navigate(&self, path: &str, request: &SearchRequest);
    fn back(&self);
}

pub trait SearchKeywordBuffer {
    /// Returns the current input and leaves the buffer empty.
    fn take_keyword(&self) -> String;
}

pub trait PositionStore {
    fn set_position(&self, position: Position);
}

pub trait HospitalDetailStore {
    fn set_hospital_desc(&self, desc: HospitalDesc);
    fn set_hospital_basic(&self, basic: HospitalBasic);
}

pub trait HospitalSearchResultStore {
    fn set_hospital_search_result(&self, hospitals: Vec<HospitalBasic>);
}
