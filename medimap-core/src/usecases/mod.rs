mod error;
mod go_back;
mod hospital_detail;
mod locate;
mod search_result;
mod submit_search;


pub use self::{
    error::GeolocationError, go_back::*, hospital_detail::*, locate::*, search_result::*,
    submit_search::*,
};

mod prelude {
    pub use super::error::GeolocationError;
    pub use crate::{
        gateways::*,
        geo::*,
        lifetime::{Lifetime, RequestSequence, RequestTicket},
        search::*,
    };
    pub use medimap_boundary::{HospitalBasic, HospitalDesc, SearchFilter, SearchRequest};
}
