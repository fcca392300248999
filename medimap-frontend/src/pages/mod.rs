mod home;
mod hospital_detail;
mod search_result;

use medimap_core::search::SEARCH_RESULT_PATH;

#[derive(Debug, Clone, Copy, Default)]
pub enum Page {
    #[default]
    Home,
    SearchResult,
    Hospital,
}

impl Page {
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::SearchResult => SEARCH_RESULT_PATH,
            Self::Hospital => "/hospital",
        }
    }

    pub fn hospital_path(hospital_id: i64) -> String {
        format!("{}/{hospital_id}", Self::Hospital.path())
    }
}

pub use self::{home::*, hospital_detail::*, search_result::*};
