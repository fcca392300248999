use leptos::*;

use medimap_boundary::{HospitalBasic, HospitalDesc};
use medimap_core::{
    geo::Position, HospitalDetailStore, HospitalSearchResultStore, PositionStore,
    SearchKeywordBuffer,
};

/// Shared UI state of the application.
///
/// Each slot has exactly one writer:
/// the search bar owns `my_position`, the result page owns
/// `hospital_search_result` and the detail page owns the
/// `hospital_desc` and `hospital_basic` slots.
#[derive(Clone, Copy)]
pub struct AppState {
    pub my_position: RwSignal<Option<Position>>,
    pub hospital_search_result: RwSignal<Vec<HospitalBasic>>,
    pub hospital_desc: RwSignal<Option<HospitalDesc>>,
    pub hospital_basic: RwSignal<Option<HospitalBasic>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            my_position: RwSignal::new(None),
            hospital_search_result: RwSignal::new(Vec::new()),
            hospital_desc: RwSignal::new(None),
            hospital_basic: RwSignal::new(None),
        }
    }
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

impl PositionStore for AppState {
    fn set_position(&self, position: Position) {
        self.my_position.set(Some(position));
    }
}

impl HospitalDetailStore for AppState {
    fn set_hospital_desc(&self, desc: HospitalDesc) {
        self.hospital_desc.set(Some(desc));
    }
    fn set_hospital_basic(&self, basic: HospitalBasic) {
        self.hospital_basic.set(Some(basic));
    }
}

impl HospitalSearchResultStore for AppState {
    fn set_hospital_search_result(&self, hospitals: Vec<HospitalBasic>) {
        self.hospital_search_result.set(hospitals);
    }
}

/// Input buffer of the search bar.
#[derive(Clone, Copy)]
pub struct KeywordBuffer(pub RwSignal<String>);

impl SearchKeywordBuffer for KeywordBuffer {
    fn take_keyword(&self) -> String {
        self.0.try_update(std::mem::take).unwrap_or_default()
    }
}
