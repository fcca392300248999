use medimap_boundary::{SearchFilter, SearchRequest, SearchType};

pub const SEARCH_RESULT_PATH: &str = "/hospital/search/result";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCategory {
    Hospital,
    Medicine,
}

#[must_use]
pub const fn placeholder(category: Option<SearchCategory>) -> &'static str {
    match category {
        Some(SearchCategory::Hospital) => "Please enter a hospital name.",
        Some(SearchCategory::Medicine) => "Please enter a medicine name.",
        None => "Please enter a search term.",
    }
}

#[must_use]
pub fn keyword_request(value: String) -> SearchRequest {
    SearchRequest {
        search_type: SearchType::KeyWord,
        value,
        filter: None,
    }
}

/// Request of an area search by department and opening hours.
#[must_use]
pub fn filter_request(filter: SearchFilter) -> SearchRequest {
    SearchRequest {
        search_type: SearchType::Filter,
        value: String::new(),
        filter: Some(filter),
    }
}
