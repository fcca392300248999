use super::prelude::*;

/// Navigates to the result page with the typed keyword.
///
/// The buffer is empty afterwards. Empty keywords are submitted as well.
pub fn submit_search<B, N>(buffer: &B, nav: &N) -> SearchRequest
where
    B: SearchKeywordBuffer,
    N: NavigationGateway,
{
    let request = keyword_request(buffer.take_keyword());
    log::info!("Search for '{}'", request.value);
    nav.navigate(SEARCH_RESULT_PATH, &request);
    request
}

/// Navigates to the result page with the chosen filter criteria.
///
/// Without any criterion all hospitals around the user are listed.
pub fn submit_filter<N>(nav: &N, filter: SearchFilter) -> SearchRequest
where
    N: NavigationGateway,
{
    if filter.is_empty() {
        log::info!("Search all hospitals nearby");
    } else {
        log::info!("Search hospitals nearby with {filter:?}");
    }
    let request = filter_request(filter);
    nav.navigate(SEARCH_RESULT_PATH, &request);
    request
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockUi, *};
    use medimap_boundary::SearchType;

    #[test]
    fn navigate_to_result_page_and_clear_input() {
        let ui = MockUi::default();
        *ui.keyword.borrow_mut() = "aspirin".into();
        submit_search(&ui, &ui);
        let navigations = ui.navigations.borrow();
        assert_eq!(navigations.len(), 1);
        let (path, request) = &navigations[0];
        assert_eq!(path, "/hospital/search/result");
        assert_eq!(
            *request,
            SearchRequest {
                search_type: SearchType::KeyWord,
                value: "aspirin".into(),
                filter: None,
            }
        );
        assert!(ui.keyword.borrow().is_empty());
    }

    #[test]
    fn submit_empty_keyword() {
        let ui = MockUi::default();
        let request = submit_search(&ui, &ui);
        assert_eq!(request.value, "");
        assert_eq!(ui.navigations.borrow().len(), 1);
    }

    #[test]
    fn navigate_with_filter_and_keep_keyword() {
        let ui = MockUi::default();
        *ui.keyword.borrow_mut() = "typed".into();
        let filter = SearchFilter {
            part: 1,
            holiday: 1,
            ..Default::default()
        };
        submit_filter(&ui, filter);
        let navigations = ui.navigations.borrow();
        let (path, request) = &navigations[0];
        assert_eq!(path, "/hospital/search/result");
        assert_eq!(request.search_type, SearchType::Filter);
        assert_eq!(request.filter, Some(filter));
        assert_eq!(*ui.keyword.borrow(), "typed");
    }
}
