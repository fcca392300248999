use super::prelude::*;
use crate::util::sort::SortByDistanceTo;

/// Stores the hospitals found by a search, nearest first.
///
/// Without a known position the order of the service is kept.
/// Returns `None` if the outcome was dropped, either because the
/// result page is gone or because a newer search was started.
pub fn commit_search_result<S, E>(
    lifetime: &Lifetime,
    ticket: &RequestTicket,
    store: &S,
    position: Option<&Position>,
    result: Result<Vec<HospitalBasic>, E>,
) -> Option<Result<usize, E>>
where
    S: HospitalSearchResultStore,
{
    if !lifetime.is_alive() {
        log::debug!("Drop search result: result page is no longer mounted");
        return None;
    }
    if !ticket.is_latest() {
        log::debug!("Drop search result: superseded by a newer search");
        return None;
    }
    let mut hospitals = match result {
        Ok(hospitals) => hospitals,
        Err(err) => return Some(Err(err)),
    };
    if let Some(pos) = position {
        hospitals.sort_by_distance_to(&pos.center());
    }
    let count = hospitals.len();
    log::debug!("Found {count} hospitals");
    store.set_hospital_search_result(hospitals);
    Some(Ok(count))
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{new_basic, MockUi},
        *,
    };

    fn ids(ui: &MockUi) -> Vec<i64> {
        ui.hospital_search_result
            .borrow()
            .iter()
            .map(|h| h.hospital_id)
            .collect()
    }

    #[test]
    fn nearest_hospitals_first() {
        let ui = MockUi::default();
        let pos = Position::around(MapPoint::from_lat_lng_deg(36.35, 127.32));
        let found = vec![
            new_basic(1, 36.39, 127.32),
            new_basic(2, 36.351, 127.32),
            new_basic(3, 36.37, 127.32),
        ];
        let ticket = RequestSequence::default().start();
        let count = commit_search_result(
            &Lifetime::default(),
            &ticket,
            &ui,
            Some(&pos),
            Ok::<_, ()>(found),
        );
        assert_eq!(count, Some(Ok(3)));
        assert_eq!(ids(&ui), vec![2, 3, 1]);
    }

    #[test]
    fn keep_order_without_position() {
        let ui = MockUi::default();
        let found = vec![new_basic(1, 10.0, 10.0), new_basic(2, 0.0, 0.0)];
        let ticket = RequestSequence::default().start();
        commit_search_result(&Lifetime::default(), &ticket, &ui, None, Ok::<_, ()>(found));
        assert_eq!(ids(&ui), vec![1, 2]);
    }

    #[test]
    fn failed_search_keeps_previous_result() {
        let ui = MockUi::default();
        *ui.hospital_search_result.borrow_mut() = vec![new_basic(7, 0.0, 0.0)];
        let ticket = RequestSequence::default().start();
        let res = commit_search_result(&Lifetime::default(), &ticket, &ui, None, Err("offline"));
        assert_eq!(res, Some(Err("offline")));
        assert_eq!(ids(&ui), vec![7]);
    }

    #[test]
    fn late_response_of_an_earlier_search_is_dropped() {
        let ui = MockUi::default();
        let lifetime = Lifetime::default();
        let sequence = RequestSequence::default();
        let slow = sequence.start();
        let fast = sequence.start();

        let res = commit_search_result(
            &lifetime,
            &fast,
            &ui,
            None,
            Ok::<_, ()>(vec![new_basic(2, 0.0, 0.0)]),
        );
        assert_eq!(res, Some(Ok(1)));

        let res = commit_search_result(
            &lifetime,
            &slow,
            &ui,
            None,
            Ok::<_, ()>(vec![new_basic(1, 0.0, 0.0), new_basic(3, 0.0, 0.0)]),
        );
        assert!(res.is_none());
        assert_eq!(ids(&ui), vec![2]);

        assert!(commit_search_result(&lifetime, &slow, &ui, None, Err("timeout")).is_none());
    }

    #[test]
    fn drop_result_after_unmount() {
        let ui = MockUi::default();
        let lifetime = Lifetime::default();
        let ticket = RequestSequence::default().start();
        lifetime.end();
        let res = commit_search_result(
            &lifetime,
            &ticket,
            &ui,
            None,
            Ok::<_, ()>(vec![new_basic(1, 0.0, 0.0)]),
        );
        assert!(res.is_none());
        assert!(ui.hospital_search_result.borrow().is_empty());
    }
}
