use std::fmt;

use super::prelude::*;

/// Stores the outcome of the description request of the detail page.
///
/// Basic and descriptive info are written together once the request
/// succeeded, so both slots always refer to the same hospital.
/// A failed request is only logged.
pub fn commit_hospital_detail<S, E>(
    lifetime: &Lifetime,
    store: &S,
    hospital_id: &str,
    basic: HospitalBasic,
    result: Result<HospitalDesc, E>,
) -> bool
where
    S: HospitalDetailStore,
    E: fmt::Display,
{
    if !lifetime.is_alive() {
        log::debug!("Drop description of hospital {hospital_id}: detail page is no longer mounted");
        return false;
    }
    match result {
        Ok(desc) => {
            log::debug!("Loaded description of hospital {hospital_id}");
            store.set_hospital_desc(desc);
            store.set_hospital_basic(basic);
            true
        }
        Err(err) => {
            log::warn!("Unable to fetch description of hospital {hospital_id}: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{new_basic, MockUi},
        *,
    };

    fn desc(name: &str) -> HospitalDesc {
        HospitalDesc {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    #[test]
    fn store_description_and_basic_info() {
        let ui = MockUi::default();
        let basic = new_basic(42, 36.35, 127.32);
        let ok = commit_hospital_detail(
            &Lifetime::default(),
            &ui,
            "42",
            basic.clone(),
            Ok::<_, String>(desc("X")),
        );
        assert!(ok);
        assert_eq!(*ui.hospital_desc.borrow(), Some(desc("X")));
        assert_eq!(*ui.hospital_basic.borrow(), Some(basic));
    }

    #[test]
    fn keep_previous_description_on_failure() {
        let ui = MockUi::default();
        *ui.hospital_desc.borrow_mut() = Some(desc("previous"));
        let ok = commit_hospital_detail(
            &Lifetime::default(),
            &ui,
            "42",
            new_basic(42, 0.0, 0.0),
            Err("connection refused"),
        );
        assert!(!ok);
        assert_eq!(*ui.hospital_desc.borrow(), Some(desc("previous")));
        assert!(ui.alerts.borrow().is_empty());
    }

    #[test]
    fn drop_response_after_unmount() {
        let ui = MockUi::default();
        let lifetime = Lifetime::default();
        lifetime.end();
        let ok = commit_hospital_detail(
            &lifetime,
            &ui,
            "42",
            new_basic(42, 0.0, 0.0),
            Ok::<_, String>(desc("X")),
        );
        assert!(!ok);
        assert!(ui.hospital_desc.borrow().is_none());
        assert!(ui.hospital_basic.borrow().is_none());
    }
}
