use super::prelude::*;

pub fn go_back<N: NavigationGateway>(nav: &N) {
    nav.back();
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockUi, *};

    #[test]
    fn navigate_back_exactly_once() {
        let ui = MockUi::default();
        *ui.hospital_desc.borrow_mut() = Some(HospitalDesc::default());
        go_back(&ui);
        assert_eq!(ui.back_navigations.get(), 1);
        assert!(ui.navigations.borrow().is_empty());
        assert!(ui.hospital_desc.borrow().is_some());
    }
}
