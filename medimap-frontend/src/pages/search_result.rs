use leptos::*;
use leptos_router::*;

use medimap_boundary::{HospitalBasic, SearchArea, SearchRequest, SearchType};
use medimap_core::{
    geo::Position, usecases::commit_search_result, util::filter::InSearchArea, Lifetime,
    RequestSequence,
};
use medimap_frontend_api::HospitalApi;

use crate::{
    browser::{from_navigation_state, RouterNavigation},
    components::{BackButton, FilterBar, SearchBar},
    pages::Page,
    state::use_app_state,
};

#[component]
pub fn SearchResult(hospital_api: HospitalApi) -> impl IntoView {
    // -- signals -- //

    let state = use_app_state();
    let location = use_location();
    let (search_error, set_search_error) = create_signal(None::<String>);
    let (keyword, set_keyword) = create_signal(None::<String>);

    // -- lifetime -- //

    let lifetime = Lifetime::default();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });
    let searches = RequestSequence::default();

    // -- actions -- //

    let search_action = create_action(move |request: &SearchRequest| {
        let request = request.clone();
        let api = hospital_api.clone();
        let lifetime = lifetime.clone();
        let ticket = searches.start();
        async move {
            let position = state.my_position.get_untracked();
            let area = position.as_ref().map(SearchArea::from);
            let result = match request.search_type {
                SearchType::KeyWord => api.search_by_keyword(&request.value, area.as_ref()).await,
                SearchType::Filter => {
                    let filter = request.filter.unwrap_or_default();
                    api.search_filtered(&filter, area.as_ref()).await
                }
            };
            match commit_search_result(&lifetime, &ticket, &state, position.as_ref(), result) {
                None => {}
                Some(Ok(_)) => {
                    set_search_error.set(None);
                }
                Some(Err(err)) => {
                    log::warn!("Unable to search hospitals: {err}");
                    set_search_error.set(Some(err.to_string()));
                }
            }
        }
    });

    // -- effects -- //

    Effect::new(move |_| {
        match from_navigation_state::<SearchRequest>(&location.state.get()) {
            Ok(request) => {
                let keyword = match request.search_type {
                    SearchType::KeyWord => Some(request.value.clone()),
                    SearchType::Filter => None,
                };
                set_keyword.set(keyword);
                search_action.dispatch(request);
            }
            Err(err) => {
                log::warn!("Missing search request: {err}");
            }
        }
    });

    view! {
      <BackButton />
      <section>
        <div class="container p-6 mx-auto">
          <SearchBar />
          <FilterBar />
          { move || search_error.get().map(|err| view! { <p class="text-red-600">{ err }</p> }) }
          <div class="flex justify-start mb-4">
            <p class="py-2 text-gray-500 border-b border-gray-300">
              "Found "
              <span class="font-bold">{ move || state.hospital_search_result.with(Vec::len) }</span>
              " results"
              { move || keyword.get().map(|k| format!(" for \"{k}\"")) }
            </p>
          </div>
          <ul>
            <For
              each = move || state.hospital_search_result.get()
              key = |hospital| hospital.hospital_id
              let:hospital
            >
              <li class="mb-3">
                <HospitalListItem hospital position = state.my_position.into() />
              </li>
            </For>
          </ul>
        </div>
      </section>
    }
}

#[component]
fn HospitalListItem(hospital: HospitalBasic, position: Signal<Option<Position>>) -> impl IntoView {
    let navigation = RouterNavigation::new();
    let nearby = {
        let hospital = hospital.clone();
        move || {
            position
                .get()
                .is_some_and(|pos| hospital.in_search_area(&pos))
        }
    };
    let HospitalBasic {
        hospital_name,
        hospital_address,
        hospital_tel,
        ..
    } = hospital.clone();

    view! {
      <div
        class="font-bold text-lg cursor-pointer hover:text-gray-600"
        on:click = move |_| {
            navigation.navigate_with_state(&Page::hospital_path(hospital.hospital_id), &hospital);
        }
      >
        { hospital_name }
        <Show when=nearby>
          <span class="ml-2 text-xs bg-emerald-100 text-emerald-700 rounded p-1">"within 5 km"</span>
        </Show>
      </div>
      <div class="text-gray-600">{ hospital_address }</div>
      <div class="text-gray-600">{ hospital_tel }</div>
    }
}
