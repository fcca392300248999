use leptos::*;
use leptos_router::*;

use medimap_boundary::{HospitalBasic, HospitalDesc, HospitalTime};
use medimap_core::{usecases::commit_hospital_detail, util::filter::Located, Lifetime};
use medimap_frontend_api::HospitalApi;

use crate::{
    browser::from_navigation_state,
    components::{BackButton, Map},
    state::use_app_state,
};

#[component]
pub fn HospitalDetail(hospital_api: HospitalApi) -> impl IntoView {
    // -- signals -- //

    let state = use_app_state();
    let params = use_params_map();
    let location = use_location();

    let basic = match from_navigation_state::<HospitalBasic>(&location.state.get_untracked()) {
        Ok(basic) => Some(basic),
        Err(err) => {
            log::warn!("Missing hospital information: {err}");
            None
        }
    };

    // -- lifetime -- //

    let lifetime = Lifetime::default();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });

    // -- actions -- //

    let fetch_desc = create_action(move |(id, basic): &(String, HospitalBasic)| {
        let id = id.clone();
        let basic = basic.clone();
        let api = hospital_api.clone();
        let lifetime = lifetime.clone();
        async move {
            let result = api.hospital_desc(&id).await;
            commit_hospital_detail(&lifetime, &state, &id, basic, result);
        }
    });

    // -- effects -- //

    Effect::new({
        let basic = basic.clone();
        move |_| {
            let Some(id) = params.with_untracked(|p| p.get("hospitalId").cloned()) else {
                log::warn!("Missing hospital id");
                return;
            };
            if let Some(basic) = basic.clone() {
                fetch_desc.dispatch((id, basic));
            }
        }
    });

    let Some(basic) = basic else {
        return view! {
          <BackButton />
          <div class="mx-auto text-center max-w-7xl px-4 mt-12 pb-16 sm:px-6 sm:pb-24 lg:px-8">
            <h2 class="text-3xl font-bold tracking-tight text-gray-900 sm:text-4xl">"Hospital not found"</h2>
          </div>
        }
        .into_view();
    };

    let hospital_id = basic.hospital_id;
    view! {
      <BackButton />
      <div>
        <Map center=basic.map_point() title=basic.hospital_name />
      </div>
      <HospitalSummary hospital_id />
    }
    .into_view()
}

#[component]
fn HospitalSummary(hospital_id: i64) -> impl IntoView {
    let state = use_app_state();

    move || {
        let basic = state
            .hospital_basic
            .get()
            .filter(|basic| basic.hospital_id == hospital_id);
        match (basic, state.hospital_desc.get()) {
            (Some(basic), Some(desc)) => view! { <HospitalProfile basic desc /> }.into_view(),
            _ => view! { <p class="p-6 text-gray-500">"Loading..."</p> }.into_view(),
        }
    }
}

#[component]
fn HospitalProfile(basic: HospitalBasic, desc: HospitalDesc) -> impl IntoView {
    let HospitalBasic {
        hospital_name,
        hospital_address,
        hospital_tel,
        ..
    } = basic;
    let HospitalDesc {
        name,
        description,
        homepage,
        departments,
        time,
    } = desc;

    view! {
      <div class="relative mx-auto max-w-7xl px-4 pb-16 sm:px-6 sm:pb-24 lg:px-8">
        <div class="mx-auto max-w-2xl text-center lg:max-w-4xl">
          <h2 class="mt-6 text-3xl font-bold tracking-tight text-gray-900 sm:text-4xl">
            { name.unwrap_or(hospital_name) }
          </h2>
          <p class="mt-4 text-gray-500">{ description }</p>
        </div>

        <dl class="mx-auto mt-16 grid max-w-2xl grid-cols-1 gap-x-6 gap-y-10 sm:grid-cols-2 sm:gap-y-16 lg:max-w-none lg:grid-cols-3 lg:gap-x-8">
          <div class="border-t border-gray-200 pt-4">
            <dt class="font-medium text-gray-900">"Address"</dt>
            <dd class="mt-2 text-sm text-gray-500">{ hospital_address }</dd>
          </div>
          <div class="border-t border-gray-200 pt-4">
            <dt class="font-medium text-gray-900">"Contact"</dt>
            <dd class="mt-2 text-sm text-gray-500">
              { hospital_tel }
              <br />
              { homepage }
            </dd>
          </div>
          <div class="border-t border-gray-200 pt-4">
            <dt class="font-medium text-gray-900">"Departments"</dt>
            <dd class="mt-2 text-sm text-gray-500">{ departments.join(", ") }</dd>
          </div>
          <div class="border-t border-gray-200 pt-4">
            <dt class="font-medium text-gray-900">"Opening Hours"</dt>
            <dd class="mt-2 text-sm text-gray-500">{ time.map(opening_hours) }</dd>
          </div>
        </dl>
      </div>
    }
}

fn opening_hours(time: HospitalTime) -> impl IntoView {
    let mut notes = vec![];
    if time.open_on_holidays() {
        notes.push("open on holidays");
    }
    if time.open_at_night() {
        notes.push("open at night");
    }
    let HospitalTime { sat, sun, .. } = time;
    view! {
      <span>"Saturday: " { sat.unwrap_or_else(|| "closed".to_string()) }</span>
      <br />
      <span>"Sunday: " { sun.unwrap_or_else(|| "closed".to_string()) }</span>
      <br />
      <span>{ notes.join(", ") }</span>
    }
}
