use leptos::*;

use medimap_boundary::SearchFilter;
use medimap_core::usecases::submit_filter;

use crate::browser::RouterNavigation;

/// Lists the hospitals around the user by department and opening hours.
#[component]
pub fn FilterBar() -> impl IntoView {
    let filter = RwSignal::new(SearchFilter::default());
    let navigation = RouterNavigation::new();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit_filter(&navigation, filter.get_untracked());
    };

    view! {
      <form class="flex flex-wrap justify-center items-center gap-4 mb-8 text-gray-600" on:submit=on_submit>
        <label>
          "Department "
          <input
            type="number"
            min="0"
            class="w-20 py-1 px-2 border border-emerald-500 rounded"
            prop:value=move || filter.with(|f| f.part.to_string())
            on:input=move |ev| {
                let part = event_target_value(&ev).parse().unwrap_or_default();
                filter.update(|f| f.part = part);
            }
          />
        </label>
        <FilterFlag label="Saturday" filter get=|f| f.sat set=|f, v| f.sat = v />
        <FilterFlag label="Sunday" filter get=|f| f.sun set=|f, v| f.sun = v />
        <FilterFlag label="Holidays" filter get=|f| f.holiday set=|f, v| f.holiday = v />
        <FilterFlag label="Night" filter get=|f| f.night set=|f, v| f.night = v />
        <button
          type="submit"
          class="py-1 px-4 bg-emerald-500 text-white rounded-full shadow-md active:scale-95"
        >
          "Nearby"
        </button>
      </form>
    }
}

#[component]
fn FilterFlag(
    label: &'static str,
    filter: RwSignal<SearchFilter>,
    get: fn(&SearchFilter) -> u8,
    set: fn(&mut SearchFilter, u8),
) -> impl IntoView {
    view! {
      <label>
        <input
          type="checkbox"
          class="mr-1 accent-emerald-500"
          prop:checked=move || filter.with(get) == 1
          on:change=move |ev| {
              let flag = u8::from(event_target_checked(&ev));
              filter.update(|f| set(f, flag));
          }
        />
        { label }
      </label>
    }
}
