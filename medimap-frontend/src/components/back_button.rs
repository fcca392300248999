use leptos::*;

use medimap_core::usecases::go_back;

use crate::browser::RouterNavigation;

#[component]
pub fn BackButton() -> impl IntoView {
    let navigation = RouterNavigation::new();

    view! {
      <button
        type="button"
        class="p-4 border-none bg-transparent text-2xl"
        on:click=move |_| go_back(&navigation)
      >
        <span class="sr-only">"Back"</span>
        "←"
      </button>
    }
}
