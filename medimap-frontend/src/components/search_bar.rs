use leptos::*;

use medimap_core::{
    search::{placeholder, SearchCategory},
    usecases::{store_current_position, submit_search},
    Lifetime,
};

use crate::{
    browser::{request_current_position, BrowserAlert, RouterNavigation},
    state::{use_app_state, KeywordBuffer},
};

#[component]
pub fn SearchBar(#[prop(optional)] category: Option<SearchCategory>) -> impl IntoView {
    // -- signals -- //

    let state = use_app_state();
    let keyword = RwSignal::new(String::new());
    let buffer = KeywordBuffer(keyword);
    let navigation = RouterNavigation::new();

    // -- lifetime -- //

    let lifetime = Lifetime::default();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });

    // -- effects -- //

    Effect::new(move |_| {
        log::debug!("Request current position");
        let lifetime = lifetime.clone();
        request_current_position(move |reading| {
            store_current_position(&lifetime, &state, &BrowserAlert, reading);
        });
    });

    // -- callbacks -- //

    let on_submit = {
        let navigation = navigation.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            submit_search(&buffer, &navigation);
        }
    };

    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        submit_search(&buffer, &navigation);
    };

    view! {
      <div class="flex justify-center mb-8">
        <form on:submit=on_submit>
          <input
            type="search"
            class="w-72 py-3 px-5 text-lg border border-emerald-500 rounded-full shadow-md focus:outline-emerald-500"
            placeholder=placeholder(category)
            autofocus=true
            prop:value=move || keyword.get()
            on:input=move |ev| keyword.set(event_target_value(&ev))
          />
        </form>
        <button
          type="button"
          class="ml-4 w-12 h-12 bg-white border border-emerald-500 rounded-full shadow-md active:scale-95"
          on:click=on_click
        >
          <span class="sr-only">"Search"</span>
          "🔍"
        </button>
      </div>
    }
}
