use leptos::*;

use medimap_core::search::SearchCategory;

use crate::components::{FilterBar, SearchBar};

#[component]
pub fn Home() -> impl IntoView {
    view! {
      <section>
        <div class="container p-6 mx-auto">
          <h1 class="mb-8 text-3xl font-bold text-center text-emerald-600">"MediMap"</h1>
          <SearchBar category=SearchCategory::Hospital />
          <FilterBar />
        </div>
      </section>
    }
}
