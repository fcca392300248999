use leptos::*;
use leptos_router::*;

use medimap_frontend_api::HospitalApi;

mod browser;
mod cfg;
mod state;

mod pages;
use pages::*;

mod components;

use self::{cfg::Cfg, state::AppState};

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- config -- //

    let cfg = Cfg::from_build_env_or_default();
    log::debug!("Use hospital service at {}", cfg.api_url_hospital);

    // -- signals -- //

    provide_context(AppState::default());

    // -- init API -- //

    let hospital_api = HospitalApi::new(cfg.api_url_hospital);
    let detail_api = hospital_api.clone();

    view! {
      <Router>
        <main>
          <Routes>
            <Route
              path=Page::Home.path()
              view=Home
            />
            <Route
              path=Page::SearchResult.path()
              view=move || view! { <SearchResult hospital_api = hospital_api.clone() /> }
            />
            <Route
              path=format!("{}/:hospitalId", Page::Hospital.path())
              view=move || view! { <HospitalDetail hospital_api = detail_api.clone() /> }
            />
          </Routes>
        </main>
      </Router>
    }
}
