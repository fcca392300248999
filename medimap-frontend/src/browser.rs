use std::{cell::RefCell, rc::Rc};

use anyhow::anyhow;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, State};
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{GeolocationPosition, GeolocationPositionError};

use medimap_boundary::SearchRequest;
use medimap_core::{geo::MapPoint, usecases::GeolocationError, AlertGateway, NavigationGateway};

pub struct BrowserAlert;

impl AlertGateway for BrowserAlert {
    fn alert(&self, message: &str) {
        if let Err(err) = window().alert_with_message(message) {
            log::warn!("Unable to show alert: {}", js_error(err));
        }
    }
}

/// Client-side navigation of the current router.
#[derive(Clone)]
pub struct RouterNavigation {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigation {
    /// Must be created within a `<Router>`.
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(navigate),
        }
    }

    pub fn navigate_with_state<T>(&self, path: &str, payload: &T)
    where
        T: Serialize,
    {
        match to_navigation_state(payload) {
            Ok(state) => {
                log::info!("Navigate to {path}");
                (self.navigate)(
                    path,
                    NavigateOptions {
                        state,
                        ..Default::default()
                    },
                );
            }
            Err(err) => {
                log::error!("Unable to navigate to {path}: {err}");
            }
        }
    }
}

impl NavigationGateway for RouterNavigation {
    fn navigate(&self, path: &str, request: &SearchRequest) {
        self.navigate_with_state(path, request);
    }

    fn back(&self) {
        if let Err(err) = history_back() {
            log::warn!("Unable to navigate back: {err}");
        }
    }
}

fn history_back() -> anyhow::Result<()> {
    window()
        .history()
        .and_then(|history| history.back())
        .map_err(js_error)
}

pub fn to_navigation_state<T>(payload: &T) -> anyhow::Result<State>
where
    T: Serialize,
{
    let json = serde_json::to_string(payload)?;
    Ok(State(Some(JsValue::from_str(&json))))
}

pub fn from_navigation_state<T>(state: &State) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let json = state
        .0
        .as_ref()
        .ok_or_else(|| anyhow!("no navigation state"))?
        .as_string()
        .ok_or_else(|| anyhow!("unexpected navigation state"))?;
    Ok(serde_json::from_str(&json)?)
}

/// Requests the current position once.
///
/// `on_reading` is called at most once, either with the position
/// or with the reason why it is not available.
pub fn request_current_position<F>(on_reading: F)
where
    F: FnOnce(Result<MapPoint, GeolocationError>) + 'static,
{
    let geolocation = match window().navigator().geolocation() {
        Ok(geolocation) => geolocation,
        Err(err) => {
            log::warn!("Geolocation is not available: {}", js_error(err));
            on_reading(Err(GeolocationError::Unsupported));
            return;
        }
    };
    let on_reading = Rc::new(RefCell::new(Some(on_reading)));

    let on_success = {
        let on_reading = Rc::clone(&on_reading);
        Closure::once_into_js(move |position: GeolocationPosition| {
            let coords = position.coords();
            let point = MapPoint::from_lat_lng_deg(coords.latitude(), coords.longitude());
            let callback = on_reading.borrow_mut().take();
            if let Some(callback) = callback {
                callback(Ok(point));
            }
        })
    };
    let on_error = {
        let on_reading = Rc::clone(&on_reading);
        Closure::once_into_js(move |err: GeolocationPositionError| {
            log::debug!("Geolocation error: {}", err.message());
            let callback = on_reading.borrow_mut().take();
            if let Some(callback) = callback {
                callback(Err(GeolocationError::from_code(err.code())));
            }
        })
    };

    if let Err(err) = geolocation.get_current_position_with_error_callback(
        on_success.unchecked_ref(),
        Some(on_error.unchecked_ref()),
    ) {
        log::warn!("Unable to request the current position: {}", js_error(err));
        let callback = on_reading.borrow_mut().take();
        if let Some(callback) = callback {
            callback(Err(GeolocationError::Unsupported));
        }
    }
}

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow!(err
        .as_string()
        .unwrap_or_else(|| "unknown JS error".to_string()))
}
