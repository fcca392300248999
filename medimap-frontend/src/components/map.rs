use leptos::*;
use leptos_leaflet::{MapContainer, Marker, Popup, Position, TileLayer};

use medimap_core::geo::MapPoint;

const TILE_LAYER_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
const DEFAULT_ZOOM: f64 = 16.0;

#[component]
pub fn Map(center: MapPoint, #[prop(into)] title: String) -> impl IntoView {
    let marker = Position::new(center.lat(), center.lng());
    let center = Position::new(center.lat(), center.lng());

    view! {
      <MapContainer
        class="h-96"
        center
        zoom=DEFAULT_ZOOM
        set_view=true
      >
        <TileLayer url=TILE_LAYER_URL attribution=MAP_ATTRIBUTION />
        <Marker position=marker>
          <Popup>
            <strong>{title}</strong>
          </Popup>
        </Marker>
      </MapContainer>
    }
}
