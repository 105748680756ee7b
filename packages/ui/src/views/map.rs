//! Map screen: a draggable map panel over a sliding place-search panel.
//!
//! The whole screen shares one [`RecordScreenState`] behind the [`MapScreen`]
//! context handle. Both panels change it exclusively through reducer actions,
//! so the region, keyword, result list, and highlight can never disagree.

use dioxus::prelude::*;
use model::{
    reduce, GeoPoint, MapRegion, RecordScreenAction, RecordScreenState, SlidePosition,
};

use crate::geo::current_position;

/// Nominal panel size for converting pointer travel into map degrees.
const PANEL_WIDTH_PX: f64 = 360.0;
const PANEL_HEIGHT_PX: f64 = 480.0;

/// Shared handle to the map screen state. `Copy`, so event handlers just
/// capture it; every mutation goes through [`MapScreen::dispatch`].
#[derive(Clone, Copy)]
struct MapScreen {
    state: Signal<RecordScreenState>,
}

impl MapScreen {
    fn read(&self) -> RecordScreenState {
        (self.state)()
    }

    fn dispatch(mut self, action: RecordScreenAction) {
        let next = reduce(&self.state.peek(), action);
        self.state.set(next);
    }
}

/// Where a place lands on the panel, in percent of its width and height.
/// `None` when the place falls outside the visible window.
fn marker_position(region: &MapRegion, point: GeoPoint) -> Option<(f64, f64)> {
    if region.latitude_delta <= 0.0 || region.longitude_delta <= 0.0 {
        return None;
    }
    let x = 50.0 + (point.longitude - region.longitude) / region.longitude_delta * 100.0;
    let y = 50.0 - (point.latitude - region.latitude) / region.latitude_delta * 100.0;
    if !(0.0..=100.0).contains(&x) || !(0.0..=100.0).contains(&y) {
        return None;
    }
    Some((x, y))
}

/// New map center after dragging the panel by `(dx, dy)` pixels from the
/// region the drag started on. The content follows the pointer, so the
/// center moves the opposite way.
fn pan_center(start: &MapRegion, dx: f64, dy: f64) -> GeoPoint {
    GeoPoint {
        latitude: start.latitude + dy / PANEL_HEIGHT_PX * start.latitude_delta,
        longitude: start.longitude - dx / PANEL_WIDTH_PX * start.longitude_delta,
    }
}

#[component]
pub fn MapView() -> Element {
    let state = use_signal(RecordScreenState::default);
    let screen = use_context_provider(|| MapScreen { state });

    // Locate once at mount; on failure the default region stays.
    let _locate = use_resource(move || async move {
        match current_position().await {
            Ok(point) => screen.dispatch(RecordScreenAction::MoveMap(point)),
            Err(e) => {
                tracing::warn!(code = e.code, message = %e.message, "current position unavailable");
            }
        }
    });

    rsx! {
        div { class: "map-view",
            MapPanel {}
            SearchPanel {}
        }
    }
}

#[component]
fn MapPanel() -> Element {
    let screen = use_context::<MapScreen>();
    // (pointer x, pointer y, region when the drag began)
    let mut drag = use_signal(|| Option::<(f64, f64, MapRegion)>::None);

    let state = screen.read();
    let region = state.region;
    let markers: Vec<_> = state
        .places
        .iter()
        .enumerate()
        .filter_map(|(i, place)| {
            marker_position(&region, place.location()).map(|at| (i, place.clone(), at))
        })
        .collect();

    let onpointerdown = move |evt: Event<PointerData>| {
        let coords = evt.data().client_coordinates();
        drag.set(Some((coords.x, coords.y, screen.read().region)));
    };
    let onpointermove = move |evt: Event<PointerData>| {
        if let Some((start_x, start_y, start_region)) = drag() {
            let coords = evt.data().client_coordinates();
            let center = pan_center(&start_region, coords.x - start_x, coords.y - start_y);
            screen.dispatch(RecordScreenAction::MoveMap(center));
        }
    };
    let mut release = move || drag.set(None);

    rsx! {
        div {
            class: "map-panel",
            onpointerdown: onpointerdown,
            onpointermove: onpointermove,
            onpointerup: move |_| release(),
            onpointercancel: move |_| release(),
            div { class: "map-grid" }
            div { class: "map-readout",
                {format!("{:.5}, {:.5}", region.latitude, region.longitude)}
            }
            for (i, place, (x, y)) in markers {
                button {
                    key: "{place.id}",
                    class: if state.selected == Some(i) { "map-marker selected" } else { "map-marker" },
                    style: "left: {x}%; top: {y}%;",
                    onclick: move |_| screen.dispatch(RecordScreenAction::SelectPlace(i)),
                    span { class: "marker-pin", "●" }
                    span { class: "marker-name", "{place.name}" }
                }
            }
        }
    }
}

#[component]
fn SearchPanel() -> Element {
    let screen = use_context::<MapScreen>();
    let mut searching = use_signal(|| false);
    let mut searched = use_signal(|| false);
    let mut search_error = use_signal(|| Option::<String>::None);

    let state = screen.read();
    let slide = state.slide;
    let position_class = match slide {
        SlidePosition::Bottom => "search-panel pos-bottom",
        SlidePosition::Middle => "search-panel pos-middle",
        SlidePosition::Top => "search-panel pos-top",
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let current = screen.read();
            let keyword = current.keyword.trim().to_string();
            if keyword.is_empty() {
                return;
            }
            searching.set(true);
            search_error.set(None);
            match api::search_places(keyword, Some(current.region.center())).await {
                Ok(places) => screen.dispatch(RecordScreenAction::SetPlaces(places)),
                Err(e) => search_error.set(Some(e.to_string())),
            }
            searching.set(false);
            searched.set(true);
        });
    };

    rsx! {
        section { class: position_class,
            button {
                class: "panel-handle",
                onclick: move |_| screen.dispatch(RecordScreenAction::Slide(slide.raised())),
                span { class: "panel-handle-bar" }
            }
            form { class: "search-bar", onsubmit: handle_submit,
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "장소를 검색해보세요",
                    value: state.keyword.clone(),
                    oninput: move |evt| screen.dispatch(RecordScreenAction::SetKeyword(evt.value())),
                }
                button { class: "search-submit", r#type: "submit", "검색" }
            }
            if searching() {
                p { class: "search-status", "장소 검색 중 ..." }
            } else if let Some(message) = search_error() {
                p { class: "search-status error", "장소 찾다가 에러 발생!! {message}" }
            } else if searched() && state.places.is_empty() {
                p { class: "search-status", "검색 결과가 없습니다." }
            }
            div { class: "panel-results",
                for (i, place) in state.places.clone().into_iter().enumerate() {
                    button {
                        key: "{place.id}",
                        class: if state.selected == Some(i) { "place-row selected" } else { "place-row" },
                        onclick: {
                            let location = place.location();
                            move |_| {
                                screen.dispatch(RecordScreenAction::SelectPlace(i));
                                screen.dispatch(RecordScreenAction::MoveMap(location));
                            }
                        },
                        span { class: "place-name", "{place.name}" }
                        span { class: "place-address", "{place.address}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> MapRegion {
        MapRegion {
            latitude: 37.0,
            longitude: 127.0,
            latitude_delta: 0.1,
            longitude_delta: 0.2,
        }
    }

    #[test]
    fn test_marker_at_center() {
        let region = MapRegion::default();
        assert_eq!(marker_position(&region, region.center()), Some((50.0, 50.0)));
    }

    #[test]
    fn test_marker_offsets_follow_the_window() {
        // Quarter window east, quarter window north of center
        let at = marker_position(
            &window(),
            GeoPoint {
                latitude: 37.025,
                longitude: 127.05,
            },
        )
        .unwrap();
        assert!((at.0 - 75.0).abs() < 1e-9);
        assert!((at.1 - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_marker_outside_window_hidden() {
        assert_eq!(
            marker_position(
                &window(),
                GeoPoint {
                    latitude: 37.2,
                    longitude: 127.0,
                }
            ),
            None
        );
        assert_eq!(
            marker_position(
                &window(),
                GeoPoint {
                    latitude: 37.0,
                    longitude: 126.7,
                }
            ),
            None
        );
    }

    #[test]
    fn test_marker_window_edges_inclusive() {
        let at = marker_position(
            &window(),
            GeoPoint {
                latitude: 37.05,
                longitude: 127.1,
            },
        )
        .unwrap();
        assert!((at.0 - 100.0).abs() < 1e-9);
        assert!(at.1.abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_window_has_no_markers() {
        let region = MapRegion {
            latitude_delta: 0.0,
            ..window()
        };
        assert_eq!(
            marker_position(
                &region,
                GeoPoint {
                    latitude: 37.0,
                    longitude: 127.0,
                }
            ),
            None
        );
    }

    #[test]
    fn test_pan_moves_center_against_the_drag() {
        // A full panel-width drag right moves the center one span west.
        let center = pan_center(&window(), PANEL_WIDTH_PX, 0.0);
        assert!((center.longitude - 126.8).abs() < 1e-9);
        assert!((center.latitude - 37.0).abs() < 1e-9);

        // Half a panel-height drag down moves the center half a span north.
        let center = pan_center(&window(), 0.0, PANEL_HEIGHT_PX / 2.0);
        assert!((center.latitude - 37.05).abs() < 1e-9);
        assert!((center.longitude - 127.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_drag_keeps_center() {
        let start = MapRegion::default();
        assert_eq!(pan_center(&start, 0.0, 0.0), start.center());
    }
}
