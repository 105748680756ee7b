//! # Map screen state machine
//!
//! The map screen owns one [`RecordScreenState`] shared by the map panel and
//! the sliding search panel. All changes go through [`reduce`] with a closed
//! [`RecordScreenAction`] set, so the two panels can never disagree about
//! the region, the keyword, or which place is highlighted.

use serde::{Deserialize, Serialize};

use crate::map::{GeoPoint, MapRegion, Place};

/// Detent positions of the sliding search panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlidePosition {
    Bottom,
    Middle,
    Top,
}

impl SlidePosition {
    /// Next detent upward, wrapping back down from the top.
    pub fn raised(self) -> Self {
        match self {
            SlidePosition::Bottom => SlidePosition::Middle,
            SlidePosition::Middle => SlidePosition::Top,
            SlidePosition::Top => SlidePosition::Bottom,
        }
    }
}

/// Everything the map screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordScreenState {
    pub region: MapRegion,
    pub slide: SlidePosition,
    pub keyword: String,
    pub places: Vec<Place>,
    /// Index into `places`, or `None` when nothing is highlighted.
    pub selected: Option<usize>,
}

impl Default for RecordScreenState {
    fn default() -> Self {
        Self {
            region: MapRegion::default(),
            slide: SlidePosition::Bottom,
            keyword: String::new(),
            places: Vec::new(),
            selected: None,
        }
    }
}

impl RecordScreenState {
    pub fn selected_place(&self) -> Option<&Place> {
        self.selected.and_then(|i| self.places.get(i))
    }
}

/// The closed set of events the map screen reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordScreenAction {
    /// Re-center the map, keeping the current zoom spans.
    MoveMap(GeoPoint),
    Slide(SlidePosition),
    SetKeyword(String),
    /// Replace the result list; any previous highlight is stale and drops.
    SetPlaces(Vec<Place>),
    SelectPlace(usize),
    ClearSelection,
}

/// Applies one action to the state. Total: an out-of-range selection or a
/// redundant action leaves the state unchanged instead of panicking.
pub fn reduce(state: &RecordScreenState, action: RecordScreenAction) -> RecordScreenState {
    let mut next = state.clone();
    match action {
        RecordScreenAction::MoveMap(point) => {
            next.region = next.region.centered_on(point);
        }
        RecordScreenAction::Slide(position) => {
            next.slide = position;
        }
        RecordScreenAction::SetKeyword(keyword) => {
            next.keyword = keyword;
        }
        RecordScreenAction::SetPlaces(places) => {
            next.places = places;
            next.selected = None;
        }
        RecordScreenAction::SelectPlace(index) => {
            if index < next.places.len() {
                next.selected = Some(index);
            }
        }
        RecordScreenAction::ClearSelection => {
            next.selected = None;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, latitude: f64, longitude: f64) -> Place {
        Place {
            id: name.to_string(),
            name: name.to_string(),
            address: String::new(),
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = RecordScreenState::default();
        assert_eq!(state.region, MapRegion::default());
        assert_eq!(state.slide, SlidePosition::Bottom);
        assert_eq!(state.keyword, "");
        assert!(state.places.is_empty());
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_move_map_keeps_deltas_and_rest() {
        let mut state = RecordScreenState::default();
        state.keyword = "카페".to_string();

        let moved = reduce(
            &state,
            RecordScreenAction::MoveMap(GeoPoint {
                latitude: 37.5665,
                longitude: 126.978,
            }),
        );
        assert_eq!(moved.region.latitude, 37.5665);
        assert_eq!(moved.region.longitude, 126.978);
        assert_eq!(moved.region.latitude_delta, 0.0922);
        assert_eq!(moved.region.longitude_delta, 0.0421);
        assert_eq!(moved.keyword, "카페");
        assert_eq!(moved.slide, state.slide);
    }

    #[test]
    fn test_set_places_clears_selection() {
        let mut state = RecordScreenState::default();
        state.places = vec![place("a", 1.0, 1.0)];
        state.selected = Some(0);

        let next = reduce(
            &state,
            RecordScreenAction::SetPlaces(vec![place("b", 2.0, 2.0), place("c", 3.0, 3.0)]),
        );
        assert_eq!(next.places.len(), 2);
        assert_eq!(next.selected, None);
    }

    #[test]
    fn test_select_place_bounds_checked() {
        let mut state = RecordScreenState::default();
        state.places = vec![place("a", 1.0, 1.0), place("b", 2.0, 2.0)];

        let next = reduce(&state, RecordScreenAction::SelectPlace(1));
        assert_eq!(next.selected, Some(1));
        assert_eq!(next.selected_place().map(|p| p.name.as_str()), Some("b"));

        // Out of range is a no-op
        let next = reduce(&next, RecordScreenAction::SelectPlace(7));
        assert_eq!(next.selected, Some(1));

        let next = reduce(&next, RecordScreenAction::ClearSelection);
        assert_eq!(next.selected, None);
    }

    #[test]
    fn test_select_on_empty_list_is_noop() {
        let state = RecordScreenState::default();
        let next = reduce(&state, RecordScreenAction::SelectPlace(0));
        assert_eq!(next, state);
    }

    #[test]
    fn test_slide_and_keyword() {
        let state = RecordScreenState::default();
        let next = reduce(&state, RecordScreenAction::Slide(SlidePosition::Top));
        assert_eq!(next.slide, SlidePosition::Top);

        let next = reduce(&next, RecordScreenAction::SetKeyword("망원동".to_string()));
        assert_eq!(next.keyword, "망원동");
        assert_eq!(next.slide, SlidePosition::Top);
    }

    #[test]
    fn test_raised_cycles_detents() {
        assert_eq!(SlidePosition::Bottom.raised(), SlidePosition::Middle);
        assert_eq!(SlidePosition::Middle.raised(), SlidePosition::Top);
        assert_eq!(SlidePosition::Top.raised(), SlidePosition::Bottom);
    }
}
