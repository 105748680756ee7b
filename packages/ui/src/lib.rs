//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod session;
pub use session::{use_session, LogoutButton, SessionProvider, SessionState};

mod time;
pub use time::{now_local, sleep_ms};

mod geo;
pub use geo::{current_position, GeoError};

mod sheet;
pub use sheet::{BottomSheet, ConfirmDialog, ModalOverlay};

mod record_list;
pub use record_list::{RecordList, SwipeRow};

mod pickers;
pub use pickers::{CategorySheet, DateTimePicker, ScoreSheet};

mod place_search;
pub use place_search::PlaceSearchModal;

mod record_form;
pub use record_form::RecordForm;

mod partner_card;
pub use partner_card::PartnerCard;

mod user_search;
pub use user_search::UserSearchForm;

pub mod views;
