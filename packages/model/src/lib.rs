//! # Domain models for the couple spending log
//!
//! Pure types shared by every crate in the workspace: spending records and
//! their draft form, map/place types, and the state machines behind the map
//! screen, the partner card, and the user search. Everything here is
//! `Serialize + Deserialize` where it crosses the server/client boundary via
//! Dioxus server functions, and nothing reads the clock or performs I/O —
//! callers inject `now` where a timestamp is needed.

pub mod format;
pub mod map;
pub mod partner;
pub mod record;
pub mod screen;
pub mod search;

pub use map::{GeoPoint, MapRegion, Place};
pub use partner::{PartnerInfo, PartnerState};
pub use record::{rows, Record, RecordDraft, RecordRow, CATEGORIES};
pub use screen::{reduce, RecordScreenAction, RecordScreenState, SlidePosition};
pub use search::{visible_candidates, Candidate, CandidateRow, PairRequest, RelationKind, RequestSequence};
