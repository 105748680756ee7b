//! Database models and their client-safe projections.

mod pair;
mod place;
mod record;
mod user;

#[cfg(feature = "server")]
pub use pair::{CandidateRow, PairRequestRow};
#[cfg(feature = "server")]
pub use place::PlaceRow;
#[cfg(feature = "server")]
pub use record::RecordRow;
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
