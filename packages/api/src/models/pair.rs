//! Pairing rows: search candidates and couple/friend requests.

#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// One user matched by a keyword search, with enough relation context for
/// the client-side row rules.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct CandidateRow {
    pub id: Uuid,
    pub nickname: String,
    pub couple_id: Option<Uuid>,
    pub friend_ids: Vec<Uuid>,
}

#[cfg(feature = "server")]
impl CandidateRow {
    /// Convert to the shared candidate type for client consumption.
    pub fn to_candidate(&self) -> model::Candidate {
        model::Candidate {
            user_id: self.id.to_string(),
            nickname: self.nickname.clone(),
            couple_id: self.couple_id.map(|id| id.to_string()),
            friend_ids: self.friend_ids.iter().map(Uuid::to_string).collect(),
        }
    }
}

/// A `pair_requests` row joined with both nicknames.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct PairRequestRow {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub requester_name: String,
    pub target_id: Uuid,
    pub target_name: String,
    pub relation: String,
    pub accepted: Option<bool>,
    pub completed: bool,
}

#[cfg(feature = "server")]
impl PairRequestRow {
    /// Convert to the shared request type for client consumption.
    pub fn to_request(&self) -> Result<model::PairRequest, String> {
        let relation = model::RelationKind::parse(&self.relation)
            .ok_or_else(|| format!("Unknown relation kind: {}", self.relation))?;
        Ok(model::PairRequest {
            id: self.id.to_string(),
            requester_id: self.requester_id.to_string(),
            requester_name: self.requester_name.clone(),
            target_id: self.target_id.to_string(),
            target_name: self.target_name.clone(),
            relation,
            accepted: self.accepted,
            completed: self.completed,
        })
    }
}
