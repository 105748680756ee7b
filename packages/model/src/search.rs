//! # User search: relation kinds, candidate filtering, request sequencing
//!
//! The search form asks for unmatched users plus the caller's open pairing
//! requests in one go. [`visible_candidates`] applies the row rules: a
//! candidate already asked for a *different* relation is hidden entirely,
//! one asked for the *same* relation renders as waiting, everyone else gets
//! a request button. [`RequestSequence`] hands out monotonically increasing
//! ids so a slow response can never overwrite a newer one.

use serde::{Deserialize, Serialize};

/// Which kind of connection a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Couple,
    Friend,
}

impl RelationKind {
    /// Singular label used by the request button: `커플` / `친구`.
    pub fn label(self) -> &'static str {
        match self {
            RelationKind::Couple => "커플",
            RelationKind::Friend => "친구",
        }
    }

    /// Heading form of the label: `커플` / `친구들`.
    pub fn group_label(self) -> &'static str {
        match self {
            RelationKind::Couple => "커플",
            RelationKind::Friend => "친구들",
        }
    }

    /// Wire/storage name.
    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::Couple => "couple",
            RelationKind::Friend => "friend",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "couple" => Some(RelationKind::Couple),
            "friend" => Some(RelationKind::Friend),
            _ => None,
        }
    }
}

/// One user matched by the keyword search. The server already excludes the
/// caller and anyone unmatchable for the requested relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub user_id: String,
    pub nickname: String,
    pub couple_id: Option<String>,
    pub friend_ids: Vec<String>,
}

/// An open or answered pairing request. Carries both display names so the
/// outgoing (waiting) and incoming (accept/decline) lists can render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairRequest {
    pub id: String,
    pub requester_id: String,
    pub requester_name: String,
    pub target_id: String,
    pub target_name: String,
    pub relation: RelationKind,
    /// `None` until the target answers.
    pub accepted: Option<bool>,
    pub completed: bool,
}

impl PairRequest {
    pub fn is_open(&self) -> bool {
        self.accepted.is_none() && !self.completed
    }
}

/// A candidate as the search form renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRow {
    pub candidate: Candidate,
    /// `true` renders the waiting text instead of the request button.
    pub waiting: bool,
}

/// Applies the row rules against the caller's open requests.
pub fn visible_candidates(
    candidates: Vec<Candidate>,
    pending: &[PairRequest],
    relation: RelationKind,
) -> Vec<CandidateRow> {
    candidates
        .into_iter()
        .filter_map(|candidate| {
            let requested = pending
                .iter()
                .filter(|r| r.is_open())
                .find(|r| r.target_id == candidate.user_id);
            match requested {
                Some(r) if r.relation != relation => None,
                Some(_) => Some(CandidateRow {
                    candidate,
                    waiting: true,
                }),
                None => Some(CandidateRow {
                    candidate,
                    waiting: false,
                }),
            }
        })
        .collect()
}

/// Monotonic id source for in-flight searches. Begin a request with
/// [`RequestSequence::begin`]; when its response lands, [`try_commit`] only
/// accepts it if no newer request has been issued since.
///
/// [`try_commit`]: RequestSequence::try_commit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    issued: u64,
    committed: u64,
}

impl RequestSequence {
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn is_current(&self, id: u64) -> bool {
        id == self.issued
    }

    pub fn try_commit(&mut self, id: u64) -> bool {
        if id == self.issued && id > self.committed {
            self.committed = id;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str) -> Candidate {
        Candidate {
            user_id: id.to_string(),
            nickname: format!("user-{id}"),
            couple_id: None,
            friend_ids: Vec::new(),
        }
    }

    fn open_request(target: &str, relation: RelationKind) -> PairRequest {
        PairRequest {
            id: format!("req-{target}"),
            requester_id: "me".to_string(),
            requester_name: "나".to_string(),
            target_id: target.to_string(),
            target_name: format!("user-{target}"),
            relation,
            accepted: None,
            completed: false,
        }
    }

    #[test]
    fn test_relation_labels() {
        assert_eq!(RelationKind::Couple.label(), "커플");
        assert_eq!(RelationKind::Friend.label(), "친구");
        assert_eq!(RelationKind::Couple.group_label(), "커플");
        assert_eq!(RelationKind::Friend.group_label(), "친구들");
        assert_eq!(RelationKind::parse("couple"), Some(RelationKind::Couple));
        assert_eq!(RelationKind::parse("friend"), Some(RelationKind::Friend));
        assert_eq!(RelationKind::parse("lover"), None);
    }

    #[test]
    fn test_other_relation_request_hides_candidate() {
        let pending = vec![open_request("a", RelationKind::Friend)];
        let rows = visible_candidates(
            vec![candidate("a"), candidate("b")],
            &pending,
            RelationKind::Couple,
        );
        let ids: Vec<&str> = rows.iter().map(|r| r.candidate.user_id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn test_same_relation_request_marks_waiting() {
        let pending = vec![open_request("a", RelationKind::Couple)];
        let rows = visible_candidates(
            vec![candidate("a"), candidate("b")],
            &pending,
            RelationKind::Couple,
        );
        assert_eq!(rows.len(), 2);
        assert!(rows[0].waiting);
        assert!(!rows[1].waiting);
    }

    #[test]
    fn test_answered_request_no_longer_blocks() {
        let mut answered = open_request("a", RelationKind::Couple);
        answered.accepted = Some(false);
        answered.completed = true;

        let rows = visible_candidates(vec![candidate("a")], &[answered], RelationKind::Couple);
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].waiting);
    }

    #[test]
    fn test_sequence_discards_stale_response() {
        let mut seq = RequestSequence::default();
        let first = seq.begin();
        let second = seq.begin();

        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));

        // The slow first response arrives after the second was issued
        assert!(!seq.try_commit(first));
        assert!(seq.try_commit(second));
    }

    #[test]
    fn test_sequence_commits_once_per_id() {
        let mut seq = RequestSequence::default();
        let id = seq.begin();
        assert!(seq.try_commit(id));
        assert!(!seq.try_commit(id));
    }

    #[test]
    fn test_sequence_ids_increase() {
        let mut seq = RequestSequence::default();
        let a = seq.begin();
        let b = seq.begin();
        let c = seq.begin();
        assert!(a < b && b < c);
    }
}
