//! # Partner card state machine
//!
//! The my-page couple card is one of four states. Breakup confirmation is a
//! state of its own rather than a dialog flag, so a stray confirm can never
//! fire from an unpaired or waiting card.

use serde::{Deserialize, Serialize};

/// The paired partner as shown on the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerInfo {
    pub user_id: String,
    pub nickname: String,
}

/// Pairing lifecycle for the my page.
#[derive(Debug, Clone, PartialEq)]
pub enum PartnerState {
    Unpaired,
    /// A couple request is out and unanswered; `name` is who we asked.
    Requested { name: String },
    Paired { partner: PartnerInfo },
    /// Paired, with the breakup confirm dialog showing.
    ConfirmingBreakup { partner: PartnerInfo },
}

impl PartnerState {
    /// Collapses the server answer into one state. An accepted pairing wins
    /// over any leftover open request.
    pub fn from_status(partner: Option<PartnerInfo>, requested_name: Option<String>) -> Self {
        match (partner, requested_name) {
            (Some(partner), _) => PartnerState::Paired { partner },
            (None, Some(name)) => PartnerState::Requested { name },
            (None, None) => PartnerState::Unpaired,
        }
    }

    /// Opens the confirm dialog. Only a paired card can start a breakup.
    pub fn begin_breakup(self) -> Self {
        match self {
            PartnerState::Paired { partner } => PartnerState::ConfirmingBreakup { partner },
            other => other,
        }
    }

    /// Dismisses the confirm dialog, back to the paired card.
    pub fn cancel_breakup(self) -> Self {
        match self {
            PartnerState::ConfirmingBreakup { partner } => PartnerState::Paired { partner },
            other => other,
        }
    }

    /// Completes a confirmed breakup.
    pub fn confirm_breakup(self) -> Self {
        match self {
            PartnerState::ConfirmingBreakup { .. } => PartnerState::Unpaired,
            other => other,
        }
    }

    /// Caption under the card header when nobody is connected.
    pub fn caption(&self) -> Option<String> {
        match self {
            PartnerState::Unpaired => Some("연결된 커플이 없습니다.".to_string()),
            PartnerState::Requested { name } => {
                Some(format!("{name}님의 수락을 기다리는 중입니다."))
            }
            PartnerState::Paired { .. } | PartnerState::ConfirmingBreakup { .. } => None,
        }
    }

    /// Whether the add (search) affordance shows: only with no partner and
    /// no outstanding request.
    pub fn can_request(&self) -> bool {
        matches!(self, PartnerState::Unpaired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partner() -> PartnerInfo {
        PartnerInfo {
            user_id: "u-1".to_string(),
            nickname: "지은".to_string(),
        }
    }

    #[test]
    fn test_from_status_pairing_wins_over_request() {
        let state = PartnerState::from_status(Some(partner()), Some("다른사람".to_string()));
        assert_eq!(state, PartnerState::Paired { partner: partner() });

        let state = PartnerState::from_status(None, Some("지은".to_string()));
        assert_eq!(
            state,
            PartnerState::Requested {
                name: "지은".to_string()
            }
        );

        assert_eq!(PartnerState::from_status(None, None), PartnerState::Unpaired);
    }

    #[test]
    fn test_breakup_happy_path() {
        let state = PartnerState::Paired { partner: partner() };
        let state = state.begin_breakup();
        assert_eq!(
            state,
            PartnerState::ConfirmingBreakup { partner: partner() }
        );
        let state = state.confirm_breakup();
        assert_eq!(state, PartnerState::Unpaired);
    }

    #[test]
    fn test_breakup_cancel_returns_to_paired() {
        let state = PartnerState::Paired { partner: partner() }
            .begin_breakup()
            .cancel_breakup();
        assert_eq!(state, PartnerState::Paired { partner: partner() });
    }

    #[test]
    fn test_transitions_are_noops_elsewhere() {
        assert_eq!(PartnerState::Unpaired.begin_breakup(), PartnerState::Unpaired);
        assert_eq!(
            PartnerState::Unpaired.confirm_breakup(),
            PartnerState::Unpaired
        );

        let requested = PartnerState::Requested {
            name: "지은".to_string(),
        };
        assert_eq!(requested.clone().begin_breakup(), requested);
        assert_eq!(requested.clone().cancel_breakup(), requested);

        let paired = PartnerState::Paired { partner: partner() };
        assert_eq!(paired.clone().confirm_breakup(), paired);
        assert_eq!(paired.clone().cancel_breakup(), paired);
    }

    #[test]
    fn test_captions() {
        assert_eq!(
            PartnerState::Unpaired.caption().as_deref(),
            Some("연결된 커플이 없습니다.")
        );
        assert_eq!(
            PartnerState::Requested {
                name: "지은".to_string()
            }
            .caption()
            .as_deref(),
            Some("지은님의 수락을 기다리는 중입니다.")
        );
        assert_eq!(PartnerState::Paired { partner: partner() }.caption(), None);
    }

    #[test]
    fn test_can_request_only_when_unpaired() {
        assert!(PartnerState::Unpaired.can_request());
        assert!(!PartnerState::Requested {
            name: "지은".to_string()
        }
        .can_request());
        assert!(!PartnerState::Paired { partner: partner() }.can_request());
    }
}
