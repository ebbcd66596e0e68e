use crate::shared::{ClubId, PlayerId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    InsufficientBudget,
    NegotiationExhausted,
    /// The seller would fall below a full lineup or lose its only player of the role.
    SquadTooThin,
    PlayerUnavailable,
}

impl Display for RejectionReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let reason = match self {
            RejectionReason::InsufficientBudget => "insufficient budget",
            RejectionReason::NegotiationExhausted => "negotiation exhausted",
            RejectionReason::SquadTooThin => "squad too thin",
            RejectionReason::PlayerUnavailable => "player unavailable",
        };

        f.write_str(reason)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferOffer {
    pub player_id: PlayerId,
    pub selling_club_id: ClubId,
    pub buying_club_id: ClubId,
    /// Market value at the time of the approach.
    pub value: f64,
}

impl TransferOffer {
    pub fn new(player_id: PlayerId, selling_club_id: ClubId, buying_club_id: ClubId, value: f64) -> Self {
        TransferOffer {
            player_id,
            selling_club_id,
            buying_club_id,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedOffer {
    pub offer: TransferOffer,
    pub reason: RejectionReason,
}
