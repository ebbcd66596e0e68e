use crate::shared::{ClubId, PlayerId};
use crate::transfers::RejectedOffer;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedTransfer {
    pub player_id: PlayerId,
    pub player_name: String,
    pub from_club_id: ClubId,
    pub to_club_id: ClubId,
    pub fee: f64,
    pub rounds: u8,
    pub transfer_date: NaiveDate,
    pub season_year: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferReport {
    pub completed: Vec<CompletedTransfer>,
    pub rejected: Vec<RejectedOffer>,
}

impl TransferReport {
    pub fn total_fees(&self) -> f64 {
        self.completed.iter().map(|t| t.fee).sum()
    }

    pub fn arrivals(&self, club: &ClubId) -> usize {
        self.completed.iter().filter(|t| &t.to_club_id == club).count()
    }
}
