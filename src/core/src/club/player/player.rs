use crate::club::PlayerPositionType;
use crate::shared::{ClubId, CountryId, FullName, PlayerId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 99;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub full_name: FullName,
    pub country_id: CountryId,
    pub club_id: ClubId,

    pub position: PlayerPositionType,

    pub rating: u8,
    /// Ceiling for growth; never below `rating`.
    pub potential: u8,

    pub birth_year: u16,

    pub retired: bool,
    pub youth: bool,
}

impl Player {
    pub fn age(&self, season: u16) -> u8 {
        season.saturating_sub(self.birth_year).min(u8::MAX as u16) as u8
    }

    pub fn is_active(&self) -> bool {
        !self.retired
    }

    pub fn set_rating(&mut self, rating: i32) {
        self.rating = rating.clamp(MIN_RATING as i32, MAX_RATING as i32) as u8;
        if self.potential < self.rating {
            self.potential = self.rating;
        }
    }

    pub fn retire(&mut self) {
        self.retired = true;
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({}, {})", self.full_name, self.position, self.rating)
    }
}
