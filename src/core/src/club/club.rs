use crate::club::ClubMemberships;
use crate::shared::{ClubId, CountryId, CurrencyValue};
use serde::{Deserialize, Serialize};

pub const MIN_YOUTH_LEVEL: u8 = 1;
pub const MAX_YOUTH_LEVEL: u8 = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub country_id: CountryId,

    /// Set when this club is the reserve side of another club.
    pub reserve_of: Option<ClubId>,

    /// Display only; match strength comes from the players.
    pub rating: u8,

    pub balance: CurrencyValue,
    pub youth_level: u8,

    pub memberships: ClubMemberships,
}

impl Club {
    pub fn new(
        id: ClubId,
        name: String,
        country_id: CountryId,
        rating: u8,
        balance: CurrencyValue,
        youth_level: u8,
    ) -> Self {
        Club {
            id,
            name,
            country_id,
            reserve_of: None,
            rating,
            balance,
            youth_level: youth_level.clamp(MIN_YOUTH_LEVEL, MAX_YOUTH_LEVEL),
            memberships: ClubMemberships::default(),
        }
    }

    pub fn with_reserve_of(mut self, parent: Option<ClubId>) -> Self {
        self.reserve_of = parent;
        self
    }

    pub fn with_memberships(mut self, memberships: ClubMemberships) -> Self {
        self.memberships = memberships;
        self
    }

    pub fn is_reserve_team(&self) -> bool {
        self.reserve_of.is_some()
    }

    pub fn credit(&mut self, amount: f64) {
        self.balance.credit(amount);
    }

    pub fn debit(&mut self, amount: f64) {
        self.balance.debit(amount);
    }
}
