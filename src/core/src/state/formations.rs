use crate::r#match::MatchTacticType;
use crate::shared::ClubId;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Formation per club, drawn the first time a club needs one and kept until
/// cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormationRegistry {
    assignments: HashMap<ClubId, MatchTacticType>,
}

impl FormationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, club: &ClubId) -> Option<MatchTacticType> {
        self.assignments.get(club).copied()
    }

    pub fn get_or_assign<R: Rng + ?Sized>(&mut self, club: &ClubId, rng: &mut R) -> MatchTacticType {
        *self.assignments.entry(club.clone()).or_insert_with(|| {
            let tactic = MatchTacticType::random(rng);
            debug!("📋 {} plays {}", club, tactic);
            tactic
        })
    }

    pub fn assign(&mut self, club: ClubId, tactic: MatchTacticType) {
        self.assignments.insert(club, tactic);
    }

    pub fn clear(&mut self, club: &ClubId) {
        self.assignments.remove(club);
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
