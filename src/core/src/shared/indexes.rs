use crate::club::{Club, Player};
use crate::competition::{Competition, Country, Stage};
use crate::shared::{ClubId, CompetitionId, ContinentId, CountryId, PlayerId, StageId};
use std::collections::HashMap;

/// Id → position lookups over the state's entity vectors.
///
/// Positions are only valid for the vectors the index was built from; callers
/// rebuild after appending or reordering entities.
#[derive(Debug, Default, Clone)]
pub struct StateIndexes {
    clubs: HashMap<ClubId, usize>,
    players: HashMap<PlayerId, usize>,
    countries: HashMap<CountryId, usize>,
    competitions: HashMap<CompetitionId, usize>,
    stages: HashMap<StageId, usize>,
    continents: HashMap<ContinentId, Vec<CountryId>>,
    valid: bool,
}

impl StateIndexes {
    pub fn build(
        clubs: &[Club],
        players: &[Player],
        countries: &[Country],
        competitions: &[Competition],
        stages: &[Stage],
    ) -> Self {
        let mut continents: HashMap<ContinentId, Vec<CountryId>> = HashMap::new();

        for country in countries {
            continents
                .entry(country.continent_id.clone())
                .or_default()
                .push(country.id.clone());
        }

        StateIndexes {
            clubs: Self::positions(clubs.iter().map(|c| c.id.clone())),
            players: Self::positions(players.iter().map(|p| p.id.clone())),
            countries: Self::positions(countries.iter().map(|c| c.id.clone())),
            competitions: Self::positions(competitions.iter().map(|c| c.id.clone())),
            stages: Self::positions(stages.iter().map(|s| s.id.clone())),
            continents,
            valid: true,
        }
    }

    fn positions<K: std::hash::Hash + Eq>(ids: impl Iterator<Item = K>) -> HashMap<K, usize> {
        ids.enumerate().map(|(idx, id)| (id, idx)).collect()
    }

    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn club(&self, id: &ClubId) -> Option<usize> {
        self.clubs.get(id).copied()
    }

    pub fn player(&self, id: &PlayerId) -> Option<usize> {
        self.players.get(id).copied()
    }

    pub fn country(&self, id: &CountryId) -> Option<usize> {
        self.countries.get(id).copied()
    }

    pub fn competition(&self, id: &CompetitionId) -> Option<usize> {
        self.competitions.get(id).copied()
    }

    pub fn stage(&self, id: &StageId) -> Option<usize> {
        self.stages.get(id).copied()
    }

    pub fn continent_countries(&self, id: &ContinentId) -> &[CountryId] {
        self.continents.get(id).map(|c| c.as_slice()).unwrap_or(&[])
    }

    /// Appends a single player without a full rebuild.
    pub fn push_player(&mut self, id: PlayerId, position: usize) {
        self.players.insert(id, position);
    }
}
