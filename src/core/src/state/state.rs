use crate::club::{Club, Player, PlayerGenerator, PlayerPositionType};
use crate::competition::{Award, Competition, Country, Stage, StageMembership, Transition};
use crate::error::{SimulationError, SimulationResult};
use crate::r#match::{Lineup, LineupSelector, MatchTacticType};
use crate::season::SeasonResult;
use crate::settings::{LINEUP_SIZE, SimulationSettings};
use crate::shared::{ClubId, CompetitionId, ContinentId, CountryId, NamesLocaleId, PlayerId, StageId, StateIndexes};
use crate::state::{FormationRegistry, PeopleNameTable, YouthRevealTable};
use crate::transitions::PendingInjections;
use log::debug;
use rand::Rng;
use std::collections::HashMap;

/// Everything a simulation run reads and mutates, passed explicitly to every
/// component.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub settings: SimulationSettings,
    pub season: u16,

    pub countries: Vec<Country>,
    pub clubs: Vec<Club>,
    pub players: Vec<Player>,
    pub competitions: Vec<Competition>,
    pub stages: Vec<Stage>,
    pub stage_memberships: Vec<StageMembership>,
    pub transitions: Vec<Transition>,
    pub awards: Vec<Award>,

    pub names: PeopleNameTable,
    pub youth_reveal: YouthRevealTable,

    pub formations: FormationRegistry,
    pub pending: PendingInjections,

    pub history: Vec<SeasonResult>,

    pub(crate) indexes: StateIndexes,
    pub(crate) player_sequence: u64,
}

impl SimulationState {
    pub fn rebuild_indexes(&mut self) {
        self.indexes = StateIndexes::build(
            &self.clubs,
            &self.players,
            &self.countries,
            &self.competitions,
            &self.stages,
        );
    }

    pub fn indexes(&self) -> &StateIndexes {
        &self.indexes
    }

    pub fn club(&self, id: &ClubId) -> Option<&Club> {
        match self.indexes.is_valid() {
            true => self.indexes.club(id).and_then(|idx| self.clubs.get(idx)),
            false => self.clubs.iter().find(|c| &c.id == id),
        }
    }

    pub fn club_mut(&mut self, id: &ClubId) -> Option<&mut Club> {
        match self.indexes.is_valid() {
            true => self.indexes.club(id).and_then(|idx| self.clubs.get_mut(idx)),
            false => self.clubs.iter_mut().find(|c| &c.id == id),
        }
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        match self.indexes.is_valid() {
            true => self.indexes.player(id).and_then(|idx| self.players.get(idx)),
            false => self.players.iter().find(|p| &p.id == id),
        }
    }

    pub fn player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        match self.indexes.is_valid() {
            true => self.indexes.player(id).and_then(|idx| self.players.get_mut(idx)),
            false => self.players.iter_mut().find(|p| &p.id == id),
        }
    }

    pub fn country(&self, id: &CountryId) -> Option<&Country> {
        match self.indexes.is_valid() {
            true => self.indexes.country(id).and_then(|idx| self.countries.get(idx)),
            false => self.countries.iter().find(|c| &c.id == id),
        }
    }

    pub fn competition(&self, id: &CompetitionId) -> Option<&Competition> {
        match self.indexes.is_valid() {
            true => self.indexes.competition(id).and_then(|idx| self.competitions.get(idx)),
            false => self.competitions.iter().find(|c| &c.id == id),
        }
    }

    pub fn stage(&self, id: &StageId) -> Option<&Stage> {
        match self.indexes.is_valid() {
            true => self.indexes.stage(id).and_then(|idx| self.stages.get(idx)),
            false => self.stages.iter().find(|s| &s.id == id),
        }
    }

    pub fn continent_countries(&self, id: &ContinentId) -> &[CountryId] {
        self.indexes.continent_countries(id)
    }

    pub fn require_club(&self, id: &ClubId) -> SimulationResult<&Club> {
        self.club(id).ok_or_else(|| SimulationError::UnknownClub(id.clone()))
    }

    pub fn require_stage(&self, id: &StageId) -> SimulationResult<&Stage> {
        self.stage(id).ok_or_else(|| SimulationError::UnknownStage(id.clone()))
    }

    pub fn require_competition(&self, id: &CompetitionId) -> SimulationResult<&Competition> {
        self.competition(id)
            .ok_or_else(|| SimulationError::UnknownCompetition(id.clone()))
    }

    /// Stages of a competition in scheduling order.
    pub fn competition_stages(&self, id: &CompetitionId) -> Vec<&Stage> {
        let mut stages: Vec<&Stage> = self.stages.iter().filter(|s| s.belongs_to(id)).collect();
        stages.sort_by(|a, b| a.scheduling_cmp(b));
        stages
    }

    pub fn outgoing_transitions(&self, stage: &StageId) -> impl Iterator<Item = &Transition> {
        self.transitions.iter().filter(move |t| &t.from_stage == stage)
    }

    pub fn names_locale(&self, club: &Club) -> Option<&NamesLocaleId> {
        self.country(&club.country_id).map(|c| &c.names_locale_id)
    }

    /// Active players of a club.
    pub fn club_players(&self, club: &ClubId) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.is_active() && &p.club_id == club)
            .collect()
    }

    pub fn active_squad_size(&self, club: &ClubId) -> usize {
        self.players
            .iter()
            .filter(|p| p.is_active() && &p.club_id == club)
            .count()
    }

    /// Mean of the best eleven active ratings.
    pub fn squad_strength(&self, club: &ClubId) -> f32 {
        let mut ratings: Vec<u8> = self.club_players(club).iter().map(|p| p.rating).collect();
        if ratings.is_empty() {
            return 0.0;
        }

        ratings.sort_unstable_by(|a, b| b.cmp(a));
        ratings.truncate(LINEUP_SIZE);

        ratings.iter().map(|r| *r as f32).sum::<f32>() / ratings.len() as f32
    }

    pub fn squad_strengths(&self, clubs: &[ClubId]) -> HashMap<ClubId, f32> {
        clubs
            .iter()
            .map(|c| (c.clone(), self.squad_strength(c)))
            .collect()
    }

    pub fn next_player_id(&mut self) -> PlayerId {
        loop {
            self.player_sequence += 1;

            let id = PlayerId::new(format!("gen-{}", self.player_sequence));
            if self.player(&id).is_none() {
                return id;
            }
        }
    }

    pub fn add_player(&mut self, player: Player) {
        let position = self.players.len();
        let id = player.id.clone();

        self.players.push(player);

        if self.indexes.is_valid() {
            self.indexes.push_player(id, position);
        }
    }

    /// Tops a club's active squad up to the configured minimum with generated
    /// players, roles of `tactic` that nobody covers first. Returns how many
    /// players were added.
    pub fn ensure_squad<R: Rng + ?Sized>(
        &mut self,
        club_id: &ClubId,
        tactic: MatchTacticType,
        rng: &mut R,
    ) -> SimulationResult<usize> {
        let target = self.settings.squad_target();
        let current = self.active_squad_size(club_id);

        if current >= target {
            return Ok(0);
        }

        let club = self.require_club(club_id)?.clone();

        let mut covered: HashMap<PlayerPositionType, usize> = HashMap::new();
        for player in self.club_players(club_id) {
            *covered.entry(player.position).or_default() += 1;
        }

        let mut roles: Vec<PlayerPositionType> = Vec::with_capacity(target - current);
        for position in tactic.positions() {
            match covered.get_mut(position) {
                Some(count) if *count > 0 => *count -= 1,
                _ => roles.push(*position),
            }
        }

        let mut cycle = tactic.positions().iter().cycle();
        while roles.len() < target - current {
            match cycle.next() {
                Some(position) => roles.push(*position),
                None => break,
            }
        }
        roles.truncate(target - current);

        let locale = self.names_locale(&club).cloned();
        let season = self.season;

        for role in &roles {
            let id = self.next_player_id();

            let player = PlayerGenerator::new(&self.names).backfill(id, &club, locale.as_ref(), season, *role, rng);

            debug!("🧩 {}: backfilled {}", club.name, player);

            self.add_player(player);
        }

        Ok(roles.len())
    }

    /// Formation (assigned on first need), squad backfill, then selection.
    pub fn prepare_lineup<R: Rng + ?Sized>(&mut self, club_id: &ClubId, rng: &mut R) -> SimulationResult<Lineup> {
        self.require_club(club_id)?;

        let tactic = self.formations.get_or_assign(club_id, rng);

        self.ensure_squad(club_id, tactic, rng)?;

        Ok(LineupSelector::select(
            club_id,
            tactic,
            &self.club_players(club_id),
            self.settings.out_of_position_penalty,
        ))
    }

    /// Selection without side effects; clubs without a formation are read as 4-4-2.
    pub fn best_lineup(&self, club_id: &ClubId) -> Lineup {
        let tactic = self.formations.get(club_id).unwrap_or(MatchTacticType::T442);

        LineupSelector::select(
            club_id,
            tactic,
            &self.club_players(club_id),
            self.settings.out_of_position_penalty,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{PlayerBuilder, PlayerPositionType};
    use crate::shared::{CurrencyValue, FullName};
    use crate::state::SimulationStateBuilder;
    use crate::utils::seeded;

    fn state_with_players(count: usize) -> SimulationState {
        let club = Club::new(
            ClubId::from("c"),
            "Club".to_string(),
            CountryId::from("north"),
            60,
            CurrencyValue::zero(),
            5,
        );

        let players = (0..count)
            .map(|i| {
                PlayerBuilder::new()
                    .id(format!("p{}", i))
                    .full_name(FullName::parse("Some Player"))
                    .country_id("north")
                    .club_id("c")
                    .position(PlayerPositionType::CentralMidfielder)
                    .rating(55)
                    .birth_year(1998)
                    .build()
                    .unwrap()
            })
            .collect();

        SimulationStateBuilder::new()
            .clubs(vec![club])
            .players(players)
            .build()
            .unwrap()
    }

    #[test]
    fn short_squads_are_backfilled_before_selection() {
        let mut state = state_with_players(8);
        let mut rng = seeded(1);

        let lineup = state.prepare_lineup(&ClubId::from("c"), &mut rng).unwrap();

        assert!(state.active_squad_size(&ClubId::from("c")) >= 11);
        assert_eq!(lineup.slots.len(), 11);
        assert!(lineup.is_complete());
    }

    #[test]
    fn backfill_covers_missing_roles_first() {
        let mut state = state_with_players(8);
        let mut rng = seeded(1);

        let lineup = state.prepare_lineup(&ClubId::from("c"), &mut rng).unwrap();

        assert_eq!(lineup.slots[0].natural_position, PlayerPositionType::Goalkeeper);
        assert!(!lineup.slots[0].out_of_position);
    }

    #[test]
    fn generated_players_are_indexed() {
        let mut state = state_with_players(2);
        let mut rng = seeded(1);

        let added = state
            .ensure_squad(&ClubId::from("c"), MatchTacticType::T433, &mut rng)
            .unwrap();

        assert_eq!(added, state.settings.squad_target() - 2);
        assert!(state.player(&PlayerId::from("gen-1")).is_some());
    }

    #[test]
    fn unknown_club_is_a_lookup_miss() {
        let mut state = state_with_players(0);
        let mut rng = seeded(1);

        let err = state.prepare_lineup(&ClubId::from("nope"), &mut rng).unwrap_err();
        assert_eq!(err, SimulationError::UnknownClub(ClubId::from("nope")));
    }
}
