use crate::club::{Club, Player};
use crate::competition::{Award, Competition, Country, Stage, StageMembership, Transition};
use crate::settings::SimulationSettings;
use crate::shared::StateIndexes;
use crate::state::{FormationRegistry, PeopleNameTable, SimulationState, YouthRevealTable};
use crate::transitions::PendingInjections;
use log::warn;
use std::collections::HashSet;
use std::hash::Hash;

// Builder for SimulationState
#[derive(Default)]
pub struct SimulationStateBuilder {
    settings: Option<SimulationSettings>,
    countries: Vec<Country>,
    clubs: Vec<Club>,
    players: Vec<Player>,
    competitions: Vec<Competition>,
    stages: Vec<Stage>,
    stage_memberships: Vec<StageMembership>,
    transitions: Vec<Transition>,
    awards: Vec<Award>,
    names: PeopleNameTable,
    youth_reveal: YouthRevealTable,
    pending: PendingInjections,
}

impl SimulationStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(mut self, settings: SimulationSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn countries(mut self, countries: Vec<Country>) -> Self {
        self.countries = countries;
        self
    }

    pub fn clubs(mut self, clubs: Vec<Club>) -> Self {
        self.clubs = clubs;
        self
    }

    pub fn players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self
    }

    pub fn competitions(mut self, competitions: Vec<Competition>) -> Self {
        self.competitions = competitions;
        self
    }

    pub fn stages(mut self, stages: Vec<Stage>) -> Self {
        self.stages = stages;
        self
    }

    pub fn stage_memberships(mut self, stage_memberships: Vec<StageMembership>) -> Self {
        self.stage_memberships = stage_memberships;
        self
    }

    pub fn transitions(mut self, transitions: Vec<Transition>) -> Self {
        self.transitions = transitions;
        self
    }

    pub fn awards(mut self, awards: Vec<Award>) -> Self {
        self.awards = awards;
        self
    }

    pub fn names(mut self, names: PeopleNameTable) -> Self {
        self.names = names;
        self
    }

    pub fn youth_reveal(mut self, youth_reveal: YouthRevealTable) -> Self {
        self.youth_reveal = youth_reveal;
        self
    }

    /// Qualifications consumed when the first season starts.
    pub fn pending(mut self, pending: PendingInjections) -> Self {
        self.pending = pending;
        self
    }

    /// Validates id uniqueness, turns stage memberships into each club's
    /// canonical lists (stage plus the stage's competitions), copies them to
    /// the current lists and builds the indexes.
    pub fn build(self) -> Result<SimulationState, String> {
        Self::ensure_unique("country", self.countries.iter().map(|c| &c.id))?;
        Self::ensure_unique("club", self.clubs.iter().map(|c| &c.id))?;
        Self::ensure_unique("player", self.players.iter().map(|p| &p.id))?;
        Self::ensure_unique("competition", self.competitions.iter().map(|c| &c.id))?;
        Self::ensure_unique("stage", self.stages.iter().map(|s| &s.id))?;

        let settings = self.settings.unwrap_or_default();

        let mut state = SimulationState {
            season: settings.start_year,
            settings,
            countries: self.countries,
            clubs: self.clubs,
            players: self.players,
            competitions: self.competitions,
            stages: self.stages,
            stage_memberships: self.stage_memberships,
            transitions: self.transitions,
            awards: self.awards,
            names: self.names,
            youth_reveal: self.youth_reveal,
            formations: FormationRegistry::new(),
            pending: self.pending,
            history: Vec::new(),
            indexes: StateIndexes::default(),
            player_sequence: 0,
        };

        state.rebuild_indexes();

        Self::apply_memberships(&mut state);

        Ok(state)
    }

    fn apply_memberships(state: &mut SimulationState) {
        let memberships = state.stage_memberships.clone();

        for membership in &memberships {
            let Some(stage) = state.stage(&membership.stage_id) else {
                warn!("⚠️ membership of {} in unknown stage {}", membership.club_id, membership.stage_id);
                continue;
            };

            let competitions: Vec<_> = stage
                .competitions
                .iter()
                .filter(|c| state.competition(c).is_some())
                .cloned()
                .collect();

            let Some(club) = state.club_mut(&membership.club_id) else {
                warn!("⚠️ membership for unknown club {}", membership.club_id);
                continue;
            };

            club.memberships.canonical.add_stage(membership.stage_id.clone());
            for competition in competitions {
                club.memberships.canonical.add_competition(competition);
            }
        }

        for club in state.clubs.iter_mut() {
            club.memberships.reset_to_canonical();
        }
    }

    fn ensure_unique<'a, T, I>(kind: &str, ids: I) -> Result<(), String>
    where
        T: Hash + Eq + std::fmt::Display + 'a,
        I: Iterator<Item = &'a T>,
    {
        let mut seen = HashSet::new();

        for id in ids {
            if !seen.insert(id) {
                return Err(format!("duplicate {} id {}", kind, id));
            }
        }

        Ok(())
    }
}
