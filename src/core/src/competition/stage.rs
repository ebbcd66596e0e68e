use crate::shared::{ClubId, CompetitionId, StageId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageFormat {
    RoundRobin,
    Knockout,
    PotLeague,
    CrossGroup,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,
    pub name: String,

    /// A stage may be shared by several competitions.
    pub competitions: Vec<CompetitionId>,

    pub week: u16,
    pub format: StageFormat,

    /// Full round-robin turns.
    pub rounds: u8,
    pub legs: u8,
    pub groups: u8,

    pub decides_champion: bool,
}

impl Stage {
    pub fn new(id: StageId, name: String, format: StageFormat) -> Self {
        Stage {
            id,
            name,
            competitions: Vec::new(),
            week: 1,
            format,
            rounds: 1,
            legs: 1,
            groups: 1,
            decides_champion: false,
        }
    }

    pub fn with_competitions(mut self, competitions: Vec<CompetitionId>) -> Self {
        self.competitions = competitions;
        self
    }

    pub fn with_week(mut self, week: u16) -> Self {
        self.week = week;
        self
    }

    pub fn with_rounds(mut self, rounds: u8) -> Self {
        self.rounds = rounds.max(1);
        self
    }

    pub fn with_legs(mut self, legs: u8) -> Self {
        self.legs = legs.clamp(1, 2);
        self
    }

    pub fn with_groups(mut self, groups: u8) -> Self {
        self.groups = groups.max(1);
        self
    }

    pub fn deciding_champion(mut self, decides: bool) -> Self {
        self.decides_champion = decides;
        self
    }

    pub fn belongs_to(&self, competition: &CompetitionId) -> bool {
        self.competitions.contains(competition)
    }

    pub fn shares_competition_with(&self, other: &Stage) -> bool {
        self.competitions.iter().any(|c| other.belongs_to(c))
    }

    /// Results are reported per group.
    pub fn is_grouped(&self) -> bool {
        match self.format {
            StageFormat::RoundRobin => self.groups > 1,
            StageFormat::CrossGroup => true,
            StageFormat::Knockout | StageFormat::PotLeague => false,
        }
    }

    /// Ordering inside a competition: week, then numeric id.
    pub fn scheduling_cmp(&self, other: &Stage) -> Ordering {
        self.week
            .cmp(&other.week)
            .then_with(|| self.id.scheduling_cmp(&other.id))
    }
}

/// Dataset edge assigning a club to a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageMembership {
    pub club_id: ClubId,
    pub stage_id: StageId,
}
