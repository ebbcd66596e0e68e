pub mod cross_group;
pub mod knockout;
pub mod pots;
pub mod round_robin;

pub use cross_group::*;
pub use knockout::*;
pub use pots::*;
pub use round_robin::*;

use crate::competition::{Stage, StageFormat};
use crate::shared::ClubId;
use crate::utils::SeasonCalendar;
use chrono::NaiveDate;
use log::warn;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub round: u32,
    pub home: ClubId,
    pub away: ClubId,
    pub leg: u8,

    /// Group of both clubs, or the home club's group for cross-group fixtures.
    pub group: Option<u8>,
    pub opponent_group: Option<u8>,

    /// Knockout pairing shared by both legs.
    pub tie: Option<usize>,
}

impl Fixture {
    pub fn new(round: u32, home: ClubId, away: ClubId) -> Self {
        Fixture {
            round,
            home,
            away,
            leg: 1,
            group: None,
            opponent_group: None,
            tie: None,
        }
    }

    pub fn in_group(mut self, group: Option<u8>) -> Self {
        self.group = group;
        self.opponent_group = group;
        self
    }

    pub fn between_groups(mut self, group: u8, opponent_group: u8) -> Self {
        self.group = Some(group);
        self.opponent_group = Some(opponent_group);
        self
    }

    pub fn in_tie(mut self, tie: usize) -> Self {
        self.tie = Some(tie);
        self
    }

    pub fn second_leg(mut self) -> Self {
        self.leg = 2;
        self
    }

    pub fn involves(&self, club: &ClubId) -> bool {
        &self.home == club || &self.away == club
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledRound {
    pub number: u32,
    pub date: NaiveDate,
    pub fixtures: Vec<Fixture>,
}

#[derive(Debug, Clone, Default)]
pub struct StageSchedule {
    pub rounds: Vec<ScheduledRound>,
    /// Group rosters for grouped formats, in group order.
    pub groups: Vec<Vec<ClubId>>,
    /// Clubs left out of the draw.
    pub dropped: Vec<ClubId>,
}

impl StageSchedule {
    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.rounds.iter().flat_map(|r| r.fixtures.iter())
    }

    pub fn fixture_count(&self) -> usize {
        self.rounds.iter().map(|r| r.fixtures.len()).sum()
    }
}

pub struct StageScheduler;

impl StageScheduler {
    pub const MIN_POT_LEAGUE_CLUBS: usize = 8;

    /// Fixture list for `stage`. `strengths` orders clubs into pots.
    pub fn schedule<R: Rng + ?Sized>(
        stage: &Stage,
        participants: &[ClubId],
        strengths: &HashMap<ClubId, f32>,
        season: u16,
        rng: &mut R,
    ) -> StageSchedule {
        let mut schedule = StageSchedule::default();

        let fixtures: Vec<Fixture> = match stage.format {
            StageFormat::RoundRobin if stage.groups > 1 => {
                schedule.groups = deal_into_groups(participants, stage.groups, rng);

                schedule
                    .groups
                    .iter()
                    .enumerate()
                    .flat_map(|(idx, group)| round_robin(group, stage.rounds, Some(idx as u8)))
                    .collect()
            }
            StageFormat::RoundRobin => {
                let mut clubs = participants.to_vec();
                clubs.shuffle(rng);

                round_robin(&clubs, stage.rounds, None)
            }
            StageFormat::PotLeague => {
                if participants.len() < Self::MIN_POT_LEAGUE_CLUBS
                    || participants.len() % POT_COUNT != 0
                {
                    warn!(
                        "⚠️ stage {}: {} clubs cannot be potted, playing a single round robin",
                        stage.id,
                        participants.len()
                    );

                    round_robin(participants, 1, None)
                } else {
                    let mut clubs = participants.to_vec();
                    clubs.sort_by(|a, b| {
                        let sa = strengths.get(a).copied().unwrap_or(0.0);
                        let sb = strengths.get(b).copied().unwrap_or(0.0);

                        sb.total_cmp(&sa).then_with(|| a.cmp(b))
                    });

                    pot_league(&clubs, rng)
                }
            }
            StageFormat::CrossGroup => {
                schedule.groups = deal_into_groups(participants, stage.groups.max(2), rng);

                cross_group(&schedule.groups)
            }
            StageFormat::Knockout => {
                let draw = knockout(participants, stage.legs, rng);
                schedule.dropped.extend(draw.dropped);

                draw.fixtures
            }
        };

        schedule.rounds = Self::into_rounds(fixtures, stage.week, season);
        schedule
    }

    fn into_rounds(fixtures: Vec<Fixture>, week: u16, season: u16) -> Vec<ScheduledRound> {
        let mut rounds: BTreeMap<u32, Vec<Fixture>> = BTreeMap::new();

        for fixture in fixtures {
            rounds.entry(fixture.round).or_default().push(fixture);
        }

        rounds
            .into_iter()
            .map(|(number, fixtures)| ScheduledRound {
                number,
                date: SeasonCalendar::round_date(season, week, number),
                fixtures,
            })
            .collect()
    }
}

/// Shuffles and deals clubs into `groups` groups whose sizes differ by at most one.
pub fn deal_into_groups<R: Rng + ?Sized>(clubs: &[ClubId], groups: u8, rng: &mut R) -> Vec<Vec<ClubId>> {
    let count = (groups.max(1) as usize).min(clubs.len().max(1));

    let mut shuffled = clubs.to_vec();
    shuffled.shuffle(rng);

    let mut dealt = vec![Vec::new(); count];
    for (idx, club) in shuffled.into_iter().enumerate() {
        dealt[idx % count].push(club);
    }

    dealt
}
