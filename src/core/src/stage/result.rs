use crate::r#match::MatchResult;
use crate::shared::{ClubId, PlayerId, StageId};
use crate::stage::{Fixture, StandingsTable, ranking_cmp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayedFixture {
    pub fixture: Fixture,
    pub result: MatchResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayedRound {
    pub number: u32,
    pub date: NaiveDate,
    pub fixtures: Vec<PlayedFixture>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubStageStats {
    pub club_id: ClubId,
    pub played: u16,
    pub xg_for: f64,
    pub xg_against: f64,
    pub goals_for: u16,
    pub goals_against: u16,
    pub clean_sheets: u16,
}

impl ClubStageStats {
    pub fn new(club_id: ClubId) -> Self {
        ClubStageStats {
            club_id,
            played: 0,
            xg_for: 0.0,
            xg_against: 0.0,
            goals_for: 0,
            goals_against: 0,
            clean_sheets: 0,
        }
    }

    pub fn record(&mut self, result: &MatchResult) {
        let against = result.goals_against(&self.club_id);

        self.played += 1;
        self.goals_for += result.goals_for(&self.club_id) as u16;
        self.goals_against += against as u16;
        self.xg_for += result.xg_for(&self.club_id);
        self.xg_against += result.xg_against(&self.club_id);

        if against == 0 {
            self.clean_sheets += 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStageStats {
    pub player_id: PlayerId,
    pub club_id: ClubId,
    pub goals: u16,
    pub appearances: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTable {
    pub index: u8,
    pub standings: StandingsTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRankEntry {
    pub club_id: ClubId,
    pub group: u8,
    pub group_rank: u8,
    pub points: u32,
    pub goal_difference: i32,
    pub goals_for: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayoffTie {
    /// First-leg hosts.
    pub home: ClubId,
    pub away: ClubId,
    pub home_aggregate: u16,
    pub away_aggregate: u16,
    pub winner: ClubId,
    pub loser: ClubId,
    /// Level on aggregate and settled by a coin flip.
    pub penalties: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StageOutcome {
    League {
        standings: StandingsTable,
    },
    Groups {
        groups: Vec<GroupTable>,
        ranking: Vec<GroupRankEntry>,
    },
    Playoff {
        ties: Vec<PlayoffTie>,
        standings: StandingsTable,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageResult {
    pub stage_id: StageId,
    pub season: u16,
    pub rounds: Vec<PlayedRound>,
    pub outcome: StageOutcome,
    pub club_stats: Vec<ClubStageStats>,
    pub player_stats: Vec<PlayerStageStats>,
}

impl StageResult {
    /// League and playoff standings; grouped stages report per group instead.
    pub fn standings(&self) -> Option<&StandingsTable> {
        match &self.outcome {
            StageOutcome::League { standings } => Some(standings),
            StageOutcome::Playoff { standings, .. } => Some(standings),
            StageOutcome::Groups { .. } => None,
        }
    }

    pub fn groups(&self) -> &[GroupTable] {
        match &self.outcome {
            StageOutcome::Groups { groups, .. } => groups,
            _ => &[],
        }
    }

    pub fn ties(&self) -> &[PlayoffTie] {
        match &self.outcome {
            StageOutcome::Playoff { ties, .. } => ties,
            _ => &[],
        }
    }

    /// Clubs selected by finishing position `n` (1-based). Grouped stages give
    /// rank `n` of every group; playoffs define only 1 (winners) and 2 (losers).
    pub fn placement(&self, n: usize) -> Vec<ClubId> {
        match &self.outcome {
            StageOutcome::League { standings } => standings.club_at(n).cloned().into_iter().collect(),
            StageOutcome::Groups { groups, .. } => groups
                .iter()
                .filter_map(|g| g.standings.club_at(n).cloned())
                .collect(),
            StageOutcome::Playoff { .. } => match n {
                1 => self.winners(),
                2 => self.losers(),
                _ => Vec::new(),
            },
        }
    }

    /// Every club that took part, in finishing order.
    pub fn participants(&self) -> Vec<ClubId> {
        match &self.outcome {
            StageOutcome::League { standings } | StageOutcome::Playoff { standings, .. } => {
                standings.clubs().cloned().collect()
            }
            StageOutcome::Groups { ranking, .. } => ranking.iter().map(|e| e.club_id.clone()).collect(),
        }
    }

    pub fn winners(&self) -> Vec<ClubId> {
        self.ordered_playoff_sides(true)
    }

    pub fn losers(&self) -> Vec<ClubId> {
        self.ordered_playoff_sides(false)
    }

    fn ordered_playoff_sides(&self, winners: bool) -> Vec<ClubId> {
        let StageOutcome::Playoff { ties, standings } = &self.outcome else {
            return Vec::new();
        };

        let side: Vec<&ClubId> = ties
            .iter()
            .map(|t| if winners { &t.winner } else { &t.loser })
            .collect();

        standings
            .clubs()
            .filter(|club| side.contains(club))
            .cloned()
            .collect()
    }

    /// Rank 1 of league and group formats; the winner of a single-tie playoff.
    pub fn champion(&self) -> Option<ClubId> {
        match &self.outcome {
            StageOutcome::League { standings } => standings.club_at(1).cloned(),
            StageOutcome::Groups { ranking, .. } => ranking.first().map(|e| e.club_id.clone()),
            StageOutcome::Playoff { ties, .. } => match ties.as_slice() {
                [tie] => Some(tie.winner.clone()),
                _ => None,
            },
        }
    }

    /// Finishing position used for prize money: table rank, in-group rank,
    /// or 1/2 for playoff winners/losers.
    pub fn finishing_position(&self, club: &ClubId) -> Option<usize> {
        match &self.outcome {
            StageOutcome::League { standings } => standings.position(club),
            StageOutcome::Groups { ranking, .. } => ranking
                .iter()
                .find(|e| &e.club_id == club)
                .map(|e| e.group_rank as usize),
            StageOutcome::Playoff { ties, .. } => ties.iter().find_map(|t| {
                if &t.winner == club {
                    Some(1)
                } else if &t.loser == club {
                    Some(2)
                } else {
                    None
                }
            }),
        }
    }

    pub fn matches(&self) -> impl Iterator<Item = &MatchResult> {
        self.rounds
            .iter()
            .flat_map(|r| r.fixtures.iter().map(|f| &f.result))
    }

    pub fn group_fixtures(&self, group: u8) -> impl Iterator<Item = &PlayedFixture> {
        self.rounds
            .iter()
            .flat_map(|r| r.fixtures.iter())
            .filter(move |f| f.fixture.group == Some(group) || f.fixture.opponent_group == Some(group))
    }

    pub fn club_stats(&self, club: &ClubId) -> Option<&ClubStageStats> {
        self.club_stats.iter().find(|s| &s.club_id == club)
    }
}

/// Concatenates group tables into one list tagged with group and in-group
/// rank, ordered by points, goal difference and goals scored. Equal records
/// keep group order.
pub fn rank_groups(groups: &[GroupTable]) -> Vec<GroupRankEntry> {
    let mut rows: Vec<(GroupRankEntry, &crate::stage::StandingsRow)> = groups
        .iter()
        .flat_map(|group| {
            group.standings.rows.iter().enumerate().map(move |(idx, row)| {
                (
                    GroupRankEntry {
                        club_id: row.club_id.clone(),
                        group: group.index,
                        group_rank: (idx + 1) as u8,
                        points: row.points,
                        goal_difference: row.goal_difference(),
                        goals_for: row.goal_scored,
                    },
                    row,
                )
            })
        })
        .collect();

    rows.sort_by(|(_, a), (_, b)| ranking_cmp(a, b));

    rows.into_iter().map(|(entry, _)| entry).collect()
}

/// Appearance and goal tallies per player across every match of a stage.
pub fn collect_player_stats(results: &[&MatchResult]) -> Vec<PlayerStageStats> {
    let mut stats: HashMap<PlayerId, PlayerStageStats> = HashMap::new();

    for result in results {
        let sides = [
            (&result.home_club, &result.home_players),
            (&result.away_club, &result.away_players),
        ];

        for (club, players) in sides {
            for player in players {
                stats
                    .entry(player.clone())
                    .or_insert_with(|| PlayerStageStats {
                        player_id: player.clone(),
                        club_id: club.clone(),
                        goals: 0,
                        appearances: 0,
                    })
                    .appearances += 1;
            }
        }

        for goal in &result.scorers {
            stats
                .entry(goal.player_id.clone())
                .or_insert_with(|| PlayerStageStats {
                    player_id: goal.player_id.clone(),
                    club_id: goal.club_id.clone(),
                    goals: 0,
                    appearances: 0,
                })
                .goals += 1;
        }
    }

    let mut stats: Vec<PlayerStageStats> = stats.into_values().collect();
    stats.sort_by(|a, b| b.goals.cmp(&a.goals).then_with(|| a.player_id.cmp(&b.player_id)));
    stats
}
