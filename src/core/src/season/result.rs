use crate::competition::CompetitionSeasonResult;
use crate::shared::{ClubId, CompetitionId, PlayerId, StageId};
use crate::stage::StageResult;
use crate::transfers::TransferReport;
use crate::transitions::TransitionReport;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSeasonStats {
    pub player_id: PlayerId,
    pub season: u16,
    pub goals: u16,
    pub appearances: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonResult {
    pub season: u16,
    pub competitions: Vec<CompetitionSeasonResult>,
    pub transitions: TransitionReport,
    pub transfers: TransferReport,
    pub player_stats: Vec<PlayerSeasonStats>,
    pub youth_revealed: Vec<PlayerId>,
    pub retired: Vec<PlayerId>,
}

impl SeasonResult {
    pub fn new(season: u16) -> Self {
        SeasonResult {
            season,
            competitions: Vec::new(),
            transitions: TransitionReport::default(),
            transfers: TransferReport::default(),
            player_stats: Vec::new(),
            youth_revealed: Vec::new(),
            retired: Vec::new(),
        }
    }

    pub fn competition(&self, id: &CompetitionId) -> Option<&CompetitionSeasonResult> {
        self.competitions.iter().find(|c| &c.competition_id == id)
    }

    pub fn champion(&self, id: &CompetitionId) -> Option<&ClubId> {
        self.competition(id).and_then(|c| c.champion.as_ref())
    }

    /// Each stage once, even when shared between competitions.
    pub fn stages(&self) -> Vec<&StageResult> {
        let mut seen: HashSet<&StageId> = HashSet::new();

        self.competitions
            .iter()
            .flat_map(|c| c.stages.iter())
            .filter(|&s| seen.insert(&s.stage_id))
            .collect()
    }

    pub fn match_count(&self) -> usize {
        self.stages().iter().map(|s| s.matches().count()).sum()
    }

    pub(crate) fn collect_player_stats(&mut self) {
        let mut totals: BTreeMap<PlayerId, (u16, u16)> = BTreeMap::new();

        for stage in self.stages() {
            for stats in &stage.player_stats {
                let entry = totals.entry(stats.player_id.clone()).or_default();
                entry.0 += stats.goals;
                entry.1 += stats.appearances;
            }
        }

        let season = self.season;

        self.player_stats = totals
            .into_iter()
            .map(|(player_id, (goals, appearances))| PlayerSeasonStats {
                player_id,
                season,
                goals,
                appearances,
            })
            .collect();
    }
}

/// Notifications raised while a season runs.
#[derive(Debug, Clone, PartialEq)]
pub enum SeasonProgress {
    Started { season: u16, competitions: usize },
    CompetitionFinished {
        index: usize,
        total: usize,
        competition_id: CompetitionId,
        champion: Option<ClubId>,
    },
    TransferWindowClosed { completed: usize },
    Finished { season: u16 },
}
