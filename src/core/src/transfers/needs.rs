use crate::club::PlayerPositionType;
use crate::r#match::MatchTacticType;
use crate::shared::ClubId;
use crate::state::SimulationState;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Ratings this far below the lineup average make a role a need.
pub const NEED_RATING_GAP: f32 = 8.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquadNeed {
    pub club_id: ClubId,
    pub position: PlayerPositionType,
    /// Best active rating for the role; `None` when nobody plays it.
    pub current_best: Option<u8>,
    pub lineup_average: f32,
}

impl SquadNeed {
    pub fn is_missing(&self) -> bool {
        self.current_best.is_none()
    }

    fn deficit(&self) -> f32 {
        self.lineup_average - self.current_best.map(|r| r as f32).unwrap_or(0.0)
    }
}

pub struct SquadNeedsAnalyzer;

impl SquadNeedsAnalyzer {
    /// Weak or uncovered roles of the club's formation, missing ones first,
    /// then the largest shortfall.
    pub fn analyze(state: &SimulationState, club_id: &ClubId) -> Vec<SquadNeed> {
        let tactic = state.formations.get(club_id).unwrap_or(MatchTacticType::T442);
        let lineup_average = state.best_lineup(club_id).average_rating();
        let players = state.club_players(club_id);

        let mut needs: Vec<SquadNeed> = tactic
            .positions()
            .iter()
            .copied()
            .unique()
            .filter_map(|position| {
                let current_best = players
                    .iter()
                    .filter(|p| p.position == position)
                    .map(|p| p.rating)
                    .max();

                let need = SquadNeed {
                    club_id: club_id.clone(),
                    position,
                    current_best,
                    lineup_average,
                };

                match current_best {
                    None => Some(need),
                    Some(best) if (best as f32) + NEED_RATING_GAP < lineup_average => Some(need),
                    Some(_) => None,
                }
            })
            .collect();

        needs.sort_by(|a, b| {
            b.is_missing()
                .cmp(&a.is_missing())
                .then_with(|| b.deficit().total_cmp(&a.deficit()))
        });

        needs
    }
}
