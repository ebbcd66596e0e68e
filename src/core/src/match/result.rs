use crate::shared::{ClubId, PlayerId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalDetail {
    pub player_id: PlayerId,
    pub club_id: ClubId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Score { home, away }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_club: ClubId,
    pub away_club: ClubId,
    pub score: Score,

    pub home_xg: f64,
    pub away_xg: f64,

    pub scorers: Vec<GoalDetail>,

    pub home_players: Vec<PlayerId>,
    pub away_players: Vec<PlayerId>,
}

impl MatchResult {
    pub fn winner(&self) -> Option<&ClubId> {
        match self.score.home.cmp(&self.score.away) {
            std::cmp::Ordering::Greater => Some(&self.home_club),
            std::cmp::Ordering::Less => Some(&self.away_club),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.score.home == self.score.away
    }

    pub fn goals_for(&self, club: &ClubId) -> u8 {
        if club == &self.home_club {
            self.score.home
        } else if club == &self.away_club {
            self.score.away
        } else {
            0
        }
    }

    pub fn goals_against(&self, club: &ClubId) -> u8 {
        if club == &self.home_club {
            self.score.away
        } else if club == &self.away_club {
            self.score.home
        } else {
            0
        }
    }

    pub fn xg_for(&self, club: &ClubId) -> f64 {
        if club == &self.home_club {
            self.home_xg
        } else if club == &self.away_club {
            self.away_xg
        } else {
            0.0
        }
    }

    pub fn xg_against(&self, club: &ClubId) -> f64 {
        if club == &self.home_club {
            self.away_xg
        } else if club == &self.away_club {
            self.home_xg
        } else {
            0.0
        }
    }
}
