use crate::club::PlayerPositionType;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

use PlayerPositionType::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchTacticType {
    T442,
    T433,
    T4231,
    T352,
    T532,
    T4141,
}

const T442_POSITIONS: [PlayerPositionType; 11] = [
    Goalkeeper, LeftBack, CentreBack, CentreBack, RightBack,
    Winger, CentralMidfielder, CentralMidfielder, Winger,
    Striker, Striker,
];

const T433_POSITIONS: [PlayerPositionType; 11] = [
    Goalkeeper, LeftBack, CentreBack, CentreBack, RightBack,
    DefensiveMidfielder, CentralMidfielder, CentralMidfielder,
    Winger, Striker, Winger,
];

const T4231_POSITIONS: [PlayerPositionType; 11] = [
    Goalkeeper, LeftBack, CentreBack, CentreBack, RightBack,
    DefensiveMidfielder, DefensiveMidfielder,
    Winger, AttackingMidfielder, Winger,
    Striker,
];

const T352_POSITIONS: [PlayerPositionType; 11] = [
    Goalkeeper, CentreBack, CentreBack, CentreBack,
    LeftBack, DefensiveMidfielder, CentralMidfielder, AttackingMidfielder, RightBack,
    Striker, Striker,
];

const T532_POSITIONS: [PlayerPositionType; 11] = [
    Goalkeeper, LeftBack, CentreBack, CentreBack, CentreBack, RightBack,
    CentralMidfielder, DefensiveMidfielder, CentralMidfielder,
    Striker, Striker,
];

const T4141_POSITIONS: [PlayerPositionType; 11] = [
    Goalkeeper, LeftBack, CentreBack, CentreBack, RightBack,
    DefensiveMidfielder,
    Winger, CentralMidfielder, CentralMidfielder, Winger,
    Striker,
];

impl MatchTacticType {
    pub fn all() -> [MatchTacticType; 6] {
        [
            MatchTacticType::T442,
            MatchTacticType::T433,
            MatchTacticType::T4231,
            MatchTacticType::T352,
            MatchTacticType::T532,
            MatchTacticType::T4141,
        ]
    }

    pub fn positions(&self) -> &'static [PlayerPositionType; 11] {
        match self {
            MatchTacticType::T442 => &T442_POSITIONS,
            MatchTacticType::T433 => &T433_POSITIONS,
            MatchTacticType::T4231 => &T4231_POSITIONS,
            MatchTacticType::T352 => &T352_POSITIONS,
            MatchTacticType::T532 => &T532_POSITIONS,
            MatchTacticType::T4141 => &T4141_POSITIONS,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MatchTacticType::T442 => "4-4-2",
            MatchTacticType::T433 => "4-3-3",
            MatchTacticType::T4231 => "4-2-3-1",
            MatchTacticType::T352 => "3-5-2",
            MatchTacticType::T532 => "5-3-2",
            MatchTacticType::T4141 => "4-1-4-1",
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let all = Self::all();
        *all.choose(rng).unwrap_or(&MatchTacticType::T442)
    }

    /// Number of slots of `position` in the formation.
    pub fn count(&self, position: PlayerPositionType) -> usize {
        self.positions().iter().filter(|p| **p == position).count()
    }
}

impl Display for MatchTacticType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.display_name())
    }
}
