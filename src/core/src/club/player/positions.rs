use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerPositionType {
    Goalkeeper,
    LeftBack,
    CentreBack,
    RightBack,
    DefensiveMidfielder,
    CentralMidfielder,
    AttackingMidfielder,
    Winger,
    Striker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerFieldPositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPositionType {
    pub const ALL: [PlayerPositionType; 9] = [
        PlayerPositionType::Goalkeeper,
        PlayerPositionType::LeftBack,
        PlayerPositionType::CentreBack,
        PlayerPositionType::RightBack,
        PlayerPositionType::DefensiveMidfielder,
        PlayerPositionType::CentralMidfielder,
        PlayerPositionType::AttackingMidfielder,
        PlayerPositionType::Winger,
        PlayerPositionType::Striker,
    ];

    pub fn position_group(&self) -> PlayerFieldPositionGroup {
        match self {
            PlayerPositionType::Goalkeeper => PlayerFieldPositionGroup::Goalkeeper,
            PlayerPositionType::LeftBack
            | PlayerPositionType::CentreBack
            | PlayerPositionType::RightBack => PlayerFieldPositionGroup::Defender,
            PlayerPositionType::DefensiveMidfielder
            | PlayerPositionType::CentralMidfielder
            | PlayerPositionType::AttackingMidfielder => PlayerFieldPositionGroup::Midfielder,
            PlayerPositionType::Winger | PlayerPositionType::Striker => {
                PlayerFieldPositionGroup::Forward
            }
        }
    }

    /// Multiplier applied to a player's rating when picking goal scorers.
    pub fn goal_factor(&self) -> f32 {
        match self {
            PlayerPositionType::Goalkeeper => 0.01,
            PlayerPositionType::CentreBack => 0.15,
            PlayerPositionType::LeftBack | PlayerPositionType::RightBack => 0.2,
            PlayerPositionType::DefensiveMidfielder => 0.3,
            PlayerPositionType::CentralMidfielder => 0.5,
            PlayerPositionType::AttackingMidfielder => 0.9,
            PlayerPositionType::Winger => 1.1,
            PlayerPositionType::Striker => 1.6,
        }
    }

    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerPositionType::Goalkeeper => "GK",
            PlayerPositionType::LeftBack => "LB",
            PlayerPositionType::CentreBack => "CB",
            PlayerPositionType::RightBack => "RB",
            PlayerPositionType::DefensiveMidfielder => "DM",
            PlayerPositionType::CentralMidfielder => "CM",
            PlayerPositionType::AttackingMidfielder => "AM",
            PlayerPositionType::Winger => "W",
            PlayerPositionType::Striker => "ST",
        }
    }

    pub fn from_short_name(name: &str) -> Option<Self> {
        let upper = name.trim().to_ascii_uppercase();

        Self::ALL
            .iter()
            .copied()
            .find(|position| position.get_short_name() == upper)
    }

    /// Academy intake distribution, outfield heavy.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..100) {
            0..=7 => PlayerPositionType::Goalkeeper,
            8..=15 => PlayerPositionType::LeftBack,
            16..=29 => PlayerPositionType::CentreBack,
            30..=37 => PlayerPositionType::RightBack,
            38..=47 => PlayerPositionType::DefensiveMidfielder,
            48..=61 => PlayerPositionType::CentralMidfielder,
            62..=71 => PlayerPositionType::AttackingMidfielder,
            72..=85 => PlayerPositionType::Winger,
            _ => PlayerPositionType::Striker,
        }
    }
}

impl Display for PlayerPositionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.get_short_name())
    }
}
