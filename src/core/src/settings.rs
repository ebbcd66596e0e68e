use crate::shared::CompetitionId;
use serde::{Deserialize, Serialize};

pub const LINEUP_SIZE: usize = 11;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSettings {
    pub seed: u64,
    pub start_year: u16,

    /// Squads below this many non-retired players are backfilled before selection.
    pub min_squad_size: usize,
    pub out_of_position_penalty: f32,

    pub max_negotiation_rounds: u8,
    pub max_incoming_transfers: usize,

    pub retirement_age: u8,
    pub forced_retirement_age: u8,
    pub youth_intake_base: usize,

    /// Clubs holding any of these competitions are refused by conditional-gate transitions.
    pub gate_blocked_competitions: Vec<CompetitionId>,
}

impl SimulationSettings {
    pub fn squad_target(&self) -> usize {
        self.min_squad_size.max(LINEUP_SIZE)
    }

    pub fn negotiation_rounds(&self) -> u8 {
        self.max_negotiation_rounds.clamp(1, 3)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings {
            seed: 42,
            start_year: 2024,
            min_squad_size: 18,
            out_of_position_penalty: 10.0,
            max_negotiation_rounds: 3,
            max_incoming_transfers: 3,
            retirement_age: 34,
            forced_retirement_age: 40,
            youth_intake_base: 2,
            gate_blocked_competitions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squad_target_never_below_lineup() {
        let settings = SimulationSettings {
            min_squad_size: 4,
            ..Default::default()
        };

        assert_eq!(settings.squad_target(), LINEUP_SIZE);
    }

    #[test]
    fn negotiation_rounds_are_bounded() {
        let settings = SimulationSettings {
            max_negotiation_rounds: 9,
            ..Default::default()
        };
        assert_eq!(settings.negotiation_rounds(), 3);

        let settings = SimulationSettings {
            max_negotiation_rounds: 0,
            ..Default::default()
        };
        assert_eq!(settings.negotiation_rounds(), 1);
    }
}
