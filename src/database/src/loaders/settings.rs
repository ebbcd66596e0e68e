use football_core::SimulationSettings;
use football_core::shared::CompetitionId;
use serde::Deserialize;

const STATIC_SETTINGS_JSON: &str = include_str!("../data/settings.json");

/// Dataset overrides; anything left out keeps the caller's value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsEntity {
    pub start_year: Option<u16>,
    pub min_squad_size: Option<usize>,
    pub out_of_position_penalty: Option<f32>,
    pub max_negotiation_rounds: Option<u8>,
    pub max_incoming_transfers: Option<usize>,
    pub retirement_age: Option<u8>,
    pub forced_retirement_age: Option<u8>,
    pub youth_intake_base: Option<usize>,
    pub gate_blocked_competitions: Option<Vec<String>>,
}

impl SettingsEntity {
    pub fn apply(&self, mut settings: SimulationSettings) -> SimulationSettings {
        if let Some(value) = self.start_year {
            settings.start_year = value;
        }
        if let Some(value) = self.min_squad_size {
            settings.min_squad_size = value;
        }
        if let Some(value) = self.out_of_position_penalty {
            settings.out_of_position_penalty = value;
        }
        if let Some(value) = self.max_negotiation_rounds {
            settings.max_negotiation_rounds = value;
        }
        if let Some(value) = self.max_incoming_transfers {
            settings.max_incoming_transfers = value;
        }
        if let Some(value) = self.retirement_age {
            settings.retirement_age = value;
        }
        if let Some(value) = self.forced_retirement_age {
            settings.forced_retirement_age = value;
        }
        if let Some(value) = self.youth_intake_base {
            settings.youth_intake_base = value;
        }
        if let Some(blocked) = &self.gate_blocked_competitions {
            settings.gate_blocked_competitions = blocked.iter().map(|id| CompetitionId::from(id.as_str())).collect();
        }

        settings
    }
}

pub struct SettingsLoader;

impl SettingsLoader {
    pub fn load() -> serde_json::Result<SettingsEntity> {
        serde_json::from_str(STATIC_SETTINGS_JSON)
    }
}
