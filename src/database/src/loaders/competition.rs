use serde::Deserialize;

const STATIC_COMPETITIONS_JSON: &str = include_str!("../data/competitions.json");
const STATIC_STAGES_JSON: &str = include_str!("../data/stages.json");
const STATIC_MEMBERSHIPS_JSON: &str = include_str!("../data/memberships.json");
const STATIC_TRANSITIONS_JSON: &str = include_str!("../data/transitions.json");
const STATIC_AWARDS_JSON: &str = include_str!("../data/awards.json");
const STATIC_QUALIFICATIONS_JSON: &str = include_str!("../data/qualifications.json");

/// Exactly one of `country_id` and `continent_id` is expected.
#[derive(Debug, Clone, Deserialize)]
pub struct CompetitionEntity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub country_id: Option<String>,
    #[serde(default)]
    pub continent_id: Option<String>,
    pub competition_type: String,
    pub importance: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StageEntity {
    pub id: String,
    pub name: String,
    /// `;`-delimited competition ids.
    pub competitions: String,
    #[serde(default)]
    pub week: u16,
    pub format: String,
    #[serde(default = "one")]
    pub rounds: u8,
    #[serde(default = "one")]
    pub legs: u8,
    #[serde(default = "one")]
    pub groups: u8,
    #[serde(default)]
    pub decides_champion: bool,
}

fn one() -> u8 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct StageMembershipEntity {
    pub club_id: String,
    pub stage_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransitionEntity {
    pub from_stage: String,
    pub to_stage: String,
    /// `-1` for every participant, otherwise a 1-based position.
    pub placement: i32,
    pub transition_type: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AwardEntity {
    pub stage_id: String,
    pub position: u8,
    pub amount: f64,
}

/// Entry into a stage for the first simulated season.
#[derive(Debug, Clone, Deserialize)]
pub struct QualificationEntity {
    pub club_id: String,
    pub stage_id: String,
}

pub struct CompetitionLoader;

impl CompetitionLoader {
    pub fn load() -> serde_json::Result<Vec<CompetitionEntity>> {
        serde_json::from_str(STATIC_COMPETITIONS_JSON)
    }

    pub fn load_stages() -> serde_json::Result<Vec<StageEntity>> {
        serde_json::from_str(STATIC_STAGES_JSON)
    }

    pub fn load_memberships() -> serde_json::Result<Vec<StageMembershipEntity>> {
        serde_json::from_str(STATIC_MEMBERSHIPS_JSON)
    }

    pub fn load_transitions() -> serde_json::Result<Vec<TransitionEntity>> {
        serde_json::from_str(STATIC_TRANSITIONS_JSON)
    }

    pub fn load_awards() -> serde_json::Result<Vec<AwardEntity>> {
        serde_json::from_str(STATIC_AWARDS_JSON)
    }

    pub fn load_qualifications() -> serde_json::Result<Vec<QualificationEntity>> {
        serde_json::from_str(STATIC_QUALIFICATIONS_JSON)
    }
}
