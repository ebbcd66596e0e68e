use serde::Deserialize;

const STATIC_CLUBS_JSON: &str = include_str!("../data/clubs.json");
const STATIC_PLAYERS_JSON: &str = include_str!("../data/players.json");

#[derive(Debug, Clone, Deserialize)]
pub struct ClubEntity {
    pub id: String,
    pub name: String,
    pub country_id: String,
    #[serde(default)]
    pub reserve_of: Option<String>,
    pub rating: u8,
    pub balance: f64,
    pub youth_level: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerEntity {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub country_id: String,
    pub club_id: String,
    /// Short role code such as `GK` or `ST`.
    pub position: String,
    pub rating: u8,
    pub potential: u8,
    pub birth_year: u16,
    #[serde(default)]
    pub retired: bool,
}

pub struct ClubLoader;

impl ClubLoader {
    pub fn load() -> serde_json::Result<Vec<ClubEntity>> {
        serde_json::from_str(STATIC_CLUBS_JSON)
    }

    pub fn load_players() -> serde_json::Result<Vec<PlayerEntity>> {
        serde_json::from_str(STATIC_PLAYERS_JSON)
    }
}
