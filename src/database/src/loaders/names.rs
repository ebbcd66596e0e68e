use serde::Deserialize;

const STATIC_NAMES_JSON: &str = include_str!("../data/names.json");

#[derive(Debug, Clone, Deserialize)]
pub struct NameEntity {
    pub locale: String,
    /// `first` or `last`.
    pub kind: String,
    pub name: String,
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_weight() -> u32 {
    1
}

pub struct NamesLoader;

impl NamesLoader {
    pub fn load() -> serde_json::Result<Vec<NameEntity>> {
        serde_json::from_str(STATIC_NAMES_JSON)
    }
}
