use serde::Deserialize;

const STATIC_COUNTRIES_JSON: &str = include_str!("../data/countries.json");
const STATIC_YOUTH_REVEAL_JSON: &str = include_str!("../data/youth_reveal.json");

#[derive(Debug, Clone, Deserialize)]
pub struct CountryEntity {
    pub id: String,
    pub name: String,
    pub continent_id: String,
    pub names_locale_id: String,
}

/// Chance that a graduate of an `origin` club carries the `target` nationality.
#[derive(Debug, Clone, Deserialize)]
pub struct YouthRevealEntity {
    pub origin_country_id: String,
    pub target_country_id: String,
    pub probability: f64,
}

pub struct CountryLoader;

impl CountryLoader {
    pub fn load() -> serde_json::Result<Vec<CountryEntity>> {
        serde_json::from_str(STATIC_COUNTRIES_JSON)
    }

    pub fn load_youth_reveal() -> serde_json::Result<Vec<YouthRevealEntity>> {
        serde_json::from_str(STATIC_YOUTH_REVEAL_JSON)
    }
}
