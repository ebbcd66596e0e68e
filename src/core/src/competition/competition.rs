use crate::shared::{CompetitionId, ContinentId, CountryId, NamesLocaleId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionType {
    Continental,
    Intercontinental,
    DomesticLeague,
    DomesticCup,
    SuperCup,
    RegionalLeague,
}

impl CompetitionType {
    pub fn is_domestic(&self) -> bool {
        matches!(
            self,
            CompetitionType::DomesticLeague
                | CompetitionType::DomesticCup
                | CompetitionType::SuperCup
                | CompetitionType::RegionalLeague
        )
    }
}

/// Where a competition is played: a single country, or a continent for
/// continental and intercontinental tournaments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompetitionRegion {
    Country(CountryId),
    Continent(ContinentId),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competition {
    pub id: CompetitionId,
    pub name: String,
    pub region: CompetitionRegion,
    pub competition_type: CompetitionType,

    /// Lower is a higher tier.
    pub importance: u8,
}

impl Competition {
    pub fn new(
        id: CompetitionId,
        name: String,
        region: CompetitionRegion,
        competition_type: CompetitionType,
        importance: u8,
    ) -> Self {
        Competition {
            id,
            name,
            region,
            competition_type,
            importance,
        }
    }

    pub fn country_id(&self) -> Option<&CountryId> {
        match &self.region {
            CompetitionRegion::Country(id) => Some(id),
            CompetitionRegion::Continent(_) => None,
        }
    }

    pub fn is_super_cup(&self) -> bool {
        self.competition_type == CompetitionType::SuperCup
    }

    pub fn is_domestic_league(&self) -> bool {
        self.competition_type == CompetitionType::DomesticLeague
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
    pub continent_id: ContinentId,
    pub names_locale_id: NamesLocaleId,
}

impl Country {
    pub fn new(
        id: CountryId,
        name: String,
        continent_id: ContinentId,
        names_locale_id: NamesLocaleId,
    ) -> Self {
        Country {
            id,
            name,
            continent_id,
            names_locale_id,
        }
    }
}
