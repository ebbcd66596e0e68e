mod error;
mod generators;
mod loaders;

pub use error::*;
pub use generators::*;
pub use loaders::*;

use log::info;

pub struct DatabaseEntity {
    pub countries: Vec<CountryEntity>,
    pub clubs: Vec<ClubEntity>,
    pub players: Vec<PlayerEntity>,
    pub competitions: Vec<CompetitionEntity>,
    pub stages: Vec<StageEntity>,
    pub stage_memberships: Vec<StageMembershipEntity>,
    pub transitions: Vec<TransitionEntity>,
    pub awards: Vec<AwardEntity>,
    pub qualifications: Vec<QualificationEntity>,
    pub names: Vec<NameEntity>,
    pub youth_reveal: Vec<YouthRevealEntity>,
    pub settings: SettingsEntity,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    /// Parses the embedded demo dataset.
    pub fn load() -> Result<DatabaseEntity, DatabaseError> {
        let database = DatabaseEntity {
            countries: CountryLoader::load()?,
            clubs: ClubLoader::load()?,
            players: ClubLoader::load_players()?,
            competitions: CompetitionLoader::load()?,
            stages: CompetitionLoader::load_stages()?,
            stage_memberships: CompetitionLoader::load_memberships()?,
            transitions: CompetitionLoader::load_transitions()?,
            awards: CompetitionLoader::load_awards()?,
            qualifications: CompetitionLoader::load_qualifications()?,
            names: NamesLoader::load()?,
            youth_reveal: CountryLoader::load_youth_reveal()?,
            settings: SettingsLoader::load()?,
        };

        info!(
            "📦 database loaded: {} countries, {} clubs, {} players, {} competitions, {} stages",
            database.countries.len(),
            database.clubs.len(),
            database.players.len(),
            database.competitions.len(),
            database.stages.len()
        );

        Ok(database)
    }
}
