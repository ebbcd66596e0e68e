use crate::{
    ClubEntity, CompetitionEntity, DatabaseEntity, DatabaseError, NameEntity, PlayerEntity, StageEntity,
    TransitionEntity,
};
use football_core::club::{Club, Player, PlayerBuilder, PlayerPositionType};
use football_core::competition::{
    Award, Competition, CompetitionRegion, CompetitionType, Country, Placement, Stage, StageFormat, StageMembership,
    Transition, TransitionKind,
};
use football_core::shared::{
    ClubId, CompetitionId, ContinentId, CountryId, CurrencyValue, FullName, NamesLocaleId, StageId,
};
use football_core::state::{NameKind, PeopleNameTable, SimulationState, SimulationStateBuilder, YouthRevealTable};
use football_core::transitions::PendingInjections;
use football_core::SimulationSettings;
use log::{info, warn};

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Turns flat records into a ready-to-run state. Dataset settings override
    /// `settings`, except the seed.
    pub fn generate(data: &DatabaseEntity, settings: SimulationSettings) -> Result<SimulationState, DatabaseError> {
        let settings = data.settings.apply(settings);

        let countries = data
            .countries
            .iter()
            .map(|c| {
                Country::new(
                    CountryId::from(c.id.as_str()),
                    c.name.clone(),
                    ContinentId::from(c.continent_id.as_str()),
                    NamesLocaleId::from(c.names_locale_id.as_str()),
                )
            })
            .collect();

        let clubs = data.clubs.iter().map(Self::generate_club).collect();

        let players = data
            .players
            .iter()
            .map(Self::generate_player)
            .collect::<Result<Vec<Player>, DatabaseError>>()?;

        let competitions = data
            .competitions
            .iter()
            .map(Self::generate_competition)
            .collect::<Result<Vec<Competition>, DatabaseError>>()?;

        let stages = data
            .stages
            .iter()
            .map(Self::generate_stage)
            .collect::<Result<Vec<Stage>, DatabaseError>>()?;

        let stage_memberships = data
            .stage_memberships
            .iter()
            .map(|m| StageMembership {
                club_id: ClubId::from(m.club_id.as_str()),
                stage_id: StageId::from(m.stage_id.as_str()),
            })
            .collect();

        let transitions = data
            .transitions
            .iter()
            .map(Self::generate_transition)
            .collect::<Result<Vec<Transition>, DatabaseError>>()?;

        let awards = data
            .awards
            .iter()
            .map(|a| Award::new(StageId::from(a.stage_id.as_str()), a.position, a.amount))
            .collect();

        let mut pending = PendingInjections::new();
        for qualification in &data.qualifications {
            pending.queue(
                StageId::from(qualification.stage_id.as_str()),
                ClubId::from(qualification.club_id.as_str()),
            );
        }

        let mut youth_reveal = YouthRevealTable::new();
        for entry in &data.youth_reveal {
            youth_reveal.add(
                CountryId::from(entry.origin_country_id.as_str()),
                CountryId::from(entry.target_country_id.as_str()),
                entry.probability,
            );
        }

        let state = SimulationStateBuilder::new()
            .settings(settings)
            .countries(countries)
            .clubs(clubs)
            .players(players)
            .competitions(competitions)
            .stages(stages)
            .stage_memberships(stage_memberships)
            .transitions(transitions)
            .awards(awards)
            .names(Self::generate_names(&data.names)?)
            .youth_reveal(youth_reveal)
            .pending(pending)
            .build()
            .map_err(DatabaseError::Build)?;

        info!(
            "🌍 world generated: season {}, {} clubs, {} players, {} queued qualifications",
            state.season,
            state.clubs.len(),
            state.players.len(),
            state.pending.len()
        );

        Ok(state)
    }

    fn generate_club(club: &ClubEntity) -> Club {
        Club::new(
            ClubId::from(club.id.as_str()),
            club.name.clone(),
            CountryId::from(club.country_id.as_str()),
            club.rating,
            CurrencyValue::usd(club.balance),
            club.youth_level,
        )
        .with_reserve_of(club.reserve_of.as_deref().map(ClubId::from))
    }

    fn generate_player(player: &PlayerEntity) -> Result<Player, DatabaseError> {
        let position =
            PlayerPositionType::from_short_name(&player.position).ok_or_else(|| DatabaseError::UnknownPosition {
                player: player.id.clone(),
                value: player.position.clone(),
            })?;

        PlayerBuilder::new()
            .id(player.id.as_str())
            .full_name(FullName::new(player.first_name.clone(), player.last_name.clone()))
            .country_id(player.country_id.as_str())
            .club_id(player.club_id.as_str())
            .position(position)
            .rating(player.rating)
            .potential(player.potential)
            .birth_year(player.birth_year)
            .retired(player.retired)
            .build()
            .map_err(DatabaseError::Build)
    }

    fn generate_competition(competition: &CompetitionEntity) -> Result<Competition, DatabaseError> {
        let competition_type = match competition.competition_type.trim() {
            "continental" => CompetitionType::Continental,
            "intercontinental" => CompetitionType::Intercontinental,
            "domestic_league" => CompetitionType::DomesticLeague,
            "domestic_cup" => CompetitionType::DomesticCup,
            "super_cup" => CompetitionType::SuperCup,
            "regional_league" => CompetitionType::RegionalLeague,
            other => {
                return Err(DatabaseError::UnknownCompetitionType {
                    competition: competition.id.clone(),
                    value: other.to_string(),
                });
            }
        };

        let region = match (&competition.country_id, &competition.continent_id) {
            (Some(country), _) => CompetitionRegion::Country(CountryId::from(country.as_str())),
            (None, Some(continent)) => CompetitionRegion::Continent(ContinentId::from(continent.as_str())),
            (None, None) => return Err(DatabaseError::MissingRegion(competition.id.clone())),
        };

        Ok(Competition::new(
            CompetitionId::from(competition.id.as_str()),
            competition.name.clone(),
            region,
            competition_type,
            competition.importance,
        ))
    }

    fn generate_stage(stage: &StageEntity) -> Result<Stage, DatabaseError> {
        let format = match stage.format.trim() {
            "round_robin" => StageFormat::RoundRobin,
            "knockout" => StageFormat::Knockout,
            "pot_league" => StageFormat::PotLeague,
            "cross_group" => StageFormat::CrossGroup,
            other => {
                return Err(DatabaseError::UnknownStageFormat {
                    stage: stage.id.clone(),
                    value: other.to_string(),
                });
            }
        };

        let competitions: Vec<CompetitionId> = Self::split_competitions(&stage.competitions);
        if competitions.is_empty() {
            warn!("⚠️ stage {} belongs to no competition", stage.id);
        }

        Ok(Stage::new(StageId::from(stage.id.as_str()), stage.name.clone(), format)
            .with_competitions(competitions)
            .with_week(stage.week)
            .with_rounds(stage.rounds)
            .with_legs(stage.legs)
            .with_groups(stage.groups)
            .deciding_champion(stage.decides_champion))
    }

    /// `a;b; c` → `[a, b, c]`, blanks dropped.
    pub fn split_competitions(value: &str) -> Vec<CompetitionId> {
        value
            .split(';')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(CompetitionId::from)
            .collect()
    }

    fn generate_transition(transition: &TransitionEntity) -> Result<Transition, DatabaseError> {
        let placement = Placement::from_code(transition.placement).ok_or_else(|| DatabaseError::InvalidPlacement {
            from: transition.from_stage.clone(),
            to: transition.to_stage.clone(),
            placement: transition.placement,
        })?;

        let kind = TransitionKind::from_code(transition.transition_type);
        if let TransitionKind::Unknown(code) = kind {
            warn!(
                "⚠️ transition {} -> {} has unknown type {} and will be ignored",
                transition.from_stage, transition.to_stage, code
            );
        }

        Ok(Transition::new(
            StageId::from(transition.from_stage.as_str()),
            StageId::from(transition.to_stage.as_str()),
            placement,
            kind,
        ))
    }

    fn generate_names(names: &[NameEntity]) -> Result<PeopleNameTable, DatabaseError> {
        let mut table = PeopleNameTable::new();

        for entry in names {
            let kind = match entry.kind.trim() {
                "first" => NameKind::First,
                "last" => NameKind::Last,
                other => {
                    return Err(DatabaseError::UnknownNameKind {
                        name: entry.name.clone(),
                        value: other.to_string(),
                    });
                }
            };

            table.add(NamesLocaleId::from(entry.locale.as_str()), kind, entry.name.clone(), entry.weight);
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseLoader;

    fn state() -> SimulationState {
        let data = DatabaseLoader::load().unwrap();
        DatabaseGenerator::generate(&data, SimulationSettings::default().with_seed(5)).unwrap()
    }

    #[test]
    fn demo_dataset_generates() {
        let state = state();

        assert_eq!(state.countries.len(), 2);
        assert_eq!(state.clubs.len(), 28);
        assert_eq!(state.settings.seed, 5);
        assert_eq!(state.settings.gate_blocked_competitions, vec![CompetitionId::from("ecc")]);
        assert_eq!(state.pending.len(), 16);
    }

    #[test]
    fn shared_stage_lists_both_leagues() {
        let state = state();
        let playoff = state.stage(&StageId::from("103")).unwrap();

        assert_eq!(
            playoff.competitions,
            vec![CompetitionId::from("n-l1"), CompetitionId::from("n-l2")]
        );
    }

    #[test]
    fn memberships_become_canonical_lists() {
        let state = state();
        let club = state.club(&ClubId::from("n1")).unwrap();

        assert!(club.memberships.canonical.has_stage(&StageId::from("101")));
        assert!(club.memberships.canonical.has_competition(&CompetitionId::from("n-l1")));
        assert_eq!(club.memberships.current, club.memberships.canonical);

        let reserve = state.club(&ClubId::from("n9")).unwrap();
        assert_eq!(reserve.reserve_of, Some(ClubId::from("n1")));
    }

    #[test]
    fn every_format_and_transition_type_is_present() {
        let state = state();

        for format in [
            StageFormat::RoundRobin,
            StageFormat::Knockout,
            StageFormat::PotLeague,
            StageFormat::CrossGroup,
        ] {
            assert!(state.stages.iter().any(|s| s.format == format), "{:?}", format);
        }

        for kind in [
            TransitionKind::PromotionRelegation,
            TransitionKind::NextSeasonQualification,
            TransitionKind::SameSeasonInjection,
            TransitionKind::ConditionalGate,
        ] {
            assert!(state.transitions.iter().any(|t| t.kind == kind), "{:?}", kind);
        }
    }

    #[test]
    fn competition_lists_are_trimmed() {
        assert_eq!(
            DatabaseGenerator::split_competitions(" a; b;;c "),
            vec![CompetitionId::from("a"), CompetitionId::from("b"), CompetitionId::from("c")]
        );
    }

    #[test]
    fn bad_records_are_errors() {
        let stage = StageEntity {
            id: "9".to_string(),
            name: "Nine".to_string(),
            competitions: "x".to_string(),
            week: 0,
            format: "swiss".to_string(),
            rounds: 1,
            legs: 1,
            groups: 1,
            decides_champion: false,
        };

        assert!(matches!(
            DatabaseGenerator::generate_stage(&stage),
            Err(DatabaseError::UnknownStageFormat { .. })
        ));

        let transition = TransitionEntity {
            from_stage: "1".to_string(),
            to_stage: "2".to_string(),
            placement: 0,
            transition_type: 0,
        };

        assert!(matches!(
            DatabaseGenerator::generate_transition(&transition),
            Err(DatabaseError::InvalidPlacement { placement: 0, .. })
        ));
    }
}
