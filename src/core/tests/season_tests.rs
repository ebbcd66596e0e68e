use football_core::r#match::MatchTacticType;
use football_core::shared::{ClubId, CompetitionId, ContinentId, CountryId, CurrencyValue, FullName, NamesLocaleId, StageId};
use football_core::{
    Club, Competition, CompetitionRegion, CompetitionType, Country, Placement, Player, PlayerBuilder, SeasonSimulator,
    SimulationSettings, SimulationState, SimulationStateBuilder, Stage, StageFormat, StageMembership, Transition,
    TransitionKind,
};

const LEAGUE: &str = "10";
const POT_LEAGUE: &str = "20";
const CROSS: &str = "30";

fn squad(club: &Club, rating: u8) -> Vec<Player> {
    MatchTacticType::T433
        .positions()
        .iter()
        .enumerate()
        .map(|(idx, position)| {
            PlayerBuilder::new()
                .id(format!("{}-{}", club.id, idx))
                .full_name(FullName::parse("Integration Player"))
                .country_id(club.country_id.clone())
                .club_id(club.id.clone())
                .position(*position)
                .rating(rating)
                .potential(rating + 4)
                .birth_year(1999)
                .build()
                .unwrap()
        })
        .collect()
}

fn transition(from: &str, to: &str, placement: Placement, kind: TransitionKind) -> Transition {
    Transition::new(StageId::from(from), StageId::from(to), placement, kind)
}

/// Eight clubs in one league; the top four reach a pot league next season,
/// everyone plays a cross-group stage in the same season.
fn world(seed: u64) -> SimulationState {
    let mut clubs = Vec::new();
    let mut players = Vec::new();
    let mut memberships = Vec::new();

    for idx in 0..8u8 {
        let club = Club::new(
            ClubId::new(format!("club-{}", idx)),
            format!("Club {}", idx),
            CountryId::from("north"),
            55 + idx * 3,
            CurrencyValue::usd(20_000_000.0),
            10,
        );

        players.extend(squad(&club, 55 + idx * 3));
        memberships.push(StageMembership {
            club_id: club.id.clone(),
            stage_id: StageId::from(LEAGUE),
        });
        clubs.push(club);
    }

    SimulationStateBuilder::new()
        .settings(SimulationSettings::default().with_seed(seed))
        .countries(vec![Country::new(
            CountryId::from("north"),
            "Northland".to_string(),
            ContinentId::from("eu"),
            NamesLocaleId::from("en"),
        )])
        .clubs(clubs)
        .players(players)
        .competitions(vec![
            Competition::new(
                CompetitionId::from("league"),
                "League".to_string(),
                CompetitionRegion::Country(CountryId::from("north")),
                CompetitionType::DomesticLeague,
                1,
            ),
            Competition::new(
                CompetitionId::from("cross"),
                "Cross Trophy".to_string(),
                CompetitionRegion::Country(CountryId::from("north")),
                CompetitionType::DomesticCup,
                3,
            ),
            Competition::new(
                CompetitionId::from("pots"),
                "Pot League".to_string(),
                CompetitionRegion::Continent(ContinentId::from("eu")),
                CompetitionType::Continental,
                1,
            ),
        ])
        .stages(vec![
            Stage::new(StageId::from(LEAGUE), "Season".to_string(), StageFormat::RoundRobin)
                .with_competitions(vec![CompetitionId::from("league")])
                .with_rounds(2)
                .deciding_champion(true),
            Stage::new(StageId::from(CROSS), "Cross".to_string(), StageFormat::CrossGroup)
                .with_competitions(vec![CompetitionId::from("cross")])
                .with_groups(2)
                .with_week(20)
                .deciding_champion(true),
            Stage::new(StageId::from(POT_LEAGUE), "League Phase".to_string(), StageFormat::PotLeague)
                .with_competitions(vec![CompetitionId::from("pots")])
                .with_week(8)
                .deciding_champion(true),
        ])
        .stage_memberships(memberships)
        .transitions(vec![
            transition(LEAGUE, CROSS, Placement::All, TransitionKind::SameSeasonInjection),
            transition(LEAGUE, POT_LEAGUE, Placement::All, TransitionKind::NextSeasonQualification),
        ])
        .build()
        .unwrap()
}

#[test]
fn three_seasons_keep_the_world_consistent() {
    let mut simulator = SeasonSimulator::new(world(7));
    let start = simulator.state.season;

    for offset in 0..3u16 {
        let result = simulator.simulate_season().unwrap();

        assert_eq!(result.season, start + offset);
        assert!(result.champion(&CompetitionId::from("league")).is_some());
        assert!(result.champion(&CompetitionId::from("cross")).is_some());

        let pots = result.competition(&CompetitionId::from("pots")).unwrap();
        match offset {
            0 => assert!(pots.stages.is_empty()),
            _ => assert_eq!(pots.stages[0].participants().len(), 8),
        }
    }

    assert_eq!(simulator.state.season, start + 3);
    assert_eq!(simulator.state.history.len(), 3);

    for club in &simulator.state.clubs {
        assert_eq!(club.memberships.current, club.memberships.canonical);
        assert!(!club.memberships.canonical.has_stage(&StageId::from(POT_LEAGUE)));
        assert!(!club.memberships.canonical.has_stage(&StageId::from(CROSS)));
    }

    for player in &simulator.state.players {
        assert!(simulator.state.club(&player.club_id).is_some());
        assert!(player.rating >= 1 && player.rating <= 99);
        assert!(player.potential >= player.rating);
    }
}

#[test]
fn pot_league_pairs_meet_once() {
    let mut simulator = SeasonSimulator::new(world(11));
    simulator.simulate_season().unwrap();

    let result = simulator.simulate_season().unwrap();
    let pots = result.competition(&CompetitionId::from("pots")).unwrap();
    let stage = &pots.stages[0];

    let mut pairs = std::collections::HashSet::new();
    for m in stage.matches() {
        let key = if m.home_club < m.away_club {
            (m.home_club.clone(), m.away_club.clone())
        } else {
            (m.away_club.clone(), m.home_club.clone())
        };
        assert!(pairs.insert(key), "pair met twice");
    }

    for club in stage.participants() {
        let played = stage
            .matches()
            .filter(|m| m.home_club == club || m.away_club == club)
            .count();

        assert!((1..=8).contains(&played));
    }
}

#[test]
fn seeds_reproduce_whole_seasons() {
    let mut a = SeasonSimulator::new(world(3));
    let mut b = SeasonSimulator::new(world(3));

    for _ in 0..2 {
        let left = a.simulate_season().unwrap();
        let right = b.simulate_season().unwrap();

        assert_eq!(left.player_stats, right.player_stats);
        assert_eq!(left.transfers, right.transfers);
        assert_eq!(
            left.champion(&CompetitionId::from("league")),
            right.champion(&CompetitionId::from("league"))
        );
    }
}
