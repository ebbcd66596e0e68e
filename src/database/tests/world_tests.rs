use database::{DatabaseGenerator, DatabaseLoader};
use football_core::shared::{ClubId, CompetitionId, StageId};
use football_core::{SeasonSimulator, SimulationSettings, SimulationState};

fn world(seed: u64) -> SimulationState {
    let data = DatabaseLoader::load().unwrap();
    DatabaseGenerator::generate(&data, SimulationSettings::default().with_seed(seed)).unwrap()
}

#[test]
fn first_season_crowns_every_champion() {
    let mut simulator = SeasonSimulator::new(world(11));
    let result = simulator.simulate_season().unwrap();

    assert_eq!(result.season, 2024);

    for id in ["n-l1", "n-l2", "s-l1", "s-l2", "ecc", "ecl"] {
        assert!(
            result.champion(&CompetitionId::from(id)).is_some(),
            "{} has no champion",
            id
        );
    }

    assert!(result.match_count() > 0);
}

#[test]
fn qualifications_are_consumed_once() {
    let mut simulator = SeasonSimulator::new(world(3));
    assert_eq!(simulator.state.pending.len(), 16);

    let first = simulator.simulate_season().unwrap();
    let groups = first
        .competition(&CompetitionId::from("ecc"))
        .and_then(|c| c.stage(&StageId::from("301")))
        .unwrap();

    assert_eq!(groups.participants().len(), 8);

    // the leagues queue next year's entrants again
    assert_eq!(simulator.state.pending.len(), 16);
}

#[test]
fn promotion_and_relegation_keep_league_sizes() {
    let mut simulator = SeasonSimulator::new(world(7));

    for _ in 0..2 {
        simulator.simulate_season().unwrap();

        let count = |stage: &str| {
            simulator
                .state
                .clubs
                .iter()
                .filter(|c| c.memberships.canonical.has_stage(&StageId::from(stage)))
                .count()
        };

        // a blocked reserve promotion may leave the north tiers uneven
        assert_eq!(count("101") + count("102"), 14);
        assert_eq!(count("201"), 8);
        assert_eq!(count("202"), 6);
    }
}

#[test]
fn reserve_side_never_joins_the_top_flight_with_its_parent() {
    let mut simulator = SeasonSimulator::new(world(21));

    for _ in 0..3 {
        simulator.simulate_season().unwrap();

        let reserve = simulator.state.club(&ClubId::from("n9")).unwrap();
        let parent = simulator.state.club(&ClubId::from("n1")).unwrap();

        let top_flight = CompetitionId::from("n-l1");
        assert!(
            !(reserve.memberships.canonical.has_competition(&top_flight)
                && parent.memberships.canonical.has_competition(&top_flight))
        );
    }
}

#[test]
fn same_seed_same_history() {
    let run = |seed| {
        let mut simulator = SeasonSimulator::new(world(seed));
        (0..2)
            .map(|_| {
                let result = simulator.simulate_season().unwrap();
                (
                    result.match_count(),
                    result.transfers.completed.len(),
                    result
                        .competitions
                        .iter()
                        .map(|c| c.champion.clone())
                        .collect::<Vec<_>>(),
                )
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(run(99), run(99));
}
