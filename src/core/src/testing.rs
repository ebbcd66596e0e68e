//! Small hand-built worlds shared by unit tests.

use crate::club::{Club, Player, PlayerBuilder};
use crate::competition::{
    Competition, CompetitionRegion, CompetitionType, Country, Stage, StageFormat, StageMembership, Transition,
};
use crate::r#match::MatchTacticType;
use crate::shared::{ClubId, CompetitionId, ContinentId, CountryId, CurrencyValue, FullName, NamesLocaleId, StageId};
use crate::state::{SimulationState, SimulationStateBuilder};

pub const L1_STAGE: &str = "1";
pub const L2_STAGE: &str = "2";
pub const CUP_STAGE: &str = "3";
pub const CUP_FINAL_STAGE: &str = "4";
pub const CONTINENTAL_STAGE: &str = "5";
pub const SUPER_CUP_STAGE: &str = "6";

pub fn club(id: &str, rating: u8) -> Club {
    Club::new(
        ClubId::from(id),
        format!("{} FC", id.to_uppercase()),
        CountryId::from("north"),
        rating,
        CurrencyValue::usd(1_000_000.0),
        8,
    )
}

/// Eleven players covering a 4-4-2, all rated `rating`.
pub fn squad(club_id: &ClubId, rating: u8) -> Vec<Player> {
    MatchTacticType::T442
        .positions()
        .iter()
        .enumerate()
        .map(|(idx, position)| {
            PlayerBuilder::new()
                .id(format!("{}-{}", club_id, idx))
                .full_name(FullName::parse("Test Player"))
                .country_id("north")
                .club_id(club_id.clone())
                .position(*position)
                .rating(rating)
                .potential(rating.saturating_add(5))
                .birth_year(2000)
                .build()
                .unwrap()
        })
        .collect()
}

pub fn membership(club: &str, stage: &str) -> StageMembership {
    StageMembership {
        club_id: ClubId::from(club),
        stage_id: StageId::from(stage),
    }
}

fn competition(id: &str, region: CompetitionRegion, kind: CompetitionType, importance: u8) -> Competition {
    Competition::new(CompetitionId::from(id), id.to_uppercase(), region, kind, importance)
}

fn stage(id: &str, format: StageFormat, competition: &str, week: u16) -> Stage {
    Stage::new(StageId::from(id), format!("Stage {}", id), format)
        .with_competitions(vec![CompetitionId::from(competition)])
        .with_week(week)
}

/// One country with two league tiers of four clubs (`a1..a4` on top,
/// `b1..b4` below), a two-round cup, a continental league and a super cup.
/// Only the league stages have members.
pub fn two_tier() -> SimulationStateBuilder {
    let north = CompetitionRegion::Country(CountryId::from("north"));
    let continent = CompetitionRegion::Continent(ContinentId::from("eu"));

    let mut clubs = Vec::new();
    let mut players = Vec::new();
    let mut memberships = Vec::new();

    for idx in 1..=4u8 {
        for (tier, base, stage_id) in [("a", 70u8, L1_STAGE), ("b", 50u8, L2_STAGE)] {
            let id = format!("{}{}", tier, idx);
            let rating = base + idx * 2;

            players.extend(squad(&ClubId::from(id.as_str()), rating));
            clubs.push(club(&id, rating));
            memberships.push(membership(&id, stage_id));
        }
    }

    SimulationStateBuilder::new()
        .countries(vec![Country::new(
            CountryId::from("north"),
            "Northland".to_string(),
            ContinentId::from("eu"),
            NamesLocaleId::from("en"),
        )])
        .clubs(clubs)
        .players(players)
        .competitions(vec![
            competition("l1", north.clone(), CompetitionType::DomesticLeague, 1),
            competition("l2", north.clone(), CompetitionType::DomesticLeague, 2),
            competition("cup", north.clone(), CompetitionType::DomesticCup, 3),
            competition("sc", north, CompetitionType::SuperCup, 4),
            competition("ecl", continent, CompetitionType::Continental, 1),
        ])
        .stages(vec![
            stage(L1_STAGE, StageFormat::RoundRobin, "l1", 1)
                .with_rounds(2)
                .deciding_champion(true),
            stage(L2_STAGE, StageFormat::RoundRobin, "l2", 1)
                .with_rounds(2)
                .deciding_champion(true),
            stage(CUP_STAGE, StageFormat::Knockout, "cup", 10),
            stage(CUP_FINAL_STAGE, StageFormat::Knockout, "cup", 12).deciding_champion(true),
            stage(CONTINENTAL_STAGE, StageFormat::RoundRobin, "ecl", 5).deciding_champion(true),
            stage(SUPER_CUP_STAGE, StageFormat::Knockout, "sc", 40).deciding_champion(true),
        ])
        .stage_memberships(memberships)
}

pub fn build(builder: SimulationStateBuilder, transitions: Vec<Transition>) -> SimulationState {
    builder.transitions(transitions).build().unwrap()
}
