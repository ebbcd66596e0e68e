use crate::competition::{Stage, StageFormat};
use crate::error::{SimulationError, SimulationResult};
use crate::r#match::{Lineup, MatchEngine, MatchResult};
use crate::shared::{ClubId, StageId};
use crate::stage::{
    ClubStageStats, GroupTable, PlayedFixture, PlayedRound, PlayoffTie, StageOutcome, StageResult,
    StageSchedule, StageScheduler, StandingsTable, collect_player_stats, rank_groups, standings_cmp,
};
use crate::state::SimulationState;
use crate::utils::FloatUtils;
use log::{debug, info, warn};
use rand::Rng;
use std::collections::{BTreeMap, BTreeSet, HashMap};

pub struct StageSimulator;

impl StageSimulator {
    /// Plays one stage for the given clubs. Unknown clubs are skipped; a stage
    /// left without clubs is reported as `EmptyParticipants`.
    pub fn simulate<R: Rng + ?Sized>(
        state: &mut SimulationState,
        stage_id: &StageId,
        participants: &[ClubId],
        rng: &mut R,
    ) -> SimulationResult<StageResult> {
        let stage = state.require_stage(stage_id)?.clone();

        let clubs: BTreeSet<ClubId> = participants
            .iter()
            .filter(|club| {
                let known = state.club(club).is_some();
                if !known {
                    warn!("⚠️ stage {}: unknown club {} skipped", stage.id, club);
                }
                known
            })
            .cloned()
            .collect();

        let mut lineups: HashMap<ClubId, Lineup> = HashMap::with_capacity(clubs.len());
        for club in &clubs {
            match state.prepare_lineup(club, rng) {
                Ok(lineup) => {
                    lineups.insert(club.clone(), lineup);
                }
                Err(err) => warn!("⚠️ stage {}: {} skipped, {}", stage.id, club, err),
            }
        }

        let clubs: Vec<ClubId> = clubs.into_iter().filter(|c| lineups.contains_key(c)).collect();

        let minimum = if stage.format == StageFormat::Knockout { 2 } else { 1 };
        if clubs.len() < minimum {
            return Err(SimulationError::EmptyParticipants(stage.id.clone()));
        }

        info!(
            "🏟️ stage {} ({}), {} clubs, season {}",
            stage.name,
            stage.id,
            clubs.len(),
            state.season
        );

        let strengths = state.squad_strengths(&clubs);
        let schedule = StageScheduler::schedule(&stage, &clubs, &strengths, state.season, rng);

        let rounds = Self::play(&schedule, &lineups, rng);

        let results: Vec<&MatchResult> = rounds
            .iter()
            .flat_map(|r| r.fixtures.iter().map(|f| &f.result))
            .collect();

        let playing: Vec<ClubId> = clubs
            .iter()
            .filter(|c| !schedule.dropped.contains(c))
            .cloned()
            .collect();

        let outcome = Self::outcome(&stage, &schedule, &playing, &rounds, rng);

        let club_stats = playing
            .iter()
            .map(|club| {
                let mut stats = ClubStageStats::new(club.clone());
                for result in results.iter().filter(|r| &r.home_club == club || &r.away_club == club) {
                    stats.record(result);
                }
                stats
            })
            .collect();

        let player_stats = collect_player_stats(&results);

        debug!(
            "✅ stage {} finished: {} rounds, {} matches",
            stage.id,
            rounds.len(),
            results.len()
        );

        Ok(StageResult {
            stage_id: stage.id.clone(),
            season: state.season,
            rounds,
            outcome,
            club_stats,
            player_stats,
        })
    }

    fn play<R: Rng + ?Sized>(
        schedule: &StageSchedule,
        lineups: &HashMap<ClubId, Lineup>,
        rng: &mut R,
    ) -> Vec<PlayedRound> {
        let mut engine = MatchEngine::new();

        schedule
            .rounds
            .iter()
            .map(|round| PlayedRound {
                number: round.number,
                date: round.date,
                fixtures: round
                    .fixtures
                    .iter()
                    .filter_map(|fixture| {
                        let home = lineups.get(&fixture.home)?;
                        let away = lineups.get(&fixture.away)?;

                        Some(PlayedFixture {
                            fixture: fixture.clone(),
                            result: engine.play(home, away, rng),
                        })
                    })
                    .collect(),
            })
            .collect()
    }

    fn outcome<R: Rng + ?Sized>(
        stage: &Stage,
        schedule: &StageSchedule,
        clubs: &[ClubId],
        rounds: &[PlayedRound],
        rng: &mut R,
    ) -> StageOutcome {
        let results: Vec<&MatchResult> = rounds
            .iter()
            .flat_map(|r| r.fixtures.iter().map(|f| &f.result))
            .collect();

        if stage.format == StageFormat::Knockout {
            return Self::playoff(rounds, &results, rng);
        }

        if !schedule.groups.is_empty() {
            let groups: Vec<GroupTable> = schedule
                .groups
                .iter()
                .enumerate()
                .map(|(idx, members)| GroupTable {
                    index: idx as u8,
                    standings: Self::table(members, &results),
                })
                .collect();

            let ranking = rank_groups(&groups);

            return StageOutcome::Groups { groups, ranking };
        }

        StageOutcome::League {
            standings: Self::table(clubs, &results),
        }
    }

    fn table(clubs: &[ClubId], results: &[&MatchResult]) -> StandingsTable {
        let mut table = StandingsTable::new(clubs);

        for result in results {
            table.update(result);
        }

        table.sort();
        table
    }

    /// Aggregates both legs of every tie; level aggregates go to a coin flip.
    fn playoff<R: Rng + ?Sized>(
        rounds: &[PlayedRound],
        results: &[&MatchResult],
        rng: &mut R,
    ) -> StageOutcome {
        let mut legs: BTreeMap<usize, Vec<&PlayedFixture>> = BTreeMap::new();

        for played in rounds.iter().flat_map(|r| r.fixtures.iter()) {
            if let Some(tie) = played.fixture.tie {
                legs.entry(tie).or_default().push(played);
            }
        }

        let mut ties = Vec::with_capacity(legs.len());

        for fixtures in legs.values() {
            let Some(first) = fixtures.iter().find(|f| f.fixture.leg == 1).or(fixtures.first()) else {
                continue;
            };

            let home = first.fixture.home.clone();
            let away = first.fixture.away.clone();

            let home_aggregate: u16 = fixtures.iter().map(|f| f.result.goals_for(&home) as u16).sum();
            let away_aggregate: u16 = fixtures.iter().map(|f| f.result.goals_for(&away) as u16).sum();

            let penalties = home_aggregate == away_aggregate;

            let home_wins = if penalties {
                FloatUtils::coin_flip(rng)
            } else {
                home_aggregate > away_aggregate
            };

            let (winner, loser) = if home_wins {
                (home.clone(), away.clone())
            } else {
                (away.clone(), home.clone())
            };

            if penalties {
                debug!("🎯 {} beat {} on penalties", winner, loser);
            }

            ties.push(PlayoffTie {
                home,
                away,
                home_aggregate,
                away_aggregate,
                winner,
                loser,
                penalties,
            });
        }

        let clubs: Vec<ClubId> = ties
            .iter()
            .flat_map(|t| [t.home.clone(), t.away.clone()])
            .collect();

        let mut standings = Self::table(&clubs, results);

        let winners: BTreeSet<&ClubId> = ties.iter().map(|t| &t.winner).collect();
        standings.rows.sort_by(|a, b| {
            let a_won = winners.contains(&a.club_id);
            let b_won = winners.contains(&b.club_id);

            b_won.cmp(&a_won).then_with(|| standings_cmp(a, b))
        });

        StageOutcome::Playoff { ties, standings }
    }
}
