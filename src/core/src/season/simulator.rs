use crate::club::PlayerLifecycle;
use crate::competition::{
    CompetitionOrchestrator, CompetitionSeasonResult, SeasonContext, competition_order, has_viable_competition,
};
use crate::error::{SimulationError, SimulationResult};
use crate::season::{SeasonProgress, SeasonResult, YouthIntake};
use crate::shared::{CompetitionId, StageId};
use crate::stage::{PlayoffTie, StageResult, StageSimulator, StandingsTable};
use crate::state::SimulationState;
use crate::transfers::TransferMarket;
use crate::utils::{Logging, SimRng, seeded};
use log::{info, warn};

/// Runs whole seasons, single competitions or single stages against one
/// state with one reseedable generator.
pub struct SeasonSimulator {
    pub state: SimulationState,
    rng: SimRng,
    last_stage: Option<StageResult>,
}

impl SeasonSimulator {
    pub fn new(state: SimulationState) -> Self {
        let rng = seeded(state.settings.seed);

        SeasonSimulator {
            state,
            rng,
            last_stage: None,
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.state.settings.seed = seed;
        self.rng = seeded(seed);
    }

    pub fn into_state(self) -> SimulationState {
        self.state
    }

    pub fn simulate_season(&mut self) -> SimulationResult<SeasonResult> {
        self.simulate_season_with_progress(&mut |_| {})
    }

    /// youth reveal → queued qualifications → competitions → membership reset
    /// → transfer window → aging, then the year advances. The result reaches
    /// `state.history` only once every step has run.
    pub fn simulate_season_with_progress(
        &mut self,
        progress: &mut dyn FnMut(SeasonProgress),
    ) -> SimulationResult<SeasonResult> {
        self.preflight()?;

        let season = self.state.season;
        let order = competition_order(&self.state);

        info!("📅 season {} starts, {} competitions", season, order.len());
        progress(SeasonProgress::Started {
            season,
            competitions: order.len(),
        });

        let mut result = SeasonResult::new(season);

        result.youth_revealed = YouthIntake::reveal(&mut self.state, &mut self.rng);

        self.consume_pending();

        let mut context = SeasonContext::new(&self.state);

        for (index, competition_id) in order.iter().enumerate() {
            let message = format!("simulate competition {}", competition_id);
            let simulated = Logging::estimate_result(
                || CompetitionOrchestrator::simulate(&mut self.state, competition_id, &mut context, &mut self.rng),
                &message,
            );

            match simulated {
                Ok(competition) => {
                    progress(SeasonProgress::CompetitionFinished {
                        index,
                        total: order.len(),
                        competition_id: competition_id.clone(),
                        champion: competition.champion.clone(),
                    });

                    if let Some(stage) = competition.stages.last() {
                        self.last_stage = Some(stage.clone());
                    }

                    result.competitions.push(competition);
                }
                Err(err) if err.is_recoverable() => {
                    warn!("⚠️ competition {} skipped: {}", competition_id, err);
                }
                Err(err) => return Err(err),
            }
        }

        result.transitions = std::mem::take(&mut context.transitions);

        for club in self.state.clubs.iter_mut() {
            club.memberships.reset_to_canonical();
        }

        result.transfers = TransferMarket::run_window(&mut self.state, &mut self.rng);
        progress(SeasonProgress::TransferWindowClosed {
            completed: result.transfers.completed.len(),
        });

        let settings = self.state.settings.clone();
        let lifecycle = PlayerLifecycle::process(&mut self.state.players, season, &settings, &mut self.rng);

        info!(
            "🧓 season {}: {} improved, {} declined, {} retired",
            season,
            lifecycle.improved,
            lifecycle.declined,
            lifecycle.retired.len()
        );

        result.retired = lifecycle.retired;
        result.collect_player_stats();

        self.state.history.push(result.clone());
        self.state.season = season.saturating_add(1);

        info!(
            "🏁 season {} finished: {} matches, {} transfers, {} moves between stages",
            season,
            result.match_count(),
            result.transfers.completed.len(),
            result.transitions.applied.len()
        );
        progress(SeasonProgress::Finished { season });

        Ok(result)
    }

    /// One competition in a fresh season context; transitions and prize money
    /// apply as in a full season.
    pub fn simulate_competition(&mut self, id: &CompetitionId) -> SimulationResult<CompetitionSeasonResult> {
        let mut context = SeasonContext::new(&self.state);

        let result = CompetitionOrchestrator::simulate(&mut self.state, id, &mut context, &mut self.rng)?;

        if let Some(stage) = result.stages.last() {
            self.last_stage = Some(stage.clone());
        }

        Ok(result)
    }

    /// Plays a stage for its season-start members only, without transitions.
    pub fn simulate_single_stage(&mut self, id: &StageId) -> SimulationResult<&StageResult> {
        let context = SeasonContext::new(&self.state);
        let participants = context.participants(id);

        let result = StageSimulator::simulate(&mut self.state, id, &participants, &mut self.rng)?;

        Ok(self.last_stage.insert(result))
    }

    pub fn last_stage_result(&self) -> Option<&StageResult> {
        self.last_stage.as_ref()
    }

    pub fn last_standings(&self) -> Option<&StandingsTable> {
        self.last_stage.as_ref().and_then(|s| s.standings())
    }

    pub fn last_bracket(&self) -> &[PlayoffTie] {
        self.last_stage.as_ref().map(|s| s.ties()).unwrap_or(&[])
    }

    fn preflight(&self) -> SimulationResult<()> {
        if self.state.competitions.is_empty() {
            return Err(SimulationError::NoCompetitions);
        }

        if !has_viable_competition(&self.state) {
            return Err(SimulationError::NoViableCompetitions);
        }

        Ok(())
    }

    /// Last season's next-season qualifications join the current lists for
    /// this season only.
    fn consume_pending(&mut self) {
        let pending = self.state.pending.take();

        for (stage_id, clubs) in pending {
            let Some(stage) = self.state.stage(&stage_id).cloned() else {
                warn!("⚠️ queued qualification for unknown stage {}", stage_id);
                continue;
            };

            for club_id in clubs {
                let Some(club) = self.state.club_mut(&club_id) else {
                    warn!("⚠️ queued qualification for unknown club {}", club_id);
                    continue;
                };

                club.memberships.current.add_stage(stage.id.clone());
                for competition in &stage.competitions {
                    club.memberships.current.add_competition(competition.clone());
                }

                info!("🎟️ {} enters {} ({})", club.name, stage.name, stage.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::competition::{Placement, Transition, TransitionKind};
    use crate::shared::ClubId;
    use crate::state::SimulationStateBuilder;
    use crate::testing::{self, CONTINENTAL_STAGE, L1_STAGE, L2_STAGE};

    fn transition(from: &str, to: &str, placement: Placement, code: u16) -> Transition {
        Transition::new(StageId::from(from), StageId::from(to), placement, TransitionKind::from_code(code))
    }

    fn simulator() -> SeasonSimulator {
        SeasonSimulator::new(testing::build(
            testing::two_tier(),
            vec![
                transition(L1_STAGE, L2_STAGE, Placement::Position(4), 0),
                transition(L2_STAGE, L1_STAGE, Placement::Position(1), 0),
                transition(L1_STAGE, CONTINENTAL_STAGE, Placement::Position(1), 100),
                transition(L1_STAGE, CONTINENTAL_STAGE, Placement::Position(2), 100),
            ],
        ))
    }

    #[test]
    fn empty_world_fails_before_touching_state() {
        let state = SimulationStateBuilder::new().build().unwrap();
        let mut simulator = SeasonSimulator::new(state);

        assert_eq!(simulator.simulate_season().unwrap_err(), SimulationError::NoCompetitions);
        assert_eq!(simulator.state.season, simulator.state.settings.start_year);
        assert!(simulator.state.history.is_empty());
    }

    #[test]
    fn competitions_without_members_are_not_viable() {
        let mut state = testing::build(testing::two_tier(), Vec::new());
        for club in state.clubs.iter_mut() {
            club.memberships = Default::default();
        }
        let players = state.players.len();

        let mut simulator = SeasonSimulator::new(state);

        assert_eq!(simulator.simulate_season().unwrap_err(), SimulationError::NoViableCompetitions);
        assert_eq!(simulator.state.players.len(), players);
        assert!(simulator.state.history.is_empty());
    }

    #[test]
    fn season_moves_clubs_and_advances_the_year() {
        let mut simulator = simulator();
        let start = simulator.state.season;

        let result = simulator.simulate_season().unwrap();

        assert_eq!(result.season, start);
        assert_eq!(simulator.state.season, start + 1);
        assert_eq!(simulator.state.history.len(), 1);

        let table = result.competition(&CompetitionId::from("l1")).unwrap().stages[0].standings().unwrap();
        let relegated = table.club_at(4).cloned().unwrap();

        let club = simulator.state.club(&relegated).unwrap();
        assert!(club.memberships.current.has_stage(&StageId::from(L2_STAGE)));
        assert!(!club.memberships.current.has_stage(&StageId::from(L1_STAGE)));

        assert_eq!(simulator.state.pending.len(), 2);
        assert!(result.champion(&CompetitionId::from("l1")).is_some());
        assert!(result.champion(&CompetitionId::from("ecl")).is_none());
        assert!(!result.youth_revealed.is_empty());
        assert!(result.player_stats.iter().all(|s| s.season == start));
    }

    #[test]
    fn next_season_qualifiers_play_once() {
        let mut simulator = simulator();

        let first = simulator.simulate_season().unwrap();
        let second = simulator.simulate_season().unwrap();

        let l1 = first.competition(&CompetitionId::from("l1")).unwrap().stages[0].standings().unwrap();
        let mut expected: Vec<ClubId> = vec![l1.club_at(1).cloned().unwrap(), l1.club_at(2).cloned().unwrap()];
        expected.sort();

        let continental = second.competition(&CompetitionId::from("ecl")).unwrap();
        let mut entrants = continental.stages[0].participants();
        entrants.sort();

        assert_eq!(entrants, expected);

        for club in &expected {
            let memberships = &simulator.state.club(club).unwrap().memberships;
            assert!(!memberships.canonical.has_stage(&StageId::from(CONTINENTAL_STAGE)));
            assert!(!memberships.current.has_stage(&StageId::from(CONTINENTAL_STAGE)));
        }
    }

    #[test]
    fn progress_reports_every_competition() {
        let mut simulator = simulator();
        let mut events = Vec::new();

        simulator
            .simulate_season_with_progress(&mut |event| events.push(event))
            .unwrap();

        let finished = events
            .iter()
            .filter(|e| matches!(e, SeasonProgress::CompetitionFinished { .. }))
            .count();

        assert_eq!(finished, 5);
        assert!(matches!(events.first(), Some(SeasonProgress::Started { competitions: 5, .. })));
        assert!(matches!(events.last(), Some(SeasonProgress::Finished { .. })));
    }

    #[test]
    fn same_seed_same_season() {
        let mut first = simulator();
        let mut second = simulator();

        let a = first.simulate_season().unwrap();
        let b = second.simulate_season().unwrap();

        let table = |r: &SeasonResult| {
            r.competition(&CompetitionId::from("l1")).unwrap().stages[0]
                .standings()
                .unwrap()
                .rows
                .clone()
        };

        assert_eq!(table(&a), table(&b));
        assert_eq!(a.transfers, b.transfers);
    }

    #[test]
    fn single_stage_and_accessors() {
        let mut simulator = simulator();
        simulator.reseed(99);

        let clubs = simulator
            .simulate_single_stage(&StageId::from(L2_STAGE))
            .unwrap()
            .participants()
            .len();

        assert_eq!(clubs, 4);
        assert_eq!(simulator.last_standings().unwrap().len(), 4);
        assert!(simulator.last_bracket().is_empty());
        assert_eq!(simulator.state.history.len(), 0);

        let err = simulator.simulate_single_stage(&StageId::from(CONTINENTAL_STAGE)).unwrap_err();
        assert_eq!(err, SimulationError::EmptyParticipants(StageId::from(CONTINENTAL_STAGE)));
    }

    #[test]
    fn competition_in_isolation() {
        let mut simulator = simulator();

        let result = simulator.simulate_competition(&CompetitionId::from("l2")).unwrap();

        assert!(result.champion.is_some());
        assert_eq!(simulator.last_stage_result().unwrap().stage_id, StageId::from(L2_STAGE));
    }
}
