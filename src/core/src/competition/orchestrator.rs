use crate::competition::{CompetitionType, Stage, TransitionKind};
use crate::error::SimulationResult;
use crate::shared::{ClubId, CompetitionId, StageId};
use crate::stage::{StageResult, StageSimulator};
use crate::state::SimulationState;
use crate::transitions::{TransitionProcessor, TransitionReport};
use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Per-season bookkeeping shared by every competition simulated in the season.
#[derive(Debug, Clone, Default)]
pub struct SeasonContext {
    pub season: u16,

    /// Clubs whose current lists held each stage when the season started.
    snapshot: HashMap<StageId, BTreeSet<ClubId>>,

    results: HashMap<StageId, StageResult>,
    finalized: HashSet<StageId>,

    /// Same-season entrants from other competitions.
    cross_competition: HashMap<StageId, BTreeSet<ClubId>>,
    /// Entrants forwarded by stage sequencing or conditional gates.
    qualified: HashMap<StageId, BTreeSet<ClubId>>,

    pub transitions: TransitionReport,
    pub awards_paid: f64,
}

impl SeasonContext {
    pub fn new(state: &SimulationState) -> Self {
        let mut snapshot: HashMap<StageId, BTreeSet<ClubId>> = HashMap::new();

        for club in &state.clubs {
            for stage in &club.memberships.current.stages {
                snapshot.entry(stage.clone()).or_default().insert(club.id.clone());
            }
        }

        SeasonContext {
            season: state.season,
            snapshot,
            ..Default::default()
        }
    }

    /// Snapshot members, then same-season qualifiers and cross-competition
    /// entrants. Sorted and unique.
    pub fn participants(&self, stage: &StageId) -> Vec<ClubId> {
        let mut clubs: BTreeSet<ClubId> = BTreeSet::new();

        for source in [&self.snapshot, &self.qualified, &self.cross_competition] {
            if let Some(entries) = source.get(stage) {
                clubs.extend(entries.iter().cloned());
            }
        }

        clubs.into_iter().collect()
    }

    pub fn add_cross_competition(&mut self, stage: StageId, club: ClubId) {
        self.cross_competition.entry(stage).or_default().insert(club);
    }

    pub fn add_qualified(&mut self, stage: StageId, club: ClubId) {
        self.qualified.entry(stage).or_default().insert(club);
    }

    pub fn result(&self, stage: &StageId) -> Option<&StageResult> {
        self.results.get(stage)
    }

    pub fn store_result(&mut self, result: StageResult) {
        self.results.insert(result.stage_id.clone(), result);
    }

    /// `true` the first time a stage is finalized this season.
    pub fn mark_finalized(&mut self, stage: &StageId) -> bool {
        self.finalized.insert(stage.clone())
    }

    pub fn is_finalized(&self, stage: &StageId) -> bool {
        self.finalized.contains(stage)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionSeasonResult {
    pub competition_id: CompetitionId,
    pub stages: Vec<StageResult>,
    pub champion: Option<ClubId>,
}

impl CompetitionSeasonResult {
    pub fn stage(&self, id: &StageId) -> Option<&StageResult> {
        self.stages.iter().find(|s| &s.stage_id == id)
    }
}

pub struct CompetitionOrchestrator;

impl CompetitionOrchestrator {
    /// Runs a competition's stages in scheduling order. Stages shared with a
    /// competition simulated earlier this season reuse the cached result.
    pub fn simulate<R: Rng + ?Sized>(
        state: &mut SimulationState,
        competition_id: &CompetitionId,
        context: &mut SeasonContext,
        rng: &mut R,
    ) -> SimulationResult<CompetitionSeasonResult> {
        let competition = state.require_competition(competition_id)?.clone();

        let stages: Vec<Stage> = state
            .competition_stages(competition_id)
            .into_iter()
            .cloned()
            .collect();

        info!("🏆 {} ({} stages), season {}", competition.name, stages.len(), context.season);

        let mut result = CompetitionSeasonResult {
            competition_id: competition_id.clone(),
            stages: Vec::with_capacity(stages.len()),
            champion: None,
        };

        for stage in &stages {
            let stage_result = match context.result(&stage.id) {
                Some(cached) => {
                    debug!("♻️ stage {} already played this season", stage.id);
                    cached.clone()
                }
                None => {
                    let mut participants = context.participants(&stage.id);

                    if competition.competition_type == CompetitionType::SuperCup && participants.len() == 1 {
                        Self::fill_super_cup(state, competition_id, context, &mut participants);
                    }

                    if participants.is_empty() {
                        warn!("⚠️ stage {} has no participants, skipped", stage.id);
                        continue;
                    }

                    match StageSimulator::simulate(state, &stage.id, &participants, rng) {
                        Ok(fresh) => {
                            context.store_result(fresh.clone());
                            fresh
                        }
                        Err(err) if err.is_recoverable() => {
                            warn!("⚠️ stage {} skipped: {}", stage.id, err);
                            continue;
                        }
                        Err(err) => return Err(err),
                    }
                }
            };

            Self::finalize_stage(state, &stage_result, context);

            if stage.decides_champion {
                result.champion = stage_result.champion();

                match &result.champion {
                    Some(champion) => info!("🥇 {} champion: {}", competition.name, champion),
                    None => warn!("⚠️ {}: stage {} produced no champion", competition.name, stage.id),
                }
            }

            result.stages.push(stage_result);
        }

        Ok(result)
    }

    /// Transitions, sequencing and prize money, once per stage and season.
    pub fn finalize_stage(state: &mut SimulationState, result: &StageResult, context: &mut SeasonContext) {
        if !context.mark_finalized(&result.stage_id) {
            return;
        }

        let report = TransitionProcessor::process(state, result, context);
        context.transitions.merge(report);

        Self::forward_within_competition(state, result, context);

        context.awards_paid += Self::pay_awards(state, result);
    }

    /// Non-promotion edges between stages of the same competition feed the
    /// target stage's pool for this season only.
    fn forward_within_competition(state: &SimulationState, result: &StageResult, context: &mut SeasonContext) {
        let Some(source) = state.stage(&result.stage_id) else {
            return;
        };

        for transition in state.outgoing_transitions(&source.id) {
            if transition.kind == TransitionKind::PromotionRelegation {
                continue;
            }

            if let TransitionKind::Unknown(_) = transition.kind {
                continue;
            }

            let Some(target) = state.stage(&transition.to_stage) else {
                continue;
            };

            if !source.shares_competition_with(target) {
                continue;
            }

            for club in TransitionProcessor::resolve_placement(result, transition.placement) {
                context.add_qualified(target.id.clone(), club);
            }
        }
    }

    fn pay_awards(state: &mut SimulationState, result: &StageResult) -> f64 {
        let awards: Vec<_> = state
            .awards
            .iter()
            .filter(|a| a.stage_id == result.stage_id)
            .cloned()
            .collect();

        let mut paid = 0.0;

        for award in awards {
            for club_id in result.participants() {
                if result.finishing_position(&club_id) != Some(award.position as usize) {
                    continue;
                }

                if let Some(club) = state.club_mut(&club_id) {
                    club.credit(award.amount);
                    paid += award.amount;

                    debug!("💰 {} receives {} for position {} in {}", club.name, award.amount, award.position, result.stage_id);
                }
            }
        }

        paid
    }

    /// A super cup left with one finalist (the same club took league and cup)
    /// is completed with the runner-up of the country's top league.
    fn fill_super_cup(
        state: &SimulationState,
        competition_id: &CompetitionId,
        context: &SeasonContext,
        participants: &mut Vec<ClubId>,
    ) {
        let Some(super_cup) = state.competition(competition_id) else {
            return;
        };

        let league = state
            .competitions
            .iter()
            .filter(|c| c.is_domestic_league() && c.region == super_cup.region)
            .min_by(|a, b| a.importance.cmp(&b.importance).then_with(|| a.id.cmp(&b.id)));

        let Some(league) = league else {
            warn!("⚠️ {}: no paired league for a single finalist", super_cup.name);
            return;
        };

        let league_stages = state.competition_stages(&league.id);

        let decisive = league_stages
            .iter()
            .rev()
            .filter(|s| s.decides_champion)
            .chain(league_stages.iter().rev())
            .find_map(|s| context.result(&s.id));

        let Some(runner_up) = decisive.and_then(|r| r.placement(2).into_iter().next()) else {
            warn!("⚠️ {}: {} has no runner-up yet", super_cup.name, league.name);
            return;
        };

        if !participants.contains(&runner_up) {
            info!("🔁 {}: {} replaces the duplicate finalist", super_cup.name, runner_up);
            participants.push(runner_up);
        }
    }
}

/// Competitions ordered by earliest stage week, then importance, then id.
pub fn competition_order(state: &SimulationState) -> Vec<CompetitionId> {
    let mut order: Vec<(u16, u8, CompetitionId)> = state
        .competitions
        .iter()
        .map(|c| {
            let week = state
                .competition_stages(&c.id)
                .first()
                .map(|s| s.week)
                .unwrap_or(u16::MAX);

            (week, c.importance, c.id.clone())
        })
        .collect();

    order.sort();
    order.into_iter().map(|(_, _, id)| id).collect()
}

/// Whether any stage of any competition would have a participant.
pub fn has_viable_competition(state: &SimulationState) -> bool {
    let context = SeasonContext::new(state);

    state.stages.iter().any(|stage| {
        !stage.competitions.is_empty()
            && (!context.participants(&stage.id).is_empty() || state.pending.clubs_for(&stage.id).next().is_some())
    })
}
