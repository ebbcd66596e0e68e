use crate::competition::{Competition, Placement, SeasonContext, Stage, Transition, TransitionKind};
use crate::shared::{ClubId, CompetitionId, StageId};
use crate::stage::StageResult;
use crate::state::SimulationState;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionMove {
    pub club_id: ClubId,
    pub from_stage: StageId,
    pub to_stage: StageId,
    pub kind: TransitionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockReason {
    UnknownClub,
    UnknownTargetStage,
    UnknownTargetCompetition,
    /// A reserve side may not reach the level of its parent club.
    ReserveTeamRestriction,
    /// The club holds one of the gate-blocked competitions.
    GateBlocked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedMove {
    pub movement: TransitionMove,
    pub reason: BlockReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionReport {
    pub applied: Vec<TransitionMove>,
    pub blocked: Vec<BlockedMove>,
    /// Same-competition edges left to stage sequencing.
    pub sequenced: usize,
    pub ignored: usize,
}

impl TransitionReport {
    pub fn merge(&mut self, other: TransitionReport) {
        self.applied.extend(other.applied);
        self.blocked.extend(other.blocked);
        self.sequenced += other.sequenced;
        self.ignored += other.ignored;
    }
}

/// Moves clubs along the outgoing transitions of a finished stage.
pub struct TransitionProcessor;

impl TransitionProcessor {
    pub fn process(
        state: &mut SimulationState,
        result: &StageResult,
        context: &mut SeasonContext,
    ) -> TransitionReport {
        let mut report = TransitionReport::default();

        let Some(source) = state.stage(&result.stage_id).cloned() else {
            warn!("⚠️ transitions from unknown stage {}", result.stage_id);
            return report;
        };

        let transitions: Vec<Transition> = state.outgoing_transitions(&source.id).cloned().collect();

        for transition in &transitions {
            if let TransitionKind::Unknown(code) = transition.kind {
                debug!("transition {} -> {} has unknown type {}", transition.from_stage, transition.to_stage, code);
                report.ignored += 1;
                continue;
            }

            let Some(target) = state.stage(&transition.to_stage).cloned() else {
                for club in Self::resolve_placement(result, transition.placement) {
                    report.blocked.push(BlockedMove {
                        movement: Self::movement(&club, transition),
                        reason: BlockReason::UnknownTargetStage,
                    });
                }
                continue;
            };

            if transition.kind != TransitionKind::PromotionRelegation && source.shares_competition_with(&target) {
                report.sequenced += 1;
                continue;
            }

            for club in Self::resolve_placement(result, transition.placement) {
                let movement = Self::movement(&club, transition);

                match Self::apply(state, transition, &source, &target, &club, context) {
                    Ok(()) => {
                        debug!(
                            "➡️ {} moves {} -> {} (type {})",
                            club,
                            transition.from_stage,
                            transition.to_stage,
                            transition.kind.code()
                        );
                        report.applied.push(movement);
                    }
                    Err(reason) => {
                        debug!("⛔ {} blocked from {}: {:?}", club, transition.to_stage, reason);
                        report.blocked.push(BlockedMove { movement, reason });
                    }
                }
            }
        }

        report
    }

    /// `All` selects every participant; a position selects rank N of the
    /// table, of every group, or winners (1) / losers (2) of a playoff.
    pub fn resolve_placement(result: &StageResult, placement: Placement) -> Vec<ClubId> {
        match placement {
            Placement::All => result.participants(),
            Placement::Position(n) => result.placement(n as usize),
        }
    }

    pub fn apply(
        state: &mut SimulationState,
        transition: &Transition,
        source: &Stage,
        target: &Stage,
        club: &ClubId,
        context: &mut SeasonContext,
    ) -> Result<(), BlockReason> {
        if state.club(club).is_none() {
            return Err(BlockReason::UnknownClub);
        }

        match transition.kind {
            TransitionKind::PromotionRelegation => Self::promote_or_relegate(state, target, club),
            TransitionKind::NextSeasonQualification => {
                state.pending.queue(target.id.clone(), club.clone());
                Ok(())
            }
            TransitionKind::SameSeasonInjection => {
                if let Some(entry) = state.club_mut(club) {
                    entry.memberships.current.add_stage(target.id.clone());
                }

                if !source.shares_competition_with(target) {
                    context.add_cross_competition(target.id.clone(), club.clone());
                }

                Ok(())
            }
            TransitionKind::ConditionalGate => Self::pass_gate(state, target, club, context),
            TransitionKind::Unknown(_) => Ok(()),
        }
    }

    fn target_competition(state: &SimulationState, target: &Stage) -> Option<Competition> {
        target
            .competitions
            .iter()
            .find_map(|id| state.competition(id))
            .cloned()
    }

    fn promote_or_relegate(state: &mut SimulationState, target: &Stage, club_id: &ClubId) -> Result<(), BlockReason> {
        let competition = Self::target_competition(state, target).ok_or(BlockReason::UnknownTargetCompetition)?;

        if Self::reserve_team_blocked(state, club_id, &competition) {
            return Err(BlockReason::ReserveTeamRestriction);
        }

        let regional: HashSet<CompetitionId> = state
            .competitions
            .iter()
            .filter(|c| c.region == competition.region)
            .map(|c| c.id.clone())
            .collect();

        let regional_stages: HashSet<StageId> = state
            .stages
            .iter()
            .filter(|s| s.competitions.iter().any(|c| regional.contains(c)))
            .map(|s| s.id.clone())
            .collect();

        let Some(club) = state.club_mut(club_id) else {
            return Err(BlockReason::UnknownClub);
        };

        club.memberships
            .leave_where(|c| regional.contains(c), |s| regional_stages.contains(s));
        club.memberships.join(Some(&competition.id), &target.id);

        Ok(())
    }

    /// Blocks a reserve side when the target is as good as or better than any
    /// competition its parent currently plays in.
    fn reserve_team_blocked(state: &SimulationState, club_id: &ClubId, target: &Competition) -> bool {
        let Some(parent_id) = state.club(club_id).and_then(|c| c.reserve_of.as_ref()) else {
            return false;
        };

        let Some(parent) = state.club(parent_id) else {
            return false;
        };

        parent
            .memberships
            .current
            .competitions
            .iter()
            .filter_map(|id| state.competition(id))
            .any(|c| target.importance <= c.importance)
    }

    fn pass_gate(
        state: &mut SimulationState,
        target: &Stage,
        club_id: &ClubId,
        context: &mut SeasonContext,
    ) -> Result<(), BlockReason> {
        let blocked: Vec<CompetitionId> = state.settings.gate_blocked_competitions.clone();
        let competitions: Vec<CompetitionId> = target
            .competitions
            .iter()
            .filter(|c| state.competition(c).is_some())
            .cloned()
            .collect();

        let Some(club) = state.club_mut(club_id) else {
            return Err(BlockReason::UnknownClub);
        };

        if blocked.iter().any(|c| club.memberships.current.has_competition(c)) {
            return Err(BlockReason::GateBlocked);
        }

        for competition in &competitions {
            club.memberships.join(Some(competition), &target.id);
        }
        club.memberships.join(None, &target.id);

        context.add_qualified(target.id.clone(), club_id.clone());

        Ok(())
    }

    fn movement(club: &ClubId, transition: &Transition) -> TransitionMove {
        TransitionMove {
            club_id: club.clone(),
            from_stage: transition.from_stage.clone(),
            to_stage: transition.to_stage.clone(),
            kind: transition.kind,
        }
    }
}
