use crate::shared::{ClubId, CompetitionId, PlayerId, StageId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("club {0} not found")]
    UnknownClub(ClubId),

    #[error("player {0} not found")]
    UnknownPlayer(PlayerId),

    #[error("stage {0} not found")]
    UnknownStage(StageId),

    #[error("competition {0} not found")]
    UnknownCompetition(CompetitionId),

    #[error("stage {0} has no eligible participants")]
    EmptyParticipants(StageId),

    #[error("no competitions loaded")]
    NoCompetitions,

    #[error("no competition has a stage with participants")]
    NoViableCompetitions,
}

impl SimulationError {
    /// Lookup misses and empty stages are recovered by skipping the unit of work.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            SimulationError::NoCompetitions | SimulationError::NoViableCompetitions
        )
    }
}

pub type SimulationResult<T> = Result<T, SimulationError>;
