pub mod club;
pub mod competition;
pub mod error;
pub mod r#match;
pub mod season;
pub mod settings;
pub mod shared;
pub mod stage;
pub mod state;
pub mod transfers;
pub mod transitions;
pub mod utils;

#[cfg(test)]
mod testing;

pub use club::{Club, Player, PlayerBuilder, PlayerPositionType};
pub use competition::{
    Award, Competition, CompetitionRegion, CompetitionSeasonResult, CompetitionType, Country, Placement, Stage,
    StageFormat, StageMembership, Transition, TransitionKind,
};
pub use error::{SimulationError, SimulationResult};
pub use season::{PlayerSeasonStats, SeasonProgress, SeasonResult, SeasonSimulator};
pub use settings::SimulationSettings;
pub use stage::{StageResult, StandingsTable};
pub use state::{SimulationState, SimulationStateBuilder};
pub use transfers::TransferReport;
