use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("failed to parse embedded data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("competition {competition}: unknown type {value}")]
    UnknownCompetitionType { competition: String, value: String },

    #[error("competition {0} needs a country or a continent")]
    MissingRegion(String),

    #[error("stage {stage}: unknown format {value}")]
    UnknownStageFormat { stage: String, value: String },

    #[error("player {player}: unknown position {value}")]
    UnknownPosition { player: String, value: String },

    #[error("transition {from} -> {to}: invalid placement {placement}")]
    InvalidPlacement { from: String, to: String, placement: i32 },

    #[error("name {name}: unknown kind {value}")]
    UnknownNameKind { name: String, value: String },

    #[error("invalid dataset: {0}")]
    Build(String),
}
