use crate::shared::StageId;
use serde::{Deserialize, Serialize};

/// Prize money for finishing a stage at `position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub stage_id: StageId,
    pub position: u8,
    pub amount: f64,
}

impl Award {
    pub fn new(stage_id: StageId, position: u8, amount: f64) -> Self {
        Award {
            stage_id,
            position,
            amount,
        }
    }
}
