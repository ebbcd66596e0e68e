use crate::shared::StageId;
use serde::{Deserialize, Serialize};

/// Which clubs of the source stage a transition selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    All,
    Position(u8),
}

impl Placement {
    /// `-1` selects everyone, `1..` a finishing position.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Placement::All),
            n if n > 0 && n <= u8::MAX as i32 => Some(Placement::Position(n as u8)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    PromotionRelegation,
    NextSeasonQualification,
    SameSeasonInjection,
    ConditionalGate,
    Unknown(u16),
}

impl TransitionKind {
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => TransitionKind::PromotionRelegation,
            100 => TransitionKind::NextSeasonQualification,
            106 => TransitionKind::SameSeasonInjection,
            111 => TransitionKind::ConditionalGate,
            other => TransitionKind::Unknown(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            TransitionKind::PromotionRelegation => 0,
            TransitionKind::NextSeasonQualification => 100,
            TransitionKind::SameSeasonInjection => 106,
            TransitionKind::ConditionalGate => 111,
            TransitionKind::Unknown(code) => *code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from_stage: StageId,
    pub to_stage: StageId,
    pub placement: Placement,
    pub kind: TransitionKind,
}

impl Transition {
    pub fn new(from_stage: StageId, to_stage: StageId, placement: Placement, kind: TransitionKind) -> Self {
        Transition {
            from_stage,
            to_stage,
            placement,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_codes() {
        assert_eq!(Placement::from_code(-1), Some(Placement::All));
        assert_eq!(Placement::from_code(3), Some(Placement::Position(3)));
        assert_eq!(Placement::from_code(0), None);
        assert_eq!(Placement::from_code(-7), None);
    }

    #[test]
    fn unknown_codes_are_kept() {
        let kind = TransitionKind::from_code(42);
        assert_eq!(kind, TransitionKind::Unknown(42));
        assert_eq!(kind.code(), 42);
        assert_eq!(TransitionKind::from_code(106), TransitionKind::SameSeasonInjection);
    }
}
