use crate::shared::{CompetitionId, StageId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Competitions and stages a club belongs to. Both are sets: adding an id the
/// club already holds is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipSet {
    pub competitions: BTreeSet<CompetitionId>,
    pub stages: BTreeSet<StageId>,
}

impl MembershipSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_competition(&mut self, id: CompetitionId) -> bool {
        self.competitions.insert(id)
    }

    pub fn add_stage(&mut self, id: StageId) -> bool {
        self.stages.insert(id)
    }

    pub fn remove_competition(&mut self, id: &CompetitionId) -> bool {
        self.competitions.remove(id)
    }

    pub fn remove_stage(&mut self, id: &StageId) -> bool {
        self.stages.remove(id)
    }

    pub fn has_competition(&self, id: &CompetitionId) -> bool {
        self.competitions.contains(id)
    }

    pub fn has_stage(&self, id: &StageId) -> bool {
        self.stages.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.competitions.is_empty() && self.stages.is_empty()
    }
}

/// `current` changes every season; `canonical` is what the dataset assigned,
/// altered only by promotion/relegation and conditional-gate transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubMemberships {
    pub current: MembershipSet,
    pub canonical: MembershipSet,
}

impl ClubMemberships {
    pub fn from_canonical(canonical: MembershipSet) -> Self {
        ClubMemberships {
            current: canonical.clone(),
            canonical,
        }
    }

    /// Writes to both lists.
    pub fn join(&mut self, competition: Option<&CompetitionId>, stage: &StageId) {
        if let Some(competition) = competition {
            self.current.add_competition(competition.clone());
            self.canonical.add_competition(competition.clone());
        }

        self.current.add_stage(stage.clone());
        self.canonical.add_stage(stage.clone());
    }

    /// Drops every competition and stage accepted by the predicates from both lists.
    pub fn leave_where<C, S>(&mut self, competition_filter: C, stage_filter: S)
    where
        C: Fn(&CompetitionId) -> bool,
        S: Fn(&StageId) -> bool,
    {
        for set in [&mut self.current, &mut self.canonical] {
            set.competitions.retain(|c| !competition_filter(c));
            set.stages.retain(|s| !stage_filter(s));
        }
    }

    /// Season-end reset: transient qualifications are discarded.
    pub fn reset_to_canonical(&mut self) {
        self.current = self.canonical.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_twice_keeps_single_entry() {
        let mut set = MembershipSet::new();

        assert!(set.add_stage(StageId::from("1")));
        assert!(!set.add_stage(StageId::from("1")));
        assert_eq!(set.stages.len(), 1);
    }

    #[test]
    fn join_writes_both_lists() {
        let mut memberships = ClubMemberships::default();
        memberships.join(Some(&CompetitionId::from("league")), &StageId::from("10"));
        memberships.join(Some(&CompetitionId::from("league")), &StageId::from("10"));

        assert_eq!(memberships.current.competitions.len(), 1);
        assert_eq!(memberships.canonical.stages.len(), 1);
    }

    #[test]
    fn reset_discards_transient_stages() {
        let mut canonical = MembershipSet::new();
        canonical.add_stage(StageId::from("1"));

        let mut memberships = ClubMemberships::from_canonical(canonical);
        memberships.current.add_stage(StageId::from("99"));

        memberships.reset_to_canonical();

        assert!(!memberships.current.has_stage(&StageId::from("99")));
        assert!(memberships.current.has_stage(&StageId::from("1")));
    }

    #[test]
    fn leave_where_filters_both_lists() {
        let mut memberships = ClubMemberships::default();
        memberships.join(Some(&CompetitionId::from("a")), &StageId::from("1"));
        memberships.join(Some(&CompetitionId::from("b")), &StageId::from("2"));

        memberships.leave_where(|c| c.as_str() == "a", |s| s.as_str() == "1");

        assert!(!memberships.current.has_competition(&CompetitionId::from("a")));
        assert!(!memberships.canonical.has_stage(&StageId::from("1")));
        assert!(memberships.canonical.has_stage(&StageId::from("2")));
    }
}
