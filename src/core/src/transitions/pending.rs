use crate::shared::{ClubId, StageId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Next-season qualifications queued by target stage. Consumed once at the
/// start of the following season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingInjections {
    entries: BTreeMap<StageId, BTreeSet<ClubId>>,
}

impl PendingInjections {
    pub fn new() -> Self {
        Self::default()
    }

    /// `false` when the club was already queued for the stage.
    pub fn queue(&mut self, stage: StageId, club: ClubId) -> bool {
        self.entries.entry(stage).or_default().insert(club)
    }

    pub fn clubs_for(&self, stage: &StageId) -> impl Iterator<Item = &ClubId> {
        self.entries.get(stage).into_iter().flat_map(|clubs| clubs.iter())
    }

    pub fn take(&mut self) -> BTreeMap<StageId, BTreeSet<ClubId>> {
        std::mem::take(&mut self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(|clubs| clubs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|clubs| clubs.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_is_a_set() {
        let mut pending = PendingInjections::new();

        assert!(pending.queue(StageId::from("5"), ClubId::from("a")));
        assert!(!pending.queue(StageId::from("5"), ClubId::from("a")));
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn take_clears() {
        let mut pending = PendingInjections::new();
        pending.queue(StageId::from("5"), ClubId::from("a"));

        let taken = pending.take();

        assert_eq!(taken.len(), 1);
        assert!(pending.is_empty());
        assert_eq!(pending.clubs_for(&StageId::from("5")).count(), 0);
    }
}
