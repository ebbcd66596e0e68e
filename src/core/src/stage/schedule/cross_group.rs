use crate::shared::ClubId;
use crate::stage::Fixture;
use itertools::Itertools;

/// Every club meets every club of the other groups exactly once and nobody
/// from its own group. Each rotation of a group pair is one global round.
pub fn cross_group(groups: &[Vec<ClubId>]) -> Vec<Fixture> {
    let mut fixtures = Vec::new();
    let mut round = 0;

    for ((a_idx, a), (b_idx, b)) in groups.iter().enumerate().tuple_combinations() {
        let size = a.len().max(b.len());
        if size == 0 {
            continue;
        }

        let left = padded(a, size);
        let right = padded(b, size);

        for rotation in 0..size {
            round += 1;

            for i in 0..size {
                let (Some(first), Some(second)) = (left[i], right[(i + rotation) % size]) else {
                    continue;
                };

                let fixture = if (i + rotation) % 2 == 0 {
                    Fixture::new(round, first.clone(), second.clone())
                        .between_groups(a_idx as u8, b_idx as u8)
                } else {
                    Fixture::new(round, second.clone(), first.clone())
                        .between_groups(b_idx as u8, a_idx as u8)
                };

                fixtures.push(fixture);
            }
        }
    }

    fixtures
}

fn padded(group: &[ClubId], size: usize) -> Vec<Option<&ClubId>> {
    let mut slots: Vec<Option<&ClubId>> = group.iter().map(Some).collect();
    slots.resize(size, None);
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn group(prefix: &str, count: usize) -> Vec<ClubId> {
        (0..count).map(|i| ClubId::new(format!("{}{}", prefix, i))).collect()
    }

    #[test]
    fn clubs_meet_each_other_group_once() {
        let groups = vec![group("a", 3), group("b", 3), group("c", 3)];
        let fixtures = cross_group(&groups);

        assert_eq!(fixtures.len(), 27);

        let mut pairs = HashSet::new();
        for f in &fixtures {
            assert_ne!(f.home.as_str().chars().next(), f.away.as_str().chars().next());
            assert!(pairs.insert((f.home.clone().min(f.away.clone()), f.home.clone().max(f.away.clone()))));
        }
    }

    #[test]
    fn uneven_groups_pad_with_byes() {
        let groups = vec![group("a", 3), group("b", 2)];
        let fixtures = cross_group(&groups);

        assert_eq!(fixtures.len(), 6);

        let rounds: HashSet<u32> = fixtures.iter().map(|f| f.round).collect();
        assert_eq!(rounds.len(), 3);

        for round in rounds {
            let mut seen = HashSet::new();
            for f in fixtures.iter().filter(|f| f.round == round) {
                assert!(seen.insert(&f.home));
                assert!(seen.insert(&f.away));
            }
        }
    }
}
