use crate::shared::ClubId;
use crate::stage::Fixture;

/// Circle-method round robin. An odd field gets a bye slot that is never
/// recorded; odd turns swap every venue of the turn before.
pub fn round_robin(clubs: &[ClubId], turns: u8, group: Option<u8>) -> Vec<Fixture> {
    if clubs.len() < 2 {
        return Vec::new();
    }

    let mut slots: Vec<Option<&ClubId>> = clubs.iter().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }

    let size = slots.len();
    let rounds_per_turn = size - 1;
    let half = size / 2;

    let mut fixtures = Vec::with_capacity(turns as usize * rounds_per_turn * half);

    for turn in 0..turns.max(1) as usize {
        let mut rotation = slots.clone();

        for round in 0..rounds_per_turn {
            let number = (turn * rounds_per_turn + round + 1) as u32;

            for i in 0..half {
                let (Some(first), Some(second)) = (rotation[i], rotation[size - 1 - i]) else {
                    continue;
                };

                let (mut home, mut away) = (first, second);

                if i == 0 && round % 2 == 1 {
                    std::mem::swap(&mut home, &mut away);
                }

                if turn % 2 == 1 {
                    std::mem::swap(&mut home, &mut away);
                }

                fixtures.push(Fixture::new(number, home.clone(), away.clone()).in_group(group));
            }

            rotation[1..].rotate_right(1);
        }
    }

    fixtures
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::{HashMap, HashSet};

    fn clubs(count: usize) -> Vec<ClubId> {
        (0..count).map(|i| ClubId::new(format!("c{}", i))).collect()
    }

    #[test]
    fn four_team_single_turn() {
        let fixtures = round_robin(&clubs(4), 1, None);

        assert_eq!(fixtures.len(), 6);

        for round in 1..=3 {
            let in_round: Vec<&Fixture> = fixtures.iter().filter(|f| f.round == round).collect();
            assert_eq!(in_round.len(), 2);

            let mut seen = HashSet::new();
            for fixture in in_round {
                assert!(seen.insert(fixture.home.clone()));
                assert!(seen.insert(fixture.away.clone()));
            }
        }
    }

    #[test]
    fn single_club_has_no_fixtures() {
        assert!(round_robin(&clubs(1), 2, None).is_empty());
    }

    proptest! {
        #[test]
        fn every_pair_meets_once_per_turn(count in 2usize..12, turns in 1u8..5) {
            let clubs = clubs(count);
            let fixtures = round_robin(&clubs, turns, None);

            let mut ordered: HashMap<(ClubId, ClubId), usize> = HashMap::new();
            let mut played: HashMap<ClubId, usize> = HashMap::new();

            for fixture in &fixtures {
                prop_assert_ne!(&fixture.home, &fixture.away);
                *ordered.entry((fixture.home.clone(), fixture.away.clone())).or_default() += 1;
                *played.entry(fixture.home.clone()).or_default() += 1;
                *played.entry(fixture.away.clone()).or_default() += 1;
            }

            for club in &clubs {
                prop_assert_eq!(played[club], turns as usize * (count - 1));
            }

            for a in &clubs {
                for b in &clubs {
                    if a == b {
                        continue;
                    }

                    let forward = ordered.get(&(a.clone(), b.clone())).copied().unwrap_or(0);
                    let backward = ordered.get(&(b.clone(), a.clone())).copied().unwrap_or(0);

                    prop_assert_eq!(forward + backward, turns as usize);
                    prop_assert!(forward.abs_diff(backward) <= 1);
                }
            }

            let rounds: HashSet<u32> = fixtures.iter().map(|f| f.round).collect();
            for round in rounds {
                let mut seen = HashSet::new();
                for fixture in fixtures.iter().filter(|f| f.round == round) {
                    prop_assert!(seen.insert(&fixture.home));
                    prop_assert!(seen.insert(&fixture.away));
                }
            }
        }
    }
}
