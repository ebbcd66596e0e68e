use crate::shared::ClubId;
use crate::stage::Fixture;
use crate::utils::FloatUtils;
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::{HashMap, HashSet};

pub const POT_COUNT: usize = 4;
pub const OPPONENTS_PER_POT: usize = 2;
pub const MAX_HOME_GAMES: usize = 4;

/// Pot-based league draw. `clubs` must already be ordered strongest first and
/// hold a multiple of [`POT_COUNT`] entries.
pub fn pot_league<R: Rng + ?Sized>(clubs: &[ClubId], rng: &mut R) -> Vec<Fixture> {
    let pot_size = clubs.len() / POT_COUNT;
    if pot_size == 0 {
        return Vec::new();
    }

    let pots: Vec<&[ClubId]> = clubs.chunks(pot_size).take(POT_COUNT).collect();

    let mut pairs = draw_pairs(&pots);
    pairs.shuffle(rng);

    let matches = assign_venues(pairs, rng);

    debug!(
        "🎲 pot league draw: {} clubs, {} matches",
        clubs.len(),
        matches.len()
    );

    pack_rounds(matches)
}

/// Each club gets two opponents from every pot, its own included: neighbours on
/// a cycle inside a pot, the same and the next index across pots.
fn draw_pairs(pots: &[&[ClubId]]) -> Vec<(ClubId, ClubId)> {
    let mut seen: HashSet<(ClubId, ClubId)> = HashSet::new();
    let mut pairs = Vec::new();

    let mut push = |a: &ClubId, b: &ClubId| {
        if a == b {
            return;
        }

        let key = if a < b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        };

        if seen.insert(key.clone()) {
            pairs.push(key);
        }
    };

    for (p, pot) in pots.iter().enumerate() {
        let size = pot.len();

        for i in 0..size {
            push(&pot[i], &pot[(i + 1) % size]);
        }

        for other in pots.iter().skip(p + 1) {
            for i in 0..size.min(other.len()) {
                for shift in 0..OPPONENTS_PER_POT {
                    push(&pot[i], &other[(i + shift) % other.len()]);
                }
            }
        }
    }

    pairs
}

/// Home goes to whichever side has hosted less so far, capped at
/// [`MAX_HOME_GAMES`]; ties are a coin flip.
fn assign_venues<R: Rng + ?Sized>(pairs: Vec<(ClubId, ClubId)>, rng: &mut R) -> Vec<(ClubId, ClubId)> {
    let mut home_games: HashMap<ClubId, usize> = HashMap::new();
    let mut matches = Vec::with_capacity(pairs.len());

    for (a, b) in pairs {
        let a_home = home_games.get(&a).copied().unwrap_or(0);
        let b_home = home_games.get(&b).copied().unwrap_or(0);

        let a_hosts = if a_home >= MAX_HOME_GAMES && b_home < MAX_HOME_GAMES {
            false
        } else if b_home >= MAX_HOME_GAMES && a_home < MAX_HOME_GAMES {
            true
        } else if a_home != b_home {
            a_home < b_home
        } else {
            FloatUtils::coin_flip(rng)
        };

        let (home, away) = if a_hosts { (a, b) } else { (b, a) };

        *home_games.entry(home.clone()).or_default() += 1;
        matches.push((home, away));
    }

    matches
}

/// Greedy packing: each round takes every remaining match whose clubs are
/// still free in that round.
fn pack_rounds(mut matches: Vec<(ClubId, ClubId)>) -> Vec<Fixture> {
    let mut fixtures = Vec::with_capacity(matches.len());
    let mut round = 0;

    while !matches.is_empty() {
        round += 1;

        let mut busy: HashSet<ClubId> = HashSet::new();
        let mut deferred = Vec::new();

        for (home, away) in matches {
            if busy.contains(&home) || busy.contains(&away) {
                deferred.push((home, away));
                continue;
            }

            busy.insert(home.clone());
            busy.insert(away.clone());
            fixtures.push(Fixture::new(round, home, away));
        }

        matches = deferred;
    }

    fixtures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::seeded;

    fn clubs(count: usize) -> Vec<ClubId> {
        (0..count).map(|i| ClubId::new(format!("c{:02}", i))).collect()
    }

    fn opponents(fixtures: &[Fixture]) -> HashMap<ClubId, HashSet<ClubId>> {
        let mut map: HashMap<ClubId, HashSet<ClubId>> = HashMap::new();
        for f in fixtures {
            map.entry(f.home.clone()).or_default().insert(f.away.clone());
            map.entry(f.away.clone()).or_default().insert(f.home.clone());
        }
        map
    }

    #[test]
    fn every_club_meets_two_from_each_pot() {
        let clubs = clubs(16);
        let mut rng = seeded(8);

        let fixtures = pot_league(&clubs, &mut rng);
        let opponents = opponents(&fixtures);

        for club in &clubs {
            let faced = &opponents[club];
            assert_eq!(faced.len(), 8, "{}", club);

            for pot in clubs.chunks(4) {
                assert_eq!(pot.iter().filter(|c| faced.contains(*c)).count(), 2);
            }
        }
    }

    #[test]
    fn side_with_fewer_home_games_hosts() {
        let hub = ClubId::from("hub");
        let pairs: Vec<(ClubId, ClubId)> = clubs(10)
            .into_iter()
            .map(|c| (hub.clone(), c))
            .collect();
        let mut rng = seeded(10);

        let matches = assign_venues(pairs, &mut rng);

        assert_eq!(matches.len(), 10);
        assert!(matches.iter().filter(|(home, _)| *home == hub).count() <= 1);
    }

    #[test]
    fn no_club_twice_in_a_round() {
        let clubs = clubs(8);
        let mut rng = seeded(12);

        let fixtures = pot_league(&clubs, &mut rng);

        let max_round = fixtures.iter().map(|f| f.round).max().unwrap_or(0);
        for round in 1..=max_round {
            let mut seen = HashSet::new();
            for f in fixtures.iter().filter(|f| f.round == round) {
                assert!(seen.insert(&f.home));
                assert!(seen.insert(&f.away));
            }
        }
    }

    #[test]
    fn small_pots_collapse_duplicate_pairs() {
        let clubs = clubs(8);
        let mut rng = seeded(1);

        let fixtures = pot_league(&clubs, &mut rng);

        let mut pairs = HashSet::new();
        for f in &fixtures {
            let key = if f.home < f.away {
                (f.home.clone(), f.away.clone())
            } else {
                (f.away.clone(), f.home.clone())
            };
            assert!(pairs.insert(key));
        }

        // Pots of two: one own-pot opponent plus two from each other pot.
        assert_eq!(fixtures.len(), 8 * 7 / 2);
    }
}
