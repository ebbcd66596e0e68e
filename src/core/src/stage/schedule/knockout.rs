use crate::shared::ClubId;
use crate::stage::Fixture;
use log::warn;
use rand::Rng;
use rand::seq::SliceRandom;

pub struct KnockoutDraw {
    pub fixtures: Vec<Fixture>,
    /// Odd participant left out of the draw.
    pub dropped: Option<ClubId>,
}

/// One elimination round. Second legs reverse the venue and are played the
/// round after the first.
pub fn knockout<R: Rng + ?Sized>(clubs: &[ClubId], legs: u8, rng: &mut R) -> KnockoutDraw {
    let mut drawn = clubs.to_vec();
    drawn.shuffle(rng);

    let dropped = if drawn.len() % 2 == 1 { drawn.pop() } else { None };

    if let Some(club) = &dropped {
        warn!("⚠️ odd knockout field, {} dropped from the draw", club);
    }

    let legs = legs.clamp(1, 2);
    let mut fixtures = Vec::with_capacity(drawn.len() / 2 * legs as usize);

    for (tie, pair) in drawn.chunks(2).enumerate() {
        let [home, away] = pair else {
            continue;
        };

        fixtures.push(Fixture::new(1, home.clone(), away.clone()).in_tie(tie));

        if legs == 2 {
            fixtures.push(
                Fixture::new(2, away.clone(), home.clone())
                    .in_tie(tie)
                    .second_leg(),
            );
        }
    }

    KnockoutDraw { fixtures, dropped }
}
