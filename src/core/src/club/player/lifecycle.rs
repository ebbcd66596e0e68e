use crate::club::Player;
use crate::settings::SimulationSettings;
use crate::shared::PlayerId;
use crate::utils::{FloatUtils, IntegerUtils};
use log::debug;
use rand::Rng;

const GROWTH_AGE: u8 = 24;
const DECLINE_AGE: u8 = 30;

#[derive(Debug, Clone, Default)]
pub struct LifecycleReport {
    pub improved: usize,
    pub declined: usize,
    pub retired: Vec<PlayerId>,
}

/// Aging of active players once the transfer window has closed.
pub struct PlayerLifecycle;

impl PlayerLifecycle {
    pub fn process<R: Rng + ?Sized>(
        players: &mut [Player],
        season: u16,
        settings: &SimulationSettings,
        rng: &mut R,
    ) -> LifecycleReport {
        let mut report = LifecycleReport::default();

        for player in players.iter_mut().filter(|p| p.is_active()) {
            let before = player.rating;

            Self::evolve(player, season, rng);

            match player.rating.cmp(&before) {
                std::cmp::Ordering::Greater => report.improved += 1,
                std::cmp::Ordering::Less => report.declined += 1,
                std::cmp::Ordering::Equal => {}
            }

            if Self::should_retire(player, season, settings, rng) {
                debug!("👋 player retired: {}, age {}", player, player.age(season));

                player.retire();
                report.retired.push(player.id.clone());
            }
        }

        report
    }

    pub fn evolve<R: Rng + ?Sized>(player: &mut Player, season: u16, rng: &mut R) {
        let age = player.age(season);

        if age < GROWTH_AGE {
            let headroom = player.potential.saturating_sub(player.rating) as i32;
            let growth = IntegerUtils::random(rng, 1, 5).min(headroom);

            player.set_rating(player.rating as i32 + growth);
        } else if age < DECLINE_AGE {
            let change = IntegerUtils::random(rng, -1, 2);
            let target = (player.rating as i32 + change).min(player.potential as i32);

            player.set_rating(target.max(player.rating as i32 - 1));
        } else {
            let decline = IntegerUtils::random(rng, 1, 4);
            player.set_rating(player.rating as i32 - decline);
        }
    }

    pub fn should_retire<R: Rng + ?Sized>(
        player: &Player,
        season: u16,
        settings: &SimulationSettings,
        rng: &mut R,
    ) -> bool {
        let age = player.age(season);

        if age >= settings.forced_retirement_age {
            return true;
        }

        if age < settings.retirement_age {
            return false;
        }

        let chance = 0.25 + 0.15 * (age - settings.retirement_age) as f64;

        FloatUtils::unit(rng) < chance
    }
}
