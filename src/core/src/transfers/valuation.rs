use crate::club::Player;

const TOP_VALUE: f64 = 40_000_000.0;
const MIN_VALUE: f64 = 10_000.0;

/// Market value of a player from rating, age and room to grow.
pub struct PlayerValuationCalculator;

impl PlayerValuationCalculator {
    pub fn calculate(player: &Player, season: u16) -> f64 {
        let age = player.age(season);

        let value = determine_base_value(player) * determine_age_factor(age) * determine_potential_factor(player, age);

        value.max(MIN_VALUE)
    }
}

/// Cubic in rating: 50 → ~5M, 70 → ~14M, 90 → ~30M.
fn determine_base_value(player: &Player) -> f64 {
    let normalized = player.rating as f64 / 99.0;

    TOP_VALUE * normalized * normalized * normalized
}

fn determine_age_factor(age: u8) -> f64 {
    match age {
        a if a < 18 => 0.5,
        18..=20 => 0.8,
        21..=23 => 1.0,
        24..=28 => 1.1,
        29 => 0.95,
        30 => 0.8,
        31 => 0.65,
        32 => 0.5,
        33 => 0.35,
        _ => 0.25,
    }
}

/// Youth premium: up to +50% for a large gap, boosted under 21.
fn determine_potential_factor(player: &Player, age: u8) -> f64 {
    if age >= 24 || player.potential <= player.rating {
        return 1.0;
    }

    let gap = (player.potential - player.rating) as f64;
    let age_bonus = if age < 21 { 1.5 } else { 1.0 };

    1.0 + (gap / 100.0) * age_bonus
}
