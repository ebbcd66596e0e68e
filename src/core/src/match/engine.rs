use crate::club::PlayerFieldPositionGroup;
use crate::r#match::{GoalDetail, Lineup, MatchResult, Score};
use crate::utils::{FloatUtils, PoissonSampler};
use log::debug;
use rand::Rng;

const BASE_XG: f64 = 1.1;
const XG_SLOPE: f64 = 0.05;
const XG_EXPONENT: f64 = 1.2;
const MIN_XG: f64 = 0.01;

const ATTACK_HOME_BONUS: f64 = 1.0;
const DEFENSE_HOME_BONUS: f64 = 2.0;

const SCORER_WEIGHT_SCALE: f64 = 16.0;

/// Line ratings a lineup brings into a match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineupStrength {
    pub attack: f64,
    pub midfield: f64,
    pub defense: f64,
    pub goalkeeper: f64,
}

impl LineupStrength {
    pub fn from_lineup(lineup: &Lineup) -> Self {
        LineupStrength {
            attack: lineup.line_rating(PlayerFieldPositionGroup::Forward) as f64,
            midfield: lineup.line_rating(PlayerFieldPositionGroup::Midfielder) as f64,
            defense: lineup.line_rating(PlayerFieldPositionGroup::Defender) as f64,
            goalkeeper: lineup.line_rating(PlayerFieldPositionGroup::Goalkeeper) as f64,
        }
    }
}

/// Statistical match resolution: expected goals from line ratings, a Poisson
/// score, and weighted scorer draws.
#[derive(Debug, Default)]
pub struct MatchEngine {
    poisson: PoissonSampler,
}

impl MatchEngine {
    pub fn new() -> Self {
        MatchEngine {
            poisson: PoissonSampler::new(),
        }
    }

    pub fn play<R: Rng + ?Sized>(&mut self, home: &Lineup, away: &Lineup, rng: &mut R) -> MatchResult {
        let home_strength = LineupStrength::from_lineup(home);
        let away_strength = LineupStrength::from_lineup(away);

        let home_xg = Self::expected_goals(&home_strength, &away_strength, true);
        let away_xg = Self::expected_goals(&away_strength, &home_strength, false);

        let home_goals = self.poisson.sample(home_xg, rng).min(u8::MAX as u32) as u8;
        let away_goals = self.poisson.sample(away_xg, rng).min(u8::MAX as u32) as u8;

        let mut scorers = Vec::with_capacity((home_goals + away_goals) as usize);

        for _ in 0..home_goals {
            if let Some(goal) = self.pick_scorer(home, rng) {
                scorers.push(goal);
            }
        }

        for _ in 0..away_goals {
            if let Some(goal) = self.pick_scorer(away, rng) {
                scorers.push(goal);
            }
        }

        debug!(
            "⚽ {} {} - {} {} (xg {:.2} - {:.2})",
            home.club_id, home_goals, away_goals, away.club_id, home_xg, away_xg
        );

        MatchResult {
            home_club: home.club_id.clone(),
            away_club: away.club_id.clone(),
            score: Score::new(home_goals, away_goals),
            home_xg,
            away_xg,
            scorers,
            home_players: home.player_ids().cloned().collect(),
            away_players: away.player_ids().cloned().collect(),
        }
    }

    /// `attacking_home` also decides the defensive bonus: the defending side is
    /// at home exactly when the attacking side is not.
    pub fn expected_goals(attacking: &LineupStrength, defending: &LineupStrength, attacking_home: bool) -> f64 {
        let attack_side = 0.7 * attacking.attack
            + 0.3 * attacking.midfield
            + if attacking_home { ATTACK_HOME_BONUS } else { 0.0 };

        let defense_side = (defending.defense + defending.goalkeeper) / 2.0
            + if attacking_home { 0.0 } else { DEFENSE_HOME_BONUS };

        let diff = attack_side - defense_side;

        (BASE_XG + XG_SLOPE * diff.signum() * diff.abs().powf(XG_EXPONENT)).max(MIN_XG)
    }

    /// Every lineup player draws `Poisson(weight / 16) + U(0, 1)`; the highest
    /// draw scores.
    fn pick_scorer<R: Rng + ?Sized>(&mut self, lineup: &Lineup, rng: &mut R) -> Option<GoalDetail> {
        let mut best: Option<(f64, usize)> = None;

        for (idx, slot) in lineup.slots.iter().enumerate() {
            let weight = slot.adjusted_rating as f64 * slot.slot_position.goal_factor() as f64;
            let draw = self.poisson.sample(weight / SCORER_WEIGHT_SCALE, rng) as f64 + FloatUtils::unit(rng);

            if best.is_none_or(|(value, _)| draw > value) {
                best = Some((draw, idx));
            }
        }

        best.and_then(|(_, idx)| lineup.slots.get(idx)).map(|slot| GoalDetail {
            player_id: slot.player_id.clone(),
            club_id: lineup.club_id.clone(),
        })
    }
}
