use crate::club::{PlayerGenerator, PlayerPositionType};
use crate::shared::{ClubId, PlayerId};
use crate::state::SimulationState;
use log::{debug, info};
use rand::Rng;

/// Academy levels per extra graduate.
const LEVELS_PER_GRADUATE: u8 = 7;

pub struct YouthIntake;

impl YouthIntake {
    pub fn intake_size(base: usize, youth_level: u8) -> usize {
        base + (youth_level / LEVELS_PER_GRADUATE) as usize
    }

    /// Season-start reveal of academy graduates for every club.
    pub fn reveal<R: Rng + ?Sized>(state: &mut SimulationState, rng: &mut R) -> Vec<PlayerId> {
        let clubs: Vec<ClubId> = state.clubs.iter().map(|c| c.id.clone()).collect();
        let mut revealed = Vec::new();

        for club_id in &clubs {
            revealed.extend(Self::reveal_for_club(state, club_id, rng));
        }

        info!("🎓 youth reveal: {} graduates across {} clubs", revealed.len(), clubs.len());

        revealed
    }

    fn reveal_for_club<R: Rng + ?Sized>(state: &mut SimulationState, club_id: &ClubId, rng: &mut R) -> Vec<PlayerId> {
        let Some(club) = state.club(club_id).cloned() else {
            return Vec::new();
        };

        let count = Self::intake_size(state.settings.youth_intake_base, club.youth_level);
        let mut revealed = Vec::with_capacity(count);

        for _ in 0..count {
            let nationality = state
                .youth_reveal
                .draw(&club.country_id, rng)
                .unwrap_or_else(|| club.country_id.clone());

            let locale = state
                .country(&nationality)
                .map(|c| c.names_locale_id.clone())
                .or_else(|| state.names_locale(&club).cloned());

            let id = state.next_player_id();
            let position = PlayerPositionType::random(rng);
            let season = state.season;

            let player = PlayerGenerator::new(&state.names).youth(id.clone(), &club, nationality, locale.as_ref(), season, position, rng);

            debug!("🎓 {}: {}", club.name, player);

            state.add_player(player);
            revealed.push(id);
        }

        revealed
    }
}
