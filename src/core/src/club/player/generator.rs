use crate::club::{Club, MAX_RATING, Player, PlayerPositionType};
use crate::shared::{CountryId, FullName, NamesLocaleId, PlayerId};
use crate::state::{NameKind, PeopleNameTable};
use crate::utils::IntegerUtils;
use rand::Rng;

const YOUTH_MIN_AGE: i32 = 16;
const YOUTH_MAX_AGE: i32 = 18;

const BACKFILL_MIN_AGE: i32 = 19;
const BACKFILL_MAX_AGE: i32 = 31;

const RATING_SPREAD: i32 = 6;

pub struct PlayerGenerator<'a> {
    names: &'a PeopleNameTable,
}

impl<'a> PlayerGenerator<'a> {
    pub fn new(names: &'a PeopleNameTable) -> Self {
        PlayerGenerator { names }
    }

    /// Academy graduate aged 16–18. Quality follows the club's youth level.
    #[allow(clippy::too_many_arguments)]
    pub fn youth<R: Rng + ?Sized>(
        &self,
        id: PlayerId,
        club: &Club,
        nationality: CountryId,
        locale: Option<&NamesLocaleId>,
        season: u16,
        position: PlayerPositionType,
        rng: &mut R,
    ) -> Player {
        let level = club.youth_level as f32;

        let base = (25.0 + 1.5 * level).round() as i32;
        let rating = Self::clamp_rating(base + IntegerUtils::random(rng, -RATING_SPREAD, RATING_SPREAD));

        let growth = IntegerUtils::random(rng, 10, 20 + club.youth_level as i32);
        let potential = Self::clamp_rating(rating as i32 + growth).max(rating);

        let age = IntegerUtils::random(rng, YOUTH_MIN_AGE, YOUTH_MAX_AGE);

        Player {
            full_name: self.full_name(locale, &id, rng),
            id,
            country_id: nationality,
            club_id: club.id.clone(),
            position,
            rating,
            potential,
            birth_year: season.saturating_sub(age as u16),
            retired: false,
            youth: true,
        }
    }

    /// Synthetic squad filler rated around the club's display rating.
    pub fn backfill<R: Rng + ?Sized>(
        &self,
        id: PlayerId,
        club: &Club,
        locale: Option<&NamesLocaleId>,
        season: u16,
        position: PlayerPositionType,
        rng: &mut R,
    ) -> Player {
        let rating = Self::clamp_rating(
            club.rating as i32 + IntegerUtils::random(rng, -RATING_SPREAD, RATING_SPREAD),
        );
        let potential = Self::clamp_rating(rating as i32 + IntegerUtils::random(rng, 0, 8));

        let age = IntegerUtils::random(rng, BACKFILL_MIN_AGE, BACKFILL_MAX_AGE);

        Player {
            full_name: self.full_name(locale, &id, rng),
            id,
            country_id: club.country_id.clone(),
            club_id: club.id.clone(),
            position,
            rating,
            potential,
            birth_year: season.saturating_sub(age as u16),
            retired: false,
            youth: false,
        }
    }

    fn full_name<R: Rng + ?Sized>(
        &self,
        locale: Option<&NamesLocaleId>,
        id: &PlayerId,
        rng: &mut R,
    ) -> FullName {
        let picked = locale.and_then(|locale| {
            let first = self.names.pick(locale, NameKind::First, rng)?;
            let last = self.names.pick(locale, NameKind::Last, rng)?;
            Some(FullName::new(first.to_string(), last.to_string()))
        });

        picked.unwrap_or_else(|| FullName::new(String::from("Player"), id.to_string()))
    }

    fn clamp_rating(value: i32) -> u8 {
        value.clamp(1, MAX_RATING as i32) as u8
    }
}
