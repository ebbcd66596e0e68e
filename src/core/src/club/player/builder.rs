use crate::club::{MAX_RATING, Player, PlayerPositionType};
use crate::shared::{ClubId, CountryId, FullName, PlayerId};

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<PlayerId>,
    full_name: Option<FullName>,
    country_id: Option<CountryId>,
    club_id: Option<ClubId>,
    position: Option<PlayerPositionType>,
    rating: Option<u8>,
    potential: Option<u8>,
    birth_year: Option<u16>,
    retired: bool,
    youth: bool,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<PlayerId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn full_name(mut self, full_name: FullName) -> Self {
        self.full_name = Some(full_name);
        self
    }

    pub fn country_id(mut self, country_id: impl Into<CountryId>) -> Self {
        self.country_id = Some(country_id.into());
        self
    }

    pub fn club_id(mut self, club_id: impl Into<ClubId>) -> Self {
        self.club_id = Some(club_id.into());
        self
    }

    pub fn position(mut self, position: PlayerPositionType) -> Self {
        self.position = Some(position);
        self
    }

    pub fn rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn potential(mut self, potential: u8) -> Self {
        self.potential = Some(potential);
        self
    }

    pub fn birth_year(mut self, birth_year: u16) -> Self {
        self.birth_year = Some(birth_year);
        self
    }

    pub fn retired(mut self, retired: bool) -> Self {
        self.retired = retired;
        self
    }

    pub fn youth(mut self, youth: bool) -> Self {
        self.youth = youth;
        self
    }

    pub fn build(self) -> Result<Player, String> {
        let rating = self.rating.ok_or("rating is required")?.clamp(1, MAX_RATING);
        let potential = self.potential.unwrap_or(rating).clamp(rating, MAX_RATING);

        Ok(Player {
            id: self.id.ok_or("id is required")?,
            full_name: self.full_name.ok_or("full_name is required")?,
            country_id: self.country_id.ok_or("country_id is required")?,
            club_id: self.club_id.ok_or("club_id is required")?,
            position: self.position.ok_or("position is required")?,
            rating,
            potential,
            birth_year: self.birth_year.ok_or("birth_year is required")?,
            retired: self.retired,
            youth: self.youth,
        })
    }
}
