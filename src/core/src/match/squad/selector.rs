use crate::club::{Player, PlayerFieldPositionGroup, PlayerPositionType};
use crate::r#match::MatchTacticType;
use crate::settings::LINEUP_SIZE;
use crate::shared::{ClubId, PlayerId};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineupSlot {
    pub player_id: PlayerId,
    pub slot_position: PlayerPositionType,
    pub natural_position: PlayerPositionType,

    pub rating: u8,
    /// Rating used for this match only.
    pub adjusted_rating: f32,

    pub out_of_position: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lineup {
    pub club_id: ClubId,
    pub tactic: MatchTacticType,
    pub slots: Vec<LineupSlot>,
}

impl Lineup {
    pub fn player_ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.slots.iter().map(|s| &s.player_id)
    }

    pub fn contains(&self, player_id: &PlayerId) -> bool {
        self.slots.iter().any(|s| &s.player_id == player_id)
    }

    pub fn is_complete(&self) -> bool {
        self.slots.len() == LINEUP_SIZE
    }

    pub fn average_rating(&self) -> f32 {
        if self.slots.is_empty() {
            return 0.0;
        }

        self.slots.iter().map(|s| s.adjusted_rating).sum::<f32>() / self.slots.len() as f32
    }

    /// Mean adjusted rating of the slots in `group`; the keeper line is the single
    /// goalkeeper slot. An empty line falls back to the lineup mean.
    pub fn line_rating(&self, group: PlayerFieldPositionGroup) -> f32 {
        let ratings: Vec<f32> = self
            .slots
            .iter()
            .filter(|s| s.slot_position.position_group() == group)
            .map(|s| s.adjusted_rating)
            .collect();

        if ratings.is_empty() {
            return self.average_rating();
        }

        ratings.iter().sum::<f32>() / ratings.len() as f32
    }

    pub fn out_of_position_count(&self) -> usize {
        self.slots.iter().filter(|s| s.out_of_position).count()
    }
}

pub struct LineupSelector;

impl LineupSelector {
    /// Two-pass selection over active players sorted by rating: natural-role
    /// matches first, then the best remaining players with `penalty` subtracted.
    pub fn select(
        club_id: &ClubId,
        tactic: MatchTacticType,
        players: &[&Player],
        penalty: f32,
    ) -> Lineup {
        let mut available: Vec<&Player> = players.iter().copied().filter(|p| p.is_active()).collect();

        available.sort_by(|a, b| b.rating.cmp(&a.rating).then_with(|| a.id.cmp(&b.id)));

        let positions = tactic.positions();

        let mut slots: Vec<Option<LineupSlot>> = vec![None; positions.len()];
        let mut used = vec![false; available.len()];

        for (slot_idx, &position) in positions.iter().enumerate() {
            let candidate = available
                .iter()
                .enumerate()
                .find(|(idx, p)| !used[*idx] && p.position == position);

            if let Some((idx, player)) = candidate {
                used[idx] = true;
                slots[slot_idx] = Some(Self::slot(player, position, 0.0));
            }
        }

        for (slot_idx, &position) in positions.iter().enumerate() {
            if slots[slot_idx].is_some() {
                continue;
            }

            let candidate = available.iter().enumerate().find(|(idx, _)| !used[*idx]);

            match candidate {
                Some((idx, player)) => {
                    used[idx] = true;

                    debug!(
                        "🔄 {}: {} plays out of position as {}",
                        club_id,
                        player.full_name,
                        position.get_short_name()
                    );

                    slots[slot_idx] = Some(Self::slot(player, position, penalty));
                }
                None => {
                    warn!(
                        "⚠️ {}: no player left for {} slot",
                        club_id,
                        position.get_short_name()
                    );
                }
            }
        }

        Lineup {
            club_id: club_id.clone(),
            tactic,
            slots: slots.into_iter().flatten().collect(),
        }
    }

    fn slot(player: &Player, position: PlayerPositionType, penalty: f32) -> LineupSlot {
        let out_of_position = player.position != position;
        let penalty = if out_of_position { penalty } else { 0.0 };

        LineupSlot {
            player_id: player.id.clone(),
            slot_position: position,
            natural_position: player.position,
            rating: player.rating,
            adjusted_rating: (player.rating as f32 - penalty).max(0.0),
            out_of_position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::PlayerBuilder;
    use crate::shared::FullName;

    fn player(id: &str, position: PlayerPositionType, rating: u8) -> Player {
        PlayerBuilder::new()
            .id(id)
            .full_name(FullName::parse(id))
            .country_id("north")
            .club_id("c")
            .position(position)
            .rating(rating)
            .birth_year(1998)
            .build()
            .unwrap()
    }

    fn full_squad() -> Vec<Player> {
        MatchTacticType::T442
            .positions()
            .iter()
            .enumerate()
            .map(|(idx, pos)| player(&format!("p{}", idx), *pos, 60 + idx as u8))
            .collect()
    }

    #[test]
    fn natural_roles_fill_every_slot() {
        let squad = full_squad();
        let refs: Vec<&Player> = squad.iter().collect();

        let lineup = LineupSelector::select(&ClubId::from("c"), MatchTacticType::T442, &refs, 10.0);

        assert!(lineup.is_complete());
        assert_eq!(lineup.out_of_position_count(), 0);
    }

    #[test]
    fn highest_rated_natural_player_wins_slot() {
        let mut squad = full_squad();
        squad.push(player("keeper2", PlayerPositionType::Goalkeeper, 90));
        let refs: Vec<&Player> = squad.iter().collect();

        let lineup = LineupSelector::select(&ClubId::from("c"), MatchTacticType::T442, &refs, 10.0);

        assert_eq!(lineup.slots[0].player_id, PlayerId::from("keeper2"));
        assert!(!lineup.contains(&PlayerId::from("p0")));
    }

    #[test]
    fn out_of_position_penalty_only_touches_match_copy() {
        let mut squad = full_squad();
        squad.retain(|p| p.position != PlayerPositionType::Goalkeeper);
        squad.push(player("extra", PlayerPositionType::Striker, 70));
        let refs: Vec<&Player> = squad.iter().collect();

        let lineup = LineupSelector::select(&ClubId::from("c"), MatchTacticType::T442, &refs, 10.0);

        let keeper = &lineup.slots[0];
        assert!(keeper.out_of_position);
        assert_eq!(keeper.adjusted_rating, keeper.rating as f32 - 10.0);
        assert!(squad.iter().all(|p| p.rating >= 60));
    }

    #[test]
    fn retired_players_are_never_selected() {
        let mut squad = full_squad();
        squad[0].retired = true;
        let refs: Vec<&Player> = squad.iter().collect();

        let lineup = LineupSelector::select(&ClubId::from("c"), MatchTacticType::T442, &refs, 10.0);

        assert_eq!(lineup.slots.len(), 10);
        assert!(!lineup.contains(&PlayerId::from("p0")));
    }

    #[test]
    fn empty_line_falls_back_to_mean() {
        let squad = vec![player("gk", PlayerPositionType::Goalkeeper, 50)];
        let refs: Vec<&Player> = squad.iter().collect();

        let lineup = LineupSelector::select(&ClubId::from("c"), MatchTacticType::T442, &refs, 10.0);

        assert_eq!(lineup.line_rating(PlayerFieldPositionGroup::Forward), 50.0);
    }
}
