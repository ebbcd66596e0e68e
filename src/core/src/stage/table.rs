use crate::r#match::MatchResult;
use crate::shared::ClubId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub club_id: ClubId,
    pub played: u32,
    pub win: u32,
    pub draw: u32,
    pub lost: u32,
    pub goal_scored: i32,
    pub goal_concerned: i32,
    pub points: u32,
}

impl StandingsRow {
    pub fn new(club_id: ClubId) -> Self {
        StandingsRow {
            club_id,
            played: 0,
            win: 0,
            draw: 0,
            lost: 0,
            goal_scored: 0,
            goal_concerned: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i32 {
        self.goal_scored - self.goal_concerned
    }

    fn record(&mut self, scored: u8, concerned: u8) {
        self.played += 1;
        self.goal_scored += scored as i32;
        self.goal_concerned += concerned as i32;

        match scored.cmp(&concerned) {
            Ordering::Greater => {
                self.win += 1;
                self.points += 3;
            }
            Ordering::Equal => {
                self.draw += 1;
                self.points += 1;
            }
            Ordering::Less => self.lost += 1,
        }
    }
}

/// Points, goal difference, goals scored (all descending), then club id.
pub fn standings_cmp(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    ranking_cmp(a, b).then_with(|| a.club_id.cmp(&b.club_id))
}

/// The sporting tuple alone, without the id tie-break.
pub fn ranking_cmp(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goal_scored.cmp(&a.goal_scored))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandingsTable {
    pub rows: Vec<StandingsRow>,
}

impl StandingsTable {
    pub fn new(clubs: &[ClubId]) -> Self {
        let mut table = StandingsTable {
            rows: clubs.iter().cloned().map(StandingsRow::new).collect(),
        };

        table.sort();
        table
    }

    pub fn update(&mut self, result: &MatchResult) {
        if let Some(row) = self.row_mut(&result.home_club) {
            row.record(result.score.home, result.score.away);
        }

        if let Some(row) = self.row_mut(&result.away_club) {
            row.record(result.score.away, result.score.home);
        }
    }

    pub fn sort(&mut self) {
        self.rows.sort_by(standings_cmp);
    }

    pub fn row(&self, club: &ClubId) -> Option<&StandingsRow> {
        self.rows.iter().find(|r| &r.club_id == club)
    }

    fn row_mut(&mut self, club: &ClubId) -> Option<&mut StandingsRow> {
        self.rows.iter_mut().find(|r| &r.club_id == club)
    }

    /// 1-based rank.
    pub fn position(&self, club: &ClubId) -> Option<usize> {
        self.rows.iter().position(|r| &r.club_id == club).map(|idx| idx + 1)
    }

    /// Club at 1-based `rank`.
    pub fn club_at(&self, rank: usize) -> Option<&ClubId> {
        rank.checked_sub(1)
            .and_then(|idx| self.rows.get(idx))
            .map(|r| &r.club_id)
    }

    pub fn clubs(&self) -> impl Iterator<Item = &ClubId> {
        self.rows.iter().map(|r| &r.club_id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::Score;

    fn result(home: &str, away: &str, home_goals: u8, away_goals: u8) -> MatchResult {
        MatchResult {
            home_club: ClubId::from(home),
            away_club: ClubId::from(away),
            score: Score::new(home_goals, away_goals),
            home_xg: 1.0,
            away_xg: 1.0,
            scorers: Vec::new(),
            home_players: Vec::new(),
            away_players: Vec::new(),
        }
    }

    fn table() -> StandingsTable {
        StandingsTable::new(&[ClubId::from("a"), ClubId::from("b"), ClubId::from("c")])
    }

    #[test]
    fn points_follow_results() {
        let mut table = table();

        table.update(&result("a", "b", 2, 0));
        table.update(&result("b", "c", 1, 1));
        table.sort();

        let a = table.row(&ClubId::from("a")).unwrap();
        assert_eq!((a.played, a.win, a.points), (1, 1, 3));

        let b = table.row(&ClubId::from("b")).unwrap();
        assert_eq!((b.played, b.draw, b.lost, b.points), (2, 1, 1, 1));
        assert_eq!(b.goal_difference(), -2);

        assert_eq!(table.club_at(1), Some(&ClubId::from("a")));
        assert_eq!(table.position(&ClubId::from("c")), Some(2));
    }

    #[test]
    fn goal_difference_then_goals_scored_break_ties() {
        let mut table = table();

        table.update(&result("a", "c", 3, 1));
        table.update(&result("b", "c", 2, 0));
        table.sort();

        assert_eq!(table.club_at(1), Some(&ClubId::from("a")));
        assert_eq!(table.club_at(2), Some(&ClubId::from("b")));
    }

    #[test]
    fn long_leagues_keep_counting_past_u8() {
        use crate::stage::round_robin;

        let clubs: Vec<ClubId> = (0..24).map(|idx| ClubId::from(format!("c{:02}", idx).as_str())).collect();
        let mut table = StandingsTable::new(&clubs);

        for fixture in round_robin(&clubs, 4, None) {
            let (home_goals, away_goals) = if fixture.away.as_str() == "c00" { (0, 1) } else { (1, 0) };
            table.update(&result(fixture.home.as_str(), fixture.away.as_str(), home_goals, away_goals));
        }
        table.sort();

        let leader = table.row(&ClubId::from("c00")).unwrap();
        assert_eq!(leader.played, 92);
        assert_eq!(leader.win, 92);
        assert_eq!(leader.points, 276);
        assert_eq!(table.club_at(1), Some(&ClubId::from("c00")));
    }

    #[test]
    fn identical_records_fall_back_to_club_id() {
        let table = StandingsTable::new(&[ClubId::from("z"), ClubId::from("m")]);
        assert_eq!(table.club_at(1), Some(&ClubId::from("m")));
        assert_eq!(table.club_at(0), None);
    }
}
