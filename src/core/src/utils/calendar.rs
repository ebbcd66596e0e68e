use chrono::{Days, NaiveDate};

const SEASON_START_MONTH: u32 = 7;

/// Every season opens on 1 July of its year; stage weeks count from there.
pub struct SeasonCalendar;

impl SeasonCalendar {
    pub fn season_start(season: u16) -> NaiveDate {
        NaiveDate::from_ymd_opt(season as i32, SEASON_START_MONTH, 1).unwrap_or_default()
    }

    /// Date of round `round` (1-based) of a stage scheduled at `week`.
    pub fn round_date(season: u16, week: u16, round: u32) -> NaiveDate {
        let weeks = week as u64 + round.saturating_sub(1) as u64;
        let start = Self::season_start(season);

        start.checked_add_days(Days::new(weeks * 7)).unwrap_or(start)
    }

    /// The between-seasons transfer window opens when the next season starts.
    pub fn transfer_window(season: u16) -> NaiveDate {
        Self::season_start(season.saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn rounds_are_one_week_apart() {
        let first = SeasonCalendar::round_date(2024, 2, 1);
        let second = SeasonCalendar::round_date(2024, 2, 2);

        assert_eq!((second - first).num_days(), 7);
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
    }

    #[test]
    fn transfer_window_is_next_july() {
        let window = SeasonCalendar::transfer_window(2024);
        assert_eq!(window.year(), 2025);
        assert_eq!(window.month(), 7);
    }
}
