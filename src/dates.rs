use chrono::{Duration, Local, NaiveDate};

/// Source of "today" for the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// Local calendar date of the host.
    System,
    /// Pinned date, used by `DAILY_TASKS_TODAY`.
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }

    pub fn tomorrow(&self) -> NaiveDate {
        self.today() + Duration::days(1)
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_tomorrow_crosses_month_end() {
        let clock = Clock::Fixed(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
        assert_eq!(date_key(clock.today()), "2026-01-31");
        assert_eq!(date_key(clock.tomorrow()), "2026-02-01");
    }

    #[test]
    fn parse_date_key_accepts_iso_and_rejects_garbage() {
        assert_eq!(
            parse_date_key(" 2026-03-09 "),
            NaiveDate::from_ymd_opt(2026, 3, 9)
        );
        assert_eq!(parse_date_key(""), None);
        assert_eq!(parse_date_key("2026-13-01"), None);
        assert_eq!(parse_date_key("tomorrow"), None);
    }
}
