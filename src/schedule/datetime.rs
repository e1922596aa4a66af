use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Date layouts seen in league schedules; month-first when ambiguous.
/// Two-digit years go first, otherwise `%Y` reads `6/1/24` as year 24.
const DATE_FORMATS: &[&str] = &[
    "%m/%d/%y",
    "%m/%d/%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%a, %b %d, %Y",
    "%A, %B %d, %Y",
];

const TIME_FORMATS: &[&str] = &[
    "%H:%M",
    "%H:%M:%S",
    "%I:%M %p",
    "%I:%M:%S %p",
    "%I:%M%p",
];

/// Hours before this are afternoon/evening games written without a PM marker.
const FIRST_MORNING_HOUR: u32 = 8;

/// Fixed game slot length.
pub const GAME_LENGTH_HOURS: i64 = 2;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
}

/// `2:00` means 14:00; nobody plays before eight in the morning.
pub fn normalize_start(time: NaiveTime) -> NaiveTime {
    if time.hour() < FIRST_MORNING_HOUR {
        time + Duration::hours(12)
    } else {
        time
    }
}

pub fn game_end(start: NaiveDateTime) -> NaiveDateTime {
    start + Duration::hours(GAME_LENGTH_HOURS)
}

/// US short date, no padding: `6/1/2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// 24-hour clock, unpadded hour: `9:05`, `14:00`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        let june_first = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        for s in [
            "06/01/2024",
            "6/1/2024",
            "6/1/24",
            "2024-06-01",
            "2024/06/01",
            "Jun 1, 2024",
            "June 1, 2024",
            "Sat, Jun 1, 2024",
            "Saturday, June 1, 2024",
        ] {
            assert_eq!(parse_date(s), Some(june_first), "{}", s);
        }
        assert_eq!(parse_date("13/45/2024"), None);
        assert_eq!(parse_date("soon"), None);
    }

    #[test]
    fn test_parse_time_formats() {
        assert_eq!(parse_time("2:00"), Some(hm(2, 0)));
        assert_eq!(parse_time("18:30"), Some(hm(18, 30)));
        assert_eq!(parse_time("09:15:00"), Some(hm(9, 15)));
        assert_eq!(parse_time("6:45 PM"), Some(hm(18, 45)));
        assert_eq!(parse_time("6:45PM"), Some(hm(18, 45)));
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("noon"), None);
    }

    #[test]
    fn test_normalize_start() {
        assert_eq!(normalize_start(hm(2, 0)), hm(14, 0));
        assert_eq!(normalize_start(hm(7, 59)), hm(19, 59));
        assert_eq!(normalize_start(hm(0, 30)), hm(12, 30));
        assert_eq!(normalize_start(hm(8, 0)), hm(8, 0));
        assert_eq!(normalize_start(hm(18, 0)), hm(18, 0));
    }

    #[test]
    fn test_game_end_rolls_past_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let end = game_end(date.and_time(hm(23, 0)));
        assert_eq!(format_date(end.date()), "7/1/2024");
        assert_eq!(format_time(end.time()), "1:00");
    }

    #[test]
    fn test_formatting() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 9).unwrap();
        assert_eq!(format_date(date), "11/9/2024");
        assert_eq!(format_time(hm(9, 5)), "9:05");
        assert_eq!(format_time(hm(20, 0)), "20:00");
    }
}
