use chrono::prelude::*;

/// Parses a date string in `YYYY-MM-DD` format
pub fn parse_date(datestr: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(datestr, "%Y-%m-%d").map_err(|_| anyhow::Error::msg(datestr.to_string()))
}

/// Parses a time string in `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff` format
pub fn parse_time(timestr: &str) -> anyhow::Result<NaiveTime> {
    let formats = vec!["%H:%M", "%H:%M:%S", "%H:%M:%S%.f"];
    for format in &formats {
        if let Ok(time) = NaiveTime::parse_from_str(timestr, format) {
            return Ok(time);
        }
    }
    Err(anyhow::Error::msg(timestr.to_string()))
}

/// Combines a date and a time into a single UTC timestamp in millis.
/// Naive values are read as UTC.
pub fn combine_date_time(date: NaiveDate, time: NaiveTime) -> Option<i64> {
    Utc.from_local_datetime(&date.and_time(time))
        .single()
        .map(|datetime| datetime.timestamp_millis())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_accepts_valid_dates() {
        let valid_dates = vec!["2030-01-05", "2025-12-31", "2032-02-29", "2030-7-1"];
        for date in &valid_dates {
            assert!(parse_date(date).is_ok());
        }
    }

    #[test]
    fn it_rejects_invalid_dates() {
        let invalid_dates = vec![
            "2030-13-01",
            "2030-02-30",
            "2030-01-32",
            "05-01-2030",
            "2030/01/05",
            "tomorrow",
            "",
        ];
        for date in &invalid_dates {
            assert!(parse_date(date).is_err());
        }
    }

    #[test]
    fn it_accepts_valid_times() {
        let valid_times = vec!["09:00", "23:59", "09:00:30", "09:00:30.250"];
        for time in &valid_times {
            assert!(parse_time(time).is_ok());
        }
    }

    #[test]
    fn it_rejects_invalid_times() {
        let invalid_times = vec!["24:00", "09:60", "09-30", "9h30", "noon", ""];
        for time in &invalid_times {
            assert!(parse_time(time).is_err());
        }
    }

    #[test]
    fn it_combines_date_and_time_into_utc_millis() {
        let date = parse_date("2030-01-05").unwrap();
        let time = parse_time("09:30").unwrap();

        let expected = Utc
            .with_ymd_and_hms(2030, 1, 5, 9, 30, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(combine_date_time(date, time), Some(expected));
    }
}
