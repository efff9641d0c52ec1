use chrono::prelude::*;
use chrono::Duration;
use chrono_tz::Tz;

/// Half open interval `[start, end)` covering one calendar day in some
/// time zone, expressed in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayWindow {
    /// The calendar day in `tz` which contains `instant`
    pub fn containing(instant: DateTime<Utc>, tz: &Tz) -> Self {
        let today = instant.with_timezone(tz).date_naive();
        let tomorrow = today.succ_opt().unwrap_or(NaiveDate::MAX);
        Self {
            start: start_of_day(today, tz),
            end: start_of_day(tomorrow, tz),
        }
    }

    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        self.start <= *instant && *instant < self.end
    }
}

/// First instant of `date` in `tz`. Days which skip midnight because of a
/// DST transition start at the first valid local time after it.
fn start_of_day(date: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    first_valid_local(midnight, tz).unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}

/// `local` in `tz`, or the first valid local time after it when `local`
/// falls into a DST gap.
fn first_valid_local(local: NaiveDateTime, tz: &Tz) -> Option<DateTime<Utc>> {
    (0..48)
        .map(|half_hours| local + Duration::minutes(30 * half_hours))
        .find_map(|local| tz.from_local_datetime(&local).earliest())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parses a client supplied event date.
///
/// Accepted formats:
/// - RFC 3339, e.g. `2024-06-01T09:30:00+02:00`
/// - local date time without offset, e.g. `2024-06-01T09:30` or `2024-06-01T09:30:00`
/// - local date, e.g. `2024-06-01`, which means the start of that day
///
/// Local values are interpreted in `tz`.
pub fn parse_event_date(datestr: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let datestr = datestr.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(datestr) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(datestr, format) {
            return tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }
    NaiveDate::parse_from_str(datestr, "%Y-%m-%d")
        .ok()
        .map(|date| start_of_day(date, tz))
}

/// The first instant strictly after `now` at which the wall clock in `tz`
/// shows `at`. On days where `at` is skipped by a DST transition the run
/// happens at the first valid local time after it.
pub fn next_daily_run(now: DateTime<Utc>, tz: &Tz, at: NaiveTime) -> DateTime<Utc> {
    let mut date = now.with_timezone(tz).date_naive();
    loop {
        if let Some(candidate) = first_valid_local(date.and_time(at), tz) {
            if candidate > now {
                return candidate;
            }
        }
        date = match date.succ_opt() {
            Some(next) => next,
            None => return now,
        };
    }
}

/// Human readable date, e.g. `June 1, 2024`
pub fn format_human_date(instant: &DateTime<Utc>, tz: &Tz) -> String {
    instant.with_timezone(tz).format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn day_window_in_utc() {
        let window = DayWindow::containing(utc(2024, 6, 1, 7, 0), &Tz::UTC);
        assert_eq!(window.start, utc(2024, 6, 1, 0, 0));
        assert_eq!(window.end, utc(2024, 6, 2, 0, 0));
        assert!(window.contains(&utc(2024, 6, 1, 0, 0)));
        assert!(window.contains(&utc(2024, 6, 1, 23, 59)));
        assert!(!window.contains(&utc(2024, 6, 2, 0, 0)));
        assert!(!window.contains(&utc(2024, 5, 31, 23, 59)));
    }

    #[test]
    fn day_window_follows_local_calendar_day() {
        let tz: Tz = "Europe/Oslo".parse().unwrap();
        // 23:30 UTC on May 31st is already June 1st in Oslo
        let window = DayWindow::containing(utc(2024, 5, 31, 23, 30), &tz);
        assert_eq!(window.start, utc(2024, 5, 31, 22, 0));
        assert_eq!(window.end, utc(2024, 6, 1, 22, 0));
    }

    #[test]
    fn day_window_is_short_on_dst_start() {
        let tz: Tz = "Europe/Oslo".parse().unwrap();
        let window = DayWindow::containing(utc(2024, 3, 31, 12, 0), &tz);
        assert_eq!(window.end - window.start, Duration::hours(23));
    }

    #[test]
    fn parses_event_dates() {
        let tz: Tz = "Europe/Oslo".parse().unwrap();
        assert_eq!(
            parse_event_date("2024-06-01", &Tz::UTC),
            Some(utc(2024, 6, 1, 0, 0))
        );
        assert_eq!(
            parse_event_date("2024-06-01", &tz),
            Some(utc(2024, 5, 31, 22, 0))
        );
        assert_eq!(
            parse_event_date("2024-06-01T09:30", &tz),
            Some(utc(2024, 6, 1, 7, 30))
        );
        assert_eq!(
            parse_event_date("2024-06-01T09:30:00Z", &tz),
            Some(utc(2024, 6, 1, 9, 30))
        );
        assert_eq!(
            parse_event_date(" 2024-06-01T09:30:00.000Z ", &tz),
            Some(utc(2024, 6, 1, 9, 30))
        );
    }

    #[test]
    fn rejects_invalid_event_dates() {
        for datestr in ["", "tomorrow", "2024-13-01", "2024-02-30", "01/06/2024"] {
            assert_eq!(parse_event_date(datestr, &Tz::UTC), None, "{}", datestr);
        }
    }

    #[test]
    fn next_daily_run_is_later_today_or_tomorrow() {
        let at = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        assert_eq!(
            next_daily_run(utc(2024, 6, 1, 6, 59), &Tz::UTC, at),
            utc(2024, 6, 1, 7, 0)
        );
        assert_eq!(
            next_daily_run(utc(2024, 6, 1, 7, 0), &Tz::UTC, at),
            utc(2024, 6, 2, 7, 0)
        );
        assert_eq!(
            next_daily_run(utc(2024, 6, 1, 18, 0), &Tz::UTC, at),
            utc(2024, 6, 2, 7, 0)
        );
    }

    #[test]
    fn next_daily_run_uses_local_wall_clock() {
        let tz: Tz = "Europe/Oslo".parse().unwrap();
        let at = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        // Summer time: 07:00 in Oslo is 05:00 UTC
        assert_eq!(next_daily_run(utc(2024, 6, 1, 4, 0), &tz, at), utc(2024, 6, 1, 5, 0));
        // Winter time: 07:00 in Oslo is 06:00 UTC
        assert_eq!(next_daily_run(utc(2024, 1, 1, 4, 0), &tz, at), utc(2024, 1, 1, 6, 0));
    }

    #[test]
    fn next_daily_run_moves_past_dst_gap() {
        let tz: Tz = "Europe/Oslo".parse().unwrap();
        // 02:30 does not exist in Oslo on March 31st 2024, clocks jump from 02:00 to 03:00
        let at = NaiveTime::from_hms_opt(2, 30, 0).unwrap();
        let run = next_daily_run(utc(2024, 3, 30, 12, 0), &tz, at);
        assert_eq!(run, utc(2024, 3, 31, 1, 0));
        assert!(DayWindow::containing(run, &tz).contains(&utc(2024, 3, 31, 12, 0)));
        // The day after is back to the regular wall clock time
        assert_eq!(next_daily_run(run, &tz, at), utc(2024, 4, 1, 0, 30));
    }

    #[test]
    fn formats_human_dates() {
        assert_eq!(format_human_date(&utc(2024, 6, 1, 0, 0), &Tz::UTC), "June 1, 2024");
        let tz: Tz = "America/New_York".parse().unwrap();
        assert_eq!(format_human_date(&utc(2024, 6, 1, 2, 0), &tz), "May 31, 2024");
    }
}
