use chrono::{NaiveTime, Timelike};

const MINUTES_PER_DAY: i32 = 24 * 60;

/// Parse a "HH:MM" wall-clock string
///
/// Returns `None` for anything that is not a valid 24-hour time; callers
/// treat that as "closed" rather than an error.
pub fn parse_wall_clock(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

#[inline]
fn minutes_of_day(t: NaiveTime) -> i32 {
    (t.hour() * 60 + t.minute()) as i32
}

/// Check whether a business with the given opening hours is open at `check`
///
/// All three times are compared as minutes-of-day on a common reference
/// day; the dates they came from are irrelevant. When the closing time is
/// numerically earlier than the opening time the business stays open
/// across midnight: the close rolls into the next day, and so does the
/// check time when it falls before opening.
///
/// The interval is strict-exclusive: being exactly at the opening or
/// closing instant counts as closed. Malformed hour strings also count
/// as closed.
#[inline]
pub fn is_open_at(open_hour: &str, close_hour: &str, check: NaiveTime) -> bool {
    let Some(open) = parse_wall_clock(open_hour) else {
        return false;
    };
    let Some(close) = parse_wall_clock(close_hour) else {
        return false;
    };

    let open_m = minutes_of_day(open);
    let mut close_m = minutes_of_day(close);
    let mut now_m = minutes_of_day(check);

    // Closing past midnight: push close (and a pre-opening check time)
    // into the next-day frame.
    if close_m < open_m {
        close_m += MINUTES_PER_DAY;
        if now_m < open_m {
            now_m += MINUTES_PER_DAY;
        }
    }

    now_m > open_m && now_m < close_m
}
