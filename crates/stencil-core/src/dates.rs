//! Free-text date expressions ("last year", "in 3 days") resolved against an
//! injectable clock, so rendered output can be pinned in tests.

use chrono::{DateTime, Duration, Local, Months, NaiveDate, NaiveDateTime, TimeZone};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Parse a free-text date expression relative to `now`. Returns `None` for
/// anything unrecognized, including the empty string.
pub fn parse_expression(expression: &str, now: DateTime<Local>) -> Option<DateTime<Local>> {
    let expr = expression.trim().to_lowercase();
    if expr.is_empty() {
        return None;
    }

    match expr.as_str() {
        "now" | "today" => return Some(now),
        "yesterday" => return now.checked_sub_signed(Duration::days(1)),
        "tomorrow" => return now.checked_add_signed(Duration::days(1)),
        _ => {}
    }

    let words: Vec<&str> = expr.split_whitespace().collect();
    match words.as_slice() {
        ["last", unit] => shift(now, -1, unit),
        ["next", unit] => shift(now, 1, unit),
        ["in", count, unit] => shift(now, count.parse().ok()?, unit),
        [count, unit, "ago"] => shift(now, -count.parse::<i64>().ok()?, unit),
        _ => parse_absolute(&expr),
    }
}

fn shift(now: DateTime<Local>, amount: i64, unit: &str) -> Option<DateTime<Local>> {
    let unit = unit.strip_suffix('s').unwrap_or(unit);
    match unit {
        "minute" => now.checked_add_signed(Duration::minutes(amount)),
        "hour" => now.checked_add_signed(Duration::hours(amount)),
        "day" => now.checked_add_signed(Duration::days(amount)),
        "week" => now.checked_add_signed(Duration::weeks(amount)),
        "month" => shift_months(now, amount),
        "year" => shift_months(now, amount.checked_mul(12)?),
        _ => None,
    }
}

// Calendar-aware month arithmetic; Duration cannot express "one month".
fn shift_months(now: DateTime<Local>, amount: i64) -> Option<DateTime<Local>> {
    let months = Months::new(u32::try_from(amount.unsigned_abs()).ok()?);
    if amount < 0 {
        now.checked_sub_months(months)
    } else {
        now.checked_add_months(months)
    }
}

fn parse_absolute(expr: &str) -> Option<DateTime<Local>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(expr) {
        return Some(instant.with_timezone(&Local));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(expr, format) {
            return Local.from_local_datetime(&naive).single();
        }
    }

    let date = NaiveDate::parse_from_str(expr, "%Y-%m-%d").ok()?;
    Local.from_local_datetime(&date.and_hms_opt(0, 0, 0)?).single()
}
