use std::fmt;

use crate::decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemporalKind {
    Date,
    Time,
    Month,
    DateTimeLocal,
}

impl TemporalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::Month => "month",
            Self::DateTimeLocal => "datetime-local",
        }
    }

    /// Parses `raw` with this kind's grammar.
    pub fn parse(self, raw: &str) -> Option<TemporalValue> {
        let position = match self {
            Self::Date => {
                let (year, month, day) = parse_date_components(raw)?;
                days_from_civil(year, month, day)
            }
            Self::Time => {
                let (hour, minute, second) = parse_time_components(raw)?;
                seconds_of_day(hour, minute, second)
            }
            Self::Month => {
                let (year, month) = parse_month_components(raw)?;
                (year - 1970) * 12 + i64::from(month) - 1
            }
            Self::DateTimeLocal => {
                let (date, time) = raw.split_once('T')?;
                let (year, month, day) = parse_date_components(date)?;
                let (hour, minute) = parse_hour_minute(time)?;
                days_from_civil(year, month, day) * 86_400 + seconds_of_day(hour, minute, 0)
            }
        };
        Some(TemporalValue {
            kind: self,
            position,
        })
    }
}

impl fmt::Display for TemporalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed temporal value, placed on its kind's step axis.
///
/// The axis unit is what the `step` attribute counts in: days since
/// 1970-01-01 for dates, months since 1970-01 for months, seconds since
/// midnight for times and seconds since 1970-01-01T00:00 for local
/// date-times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemporalValue {
    kind: TemporalKind,
    position: i64,
}

impl TemporalValue {
    pub fn kind(&self) -> TemporalKind {
        self.kind
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn to_decimal(&self) -> Decimal {
        Decimal::from_integer(self.position)
    }
}

fn parse_fixed_digits(raw: &str, len: usize) -> Option<u32> {
    if raw.len() != len || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn parse_year(raw: &str) -> Option<i64> {
    let year = parse_fixed_digits(raw, 4)?;
    (year >= 1).then_some(i64::from(year))
}

fn parse_month_components(raw: &str) -> Option<(i64, u32)> {
    let (year, month) = raw.split_once('-')?;
    let year = parse_year(year)?;
    let month = parse_fixed_digits(month, 2)?;
    (1..=12).contains(&month).then_some((year, month))
}

fn parse_date_components(raw: &str) -> Option<(i64, u32, u32)> {
    let (year_month, day) = raw.rsplit_once('-')?;
    let (year, month) = parse_month_components(year_month)?;
    let day = parse_fixed_digits(day, 2)?;
    (1..=days_in_month(year, month))
        .contains(&day)
        .then_some((year, month, day))
}

fn parse_hour_minute(raw: &str) -> Option<(u32, u32)> {
    let (hour, minute) = raw.split_once(':')?;
    let hour = parse_fixed_digits(hour, 2)?;
    let minute = parse_fixed_digits(minute, 2)?;
    (hour < 24 && minute < 60).then_some((hour, minute))
}

fn parse_time_components(raw: &str) -> Option<(u32, u32, u32)> {
    match raw.len() {
        5 => {
            let (hour, minute) = parse_hour_minute(raw)?;
            Some((hour, minute, 0))
        }
        8 => {
            let (hour_minute, second) = raw.rsplit_once(':')?;
            let (hour, minute) = parse_hour_minute(hour_minute)?;
            let second = parse_fixed_digits(second, 2)?;
            (second < 60).then_some((hour, minute, second))
        }
        _ => None,
    }
}

fn seconds_of_day(hour: u32, minute: u32, second: u32) -> i64 {
    i64::from(hour) * 3_600 + i64::from(minute) * 60 + i64::from(second)
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days between 1970-01-01 and the given proleptic Gregorian date.
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let month = i64::from(month);
    let month_index = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * month_index + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}
