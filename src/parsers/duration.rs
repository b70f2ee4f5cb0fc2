//! Relative duration tokens such as `5y`, `2m1w` or `1y2m10d`.
//!
//! A token is a sequence of `<digits><unit>` chunks. Recognized units are `y` (years),
//! `m` (months), `w` (weeks) and `d` (days); any other unit text is ignored. Years and
//! months take the last value given, weeks and days accumulate.
//!
//! Malformed tokens never surface as errors to the caller of [`resolve_duration`]: they
//! fall back to a point five years before the reference, whichever direction was asked
//! for. [`DateWindow`] builds the `(after, before)` pair used to filter history records.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};
use thiserror::Error;

/// Years subtracted from the reference when a token cannot be parsed
const FALLBACK_YEARS: i64 = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("time: bad [0-9]*")]
    Overflow,

    #[error("Expected a number at {0:?}")]
    MissingMagnitude(String),

    #[error("Missing unit after {0}")]
    MissingUnit(i64),

    #[error("Empty duration")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Year,
    Month,
    Week,
    Day,
}

impl DurationUnit {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "y" => Some(DurationUnit::Year),
            "m" => Some(DurationUnit::Month),
            "w" => Some(DurationUnit::Week),
            "d" => Some(DurationUnit::Day),
            _ => None,
        }
    }
}

/// Parsed duration token, in the order the chunks appeared
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DurationSpec {
    pub components: Vec<(i64, DurationUnit)>,
}

/// Net calendar offset described by a [`DurationSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarOffset {
    pub years: i64,
    pub months: i64,
    pub days: i64,
}

/// Consumes the leading `[0-9]*` from `s`.
///
/// Zero digits is not an error: `leading_int("abc")` is `(0, "abc")`. A value that does
/// not fit in an `i64` is [`DurationError::Overflow`].
pub fn leading_int(s: &str) -> Result<(i64, &str), DurationError> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: i64 = 0;
    for b in s[..digits].bytes() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(b - b'0')))
            .ok_or(DurationError::Overflow)?;
    }
    Ok((value, &s[digits..]))
}

fn is_number_char(c: char) -> bool {
    c == '.' || c.is_ascii_digit()
}

impl DurationSpec {
    /// Parse a token like `1y2m10d`
    pub fn parse(input: &str) -> Result<Self, DurationError> {
        if input.is_empty() {
            return Err(DurationError::Empty);
        }

        let mut components = Vec::new();
        let mut rest = input;

        while !rest.is_empty() {
            // The next character must be [0-9.]
            if !rest.starts_with(is_number_char) {
                return Err(DurationError::MissingMagnitude(rest.to_string()));
            }

            let (value, after_digits) = leading_int(rest)?;

            let unit_len = after_digits.find(is_number_char).unwrap_or(after_digits.len());
            if unit_len == 0 {
                return Err(DurationError::MissingUnit(value));
            }
            let (unit, remainder) = after_digits.split_at(unit_len);
            rest = remainder;

            if let Some(unit) = DurationUnit::from_token(unit) {
                components.push((value, unit));
            }
        }

        Ok(Self { components })
    }

    pub fn offset(&self) -> CalendarOffset {
        let mut offset = CalendarOffset::default();
        for &(value, unit) in &self.components {
            match unit {
                DurationUnit::Year => offset.years = value,
                DurationUnit::Month => offset.months = value,
                DurationUnit::Week => {
                    offset.days = offset.days.saturating_add(value.saturating_mul(7));
                }
                DurationUnit::Day => offset.days = offset.days.saturating_add(value),
            }
        }
        offset
    }
}

impl CalendarOffset {
    /// Shift `reference` by this offset. `None` when the result is out of range.
    ///
    /// Years, months and days are applied in one step on the local wall-clock date and
    /// out-of-range values roll forward, so one month back from March 31 is March 2 (via
    /// "February 31") rather than the last day of February.
    pub fn apply<Tz: TimeZone>(
        &self,
        reference: &DateTime<Tz>,
        direction: Direction,
    ) -> Option<DateTime<Tz>> {
        let sign = match direction {
            Direction::Forward => 1,
            Direction::Backward => -1,
        };
        let local = reference.naive_local();

        let month0 = i64::from(local.month0()).checked_add(self.months.checked_mul(sign)?)?;
        let year = i64::from(local.year())
            .checked_add(self.years.checked_mul(sign)?)?
            .checked_add(month0.div_euclid(12))?;
        let month = u32::try_from(month0.rem_euclid(12) + 1).ok()?;
        let first = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)?;

        let day_offset = i64::from(local.day() - 1).checked_add(self.days.checked_mul(sign)?)?;
        let date = if day_offset >= 0 {
            first.checked_add_days(Days::new(day_offset.unsigned_abs()))?
        } else {
            first.checked_sub_days(Days::new(day_offset.unsigned_abs()))?
        };

        reference.timezone().from_local_datetime(&date.and_time(local.time())).earliest()
    }
}

/// The date used whenever a duration token is malformed
pub fn fallback_date<Tz: TimeZone>(reference: &DateTime<Tz>) -> DateTime<Tz> {
    CalendarOffset { years: FALLBACK_YEARS, ..CalendarOffset::default() }
        .apply(reference, Direction::Backward)
        .unwrap_or_else(|| reference.clone())
}

/// Resolve a duration token against `reference`.
///
/// Falls back to five years before `reference` for any malformed token, independent of
/// `direction`.
pub fn resolve_duration<Tz: TimeZone>(
    spec: &str,
    reference: &DateTime<Tz>,
    direction: Direction,
) -> DateTime<Tz> {
    DurationSpec::parse(spec)
        .ok()
        .and_then(|parsed| parsed.offset().apply(reference, direction))
        .unwrap_or_else(|| fallback_date(reference))
}

/// Exclusive `(after, before)` bounds for record timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow<Tz: TimeZone> {
    pub after: DateTime<Tz>,
    pub before: DateTime<Tz>,
}

impl<Tz: TimeZone> DateWindow<Tz> {
    /// `after` is `from` back from `now`; `before` is `window` forward from `after`
    pub fn resolve(from: &str, window: &str, now: &DateTime<Tz>) -> Self {
        let after = resolve_duration(from, now, Direction::Backward);
        let before = resolve_duration(window, &after, Direction::Forward);
        Self { after, before }
    }

    pub fn contains(&self, timestamp: &DateTime<Tz>) -> bool {
        *timestamp > self.after && *timestamp < self.before
    }
}
