//! Period axes derived from a `{from, to}` Jalali date range.

use crate::domain::table::Period;
use serde::{Deserialize, Serialize};

/// Year used when a date range cannot be parsed.
pub const DEFAULT_YEAR: i32 = 1404;

const MAX_YEARS: usize = 10;
const MAX_MONTHS: usize = 36;

const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl JalaliDate {
    /// Parses `YYYY/MM/DD` (or `YYYY-MM-DD`), accepting Persian and
    /// Arabic-Indic digits.
    pub fn parse(s: &str) -> Option<Self> {
        let s = normalize_digits(s.trim());
        let mut parts = s.split(['/', '-']);
        let year: i32 = parts.next()?.trim().parse().ok()?;
        let month: u8 = parts.next()?.trim().parse().ok()?;
        let day: u8 = parts.next()?.trim().parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        if !(1..=9999).contains(&year) || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn format(&self) -> String {
        format!("{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// Raw date-range input as received from a caller. Parsing is deferred to the
/// axis accessors, which never fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

impl DateRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The whole of one Jalali year.
    pub fn year(year: i32) -> Self {
        Self::new(format!("{year:04}/01/01"), format!("{year:04}/12/29"))
    }

    fn bounds(&self) -> Option<(JalaliDate, JalaliDate)> {
        let from = JalaliDate::parse(&self.from)?;
        let to = JalaliDate::parse(&self.to)?;
        Some(if from <= to { (from, to) } else { (to, from) })
    }

    /// Ascending list of years covered by the range, at most the most recent
    /// ten. Falls back to `[DEFAULT_YEAR]`.
    pub fn years(&self) -> Vec<i32> {
        let Some((from, to)) = self.bounds() else {
            tracing::debug!(from = %self.from, to = %self.to, "unparsable date range; using default year");
            return vec![DEFAULT_YEAR];
        };
        let start = from.year.max(to.year - MAX_YEARS as i32 + 1);
        (start..=to.year).collect()
    }

    /// Ascending list of `(year, month)` periods covered by the range, at most
    /// the most recent 36. Falls back to the first month of `DEFAULT_YEAR`.
    pub fn months(&self) -> Vec<Period> {
        let Some((from, to)) = self.bounds() else {
            tracing::debug!(from = %self.from, to = %self.to, "unparsable date range; using default month");
            return vec![Period::month(DEFAULT_YEAR, 1)];
        };
        let first = month_index(from.year, from.month);
        let last = month_index(to.year, to.month);
        let first = first.max(last - MAX_MONTHS as i64 + 1);
        (first..=last)
            .map(|idx| {
                let year = idx.div_euclid(12) as i32;
                let month = idx.rem_euclid(12) as u8 + 1;
                Period::month(year, month)
            })
            .collect()
    }

    /// `from` with ASCII digits, or the raw string when it does not parse.
    pub fn normalized_from(&self) -> String {
        match JalaliDate::parse(&self.from) {
            Some(d) => d.format(),
            None => self.from.trim().to_string(),
        }
    }
}

fn month_index(year: i32, month: u8) -> i64 {
    year as i64 * 12 + (month as i64 - 1)
}

pub fn month_name(month: u8) -> &'static str {
    MONTH_NAMES
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("")
}

fn normalize_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
            '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
            _ => c,
        })
        .collect()
}
