use crate::mock::period::{DateRange, JalaliDate};
use anyhow::Context;
use chrono::{DateTime, Datelike, NaiveDate, Utc};

// Iran Standard Time; no DST since 2022.
const TEHRAN_OFFSET_SECS: i32 = 3 * 3600 + 30 * 60;

const CUMULATIVE_GREGORIAN_DAYS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Converts a Gregorian date to the Jalali (Solar Hijri) calendar.
pub fn from_gregorian(date: NaiveDate) -> JalaliDate {
    let gy = date.year() as i64;
    let gm = date.month() as usize;
    let gd = date.day() as i64;

    let gy2 = if gm > 2 { gy + 1 } else { gy };
    let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100 + (gy2 + 399) / 400
        + gd
        + CUMULATIVE_GREGORIAN_DAYS[gm - 1];

    let mut jy = -1595 + 33 * (days / 12_053);
    days %= 12_053;
    jy += 4 * (days / 1_461);
    days %= 1_461;
    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let (jm, jd) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };

    JalaliDate {
        year: jy as i32,
        month: jm as u8,
        day: jd as u8,
    }
}

/// Today's Jalali date in Tehran.
pub fn today(now_utc: DateTime<Utc>) -> anyhow::Result<JalaliDate> {
    let tehran =
        chrono::FixedOffset::east_opt(TEHRAN_OFFSET_SECS).context("invalid Tehran offset")?;
    Ok(from_gregorian(now_utc.with_timezone(&tehran).date_naive()))
}

/// The whole of the current Jalali year, the default dashboard range.
pub fn current_year_range(now_utc: DateTime<Utc>) -> anyhow::Result<DateRange> {
    Ok(DateRange::year(today(now_utc)?.year))
}
