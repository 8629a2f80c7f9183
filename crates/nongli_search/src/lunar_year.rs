//! Lunar year compiler (GB/T 33661-2017 rules).
//!
//! A lunar year is assembled from two winter-solstice cycles:
//!
//! 1. The month containing the winter solstice is month 11. The solstice
//!    belongs to the new moon's month when both fall on the same Beijing
//!    date, otherwise to the month of the preceding new moon.
//! 2. The new moons from one month-11 start to the next give 12 or 13
//!    months. In a 13-month cycle the first month (after the opening
//!    month 11) with no zhongqi is leap and repeats the previous number.
//! 3. Year `Y` takes months 1–10 from the cycle ending at the solstice of
//!    `Y` and months 11–12 from the cycle starting there.
//!
//! Every containment test compares Beijing (UTC+8) civil dates, so an event
//! on the same date as a new moon falls in the month that new moon opens.

use nongli_time::{SolarDate, beijing_date};
use tracing::debug;

use crate::error::SearchError;
use crate::lunar_year_types::{LunarMonthRaw, LunarYearRaw};
use crate::new_moon::{NewMoon, new_moon_on_or_after, new_moon_on_or_before};
use crate::solar_term::solar_term_jde;
use crate::solar_term_types::{ALL_SOLAR_TERMS, SolarTerm};

/// First lunar year the compiler is validated for.
pub const FIRST_YEAR: i32 = 1900;
/// Last lunar year the compiler is validated for.
pub const LAST_YEAR: i32 = 2100;

/// Slack when comparing instants that should coincide.
const INSTANT_EPSILON: f64 = 1e-9;
/// A walked new moon further than this past the cycle end is snapped back.
const SNAP_EPSILON: f64 = 1e-6;
/// Guard on the new-moon walk inside one cycle.
const MAX_CYCLE_MONTHS: usize = 20;

/// New moon opening the month that contains the solstice at `solstice_jde`.
pub fn month_eleven_start(solstice_jde: f64) -> NewMoon {
    let after = new_moon_on_or_after(solstice_jde);
    if beijing_date(after.jde) == beijing_date(solstice_jde) {
        after
    } else {
        new_moon_on_or_before(solstice_jde)
    }
}

/// Zhongqi instants in `[from, to)`, ascending.
fn zhongqi_between(from: f64, to: f64) -> Result<Vec<f64>, SearchError> {
    let (y0, y1) = (beijing_date(from).year(), beijing_date(to).year());
    let mut found = Vec::with_capacity(14);
    for year in (y0.min(y1) - 1)..=(y0.max(y1) + 1) {
        for term in ALL_SOLAR_TERMS.into_iter().filter(|t| t.is_zhongqi()) {
            let jde = solar_term_jde(term, year)?;
            if jde >= from - INSTANT_EPSILON && jde < to - INSTANT_EPSILON {
                found.push(jde);
            }
        }
    }
    found.sort_by(f64::total_cmp);
    Ok(found)
}

/// Conjunctions from the month-11 start after the `year - 1` solstice up to
/// and including the month-11 start after the `year` solstice.
fn cycle_boundaries(year: i32, from: f64, to: f64) -> Result<Vec<f64>, SearchError> {
    let mut starts = vec![from];
    while let Some(&last) = starts.last() {
        if last >= to - INSTANT_EPSILON || starts.len() > MAX_CYCLE_MONTHS {
            break;
        }
        starts.push(new_moon_on_or_after(last + 1.0).jde);
    }
    let last = starts.last_mut().ok_or(SearchError::CycleOverrun { year })?;
    if *last < to - INSTANT_EPSILON {
        return Err(SearchError::CycleOverrun { year });
    }
    if *last > to + SNAP_EPSILON {
        *last = to;
    }
    Ok(starts)
}

/// Months of the solstice cycle ending at the winter solstice of `year`,
/// opening month 11 first.
pub fn compile_solstice_cycle(year: i32) -> Result<Vec<LunarMonthRaw>, SearchError> {
    let prev_solstice = solar_term_jde(SolarTerm::Dongzhi, year - 1)?;
    let solstice = solar_term_jde(SolarTerm::Dongzhi, year)?;
    let from = month_eleven_start(prev_solstice).jde;
    let to = month_eleven_start(solstice).jde;
    if from >= to {
        return Err(SearchError::InvalidLayout {
            year,
            reason: "month-11 starts out of order",
        });
    }

    let starts = cycle_boundaries(year, from, to)?;
    let dates: Vec<SolarDate> = starts.iter().map(|&j| beijing_date(j)).collect();
    let month_count = starts.len() - 1;
    if month_count != 12 && month_count != 13 {
        return Err(SearchError::InvalidLayout {
            year,
            reason: "solstice cycle must hold 12 or 13 months",
        });
    }

    let mut leap_index = None;
    if month_count == 13 {
        let zhongqi: Vec<SolarDate> = zhongqi_between(from, to)?
            .into_iter()
            .map(beijing_date)
            .collect();
        // Index 0 is month 11 itself and never leap.
        leap_index = (1..month_count).find(|&i| {
            !zhongqi
                .iter()
                .any(|zq| dates[i] <= *zq && *zq < dates[i + 1])
        });
        if leap_index.is_none() {
            return Err(SearchError::InvalidLayout {
                year,
                reason: "13-month cycle without a month lacking zhongqi",
            });
        }
    }

    let mut months: Vec<LunarMonthRaw> = Vec::with_capacity(month_count);
    for i in 0..month_count {
        let is_leap = leap_index == Some(i);
        let month = match months.last() {
            None => 11,
            Some(prev) if is_leap => prev.month,
            Some(prev) => prev.month % 12 + 1,
        };
        let days = dates[i].days_until(&dates[i + 1]);
        if days != 29 && days != 30 {
            return Err(SearchError::InvalidMonthLength { year, days });
        }
        months.push(LunarMonthRaw {
            month,
            is_leap,
            day_count: days as u32,
            start_jde: starts[i],
            start_date: dates[i],
        });
    }
    Ok(months)
}

/// Compile lunar year `year` into its month layout.
#[tracing::instrument(level = "debug")]
pub fn compile_lunar_year(year: i32) -> Result<LunarYearRaw, SearchError> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Err(SearchError::OutOfRange(year));
    }
    let opening = compile_solstice_cycle(year)?;
    let closing = compile_solstice_cycle(year + 1)?;

    let months: Vec<LunarMonthRaw> = opening
        .into_iter()
        .filter(|m| (1..=10).contains(&m.month))
        .chain(closing.into_iter().filter(|m| m.month >= 11))
        .collect();

    let first = months.first().ok_or(SearchError::InvalidLayout {
        year,
        reason: "no months compiled",
    })?;
    if first.month != 1 || first.is_leap {
        return Err(SearchError::InvalidLayout {
            year,
            reason: "year must open with regular month 1",
        });
    }
    if months.iter().filter(|m| !m.is_leap).count() != 12 {
        return Err(SearchError::InvalidLayout {
            year,
            reason: "year must hold twelve regular months",
        });
    }
    if months.windows(2).any(|w| w[0].end_date() != w[1].start_date) {
        return Err(SearchError::InvalidLayout {
            year,
            reason: "months are not contiguous",
        });
    }

    let chinese_new_year = first.start_date;
    let leap_month = months.iter().find(|m| m.is_leap).map(|m| m.month);
    debug!(year, %chinese_new_year, ?leap_month, "compiled lunar year");
    Ok(LunarYearRaw {
        year,
        leap_month,
        chinese_new_year,
        months,
    })
}
