//! Gregorian ↔ Chinese calendar conversion over decoded years.

use nongli_time::SolarDate;

use crate::Engine;
use crate::lunar_date::LunarDate;
use crate::year_info::YearInfo;

/// Date `offset` days after New Year of `info`'s year, or `None` if the
/// offset falls outside that year.
pub fn locate(info: &YearInfo, offset: i64) -> Option<LunarDate> {
    if offset < 0 {
        return None;
    }
    let mut remaining = offset;
    for (month, is_leap, days) in info.months() {
        let days = i64::from(days);
        if remaining < days {
            return Some(LunarDate::new_unchecked(
                info.year,
                month,
                remaining as u32 + 1,
                is_leap,
            ));
        }
        remaining -= days;
    }
    None
}

/// Days from New Year of `info`'s year to `date`, or `None` if the month
/// does not exist that year or is shorter than `date.day()`.
pub fn offset_of(info: &YearInfo, date: &LunarDate) -> Option<i64> {
    if date.year() != info.year {
        return None;
    }
    let length = info.days_in_month(date.month(), date.is_leap_month())?;
    if date.day() == 0 || date.day() > length {
        return None;
    }
    let before: u32 = info
        .months()
        .take_while(|&(m, leap, _)| (m, leap) != (date.month(), date.is_leap_month()))
        .map(|(_, _, days)| days)
        .sum();
    Some(i64::from(before) + i64::from(date.day()) - 1)
}

impl Engine {
    /// Chinese calendar date of a Gregorian date.
    ///
    /// `None` before New Year 1900 and after the last day of lunar year
    /// 2100.
    pub fn solar_to_lunar(&self, date: &SolarDate) -> Option<LunarDate> {
        // New Year falls in Jan/Feb, so a date belongs to its own Gregorian
        // year or the one before.
        [date.year(), date.year() - 1].into_iter().find_map(|year| {
            let info = self.year_info(year)?;
            locate(&info, info.chinese_new_year().days_until(date))
        })
    }

    /// Gregorian date of a Chinese calendar date, or `None` if the date
    /// does not exist.
    pub fn lunar_to_solar(&self, date: &LunarDate) -> Option<SolarDate> {
        let info = self.year_info(date.year())?;
        let offset = offset_of(&info, date)?;
        Some(info.chinese_new_year().add_days(offset))
    }
}
