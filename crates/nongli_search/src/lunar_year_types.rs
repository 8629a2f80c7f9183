//! Month layouts produced by the lunar year compiler.

use nongli_time::SolarDate;

/// One compiled lunar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarMonthRaw {
    /// Month number 1–12. A leap month repeats its predecessor's number.
    pub month: u32,
    pub is_leap: bool,
    /// 29 or 30.
    pub day_count: u32,
    /// Conjunction opening the month, JDE (TT).
    pub start_jde: f64,
    /// Beijing civil date of day 1.
    pub start_date: SolarDate,
}

impl LunarMonthRaw {
    /// Beijing civil date of the first day after this month.
    pub fn end_date(&self) -> SolarDate {
        self.start_date.add_days(self.day_count as i64)
    }
}

/// A fully compiled lunar year, month 1 through month 12.
#[derive(Debug, Clone, PartialEq)]
pub struct LunarYearRaw {
    pub year: i32,
    /// Number of the month the leap month follows, if any.
    pub leap_month: Option<u32>,
    pub chinese_new_year: SolarDate,
    /// 12 or 13 months in calendar order.
    pub months: Vec<LunarMonthRaw>,
}

impl LunarYearRaw {
    /// Total days from this New Year to the next.
    pub fn total_days(&self) -> u32 {
        self.months.iter().map(|m| m.day_count).sum()
    }

    /// The twelve regular months in order.
    pub fn regular_months(&self) -> impl Iterator<Item = &LunarMonthRaw> {
        self.months.iter().filter(|m| !m.is_leap)
    }

    pub fn leap(&self) -> Option<&LunarMonthRaw> {
        self.months.iter().find(|m| m.is_leap)
    }
}
