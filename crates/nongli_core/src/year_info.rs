//! Decoded per-year month layout.

use nongli_time::SolarDate;

use crate::codec::YearRecord;

/// Month lengths of one lunar year, decoded from its table word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearInfo {
    pub year: i32,
    /// Days in regular months 1..12 (29 or 30), index 0 = month 1.
    pub month_days: [u32; 12],
    /// Month the leap month follows, 0 when there is none.
    pub leap_month: u32,
    /// 0 without a leap month, otherwise 29 or 30.
    pub leap_month_days: u32,
    pub cny_month: u32,
    pub cny_day: u32,
}

impl YearInfo {
    /// Decode the table word for `year`.
    pub fn decode(year: i32, word: u32) -> Self {
        let record = YearRecord::unpack(word);
        let mut month_days = [29u32; 12];
        for (days, long) in month_days.iter_mut().zip(record.long_months) {
            if long {
                *days = 30;
            }
        }
        let leap_month = record.leap_month as u32;
        let leap_month_days = match (leap_month, record.leap_is_long) {
            (0, _) => 0,
            (_, true) => 30,
            (_, false) => 29,
        };
        Self {
            year,
            month_days,
            leap_month,
            leap_month_days,
            cny_month: record.cny_month as u32,
            cny_day: record.cny_day as u32,
        }
    }

    pub fn chinese_new_year(&self) -> SolarDate {
        SolarDate::new_unchecked(self.year, self.cny_month, self.cny_day)
    }

    pub fn has_leap_month(&self) -> bool {
        self.leap_month != 0
    }

    /// Length of a month, or `None` if that month does not exist this year.
    pub fn days_in_month(&self, month: u32, is_leap: bool) -> Option<u32> {
        if !(1..=12).contains(&month) {
            return None;
        }
        if is_leap {
            (self.leap_month == month).then_some(self.leap_month_days)
        } else {
            Some(self.month_days[month as usize - 1])
        }
    }

    pub fn total_days(&self) -> u32 {
        self.month_days.iter().sum::<u32>() + self.leap_month_days
    }

    /// Months in calendar order as `(month, is_leap, days)`.
    pub fn months(&self) -> impl Iterator<Item = (u32, bool, u32)> + '_ {
        (1..=12u32).flat_map(move |m| {
            let regular = std::iter::once((m, false, self.month_days[m as usize - 1]));
            let leap = (self.leap_month == m).then_some((m, true, self.leap_month_days));
            regular.chain(leap)
        })
    }

    /// Invariant checks on the decoded layout. Returns the broken rule.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.leap_month > 12 {
            return Err("leap month index above 12");
        }
        if SolarDate::new(self.year, self.cny_month, self.cny_day).is_err() {
            return Err("New Year is not a real date");
        }
        let total = self.total_days();
        let range = if self.has_leap_month() { 383..=385 } else { 353..=355 };
        if !range.contains(&total) {
            return Err("year length outside the lunar range");
        }
        Ok(())
    }
}
