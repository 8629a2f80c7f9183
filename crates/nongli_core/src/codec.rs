//! Packed 32-bit year records.
//!
//! Bit layout (bit 0 = least significant):
//!
//! | bits  | field |
//! |-------|-------|
//! | 30–19 | month 1..12 sizes, month 1 at bit 30; set = 30 days |
//! | 18–15 | leap month index, 0 = none |
//! | 14    | leap month size; set = 30 days |
//! | 13–9  | Chinese New Year day of month |
//! | 8     | Chinese New Year month; set = February |
//!
//! Bits 31 and 7–0 are always clear.

use nongli_search::LunarYearRaw;

use crate::EngineError;

const MONTH_FLAGS_TOP_BIT: u32 = 30;
const LEAP_MONTH_SHIFT: u32 = 15;
const LEAP_MONTH_MASK: u32 = 0xF;
const LEAP_LONG_BIT: u32 = 14;
const CNY_DAY_SHIFT: u32 = 9;
const CNY_DAY_MASK: u32 = 0x1F;
const CNY_FEBRUARY_BIT: u32 = 8;
/// Bits no valid record may set.
const RESERVED_MASK: u32 = (1 << 31) | 0xFF;

/// Unpacked form of one table word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct YearRecord {
    /// `true` for a 30-day month, index 0 = month 1.
    pub long_months: [bool; 12],
    /// Month the leap month follows, 0 when the year has none.
    pub leap_month: u8,
    pub leap_is_long: bool,
    /// 1 (January) or 2 (February).
    pub cny_month: u8,
    pub cny_day: u8,
}

impl YearRecord {
    /// Pack into a table word.
    pub fn pack(&self) -> u32 {
        let mut word = 0u32;
        for (i, &long) in self.long_months.iter().enumerate() {
            if long {
                word |= 1 << (MONTH_FLAGS_TOP_BIT - i as u32);
            }
        }
        word |= (self.leap_month as u32 & LEAP_MONTH_MASK) << LEAP_MONTH_SHIFT;
        if self.leap_month > 0 && self.leap_is_long {
            word |= 1 << LEAP_LONG_BIT;
        }
        word |= (self.cny_day as u32 & CNY_DAY_MASK) << CNY_DAY_SHIFT;
        if self.cny_month == 2 {
            word |= 1 << CNY_FEBRUARY_BIT;
        }
        word
    }

    /// Unpack a table word. Never fails; see [`YearRecord::check`].
    pub fn unpack(word: u32) -> Self {
        let mut long_months = [false; 12];
        for (i, slot) in long_months.iter_mut().enumerate() {
            *slot = word & (1 << (MONTH_FLAGS_TOP_BIT - i as u32)) != 0;
        }
        let leap_month = ((word >> LEAP_MONTH_SHIFT) & LEAP_MONTH_MASK) as u8;
        Self {
            long_months,
            leap_month,
            leap_is_long: leap_month > 0 && word & (1 << LEAP_LONG_BIT) != 0,
            cny_month: if word & (1 << CNY_FEBRUARY_BIT) != 0 { 2 } else { 1 },
            cny_day: ((word >> CNY_DAY_SHIFT) & CNY_DAY_MASK) as u8,
        }
    }

    /// Field-range checks on a raw word: reserved bits, leap index, New
    /// Year window. Returns the broken rule.
    pub fn check(word: u32) -> Result<(), &'static str> {
        if word & RESERVED_MASK != 0 {
            return Err("reserved bits set");
        }
        let record = Self::unpack(word);
        if record.leap_month > 12 {
            return Err("leap month index above 12");
        }
        if record.leap_month == 0 && word & (1 << LEAP_LONG_BIT) != 0 {
            return Err("leap size flag without leap month");
        }
        let in_window = match record.cny_month {
            1 => (21..=31).contains(&record.cny_day),
            _ => (1..=20).contains(&record.cny_day),
        };
        if !in_window {
            return Err("New Year outside Jan 21 - Feb 20");
        }
        Ok(())
    }

    /// Build the record for a compiled year.
    pub fn from_raw(raw: &LunarYearRaw) -> Result<Self, EngineError> {
        let invalid = |reason| EngineError::InvalidRecord {
            year: raw.year,
            reason,
        };
        let mut long_months = [false; 12];
        let mut regular = 0usize;
        for m in raw.regular_months() {
            let slot = long_months.get_mut(regular).ok_or(invalid("more than 12 months"))?;
            *slot = m.day_count == 30;
            regular += 1;
        }
        if regular != 12 {
            return Err(invalid("fewer than 12 months"));
        }
        let cny = raw.chinese_new_year;
        if cny.month() > 2 {
            return Err(invalid("New Year after February"));
        }
        Ok(Self {
            long_months,
            leap_month: raw.leap_month.unwrap_or(0) as u8,
            leap_is_long: raw.leap().is_some_and(|m| m.day_count == 30),
            cny_month: cny.month() as u8,
            cny_day: cny.day() as u8,
        })
    }
}

/// Compile and pack one lunar year.
pub fn encode_year(year: i32) -> Result<u32, EngineError> {
    let raw = nongli_search::compile_lunar_year(year)?;
    Ok(YearRecord::from_raw(&raw)?.pack())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpack_1900() {
        // Leap 8, New Year 1900-01-31.
        let r = YearRecord::unpack(0x25ec3e00);
        assert_eq!(r.leap_month, 8);
        assert_eq!((r.cny_month, r.cny_day), (1, 31));
        let sizes: Vec<u8> = r.long_months.iter().map(|&l| if l { 30 } else { 29 }).collect();
        assert_eq!(sizes, [29, 30, 29, 29, 30, 29, 30, 30, 30, 30, 29, 30]);
        assert!(!r.leap_is_long);
    }

    #[test]
    fn pack_unpack_identity() {
        for word in [0x25ec3e00u32, 0x53733a00, 0x25b01500, 0x257dbe00, 0x6a901300] {
            assert_eq!(YearRecord::unpack(word).pack(), word, "{word:#x}");
            assert!(YearRecord::check(word).is_ok(), "{word:#x}");
        }
    }

    #[test]
    fn field_positions() {
        let r = YearRecord {
            long_months: [
                true, false, false, false, false, false, false, false, false, false, false, true,
            ],
            leap_month: 12,
            leap_is_long: true,
            cny_month: 2,
            cny_day: 20,
        };
        let word = r.pack();
        assert_eq!(word, (1 << 30) | (1 << 19) | (12 << 15) | (1 << 14) | (20 << 9) | (1 << 8));
    }

    #[test]
    fn leap_size_ignored_without_leap() {
        let r = YearRecord {
            leap_is_long: true,
            cny_month: 1,
            cny_day: 25,
            ..Default::default()
        };
        assert_eq!(r.pack() & (1 << LEAP_LONG_BIT), 0);
    }

    #[test]
    fn check_rejects_bad_words() {
        assert!(YearRecord::check(0x25ec3e01).is_err());
        assert!(YearRecord::check(0x8000_3e00).is_err());
        assert!(YearRecord::check(13 << 15 | 25 << 9).is_err());
        assert!(YearRecord::check(1 << 14 | 25 << 9).is_err());
        assert!(YearRecord::check(10 << 9).is_err());
        assert!(YearRecord::check(21 << 9 | 1 << 8).is_err());
    }

    #[test]
    fn encode_matches_table_samples() {
        assert_eq!(encode_year(2025).unwrap(), 0x53733a00);
        assert_eq!(encode_year(2033).unwrap(), 0x257dbe00);
    }
}
