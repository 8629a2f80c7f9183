//! Sexagenary (干支) cycle of stems and branches.
//!
//! Day epoch: 2000-01-07 is 甲子 (index 0). Year epoch: lunar year 4 CE is
//! 甲子, so lunar year `y` has index `(y - 4) mod 60`.

use std::fmt::{Display, Formatter};

use nongli_time::{SolarDate, days_from_civil};

/// One of the ten heavenly stems (天干).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum TianGan {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All stems in order (index 0 = Jia).
pub const ALL_TIAN_GAN: [TianGan; 10] = [
    TianGan::Jia,
    TianGan::Yi,
    TianGan::Bing,
    TianGan::Ding,
    TianGan::Wu,
    TianGan::Ji,
    TianGan::Geng,
    TianGan::Xin,
    TianGan::Ren,
    TianGan::Gui,
];

const GAN_CHARS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const GAN_PINYIN: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

impl TianGan {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn chinese_name(self) -> &'static str {
        GAN_CHARS[self.index() as usize]
    }

    pub fn pinyin_name(self) -> &'static str {
        GAN_PINYIN[self.index() as usize]
    }
}

/// One of the twelve earthly branches (地支).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum DiZhi {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All branches in order (index 0 = Zi).
pub const ALL_DI_ZHI: [DiZhi; 12] = [
    DiZhi::Zi,
    DiZhi::Chou,
    DiZhi::Yin,
    DiZhi::Mao,
    DiZhi::Chen,
    DiZhi::Si,
    DiZhi::Wu,
    DiZhi::Wei,
    DiZhi::Shen,
    DiZhi::You,
    DiZhi::Xu,
    DiZhi::Hai,
];

const ZHI_CHARS: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const ZHI_PINYIN: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

impl DiZhi {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn chinese_name(self) -> &'static str {
        ZHI_CHARS[self.index() as usize]
    }

    pub fn pinyin_name(self) -> &'static str {
        ZHI_PINYIN[self.index() as usize]
    }
}

/// Zodiac animal (生肖) paired with each branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

const ALL_ZODIAC: [Zodiac; 12] = [
    Zodiac::Rat,
    Zodiac::Ox,
    Zodiac::Tiger,
    Zodiac::Rabbit,
    Zodiac::Dragon,
    Zodiac::Snake,
    Zodiac::Horse,
    Zodiac::Goat,
    Zodiac::Monkey,
    Zodiac::Rooster,
    Zodiac::Dog,
    Zodiac::Pig,
];

const ZODIAC_NAMES: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

const ZODIAC_CHARS: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

impl Zodiac {
    /// Animal of a lunar year (not a Gregorian one: January dates before
    /// New Year belong to the previous animal).
    pub fn for_lunar_year(year: i32) -> Self {
        ALL_ZODIAC[(year - 4).rem_euclid(12) as usize]
    }

    pub fn branch(self) -> DiZhi {
        ALL_DI_ZHI[self as usize]
    }

    pub fn name(self) -> &'static str {
        ZODIAC_NAMES[self as usize]
    }

    pub fn chinese_name(self) -> &'static str {
        ZODIAC_CHARS[self as usize]
    }
}

/// A stem-branch pair, stored as its position 0..59 in the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GanZhi(u8);

impl GanZhi {
    /// Pair at cycle position `index`, if `index < 60`.
    pub const fn new(index: u8) -> Option<Self> {
        if index < 60 { Some(Self(index)) } else { None }
    }

    /// Pair from its parts. Only same-parity pairs occur in the cycle;
    /// mixed parity (甲丑, say) yields `None`.
    pub fn from_parts(gan: TianGan, zhi: DiZhi) -> Option<Self> {
        let (g, z) = (gan.index() as i32, zhi.index() as i32);
        if g % 2 != z % 2 {
            return None;
        }
        Some(Self((6 * g - 5 * z).rem_euclid(60) as u8))
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub fn gan(self) -> TianGan {
        ALL_TIAN_GAN[(self.0 % 10) as usize]
    }

    pub fn zhi(self) -> DiZhi {
        ALL_DI_ZHI[(self.0 % 12) as usize]
    }

    /// Pair `steps` positions later (earlier when negative).
    pub fn offset(self, steps: i64) -> Self {
        Self((self.0 as i64 + steps).rem_euclid(60) as u8)
    }
}

impl Display for GanZhi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.gan().chinese_name(), self.zhi().chinese_name())
    }
}

/// Sexagenary day index (0..59) of a civil date.
pub fn day_index60(date: &SolarDate) -> u8 {
    let epoch = days_from_civil(2000, 1, 7);
    (date.day_number() - epoch).rem_euclid(60) as u8
}

/// Sexagenary year index (0..59) of a lunar year.
pub fn year_index60(lunar_year: i32) -> u8 {
    (lunar_year - 4).rem_euclid(60) as u8
}

pub fn day_ganzhi(date: &SolarDate) -> GanZhi {
    GanZhi(day_index60(date))
}

pub fn year_ganzhi(lunar_year: i32) -> GanZhi {
    GanZhi(year_index60(lunar_year))
}

/// Stem-branch of solar month `month` (1..=12) in sexagenary year
/// `ganzhi_year`.
///
/// Month 1 is the 寅 month opened by Lichun, month 12 the 丑 month opened
/// by the following Xiaohan. The stem of month 1 follows the year stem by
/// the five-tiger rule (甲/己 years open with 丙寅). For the month of a
/// civil date see [`crate::Engine::month_ganzhi`].
pub fn month_ganzhi(ganzhi_year: i32, month: u32) -> Option<GanZhi> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let year_gan = (year_index60(ganzhi_year) % 10) as u32;
    let gan = ((year_gan % 5) * 2 + 2 + (month - 1)) % 10;
    let zhi = (month + 1) % 12;
    GanZhi::from_parts(ALL_TIAN_GAN[gan as usize], ALL_DI_ZHI[zhi as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> SolarDate {
        SolarDate::new_unchecked(y, m, d)
    }

    #[test]
    fn day_epoch() {
        assert_eq!(day_index60(&date(2000, 1, 7)), 0);
        assert_eq!(day_index60(&date(2000, 1, 8)), 1);
        assert_eq!(day_index60(&date(2000, 1, 6)), 59);
        // 2000 is a leap year: Jan 7 to Mar 7 is exactly 60 days.
        assert_eq!(day_index60(&date(2000, 3, 7)), 0);
    }

    #[test]
    fn day_cycle_repeats_every_sixty_days() {
        let start = date(1900, 1, 1);
        for n in 0..2000 {
            let d = start.add_days(n);
            assert_eq!(day_index60(&d), day_index60(&d.add_days(60)), "{d}");
        }
    }

    #[test]
    fn known_days() {
        assert_eq!(day_ganzhi(&date(1949, 10, 1)).to_string(), "甲子");
        assert_eq!(day_ganzhi(&date(2025, 1, 29)).to_string(), "戊戌");
    }

    #[test]
    fn known_years() {
        assert_eq!(year_ganzhi(1984).to_string(), "甲子");
        assert_eq!(year_ganzhi(2024).to_string(), "甲辰");
        assert_eq!(year_ganzhi(2025).to_string(), "乙巳");
        assert_eq!(year_index60(4), 0);
        assert_eq!(year_index60(3), 59);
    }

    #[test]
    fn zodiac() {
        assert_eq!(Zodiac::for_lunar_year(2024), Zodiac::Dragon);
        assert_eq!(Zodiac::for_lunar_year(2025), Zodiac::Snake);
        assert_eq!(Zodiac::for_lunar_year(1900), Zodiac::Rat);
        assert_eq!(Zodiac::Snake.branch(), DiZhi::Si);
        assert_eq!(Zodiac::Dragon.name(), "Dragon");
        assert_eq!(Zodiac::Dragon.chinese_name(), "龙");
    }

    #[test]
    fn pinyin_names() {
        assert_eq!(TianGan::Jia.pinyin_name(), "Jia");
        assert_eq!(TianGan::Gui.pinyin_name(), "Gui");
        assert_eq!(DiZhi::Chou.pinyin_name(), "Chou");
        assert_eq!(DiZhi::Hai.pinyin_name(), "Hai");
        let gz = year_ganzhi(2025);
        assert_eq!((gz.gan().pinyin_name(), gz.zhi().pinyin_name()), ("Yi", "Si"));
    }

    #[test]
    fn parity_rule() {
        assert_eq!(GanZhi::from_parts(TianGan::Jia, DiZhi::Chou), None);
        assert_eq!(GanZhi::from_parts(TianGan::Gui, DiZhi::Hai).map(GanZhi::index), Some(59));
        for i in 0..60u8 {
            let gz = GanZhi::new(i).unwrap();
            assert_eq!(GanZhi::from_parts(gz.gan(), gz.zhi()), Some(gz));
        }
        assert_eq!(GanZhi::new(60), None);
    }

    #[test]
    fn five_tiger_rule() {
        // 2024 is a 甲 year: month 1 is 丙寅, month 12 is 丁丑.
        assert_eq!(month_ganzhi(2024, 1).unwrap().to_string(), "丙寅");
        assert_eq!(month_ganzhi(2024, 12).unwrap().to_string(), "丁丑");
        // 2025 (乙) opens with 戊寅.
        assert_eq!(month_ganzhi(2025, 1).unwrap().to_string(), "戊寅");
        assert_eq!(month_ganzhi(2025, 13), None);
    }
}
