//! The 24 solar terms (节气) in Gregorian-year order.
//!
//! Terms sit 15° apart on the ecliptic. A Gregorian year opens with Xiaohan
//! at 285° in early January and closes with Dongzhi at 270° in late December.

use nongli_time::SolarDate;

/// One of the 24 solar terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum SolarTerm {
    Xiaohan,
    Dahan,
    Lichun,
    Yushui,
    Jingzhe,
    Chunfen,
    Qingming,
    Guyu,
    Lixia,
    Xiaoman,
    Mangzhong,
    Xiazhi,
    Xiaoshu,
    Dashu,
    Liqiu,
    Chushu,
    Bailu,
    Qiufen,
    Hanlu,
    Shuangjiang,
    Lidong,
    Xiaoxue,
    Daxue,
    Dongzhi,
}

/// All 24 solar terms in order (index 0 = Xiaohan).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Xiaohan,
    SolarTerm::Dahan,
    SolarTerm::Lichun,
    SolarTerm::Yushui,
    SolarTerm::Jingzhe,
    SolarTerm::Chunfen,
    SolarTerm::Qingming,
    SolarTerm::Guyu,
    SolarTerm::Lixia,
    SolarTerm::Xiaoman,
    SolarTerm::Mangzhong,
    SolarTerm::Xiazhi,
    SolarTerm::Xiaoshu,
    SolarTerm::Dashu,
    SolarTerm::Liqiu,
    SolarTerm::Chushu,
    SolarTerm::Bailu,
    SolarTerm::Qiufen,
    SolarTerm::Hanlu,
    SolarTerm::Shuangjiang,
    SolarTerm::Lidong,
    SolarTerm::Xiaoxue,
    SolarTerm::Daxue,
    SolarTerm::Dongzhi,
];

const PINYIN_NAMES: [&str; 24] = [
    "Xiaohan",
    "Dahan",
    "Lichun",
    "Yushui",
    "Jingzhe",
    "Chunfen",
    "Qingming",
    "Guyu",
    "Lixia",
    "Xiaoman",
    "Mangzhong",
    "Xiazhi",
    "Xiaoshu",
    "Dashu",
    "Liqiu",
    "Chushu",
    "Bailu",
    "Qiufen",
    "Hanlu",
    "Shuangjiang",
    "Lidong",
    "Xiaoxue",
    "Daxue",
    "Dongzhi",
];

const CHINESE_NAMES: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
    "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

impl SolarTerm {
    /// 0-based position in the Gregorian year (Xiaohan=0 .. Dongzhi=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Term at a 0-based index, if `index < 24`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 24 {
            Some(ALL_SOLAR_TERMS[index as usize])
        } else {
            None
        }
    }

    /// Pinyin name without tone marks.
    pub fn name(self) -> &'static str {
        PINYIN_NAMES[self.index() as usize]
    }

    /// Simplified Chinese name.
    pub fn chinese_name(self) -> &'static str {
        CHINESE_NAMES[self.index() as usize]
    }

    /// Apparent solar longitude that defines the term, degrees.
    pub const fn longitude_deg(self) -> f64 {
        ((285 + 15 * self.index() as u32) % 360) as f64
    }

    /// Major terms (中气), the odd indices. A lunar month without one is a
    /// leap-month candidate.
    pub const fn is_zhongqi(self) -> bool {
        self.index() % 2 == 1
    }

    /// Minor terms (节), which open the sexagenary solar months.
    pub const fn is_jie(self) -> bool {
        !self.is_zhongqi()
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A solved solar term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermEvent {
    pub term: SolarTerm,
    /// Instant the Sun reaches the term's longitude, JDE (TT).
    pub jde: f64,
    /// Beijing civil date of that instant.
    pub date: SolarDate,
}
