//! Runtime Chinese calendar engine backed by a packed year table.
//!
//! This crate provides the primary [`Engine`], which decodes the 1900–2100
//! lunar year table on demand and converts between Gregorian and Chinese
//! calendar dates in constant time. Solar terms come from the solver in
//! `nongli_search` and are memoized per year.

pub mod codec;
pub mod converter;
pub mod lunar_date;
pub mod sexagenary;
pub mod table;
pub mod year_info;

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use nongli_search::{
    ALL_SOLAR_TERMS, SearchError, SolarTerm, solar_term_jde, solar_terms_for_year,
};
use nongli_time::SolarDate;
use tracing::{info, warn};

pub use codec::{YearRecord, encode_year};
pub use lunar_date::LunarDate;
pub use sexagenary::{
    DiZhi, GanZhi, TianGan, Zodiac, day_ganzhi, day_index60, month_ganzhi, year_ganzhi,
    year_index60,
};
pub use table::{FIRST_YEAR, LAST_YEAR, LUNAR_YEAR_TABLE, compile_table};
pub use year_info::YearInfo;

/// Engine configuration used at startup time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Binary table artifact to load instead of the compiled-in table.
    pub table_path: Option<PathBuf>,
    /// Check every record's invariants during construction.
    pub strict_validation: bool,
}

impl EngineConfig {
    /// Convenience constructor for an external table artifact.
    pub fn with_table(table_path: PathBuf, strict_validation: bool) -> Self {
        Self {
            table_path: Some(table_path),
            strict_validation,
        }
    }

    fn validate(&self) -> Result<(), EngineError> {
        if let Some(path) = &self.table_path {
            if path.as_os_str().is_empty() {
                return Err(EngineError::InvalidConfig("table_path must not be empty"));
            }
        }
        Ok(())
    }
}

/// Core engine errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    InvalidConfig(&'static str),
    TableLoad(String),
    InvalidRecord { year: i32, reason: &'static str },
    InvalidLunarDate(&'static str),
    Search(SearchError),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::TableLoad(msg) => write!(f, "table load error: {msg}"),
            Self::InvalidRecord { year, reason } => {
                write!(f, "invalid record for {year}: {reason}")
            }
            Self::InvalidLunarDate(msg) => write!(f, "invalid lunar date: {msg}"),
            Self::Search(e) => write!(f, "search error: {e}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SearchError> for EngineError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Memoized values are plain data, so a poisoned lock still holds a
/// consistent map.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Check every word of a full-range table: field ranges, decoded year
/// lengths, and that each New Year follows the previous year's last day.
pub fn validate_table(words: &[u32]) -> Result<(), EngineError> {
    let mut prev: Option<YearInfo> = None;
    for (i, &word) in words.iter().enumerate() {
        let year = FIRST_YEAR + i as i32;
        YearRecord::check(word).map_err(|reason| EngineError::InvalidRecord { year, reason })?;
        let info = YearInfo::decode(year, word);
        info.validate().map_err(|reason| EngineError::InvalidRecord { year, reason })?;
        if let Some(p) = prev {
            let expected = p.chinese_new_year().add_days(p.total_days() as i64);
            if expected != info.chinese_new_year() {
                return Err(EngineError::InvalidRecord {
                    year,
                    reason: "New Year does not follow the previous year",
                });
            }
        }
        prev = Some(info);
    }
    Ok(())
}

/// Chinese calendar engine.
///
/// `Engine` is [`Send`] + [`Sync`]; share one instance via `Arc<Engine>`.
/// The two caches (decoded years, solar-term dates) are filled lazily.
/// Their locks are held only for map access, never while decoding or
/// solving, so concurrent misses on the same key just duplicate work.
pub struct Engine {
    config: EngineConfig,
    table: Vec<u32>,
    year_cache: Mutex<HashMap<i32, YearInfo>>,
    term_cache: Mutex<HashMap<i32, [SolarDate; 24]>>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("table_len", &self.table.len())
            .field("cached_years", &lock(&self.year_cache).len())
            .field("cached_term_years", &lock(&self.term_cache).len())
            .finish()
    }
}

impl Engine {
    /// Create an engine, loading the table named in the config if any.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let table = match &config.table_path {
            Some(path) => table::load_table(path)?,
            None => LUNAR_YEAR_TABLE.to_vec(),
        };
        if config.strict_validation {
            validate_table(&table)?;
        }
        info!(
            external_table = config.table_path.is_some(),
            strict = config.strict_validation,
            "lunar calendar engine ready"
        );
        Ok(Self {
            config,
            table,
            year_cache: Mutex::new(HashMap::new()),
            term_cache: Mutex::new(HashMap::new()),
        })
    }

    /// Engine over the compiled-in table, without strict validation.
    pub fn builtin() -> Self {
        Self {
            config: EngineConfig::default(),
            table: LUNAR_YEAR_TABLE.to_vec(),
            year_cache: Mutex::new(HashMap::new()),
            term_cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The packed table in use.
    pub fn table(&self) -> &[u32] {
        &self.table
    }

    /// Decoded layout of lunar year `year`, or `None` outside 1900–2100.
    pub fn year_info(&self, year: i32) -> Option<YearInfo> {
        let index = table::table_index(year)?;
        if let Some(info) = lock(&self.year_cache).get(&year) {
            return Some(*info);
        }
        let info = YearInfo::decode(year, self.table[index]);
        lock(&self.year_cache).entry(year).or_insert(info);
        Some(info)
    }

    /// Month the leap month follows. `None` for common years and for years
    /// outside the table.
    pub fn leap_month(&self, year: i32) -> Option<u32> {
        self.year_info(year)
            .filter(YearInfo::has_leap_month)
            .map(|info| info.leap_month)
    }

    pub fn days_in_month(&self, year: i32, month: u32, is_leap: bool) -> Option<u32> {
        self.year_info(year)?.days_in_month(month, is_leap)
    }

    pub fn days_in_year(&self, year: i32) -> Option<u32> {
        self.year_info(year).map(|info| info.total_days())
    }

    pub fn lunar_new_year(&self, year: i32) -> Option<SolarDate> {
        self.year_info(year).map(|info| info.chinese_new_year())
    }

    /// Beijing dates of the 24 solar terms of Gregorian year `year`,
    /// Xiaohan first.
    pub fn solar_terms(&self, year: i32) -> Option<[SolarDate; 24]> {
        table::table_index(year)?;
        if let Some(dates) = lock(&self.term_cache).get(&year) {
            return Some(*dates);
        }
        let events = match solar_terms_for_year(year) {
            Ok(events) => events,
            Err(e) => {
                warn!(year, error = %e, "solar term solve failed");
                return None;
            }
        };
        let dates = events.map(|e| e.date);
        lock(&self.term_cache).entry(year).or_insert(dates);
        Some(dates)
    }

    pub fn solar_term_date(&self, term: SolarTerm, year: i32) -> Option<SolarDate> {
        self.solar_terms(year).map(|dates| dates[term.index() as usize])
    }

    /// Instant of a solar term, JDE (TT). Not cached.
    pub fn solar_term_instant(&self, term: SolarTerm, year: i32) -> Option<f64> {
        table::table_index(year)?;
        match solar_term_jde(term, year) {
            Ok(jde) => Some(jde),
            Err(e) => {
                warn!(year, %term, error = %e, "solar term solve failed");
                None
            }
        }
    }

    /// The solar term falling on `date`, if any.
    pub fn solar_term_on(&self, date: &SolarDate) -> Option<SolarTerm> {
        let dates = self.solar_terms(date.year())?;
        let index = dates.iter().position(|d| d == date)?;
        SolarTerm::from_index(index as u8)
    }

    /// Month stem-branch of a civil date.
    ///
    /// Months change at the twelve jie terms, not at new moons: Xiaohan
    /// opens month 12 (丑) of the previous sexagenary year, Lichun opens
    /// month 1 (寅), and so on up to Daxue opening month 11 (子). Dates
    /// before Xiaohan are still in the previous year's 子 month.
    pub fn month_ganzhi(&self, date: &SolarDate) -> Option<GanZhi> {
        let dates = self.solar_terms(date.year())?;
        let mut ganzhi_year = date.year() - 1;
        let mut month = 11;
        for (term, start) in ALL_SOLAR_TERMS.into_iter().zip(dates) {
            if !term.is_jie() || start > *date {
                continue;
            }
            // Jie terms sit at even indices, Xiaohan at 0.
            month = match u32::from(term.index() / 2) {
                0 => 12,
                n => n,
            };
            ganzhi_year = if month == 12 { date.year() - 1 } else { date.year() };
        }
        sexagenary::month_ganzhi(ganzhi_year, month)
    }
}
