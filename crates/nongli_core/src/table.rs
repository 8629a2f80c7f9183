//! The packed lunar year table and its binary artifact.
//!
//! The compiled-in table was produced by [`compile_table`] over 1900–2100.
//! The binary artifact is the same 201 words as little-endian `u32`.

use std::path::Path;

use tracing::{debug, info};

use crate::EngineError;
use crate::codec::{YearRecord, encode_year};

pub use nongli_search::{FIRST_YEAR, LAST_YEAR};

/// Number of years covered by the table.
pub const TABLE_LEN: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize;

/// Packed year words, index `year - 1900`. Layout in [`crate::codec`].
#[rustfmt::skip]
pub const LUNAR_YEAR_TABLE: [u32; TABLE_LEN] = [
    0x25ec3e00, 0x25702700, 0x52b81100, 0x2a6aba00, 0x69302100, // 1900
    0x6ca80900, 0x32aa7200, 0x2b501b00, 0x4d680500, 0x2ae92c00, // 1905
    0x25701500, 0x52db3c00, 0x52682500, 0x69280d00, 0x694af400, // 1910
    0x5aa81d00, 0x2b500900, 0x56d12e00, 0x4ad81700, 0x24bbc300, // 1915
    0x24d82900, 0x52581100, 0x5a5ab800, 0x35282100, 0x36a00b00, // 1920
    0x55aa7000, 0x15b01b00, 0x4ab80500, 0x29792e00, 0x24b81500, // 1925
    0x32b33c00, 0x6a502300, 0x75280d00, 0x354af400, 0x2d681d00, // 1930
    0x15b00900, 0x4371f000, 0x49701700, 0x646bfe00, 0x64a82700, // 1935
    0x6a501100, 0x6c537600, 0x5aa81f00, 0x2b500b00, 0x52da7200, // 1940
    0x12e81b00, 0x49680500, 0x69592c00, 0x54a81500, 0x5aabba00, // 1945
    0x36502300, 0x5aa80d00, 0x29aaf600, 0x26d01d00, 0x52d80700, // 1950
    0x22b9f000, 0x29581900, 0x54d43e00, 0x74a82500, 0x35501100, // 1955
    0x57533800, 0x55a81f00, 0x25b00b00, 0x55723200, 0x52b81b00, // 1960
    0x29300500, 0x7931aa00, 0x6ca81300, 0x2dabbc00, 0x2b502300, // 1965
    0x4b680d00, 0x26eab600, 0x25681f00, 0x52680700, 0x6a6a2e00, // 1970
    0x69281700, 0x6aac3e00, 0x5aa02500, 0x5b500f00, 0x4ad37800, // 1975
    0x4ad82100, 0x24d80b00, 0x54ba3200, 0x52581b00, 0x593d0500, // 1980
    0x35282900, 0x36a01300, 0x57a33a00, 0x55b02300, 0x4ab80d00, // 1985
    0x257ab600, 0x24b81f00, 0x32580900, 0x3a51ae00, 0x75281500, // 1990
    0x35ac3e00, 0x2d602700, 0x55b00f00, 0x4b6ab800, 0x49702100, // 1995
    0x64b00b00, 0x6caa3000, 0x6a501900, 0x6d280300, 0x3aa92c00, // 2000
    0x2b501300, 0x55dbba00, 0x12e82500, 0x49680f00, 0x655ab400, // 2005
    0x54a81d00, 0x5a500700, 0x5d522e00, 0x56a81500, 0x2aecbe00, // 2010
    0x25d02700, 0x52d81100, 0x28bb7800, 0x29582100, 0x54980b00, // 2015
    0x3caa3200, 0x35501900, 0x56a80300, 0x2da92c00, 0x25b01500, // 2020
    0x53733a00, 0x52702300, 0x69300d00, 0x7532b400, 0x6a981b00, // 2025
    0x2d500700, 0x3b51ae00, 0x4b681700, 0x257dbe00, 0x25682700, // 2030
    0x52681100, 0x685b7800, 0x69281f00, 0x6a900900, 0x6ea2b000, // 2035
    0x5ad01900, 0x2b680300, 0x2ad92c00, 0x24d81500, 0x52bbbc00, // 2040
    0x52582300, 0x55280d00, 0x592af400, 0x36901d00, 0x56d00500, // 2045
    0x25b1ee00, 0x49b81700, 0x24fc0300, 0x24b82700, 0x32581100, // 2050
    0x34537800, 0x75281f00, 0x35500900, 0x53627000, 0x55701900, // 2055
    0x49700500, 0x6971aa00, 0x64b01300, 0x6aabba00, 0x6a502300, // 2060
    0x6d280b00, 0x2eaab400, 0x2b501d00, 0x53680700, 0x2aea2e00, // 2065
    0x29681700, 0x54dc3e00, 0x54a82700, 0x5a500f00, 0x5b533600, // 2070
    0x56a81f00, 0x2ad00b00, 0x55d23000, 0x52d81900, 0x29580500, // 2075
    0x5939ac00, 0x34981300, 0x399bba00, 0x35502300, 0x56a80d00, // 2080
    0x25aaf400, 0x25b01d00, 0x52b80700, 0x2a723000, 0x68b01500, // 2085
    0x74b43c00, 0x6a902500, 0x6d500f00, 0x35537600, 0x2b681f00, // 2090
    0x25700b00, 0x54ea3200, 0x51681900, 0x68a80300, 0x79292a00, // 2095
    0x6a901300,                                                 // 2100
];

/// Table index of `year`, if covered.
pub fn table_index(year: i32) -> Option<usize> {
    (FIRST_YEAR..=LAST_YEAR)
        .contains(&year)
        .then(|| (year - FIRST_YEAR) as usize)
}

/// Run the compiler over `first..=last` and pack each year.
pub fn compile_table(first: i32, last: i32) -> Result<Vec<u32>, EngineError> {
    if first > last || table_index(first).is_none() || table_index(last).is_none() {
        return Err(EngineError::InvalidConfig("table range must lie within 1900-2100"));
    }
    let mut words = Vec::with_capacity((last - first + 1) as usize);
    for year in first..=last {
        let word = encode_year(year)?;
        debug!(year, word, "encoded year");
        words.push(word);
    }
    info!(first, last, "compiled lunar year table");
    Ok(words)
}

/// Serialize words as little-endian `u32`.
pub fn table_to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// Parse a full-range binary artifact.
///
/// Every word must pass [`YearRecord::check`]; deeper layout checks run
/// only under strict validation.
pub fn table_from_bytes(bytes: &[u8]) -> Result<Vec<u32>, EngineError> {
    if bytes.len() != TABLE_LEN * 4 {
        return Err(EngineError::TableLoad(format!(
            "expected {} bytes, got {}",
            TABLE_LEN * 4,
            bytes.len()
        )));
    }
    let words: Vec<u32> = bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    for (year, &word) in (FIRST_YEAR..).zip(&words) {
        YearRecord::check(word).map_err(|reason| EngineError::InvalidRecord { year, reason })?;
    }
    Ok(words)
}

/// Read a binary artifact from disk.
pub fn load_table(path: &Path) -> Result<Vec<u32>, EngineError> {
    let bytes = std::fs::read(path)
        .map_err(|e| EngineError::TableLoad(format!("{}: {e}", path.display())))?;
    let words = table_from_bytes(&bytes)?;
    debug!(path = %path.display(), "loaded lunar year table");
    Ok(words)
}

/// Render words as a Rust array literal, five per line with the first
/// year of each line in a trailing comment.
pub fn render_rust_table(first: i32, words: &[u32]) -> String {
    let mut out = format!("pub const LUNAR_YEAR_TABLE: [u32; {}] = [\n", words.len());
    for (row, chunk) in words.chunks(5).enumerate() {
        let cells: Vec<String> = chunk.iter().map(|w| format!("{w:#010x},")).collect();
        let line = format!("    {}", cells.join(" "));
        out.push_str(&format!("{line:<64}// {}\n", first + 5 * row as i32));
    }
    out.push_str("];\n");
    out
}
