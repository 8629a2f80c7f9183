//! The compiled-in table against the live compiler over 1900–2100.

use nongli_core::table::TABLE_LEN;
use nongli_core::{FIRST_YEAR, LAST_YEAR, LUNAR_YEAR_TABLE, YearRecord, compile_table};

#[test]
fn builtin_table_matches_compiler() {
    let compiled = compile_table(FIRST_YEAR, LAST_YEAR).unwrap();
    assert_eq!(compiled.len(), TABLE_LEN);
    let diffs: Vec<(i32, u32, u32)> = (FIRST_YEAR..)
        .zip(compiled.iter().zip(LUNAR_YEAR_TABLE.iter()))
        .filter(|(_, (c, t))| c != t)
        .map(|(year, (&c, &t))| (year, c, t))
        .collect();
    assert!(diffs.is_empty(), "years differing (year, compiled, table): {diffs:x?}");
}

#[test]
fn every_word_repacks_and_checks() {
    for (year, &word) in (FIRST_YEAR..).zip(LUNAR_YEAR_TABLE.iter()) {
        assert_eq!(YearRecord::unpack(word).pack(), word, "{year}: {word:#010x}");
        assert!(YearRecord::check(word).is_ok(), "{year}: {word:#010x}");
    }
}

#[test]
fn leap_month_count() {
    let leaps = LUNAR_YEAR_TABLE
        .iter()
        .filter(|&&w| YearRecord::unpack(w).leap_month != 0)
        .count();
    assert_eq!(leaps, 74);
}
