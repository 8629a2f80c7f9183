//! Lunar year compiler checks against published calendars and the
//! structural invariants of every year in 1900–2100.

use nongli_search::{FIRST_YEAR, LAST_YEAR, LunarYearRaw, compile_lunar_year};
use nongli_time::SolarDate;

fn date(y: i32, m: u32, d: u32) -> SolarDate {
    SolarDate::new_unchecked(y, m, d)
}

fn all_years() -> Vec<LunarYearRaw> {
    (FIRST_YEAR..=LAST_YEAR)
        .map(|y| compile_lunar_year(y).unwrap_or_else(|e| panic!("{y}: {e}")))
        .collect()
}

#[test]
fn published_leap_months() {
    let cases = [
        (1900, Some(8)),
        (1984, Some(10)),
        (1987, Some(6)),
        (2017, Some(6)),
        (2020, Some(4)),
        (2023, Some(2)),
        (2024, None),
        (2025, Some(6)),
        (2033, Some(11)),
        (2100, None),
    ];
    for (year, leap) in cases {
        assert_eq!(compile_lunar_year(year).unwrap().leap_month, leap, "{year}");
    }
}

#[test]
fn published_new_years() {
    let cases = [
        (1900, date(1900, 1, 31)),
        (2000, date(2000, 2, 5)),
        (2020, date(2020, 1, 25)),
        (2023, date(2023, 1, 22)),
        (2024, date(2024, 2, 10)),
        (2025, date(2025, 1, 29)),
        (2026, date(2026, 2, 17)),
        (2100, date(2100, 2, 9)),
    ];
    for (year, cny) in cases {
        assert_eq!(compile_lunar_year(year).unwrap().chinese_new_year, cny, "{year}");
    }
}

#[test]
fn month_layout_2025() {
    let y = compile_lunar_year(2025).unwrap();
    let layout: Vec<(u32, bool, u32, SolarDate)> = y
        .months
        .iter()
        .map(|m| (m.month, m.is_leap, m.day_count, m.start_date))
        .collect();
    let expected = vec![
        (1, false, 30, date(2025, 1, 29)),
        (2, false, 29, date(2025, 2, 28)),
        (3, false, 30, date(2025, 3, 29)),
        (4, false, 29, date(2025, 4, 28)),
        (5, false, 29, date(2025, 5, 27)),
        (6, false, 30, date(2025, 6, 25)),
        (6, true, 29, date(2025, 7, 25)),
        (7, false, 30, date(2025, 8, 23)),
        (8, false, 29, date(2025, 9, 22)),
        (9, false, 30, date(2025, 10, 21)),
        (10, false, 30, date(2025, 11, 20)),
        (11, false, 30, date(2025, 12, 20)),
        (12, false, 29, date(2026, 1, 19)),
    ];
    assert_eq!(layout, expected);
}

#[test]
fn structural_invariants_hold_for_every_year() {
    let years = all_years();
    let mut lengths = Vec::with_capacity(years.len());
    for (i, y) in years.iter().enumerate() {
        let cny = y.chinese_new_year;
        let in_window = match cny.month() {
            1 => cny.day() >= 21,
            2 => cny.day() <= 20,
            _ => false,
        };
        assert!(in_window, "{}: New Year {cny}", y.year);

        for m in &y.months {
            assert!(m.day_count == 29 || m.day_count == 30, "{}: {m:?}", y.year);
        }
        assert!(y.months.iter().filter(|m| m.is_leap).count() <= 1);

        let total = y.total_days();
        match y.leap_month {
            Some(n) => {
                assert!((1..=12).contains(&n));
                assert_eq!(y.months.len(), 13);
                assert!((383..=385).contains(&total), "{}: {total} days", y.year);
            }
            None => {
                assert_eq!(y.months.len(), 12);
                assert!((353..=355).contains(&total), "{}: {total} days", y.year);
            }
        }

        if let Some(next) = years.get(i + 1) {
            let span = cny.days_until(&next.chinese_new_year);
            assert_eq!(span, total as i64, "{}: months do not reach next New Year", y.year);
        }
        lengths.push(total);
    }

    for witness in [353, 355, 383, 385] {
        assert!(lengths.contains(&witness), "no {witness}-day year in range");
    }
}

#[test]
fn leap_month_repeats_and_numbering_resumes() {
    for y in all_years() {
        let numbers: Vec<u32> = y.months.iter().map(|m| m.month).collect();
        let mut expected = 1;
        for (i, m) in y.months.iter().enumerate() {
            if m.is_leap {
                assert_eq!(m.month, numbers[i - 1], "{}", y.year);
            } else {
                assert_eq!(m.month, expected, "{}", y.year);
                expected += 1;
            }
        }
    }
}
