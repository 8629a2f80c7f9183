//! Exhaustive civil-arithmetic checks over the calendar's supported span.

use nongli_time::{SolarDate, beijing_date, beijing_midnight_jde, days_in_month, jd_to_calendar};

fn every_date(first: i32, last: i32) -> impl Iterator<Item = SolarDate> {
    (first..=last).flat_map(|y| {
        (1..=12).flat_map(move |m| {
            (1..=days_in_month(y, m)).map(move |d| SolarDate::new_unchecked(y, m, d))
        })
    })
}

#[test]
fn day_numbers_are_consecutive() {
    let mut prev: Option<i64> = None;
    for date in every_date(1899, 2101) {
        let n = date.day_number();
        if let Some(p) = prev {
            assert_eq!(n, p + 1, "gap before {date}");
        }
        assert_eq!(SolarDate::from_day_number(n), date);
        prev = Some(n);
    }
}

#[test]
fn meeus_and_integer_agree() {
    for date in every_date(1900, 2100) {
        let (y, m, d) = jd_to_calendar(date.midnight_jd());
        assert_eq!((y, m, d), (date.year(), date.month(), date.day() as f64), "{date}");
    }
}

#[test]
fn beijing_midnight_projects_back() {
    for date in every_date(1900, 2100).step_by(7) {
        let jde = beijing_midnight_jde(&date);
        assert_eq!(beijing_date(jde + 1.0 / 1440.0), date, "{date}");
        assert_eq!(beijing_date(jde + 0.5), date, "{date}");
    }
}

#[test]
fn validated_constructor_matches_table() {
    for y in [1900, 2000, 2023, 2024, 2100] {
        for m in 1..=12u32 {
            for d in 1..=31u32 {
                let ok = SolarDate::new(y, m, d).is_ok();
                assert_eq!(ok, d <= days_in_month(y, m), "{y}-{m}-{d}");
            }
        }
    }
}
