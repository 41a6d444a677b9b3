#![forbid(unsafe_code)]
mod common;

use chrono::NaiveDate;
use common::{day, window};
use vigile::scheduler::{duration_hours, overlaps, parse_duration_hours};
use vigile::{ShiftWindow, TimeOfDay, ValidationError};

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

#[test]
fn equal_bounds_give_zero_not_a_full_day() {
    for h in 0..24 {
        let at = TimeOfDay::new(h, 30).unwrap();
        assert_eq!(duration_hours(at, at), 0.0);
    }
}

#[test]
fn overnight_wraps_past_midnight() {
    for start in 1..24u32 {
        for end in 0..start {
            let got = duration_hours(TimeOfDay::new(start, 0).unwrap(), TimeOfDay::new(end, 0).unwrap());
            assert_eq!(got, f64::from(24 - start + end), "{start}:00 -> {end}:00");
        }
    }
    assert_eq!(duration_hours(t("22:30"), t("06:15")), 7.75);
}

#[test]
fn same_day_duration() {
    assert_eq!(duration_hours(t("08:00"), t("14:00")), 6.0);
    assert_eq!(parse_duration_hours("09:15", "17:45").unwrap(), 8.5);
    assert_eq!(window("22:00", "06:00").duration_hours(), 8.0);
}

#[test]
fn malformed_times_are_rejected() {
    for raw in ["24:00", "12:60", "ab:00", "12:xx", "1200", "", "12:", ":30", "-1:00", "123:00"] {
        let err = raw.parse::<TimeOfDay>().unwrap_err();
        assert!(
            matches!(err, ValidationError::MalformedTime { .. }),
            "{raw:?} gave {err:?}"
        );
    }
    assert!(parse_duration_hours("08:00", "25:00").is_err());
    assert!(TimeOfDay::new(23, 59).is_ok());
    assert_eq!(t("7:05").to_string(), "07:05");
}

#[test]
fn touching_windows_do_not_overlap() {
    let a = window("08:00", "12:00");
    let b = window("12:00", "16:00");
    assert!(!overlaps(&a, &b));
    assert!(!overlaps(&b, &a));

    let night = window("22:00", "06:00");
    let evening = window("14:00", "22:00");
    assert!(!overlaps(&night, &evening));
}

#[test]
fn overlap_is_symmetric() {
    let samples = [
        window("08:00", "12:00"),
        window("10:00", "14:00"),
        window("22:00", "06:00"),
        window("23:00", "01:00"),
        window("00:00", "02:00"),
        window("13:00", "13:00"),
        window("06:00", "22:00"),
    ];
    for a in &samples {
        for b in &samples {
            assert_eq!(overlaps(a, b), overlaps(b, a), "{a:?} / {b:?}");
        }
    }
}

#[test]
fn overnight_windows_overlap_late_shifts() {
    let night = window("22:00", "06:00");
    assert!(overlaps(&night, &window("23:00", "23:30")));
    assert!(overlaps(&night, &window("23:00", "01:00")));
    assert!(overlaps(&night, &window("21:00", "22:30")));
    // la partie après minuit appartient au lendemain
    assert!(!overlaps(&night, &window("01:00", "05:00")));
}

#[test]
fn zero_length_windows_overlap_nothing() {
    let empty = window("10:00", "10:00");
    assert!(!overlaps(&empty, &window("08:00", "12:00")));
    assert!(!overlaps(&empty, &empty));
}

#[test]
fn windows_on_other_dates_are_anchored() {
    let next = NaiveDate::from_ymd_opt(2025, 10, 2).unwrap();
    let early = ShiftWindow::parse(next, "01:00", "05:00").unwrap();
    assert!(overlaps(&window("22:00", "06:00"), &early));
    assert!(!overlaps(&ShiftWindow::parse(day(), "01:00", "05:00").unwrap(), &early));
}

#[test]
fn containment_follows_the_night_rule() {
    let avail = window("20:00", "08:00");
    assert!(avail.contains(&window("22:00", "06:00")));
    assert!(!avail.contains(&window("18:00", "02:00")));
    assert!(window("08:00", "16:00").contains(&window("08:00", "16:00")));
}

#[test]
fn out_of_range_parts_keep_the_raw_value() {
    assert_eq!(
        "24:00".parse::<TimeOfDay>().unwrap_err(),
        ValidationError::MalformedTime {
            value: "24:00".into(),
            reason: "hour must be within 0..=23",
        }
    );
    assert_eq!(
        " 7:60".parse::<TimeOfDay>().unwrap_err(),
        ValidationError::MalformedTime {
            value: " 7:60".into(),
            reason: "minute must be within 0..=59",
        }
    );
}

#[test]
fn window_duration_matches_time_arithmetic() {
    for (start, end, minutes) in [("22:00", "06:00", 480), ("08:00", "08:00", 0), ("08:00", "16:30", 510)] {
        let w = window(start, end);
        assert_eq!(w.duration_minutes(), minutes);
        assert_eq!(w.duration_minutes(), vigile::scheduler::window::duration_minutes(t(start), t(end)));
        assert_eq!(w.is_overnight(), minutes > 0 && end < start);
    }
}
