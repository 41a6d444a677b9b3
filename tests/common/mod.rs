#![allow(dead_code)]
use chrono::NaiveDate;
use vigile::{
    AvailabilityEntry, CandidateShift, ExistingShift, Guard, GuardId, ShiftStatus, ShiftWindow,
    Site, SiteId,
};

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
}

pub fn window(start: &str, end: &str) -> ShiftWindow {
    ShiftWindow::parse(day(), start, end).unwrap()
}

/// Agent disponible, 36/40 h, compétence `patrol`.
pub fn guard() -> Guard {
    Guard::new("g-1", 40.0)
        .with_week_hours(36.0)
        .with_skills(["patrol"])
        .with_availability(day(), AvailabilityEntry::available())
}

pub fn site() -> Site {
    Site::new("hq", 2).with_required_skills(["patrol"])
}

pub fn candidate(start: &str, end: &str) -> CandidateShift {
    CandidateShift::new(GuardId::new("g-1"), SiteId::new("hq"), window(start, end))
}

pub fn existing(guard: &str, start: &str, end: &str, status: ShiftStatus) -> ExistingShift {
    ExistingShift::new(GuardId::new(guard), SiteId::new("hq"), window(start, end), status)
}
