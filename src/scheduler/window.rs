//! Arithmétique horaire et chevauchement des fenêtres.
//!
//! Seul endroit où la règle de passage de minuit est appliquée : `end < start`
//! ajoute 24 h à la fin, `end == start` donne une durée nulle.

use super::ValidationError;
use crate::model::{ShiftWindow, TimeOfDay};
use chrono::{Duration, NaiveDateTime};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Durée en minutes entre deux heures murales (passage de minuit inclus).
pub fn duration_minutes(start: TimeOfDay, end: TimeOfDay) -> i64 {
    span_minutes(start, end, end < start)
}

fn span_minutes(start: TimeOfDay, end: TimeOfDay, overnight: bool) -> i64 {
    let span = end.minutes_from_midnight() - start.minutes_from_midnight();
    if overnight {
        span + MINUTES_PER_DAY
    } else {
        span
    }
}

/// Durée en heures entre deux heures murales.
pub fn duration_hours(start: TimeOfDay, end: TimeOfDay) -> f64 {
    duration_minutes(start, end) as f64 / 60.0
}

/// Variante sur chaînes `HH:MM` ; refuse toute heure mal formée.
pub fn parse_duration_hours(start: &str, end: &str) -> Result<f64, ValidationError> {
    Ok(duration_hours(start.parse()?, end.parse()?))
}

/// Chevauchement demi-ouvert `[start, end)` : deux vacations bout à bout ne se chevauchent pas.
pub fn overlaps(a: &ShiftWindow, b: &ShiftWindow) -> bool {
    if a.is_zero_length() || b.is_zero_length() {
        return false;
    }
    let (a_start, a_end) = a.bounds();
    let (b_start, b_end) = b.bounds();
    a_start < b_end && b_start < a_end
}

impl ShiftWindow {
    pub fn duration_minutes(&self) -> i64 {
        span_minutes(self.start, self.end, self.is_overnight())
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes() as f64 / 60.0
    }

    /// Bornes absolues ancrées sur `date` ; la fin tombe le lendemain pour une vacation de nuit.
    pub fn bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        let start = self.date.and_time(self.start.as_naive());
        (start, start + Duration::minutes(self.duration_minutes()))
    }

    /// `other` tient entièrement dans `self`.
    pub fn contains(&self, other: &ShiftWindow) -> bool {
        let (start, end) = self.bounds();
        let (other_start, other_end) = other.bounds();
        start <= other_start && other_end <= end
    }
}
