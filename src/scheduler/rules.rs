//! Les quatre règles de conflit. Fonctions pures, exécutées toutes, dans l'ordre de `RULES`.

use super::{window, Conflict, ConflictKind, RuleOptions, Severity};
use crate::model::{CandidateShift, ExistingShift, Guard, ShiftWindow, Site, SkillTag};

pub type Rule = fn(&CandidateShift, &Guard, &Site, &[ExistingShift], &RuleOptions) -> Vec<Conflict>;

/// Ordre fixe : disponibilité, heures, capacité, compétences.
pub const RULES: [(&str, Rule); 4] = [
    ("availability", check_availability),
    ("overtime", check_overtime),
    ("site_capacity", check_site_capacity),
    ("skills", check_skills),
];

pub fn check_availability(
    candidate: &CandidateShift,
    guard: &Guard,
    _site: &Site,
    _existing: &[ExistingShift],
    opts: &RuleOptions,
) -> Vec<Conflict> {
    let date = candidate.window.date;
    let Some(entry) = guard.availability.get(&date) else {
        return vec![Conflict::new(
            ConflictKind::GuardUnavailable,
            Severity::Error,
            format!("Guard {} has no availability recorded for {date}", guard.id),
        )];
    };

    if !entry.available {
        let message = match entry.reason.as_deref() {
            Some(reason) => format!("Guard {} is unavailable on {date}: {reason}", guard.id),
            None => format!("Guard {} is unavailable on {date}", guard.id),
        };
        return vec![Conflict::new(
            ConflictKind::GuardUnavailable,
            Severity::Error,
            message,
        )];
    }

    if !opts.enforce_availability_window {
        return Vec::new();
    }
    // la plage est rattachée à la date de l'entrée, pas à `window.date`
    let declared = entry
        .window
        .map(|w| ShiftWindow::new(date, w.start, w.end));
    match declared {
        Some(avail) if !avail.contains(&candidate.window) => vec![Conflict::new(
            ConflictKind::GuardUnavailable,
            Severity::Warning,
            format!(
                "Shift {}-{} falls outside guard availability window ({}-{})",
                candidate.window.start, candidate.window.end, avail.start, avail.end
            ),
        )],
        _ => Vec::new(),
    }
}

pub fn check_overtime(
    candidate: &CandidateShift,
    guard: &Guard,
    _site: &Site,
    _existing: &[ExistingShift],
    opts: &RuleOptions,
) -> Vec<Conflict> {
    let projected = guard.current_week_hours + candidate.window.duration_hours();
    if projected <= guard.max_hours_per_week {
        return Vec::new();
    }

    let severity = if projected > guard.max_hours_per_week + opts.overtime_escalation_hours {
        Severity::Error
    } else {
        Severity::Warning
    };
    vec![Conflict::new(
        ConflictKind::OvertimeLimit,
        severity,
        format!(
            "Shift would exceed weekly hour limit ({}/{} hours)",
            display_hours(projected),
            display_hours(guard.max_hours_per_week)
        ),
    )]
}

pub fn check_site_capacity(
    candidate: &CandidateShift,
    _guard: &Guard,
    site: &Site,
    existing: &[ExistingShift],
    _opts: &RuleOptions,
) -> Vec<Conflict> {
    let concurrent = existing
        .iter()
        .filter(|s| {
            s.site_id == candidate.site_id
                && s.window.date == candidate.window.date
                && s.status.is_active()
                && window::overlaps(&s.window, &candidate.window)
        })
        .count();

    let observed = concurrent + 1;
    if observed <= site.max_concurrent_guards as usize {
        return Vec::new();
    }
    vec![Conflict::new(
        ConflictKind::SiteOverlap,
        Severity::Error,
        format!(
            "Site {} would have {observed} concurrent guards (max {})",
            site.id, site.max_concurrent_guards
        ),
    )]
}

pub fn check_skills(
    _candidate: &CandidateShift,
    guard: &Guard,
    site: &Site,
    _existing: &[ExistingShift],
    opts: &RuleOptions,
) -> Vec<Conflict> {
    // BTreeSet : la différence sort déjà triée
    let missing: Vec<&str> = site
        .required_skills
        .difference(&guard.skills)
        .map(SkillTag::as_str)
        .collect();
    if missing.is_empty() {
        return Vec::new();
    }
    vec![Conflict::new(
        ConflictKind::SkillMismatch,
        opts.skill_mismatch_severity,
        format!("Guard is missing required skills: {}", missing.join(", ")),
    )]
}

/// Arrondi au centième ; `46.0` s'affiche `46`.
fn display_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}
