use super::{RuleOptions, ValidationError};
use crate::model::{CandidateShift, ExistingShift, Guard, Site, SkillTag};

/// Contrôle les entrées avant toute règle ; aucune valeur par défaut n'est devinée.
pub(super) fn validate_inputs(
    candidate: &CandidateShift,
    guard: &Guard,
    site: &Site,
    existing: &[ExistingShift],
    opts: &RuleOptions,
) -> Result<(), ValidationError> {
    opts.validate()?;

    if guard.id.as_str().trim().is_empty() {
        return Err(ValidationError::MissingField("guard.id"));
    }
    if site.id.as_str().trim().is_empty() {
        return Err(ValidationError::MissingField("site.id"));
    }
    if candidate.guard_id.as_str().trim().is_empty() {
        return Err(ValidationError::MissingField("candidate.guard_id"));
    }
    if candidate.site_id.as_str().trim().is_empty() {
        return Err(ValidationError::MissingField("candidate.site_id"));
    }
    if candidate.guard_id != guard.id {
        return Err(ValidationError::GuardMismatch {
            candidate: candidate.guard_id.to_string(),
            record: guard.id.to_string(),
        });
    }
    if candidate.site_id != site.id {
        return Err(ValidationError::SiteMismatch {
            candidate: candidate.site_id.to_string(),
            record: site.id.to_string(),
        });
    }

    check_hours("guard.max_hours_per_week", guard.max_hours_per_week)?;
    check_hours("guard.current_week_hours", guard.current_week_hours)?;

    if existing
        .iter()
        .any(|s| s.guard_id.as_str().trim().is_empty() || s.site_id.as_str().trim().is_empty())
    {
        return Err(ValidationError::MissingField("existing_shift.guard_id/site_id"));
    }

    if let Some(catalog) = &opts.known_skills {
        check_known(catalog, guard.skills.iter())?;
        check_known(catalog, site.required_skills.iter())?;
    }

    Ok(())
}

fn check_hours(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidHours { field, value });
    }
    Ok(())
}

fn check_known<'a>(
    catalog: &std::collections::BTreeSet<SkillTag>,
    mut tags: impl Iterator<Item = &'a SkillTag>,
) -> Result<(), ValidationError> {
    match tags.find(|tag| !catalog.contains(*tag)) {
        Some(unknown) => Err(ValidationError::UnknownSkill(unknown.as_str().to_string())),
        None => Ok(()),
    }
}
