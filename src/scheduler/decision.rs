use super::{rules::RULES, validate, Evaluator, SchedulingDecision, ValidationError};
use crate::model::{CandidateShift, ExistingShift, Guard, Site};
use tracing::{debug, trace};

pub(super) fn evaluate(
    evaluator: &Evaluator,
    candidate: &CandidateShift,
    guard: &Guard,
    site: &Site,
    existing: &[ExistingShift],
) -> Result<SchedulingDecision, ValidationError> {
    let opts = &evaluator.opts;
    validate::validate_inputs(candidate, guard, site, existing, opts)?;

    // pas de court-circuit : toutes les règles tournent, dans l'ordre
    let conflicts: Vec<_> = RULES
        .iter()
        .flat_map(|(name, rule)| {
            let found = rule(candidate, guard, site, existing, opts);
            trace!(rule = *name, conflicts = found.len(), "rule evaluated");
            found
        })
        .collect();

    let decision = SchedulingDecision::from_conflicts(conflicts);
    debug!(
        guard = %candidate.guard_id,
        site = %candidate.site_id,
        date = %candidate.window.date,
        shift_type = candidate.shift_type.as_str(),
        verdict = decision.verdict.as_str(),
        conflicts = decision.conflicts.len(),
        "candidate shift evaluated"
    );
    Ok(decision)
}
