mod decision;
pub mod rules;
mod types;
mod validate;
pub mod window;

pub use types::{
    Conflict, ConflictKind, RuleOptions, SchedulingDecision, Severity, ValidationError, Verdict,
};
pub use window::{duration_hours, overlaps, parse_duration_hours};

use crate::model::{CandidateShift, ExistingShift, Guard, Site};

/// Évaluateur : porte uniquement les options des règles, aucun état entre deux appels.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    opts: RuleOptions,
}

impl Evaluator {
    /// Valide les options avant de les accepter.
    pub fn new(opts: RuleOptions) -> Result<Self, ValidationError> {
        opts.validate()?;
        Ok(Self { opts })
    }

    pub fn options(&self) -> &RuleOptions {
        &self.opts
    }

    /// Évalue une vacation candidate contre un instantané en lecture seule.
    pub fn evaluate(
        &self,
        candidate: &CandidateShift,
        guard: &Guard,
        site: &Site,
        existing: &[ExistingShift],
    ) -> Result<SchedulingDecision, ValidationError> {
        decision::evaluate(self, candidate, guard, site, existing)
    }
}

/// Raccourci avec les options par défaut.
pub fn evaluate(
    candidate: &CandidateShift,
    guard: &Guard,
    site: &Site,
    existing: &[ExistingShift],
) -> Result<SchedulingDecision, ValidationError> {
    Evaluator::default().evaluate(candidate, guard, site, existing)
}
