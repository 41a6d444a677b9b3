use crate::model::CandidateShift;
use crate::scheduler::{SchedulingDecision, Verdict};
use std::fmt::Write;

/// Permet de customiser le rendu d'une décision (terminal, mail, etc.).
pub trait DecisionRenderer {
    fn render(&self, candidate: &CandidateShift, decision: &SchedulingDecision) -> String;
}

/// Rendu texte brut, une ligne par conflit, dans l'ordre des règles.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl DecisionRenderer for TextReport {
    fn render(&self, candidate: &CandidateShift, decision: &SchedulingDecision) -> String {
        let w = &candidate.window;
        let mut out = format!(
            "{guard} @ {site} | {date} {start}-{end} ({hours}h, {kind})\nverdict: {verdict}\n",
            guard = candidate.guard_id,
            site = candidate.site_id,
            date = w.date,
            start = w.start,
            end = w.end,
            hours = w.duration_hours(),
            kind = candidate.shift_type.as_str(),
            verdict = decision.verdict.as_str(),
        );
        for c in &decision.conflicts {
            // write! sur String est infaillible
            let _ = writeln!(
                out,
                "  [{}] {}: {}",
                c.severity.as_str(),
                c.kind.as_str(),
                c.message
            );
        }
        out
    }
}

/// Code de sortie CLI associé au verdict (2 = avertissements, 3 = refus).
pub fn exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Accept => 0,
        Verdict::AcceptWithWarnings => 2,
        Verdict::Reject => 3,
    }
}
