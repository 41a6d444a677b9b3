use crate::model::SkillTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Options des règles (politique produit, réglable par déploiement)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleOptions {
    /// Dépassement toléré au-delà du plafond hebdomadaire avant de passer en erreur.
    pub overtime_escalation_hours: f64,
    pub skill_mismatch_severity: Severity,
    /// Avertit quand la vacation sort de la plage horaire déclarée par l'agent (désactivé par défaut).
    pub enforce_availability_window: bool,
    /// Catalogue des compétences connues ; `None` accepte toute étiquette.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_skills: Option<BTreeSet<SkillTag>>,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            overtime_escalation_hours: 8.0,
            skill_mismatch_severity: Severity::Warning,
            enforce_availability_window: false,
            known_skills: None,
        }
    }
}

impl RuleOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.overtime_escalation_hours.is_finite() || self.overtime_escalation_hours < 0.0 {
            return Err(ValidationError::InvalidPolicy(
                "overtime_escalation_hours must be a finite, non-negative number",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    GuardUnavailable,
    OvertimeLimit,
    SiteOverlap,
    SkillMismatch,
}

impl ConflictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictKind::GuardUnavailable => "guard_unavailable",
            ConflictKind::OvertimeLimit => "overtime_limit",
            ConflictKind::SiteOverlap => "site_overlap",
            ConflictKind::SkillMismatch => "skill_mismatch",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub kind: ConflictKind,
    pub message: String,
    pub severity: Severity,
}

impl Conflict {
    pub fn new<M: Into<String>>(kind: ConflictKind, severity: Severity, message: M) -> Self {
        Self {
            kind,
            message: message.into(),
            severity,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accept,
    AcceptWithWarnings,
    Reject,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Accept => "accept",
            Verdict::AcceptWithWarnings => "accept_with_warnings",
            Verdict::Reject => "reject",
        }
    }
}

/// Résultat d'une évaluation : conflits dans l'ordre des règles + verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingDecision {
    pub conflicts: Vec<Conflict>,
    pub verdict: Verdict,
}

impl SchedulingDecision {
    /// `reject` dès qu'un conflit est en erreur.
    pub fn from_conflicts(conflicts: Vec<Conflict>) -> Self {
        let verdict = if conflicts.iter().any(Conflict::is_error) {
            Verdict::Reject
        } else if conflicts.is_empty() {
            Verdict::Accept
        } else {
            Verdict::AcceptWithWarnings
        };
        Self { conflicts, verdict }
    }

    pub fn is_rejected(&self) -> bool {
        self.verdict == Verdict::Reject
    }

    pub fn conflicts_of(&self, kind: ConflictKind) -> impl Iterator<Item = &Conflict> {
        self.conflicts.iter().filter(move |c| c.kind == kind)
    }
}

/// Entrée invalide : l'évaluation refuse de produire une décision.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("malformed time of day {value:?}: {reason}")]
    MalformedTime { value: String, reason: &'static str },
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("candidate guard {candidate} does not match guard record {record}")]
    GuardMismatch { candidate: String, record: String },
    #[error("candidate site {candidate} does not match site record {record}")]
    SiteMismatch { candidate: String, record: String },
    #[error("unknown skill tag: {0}")]
    UnknownSkill(String),
    #[error("invalid {field}: {value} (expected a finite, non-negative number)")]
    InvalidHours { field: &'static str, value: f64 },
    #[error("invalid policy: {0}")]
    InvalidPolicy(&'static str),
}
