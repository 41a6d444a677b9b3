#![forbid(unsafe_code)]
//! Vigile — moteur de détection de conflits pour les vacations de gardiennage.
//!
//! - Évaluation pure d'une vacation candidate (agent × site × fenêtre horaire).
//! - Quatre règles : disponibilité, plafond d'heures, capacité du site, compétences.
//! - Vacations de nuit gérées en un seul endroit (`scheduler::window`).
//! - Stockage fichiers (JSON/CSV) et CLI côté appelant, hors du moteur.

pub mod config;
pub mod io;
pub mod model;
pub mod report;
pub mod scheduler;
pub mod storage;

pub use config::{export_policy_json, load_policy_from_file};
pub use model::{
    AvailabilityEntry, CandidateShift, ExistingShift, Guard, GuardId, ShiftId, ShiftStatus,
    ShiftType, ShiftWindow, Site, SiteId, SitePriority, SkillTag, Snapshot, TimeOfDay,
};
pub use report::{DecisionRenderer, TextReport};
pub use scheduler::{
    duration_hours, evaluate, overlaps, Conflict, ConflictKind, Evaluator, RuleOptions,
    SchedulingDecision, Severity, ValidationError, Verdict,
};
pub use storage::{JsonStorage, Storage};
