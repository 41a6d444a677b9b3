use crate::scheduler::ValidationError;
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifiant fort pour Guard
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GuardId(String);

impl GuardId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GuardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifiant fort pour Site
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SiteId(String);

impl SiteId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifiant fort pour une vacation enregistrée
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftId(String);

impl ShiftId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Compétence opaque ("patrol", "access_control", ...). Ordonnée pour des messages stables.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SkillTag(String);

impl SkillTag {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Heure murale `HH:MM`, sans date ni fuseau.
///
/// Le parsing est strict : heure dans [0,23], minute dans [0,59], chiffres uniquement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::MalformedTime {
                value: format!("{hour}:{minute:02}"),
                reason: "hour must be within 0..=23",
            });
        }
        if minute > 59 {
            return Err(ValidationError::MalformedTime {
                value: format!("{hour:02}:{minute}"),
                reason: "minute must be within 0..=59",
            });
        }
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or(ValidationError::MalformedTime {
                value: format!("{hour:02}:{minute:02}"),
                reason: "not a valid time of day",
            })
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes écoulées depuis minuit.
    pub fn minutes_from_midnight(&self) -> i64 {
        i64::from(self.0.num_seconds_from_midnight() / 60)
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| ValidationError::MalformedTime {
            value: raw.to_string(),
            reason,
        };
        let (h, m) = raw.trim().split_once(':').ok_or_else(|| malformed("expected HH:MM"))?;
        let numeric = |part: &str| {
            !part.is_empty() && part.len() <= 2 && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !numeric(h) {
            return Err(malformed("hour is not numeric"));
        }
        if !numeric(m) {
            return Err(malformed("minute is not numeric"));
        }
        let hour: u32 = h.parse().map_err(|_| malformed("hour is not numeric"))?;
        let minute: u32 = m.parse().map_err(|_| malformed("minute is not numeric"))?;
        // plages vérifiées par `new`, valeur d'origine conservée dans l'erreur
        Self::new(hour, minute).map_err(|err| match err {
            ValidationError::MalformedTime { reason, .. } => malformed(reason),
            other => other,
        })
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Fenêtre d'une vacation : une date et deux heures murales.
///
/// `end < start` signifie que la vacation déborde sur `date + 1`.
/// Les calculs de durée et de chevauchement vivent dans `scheduler::window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    pub date: NaiveDate,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl ShiftWindow {
    pub fn new(date: NaiveDate, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { date, start, end }
    }

    /// Construit une fenêtre depuis des chaînes `HH:MM`.
    pub fn parse(date: NaiveDate, start: &str, end: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(date, start.parse()?, end.parse()?))
    }

    pub fn is_overnight(&self) -> bool {
        self.end < self.start
    }

    pub fn is_zero_length(&self) -> bool {
        self.start == self.end
    }
}

/// Disponibilité déclarée d'un agent pour une date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<ShiftWindow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AvailabilityEntry {
    pub fn available() -> Self {
        Self {
            available: true,
            window: None,
            reason: None,
        }
    }

    pub fn available_within(window: ShiftWindow) -> Self {
        Self {
            available: true,
            window: Some(window),
            reason: None,
        }
    }

    pub fn unavailable<R: Into<String>>(reason: Option<R>) -> Self {
        Self {
            available: false,
            window: None,
            reason: reason.map(Into::into),
        }
    }
}

/// Agent de sécurité tel que fourni par l'annuaire externe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guard {
    pub id: GuardId,
    #[serde(default)]
    pub skills: BTreeSet<SkillTag>,
    pub max_hours_per_week: f64,
    #[serde(default)]
    pub current_week_hours: f64,
    #[serde(default)]
    pub availability: BTreeMap<NaiveDate, AvailabilityEntry>,
}

impl Guard {
    pub fn new<S: AsRef<str>>(id: S, max_hours_per_week: f64) -> Self {
        Self {
            id: GuardId::new(id),
            skills: BTreeSet::new(),
            max_hours_per_week,
            current_week_hours: 0.0,
            availability: BTreeMap::new(),
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.skills.extend(skills.into_iter().map(SkillTag::new));
        self
    }

    pub fn with_week_hours(mut self, hours: f64) -> Self {
        self.current_week_hours = hours;
        self
    }

    pub fn with_availability(mut self, date: NaiveDate, entry: AvailabilityEntry) -> Self {
        self.availability.insert(date, entry);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SitePriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

/// Site gardienné
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: SiteId,
    #[serde(default)]
    pub required_skills: BTreeSet<SkillTag>,
    pub max_concurrent_guards: u32,
    #[serde(default)]
    pub priority: SitePriority,
}

impl Site {
    pub fn new<S: AsRef<str>>(id: S, max_concurrent_guards: u32) -> Self {
        Self {
            id: SiteId::new(id),
            required_skills: BTreeSet::new(),
            max_concurrent_guards,
            priority: SitePriority::default(),
        }
    }

    pub fn with_required_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.required_skills.extend(skills.into_iter().map(SkillTag::new));
        self
    }

    pub fn with_priority(mut self, priority: SitePriority) -> Self {
        self.priority = priority;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    #[default]
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl ShiftStatus {
    /// Une vacation annulée n'occupe plus le site.
    pub fn is_active(&self) -> bool {
        !matches!(self, ShiftStatus::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftStatus::Scheduled => "scheduled",
            ShiftStatus::Confirmed => "confirmed",
            ShiftStatus::InProgress => "in_progress",
            ShiftStatus::Completed => "completed",
            ShiftStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for ShiftStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scheduled" => Ok(ShiftStatus::Scheduled),
            "confirmed" => Ok(ShiftStatus::Confirmed),
            "in_progress" => Ok(ShiftStatus::InProgress),
            "completed" => Ok(ShiftStatus::Completed),
            "cancelled" => Ok(ShiftStatus::Cancelled),
            other => Err(format!("unknown shift status: {other}")),
        }
    }
}

/// Vacation déjà présente dans le stock de vacations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingShift {
    pub id: ShiftId,
    pub guard_id: GuardId,
    pub site_id: SiteId,
    pub window: ShiftWindow,
    #[serde(default)]
    pub status: ShiftStatus,
}

impl ExistingShift {
    pub fn new(guard_id: GuardId, site_id: SiteId, window: ShiftWindow, status: ShiftStatus) -> Self {
        Self {
            id: ShiftId::random(),
            guard_id,
            site_id,
            window,
            status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    #[default]
    Regular,
    Overtime,
    Emergency,
    Replacement,
}

impl ShiftType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftType::Regular => "regular",
            ShiftType::Overtime => "overtime",
            ShiftType::Emergency => "emergency",
            ShiftType::Replacement => "replacement",
        }
    }
}

impl FromStr for ShiftType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(ShiftType::Regular),
            "overtime" => Ok(ShiftType::Overtime),
            "emergency" => Ok(ShiftType::Emergency),
            "replacement" => Ok(ShiftType::Replacement),
            other => Err(format!("unknown shift type: {other}")),
        }
    }
}

/// Vacation proposée, évaluée le temps d'un appel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateShift {
    pub guard_id: GuardId,
    pub site_id: SiteId,
    pub window: ShiftWindow,
    #[serde(default)]
    pub shift_type: ShiftType,
}

impl CandidateShift {
    pub fn new(guard_id: GuardId, site_id: SiteId, window: ShiftWindow) -> Self {
        Self {
            guard_id,
            site_id,
            window,
            shift_type: ShiftType::default(),
        }
    }

    pub fn with_type(mut self, shift_type: ShiftType) -> Self {
        self.shift_type = shift_type;
        self
    }

    /// Forme persistée d'une vacation acceptée (statut `scheduled`).
    pub fn into_existing(self) -> ExistingShift {
        ExistingShift::new(
            self.guard_id,
            self.site_id,
            self.window,
            ShiftStatus::Scheduled,
        )
    }
}

/// Instantané lu par l'appelant : annuaires + stock de vacations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Snapshot {
    #[serde(default)]
    pub guards: Vec<Guard>,
    #[serde(default)]
    pub sites: Vec<Site>,
    #[serde(default)]
    pub shifts: Vec<ExistingShift>,
}

impl Snapshot {
    pub fn find_guard<'a>(&'a self, id: &GuardId) -> Option<&'a Guard> {
        self.guards.iter().find(|g| &g.id == id)
    }
    pub fn find_site<'a>(&'a self, id: &SiteId) -> Option<&'a Site> {
        self.sites.iter().find(|s| &s.id == id)
    }
    /// Vacations d'un site pour une date, annulées comprises.
    pub fn shifts_for(&self, site: &SiteId, date: NaiveDate) -> Vec<ExistingShift> {
        self.shifts
            .iter()
            .filter(|s| &s.site_id == site && s.window.date == date)
            .cloned()
            .collect()
    }
}
