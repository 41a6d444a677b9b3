use crate::scheduler::RuleOptions;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Charge une politique de règles JSON, champs absents = valeurs par défaut.
///
/// ```json
/// { "overtime_escalation_hours": 8, "skill_mismatch_severity": "warning",
///   "known_skills": ["patrol", "access_control"] }
/// ```
pub fn load_policy_from_file<P: AsRef<Path>>(path: P) -> Result<RuleOptions> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading policy {}", path.display()))?;
    let opts: RuleOptions = serde_json::from_slice(&data)
        .with_context(|| format!("parsing policy {}", path.display()))?;
    opts.validate()
        .with_context(|| format!("validating policy {}", path.display()))?;
    Ok(opts)
}

pub fn export_policy_json<P: AsRef<Path>>(path: P, opts: &RuleOptions) -> Result<()> {
    opts.validate()?;
    let json = serde_json::to_string_pretty(opts)?;
    fs::write(path, json)?;
    Ok(())
}
