use crate::model::{ExistingShift, GuardId, ShiftStatus, ShiftWindow, SiteId};
use crate::scheduler::SchedulingDecision;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;

/// Import de vacations existantes: header `guard_id,site_id,date,start,end[,status]`
///
/// `date` au format `YYYY-MM-DD`, `start`/`end` en `HH:MM` ; statut absent = `scheduled`.
pub fn import_shifts_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<ExistingShift>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let row = line + 2;
        let guard = rec.get(0).context("missing guard_id")?.trim();
        let site = rec.get(1).context("missing site_id")?.trim();
        if guard.is_empty() || site.is_empty() {
            bail!("invalid shift row {row} (empty guard_id or site_id)");
        }
        let date = rec.get(2).context("missing date")?.trim();
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("invalid date on row {row}: {date}"))?;
        let start = rec.get(3).context("missing start")?;
        let end = rec.get(4).context("missing end")?;
        let window = ShiftWindow::parse(date, start, end)
            .with_context(|| format!("invalid time window on row {row}"))?;
        let status = match rec.get(5).map(str::trim) {
            Some(raw) if !raw.is_empty() => raw
                .parse::<ShiftStatus>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("invalid status on row {row}"))?,
            _ => ShiftStatus::Scheduled,
        };
        out.push(ExistingShift::new(
            GuardId::new(guard),
            SiteId::new(site),
            window,
            status,
        ));
    }
    Ok(out)
}

/// Export CSV des conflits: header `kind,severity,message`
pub fn export_conflicts_csv<P: AsRef<Path>>(
    path: P,
    decision: &SchedulingDecision,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["kind", "severity", "message"])?;
    for c in &decision.conflicts {
        w.write_record([c.kind.as_str(), c.severity.as_str(), c.message.as_str()])?;
    }
    w.flush()?;
    Ok(())
}
