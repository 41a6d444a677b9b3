#![forbid(unsafe_code)]
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use vigile::{
    config, io,
    model::{CandidateShift, GuardId, ShiftType, ShiftWindow, SiteId, Snapshot},
    report::{exit_code, DecisionRenderer, TextReport},
    scheduler::{self, Evaluator, RuleOptions, SchedulingDecision, Severity, Verdict},
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de validation de vacations de gardiennage
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON d'instantané (agents, sites, vacations)
    #[arg(long, global = true, default_value = "snapshot.json")]
    snapshot: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Args, Debug)]
struct CandidateArgs {
    #[arg(long)]
    guard: String,
    #[arg(long)]
    site: String,
    /// YYYY-MM-DD
    #[arg(long)]
    date: NaiveDate,
    /// HH:MM
    #[arg(long)]
    start: String,
    /// HH:MM (antérieure à start = vacation de nuit)
    #[arg(long)]
    end: String,
    #[arg(long, default_value = "regular")]
    shift_type: ShiftType,
    /// Politique JSON des règles
    #[arg(long)]
    policy: Option<String>,
    /// Seuil d'escalade des heures sup (remplace la politique)
    #[arg(long)]
    overtime_escalation_hours: Option<f64>,
    /// Traiter les compétences manquantes comme bloquantes
    #[arg(long)]
    strict_skills: bool,
    /// Export CSV des conflits (optionnel)
    #[arg(long)]
    report: Option<String>,
    /// Sortie JSON de la décision
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Évaluer une vacation candidate sans l'enregistrer
    Evaluate(CandidateArgs),

    /// Évaluer puis enregistrer la vacation si elle n'est pas refusée
    Schedule(CandidateArgs),

    /// Importer des vacations existantes depuis un CSV
    ImportShifts {
        #[arg(long)]
        csv: String,
    },

    /// Lister les vacations enregistrées
    List {
        #[arg(long)]
        site: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Durée d'une fenêtre HH:MM → HH:MM (passage de minuit inclus)
    Duration {
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.snapshot)?;

    let code = match cli.cmd {
        Commands::Evaluate(args) => {
            let snapshot = storage.load_or_default()?;
            let (candidate, decision) = run_evaluation(&snapshot, &args)?;
            print_decision(&candidate, &decision, &args)?;
            exit_code(decision.verdict)
        }
        Commands::Schedule(args) => {
            let mut snapshot = storage.load_or_default()?;
            let (candidate, decision) = run_evaluation(&snapshot, &args)?;
            print_decision(&candidate, &decision, &args)?;
            if decision.verdict != Verdict::Reject {
                let shift = candidate.into_existing();
                let id = shift.id.clone();
                snapshot.shifts.push(shift);
                storage.save(&snapshot)?;
                eprintln!("scheduled shift {}", id.as_str());
            } else {
                eprintln!("not scheduled: candidate rejected");
            }
            exit_code(decision.verdict)
        }
        Commands::ImportShifts { csv } => {
            let mut snapshot = storage.load_or_default()?;
            let shifts = io::import_shifts_csv(csv)?;
            println!("imported {} shift(s)", shifts.len());
            snapshot.shifts.extend(shifts);
            storage.save(&snapshot)?;
            0
        }
        Commands::List { site, date } => {
            let snapshot = storage.load_or_default()?;
            for s in snapshot.shifts.iter().filter(|s| {
                site.as_deref().map_or(true, |id| s.site_id.as_str() == id)
                    && date.map_or(true, |d| s.window.date == d)
            }) {
                println!(
                    "{} | {} | {} {}-{} | {} | {}",
                    s.id.as_str(),
                    s.site_id,
                    s.window.date,
                    s.window.start,
                    s.window.end,
                    s.guard_id,
                    s.status.as_str()
                );
            }
            0
        }
        Commands::Duration { start, end } => {
            let hours = scheduler::parse_duration_hours(&start, &end)?;
            println!("{hours}");
            0
        }
    };

    std::process::exit(code);
}

fn run_evaluation(
    snapshot: &Snapshot,
    args: &CandidateArgs,
) -> Result<(CandidateShift, SchedulingDecision)> {
    let mut opts = match &args.policy {
        Some(path) => config::load_policy_from_file(path)?,
        None => RuleOptions::default(),
    };
    if let Some(hours) = args.overtime_escalation_hours {
        opts.overtime_escalation_hours = hours;
    }
    if args.strict_skills {
        opts.skill_mismatch_severity = Severity::Error;
    }
    let evaluator = Evaluator::new(opts)?;

    let guard_id = GuardId::new(&args.guard);
    let site_id = SiteId::new(&args.site);
    let guard = snapshot
        .find_guard(&guard_id)
        .ok_or_else(|| anyhow!("unknown guard: {}", args.guard))?;
    let site = snapshot
        .find_site(&site_id)
        .ok_or_else(|| anyhow!("unknown site: {}", args.site))?;

    let window = ShiftWindow::parse(args.date, &args.start, &args.end)?;
    let candidate = CandidateShift::new(guard_id, site_id.clone(), window).with_type(args.shift_type);

    let existing = snapshot.shifts_for(&site_id, args.date);
    let decision = evaluator.evaluate(&candidate, guard, site, &existing)?;
    Ok((candidate, decision))
}

fn print_decision(
    candidate: &CandidateShift,
    decision: &SchedulingDecision,
    args: &CandidateArgs,
) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(decision)?);
    } else {
        print!("{}", TextReport.render(candidate, decision));
    }
    if let Some(path) = &args.report {
        io::export_conflicts_csv(path, decision)?;
    }
    Ok(())
}
