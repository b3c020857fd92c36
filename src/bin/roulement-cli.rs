#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use roulement::{
    detect_conflicts, io, week_start_for, Day, GenerateOptions, Planner, ReportRenderer,
    TextReport,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de planning hebdomadaire à partir de préférences classées
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Effectif visé par créneau
    #[arg(long, global = true, default_value_t = 2)]
    staff_per_shift: usize,

    /// Jours travaillés maximum par personne et par semaine
    #[arg(long, global = true, default_value_t = 5)]
    weekly_cap: usize,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer le planning de la semaine
    Generate {
        /// CSV des préférences (`Name,Monday,...,Sunday`)
        #[arg(long)]
        csv: String,
        /// Graine pour un tirage reproductible
        #[arg(long)]
        seed: Option<u64>,
        /// Date dans la semaine planifiée (YYYY-MM-DD), par défaut aujourd'hui
        #[arg(long)]
        week: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        /// Rapport texte (sinon affiché sur stdout)
        #[arg(long)]
        out_txt: Option<String>,
    },

    /// Afficher les préférences importées
    Preferences {
        #[arg(long)]
        csv: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let opts = GenerateOptions {
        staff_per_shift: cli.staff_per_shift,
        weekly_cap: cli.weekly_cap,
    };
    let mut planner = Planner::with_options(opts)?;

    let code = match cli.cmd {
        Commands::Generate {
            csv,
            seed,
            week,
            out_json,
            out_csv,
            out_txt,
        } => {
            planner
                .import_csv(&csv)
                .with_context(|| format!("importing {csv}"))?;

            let day = match week {
                Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .with_context(|| format!("invalid --week date: {raw}"))?,
                None => Utc::now().date_naive(),
            };
            let week_start = week_start_for(day);

            let mut rng: Box<dyn RngCore> = match seed {
                Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
                None => Box::new(rand::thread_rng()),
            };
            let schedule = planner.generate(&mut *rng);

            let conflicts = detect_conflicts(&schedule.roster, opts);
            if !conflicts.is_empty() {
                bail!("generated roster violates {} constraint(s)", conflicts.len());
            }

            if let Some(path) = out_json {
                io::export_schedule_json(path, &schedule, Some(week_start))?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &schedule)?;
            }
            let report = TextReport::for_week(week_start).render(&schedule);
            match out_txt {
                Some(path) => io::write_atomic(path, report.as_bytes())?,
                None => print!("{report}"),
            }

            if schedule.diagnostics.is_clean() {
                0
            } else {
                eprintln!(
                    "Found {} understaffed slot(s)",
                    schedule.diagnostics.len()
                );
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Preferences { csv } => {
            planner
                .import_csv(&csv)
                .with_context(|| format!("importing {csv}"))?;
            for employee in planner.store().all_employees() {
                println!("{}", employee.name);
                for day in Day::ALL {
                    let prefs: Vec<&str> = employee
                        .preferences(day)
                        .iter()
                        .map(|s| s.as_str())
                        .collect();
                    if !prefs.is_empty() {
                        println!("  {day}: {}", prefs.join(", "));
                    }
                }
            }
            0
        }
    };

    std::process::exit(code);
}
