#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use permanence::{
    io,
    model::{Person, Roster, SlotKind},
    render::{ScheduleRenderer, TextTable},
    storage::{JsonStorage, Storage},
    Engine, EngineOptions, ExhaustionPolicy,
};
use rand::{rngs::StdRng, SeedableRng};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de tableaux de permanence (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de plan (effectif, fériés, dernier tableau)
    #[arg(long, global = true, default_value = "plan.json")]
    plan: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Importer des personnes depuis un CSV (`name[,tags]`)
    ImportPeople {
        #[arg(long)]
        csv: String,
    },

    /// Ajouter une personne
    AddPerson {
        #[arg(long)]
        name: String,
        /// Tags séparés par `;` (ex. `night-ineligible`)
        #[arg(long)]
        tags: Option<String>,
    },

    /// Déclarer un jour férié (YYYY-MM-DD, idempotent)
    AddHoliday {
        #[arg(long)]
        date: String,
    },

    /// Générer le tableau sur une période inclusive
    Generate {
        /// YYYY-MM-DD
        #[arg(long)]
        start: String,
        /// YYYY-MM-DD
        #[arg(long)]
        end: String,
        /// Graine du générateur aléatoire (résultat reproductible)
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        day_shift_cap: u32,
        #[arg(long, default_value_t = 100)]
        max_draws: u32,
        /// Échouer au premier créneau impossible au lieu de le laisser vide
        #[arg(long)]
        strict: bool,
    },

    /// Afficher le dernier tableau généré
    Show,

    /// Exporter le dernier tableau
    Export {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Revalider le dernier tableau contre les contraintes
    Check {
        #[arg(long, default_value_t = 1)]
        day_shift_cap: u32,
    },

    /// Échanger un créneau entre deux jours
    Swap {
        /// YYYY-MM-DD
        #[arg(long)]
        date_a: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date_b: String,
        /// `day` ou `night`
        #[arg(long)]
        slot: String,
    },
}

fn parse_slot(raw: &str) -> Result<SlotKind> {
    match raw {
        "day" => Ok(SlotKind::Day),
        "night" => Ok(SlotKind::Night),
        other => bail!("unknown slot kind: {other} (expected `day` or `night`)"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.plan)?;
    let mut plan = storage.load().unwrap_or_default();

    let code = match cli.cmd {
        Commands::ImportPeople { csv } => {
            let people = io::import_people_csv(csv)?;
            plan.people.extend(people);
            storage.save(&plan)?;
            0
        }
        Commands::AddPerson { name, tags } => {
            let mut person = Person::new(name);
            if let Some(raw) = tags {
                person.tags = raw
                    .split(';')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(io::parse_tag)
                    .collect();
            }
            plan.people.push(person);
            storage.save(&plan)?;
            0
        }
        Commands::AddHoliday { date } => {
            let date = io::parse_date(&date)?;
            if !plan.holidays.insert(date) {
                println!("holiday already declared: {date}");
            }
            storage.save(&plan)?;
            0
        }
        Commands::Generate {
            start,
            end,
            seed,
            day_shift_cap,
            max_draws,
            strict,
        } => {
            let start = io::parse_date(&start)?;
            let end = io::parse_date(&end)?;
            let opts = EngineOptions {
                day_shift_cap,
                max_draws,
                on_exhausted: if strict {
                    ExhaustionPolicy::Fail
                } else {
                    ExhaustionPolicy::RecordUnfilled
                },
            };
            let roster = Roster::from_people(plan.people.clone());
            let engine = Engine::new(roster, plan.holidays.clone(), opts);

            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            let schedule = engine.generate(start, end, &mut rng)?;

            let unfilled = schedule.unfilled_slots();
            println!(
                "{} day(s) scheduled ({} slot(s) unfilled)",
                schedule.entries.len(),
                unfilled
            );
            plan.schedule = Some(schedule);
            storage.save(&plan)?;
            // Code 2 = WARNING/INCOMPLETE
            if unfilled > 0 {
                2
            } else {
                0
            }
        }
        Commands::Show => {
            let Some(schedule) = plan.schedule.as_ref() else {
                bail!("no schedule generated yet");
            };
            print!("{}", TextTable.render(schedule));
            0
        }
        Commands::Export { out_json, out_csv } => {
            let Some(schedule) = plan.schedule.as_ref() else {
                bail!("no schedule generated yet");
            };
            if let Some(path) = out_json {
                io::export_schedule_json(path, schedule)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, schedule)?;
            }
            0
        }
        Commands::Check { day_shift_cap } => {
            let Some(schedule) = plan.schedule.as_ref() else {
                bail!("no schedule generated yet");
            };
            let opts = EngineOptions {
                day_shift_cap,
                ..EngineOptions::default()
            };
            let roster = Roster::from_people(plan.people.clone());
            let engine = Engine::new(roster, plan.holidays.clone(), opts);
            let violations = engine.audit(schedule);
            let unfilled = schedule.unfilled_slots();
            if violations.is_empty() && unfilled == 0 {
                println!("OK: no violations");
                0
            } else {
                for v in &violations {
                    eprintln!(
                        "{} {} {:?} {}",
                        v.date,
                        v.slot,
                        v.kind,
                        v.person.as_deref().unwrap_or("-")
                    );
                }
                eprintln!(
                    "Found {} violation(s), {} unfilled slot(s)",
                    violations.len(),
                    unfilled
                );
                2
            }
        }
        Commands::Swap {
            date_a,
            date_b,
            slot,
        } => {
            let date_a = io::parse_date(&date_a)?;
            let date_b = io::parse_date(&date_b)?;
            let kind = parse_slot(&slot)?;
            let Some(mut schedule) = plan.schedule.take() else {
                bail!("no schedule generated yet");
            };
            let roster = Roster::from_people(plan.people.clone());
            let engine = Engine::new(roster, plan.holidays.clone(), EngineOptions::default());
            engine.swap(&mut schedule, date_a, date_b, kind)?;
            plan.schedule = Some(schedule);
            storage.save(&plan)?;
            0
        }
    };

    std::process::exit(code);
}
