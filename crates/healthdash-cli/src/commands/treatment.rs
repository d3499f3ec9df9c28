//! Treatment and dose tracking commands for CLI.

use clap::Subcommand;
use healthdash_core::{adherence, adherence_history, DateKey, TreatmentDraft, TreatmentRepository};
use serde::Serialize;

use super::{date_or_today, open_store};

#[derive(Subcommand)]
pub enum TreatmentAction {
    /// Add a treatment
    Add {
        /// Display name (default: "Novo Tratamento")
        #[arg(default_value = "")]
        name: String,
        /// Strength, e.g. "50mg"
        #[arg(long, default_value = "")]
        dosage: String,
        /// Frequency label, e.g. "12 em 12h"
        #[arg(long, default_value = "")]
        frequency: String,
        /// Doses that make a complete day (default: 1)
        #[arg(long, default_value = "")]
        doses_per_day: String,
    },
    /// List treatments, newest first
    List,
    /// Mark one dose as taken
    Take {
        /// Treatment ID
        id: String,
        /// Day as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Adherence of every treatment for one day
    Status {
        /// Day as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Daily adherence of one treatment over recent days
    History {
        /// Treatment ID
        id: String,
        /// Number of days, ending today
        #[arg(long, default_value = "7")]
        days: u32,
    },
}

#[derive(Serialize)]
struct StatusRow<'a> {
    id: &'a str,
    name: &'a str,
    dosage: &'a str,
    frequency: &'a str,
    date: DateKey,
    expected: u32,
    taken: u32,
    pct: u8,
}

#[derive(Serialize)]
struct HistoryRow {
    date: DateKey,
    expected: u32,
    taken: u32,
    pct: u8,
}

pub fn run(action: TreatmentAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut repo = TreatmentRepository::open(open_store()?);

    match action {
        TreatmentAction::Add {
            name,
            dosage,
            frequency,
            doses_per_day,
        } => {
            let treatment = repo.add(
                TreatmentDraft::new(name)
                    .dosage(dosage)
                    .frequency(frequency)
                    .doses_per_day(doses_per_day),
            )?;
            eprintln!("Treatment created: {}", treatment.id);
            println!("{}", serde_json::to_string_pretty(&treatment)?);
        }
        TreatmentAction::List => {
            println!("{}", serde_json::to_string_pretty(repo.list())?);
        }
        TreatmentAction::Take { id, date } => {
            let date = date_or_today(date)?;
            match repo.mark_dose_taken(&id, date)? {
                Some(treatment) => {
                    println!("{}", serde_json::to_string_pretty(&adherence(&treatment, &date))?);
                }
                None => eprintln!("no treatment with id {id}; nothing recorded"),
            }
        }
        TreatmentAction::Status { date } => {
            let date = date_or_today(date)?;
            let rows: Vec<StatusRow> = repo
                .list()
                .iter()
                .map(|t| {
                    let a = adherence(t, &date);
                    StatusRow {
                        id: &t.id,
                        name: &t.name,
                        dosage: &t.dosage,
                        frequency: &t.frequency,
                        date,
                        expected: a.expected,
                        taken: a.taken,
                        pct: a.pct,
                    }
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        TreatmentAction::History { id, days } => {
            let treatment = repo
                .get(&id)
                .ok_or_else(|| format!("treatment not found: {id}"))?;
            let rows: Vec<HistoryRow> = adherence_history(treatment, DateKey::today(), days)
                .into_iter()
                .map(|(date, a)| HistoryRow {
                    date,
                    expected: a.expected,
                    taken: a.taken,
                    pct: a.pct,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}
