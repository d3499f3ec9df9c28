use clap::Subcommand;
use healthdash_core::HealthRecords;

use super::open_store;

#[derive(Subcommand)]
pub enum FamilyAction {
    /// Add a family history entry
    Add {
        /// Free text, e.g. "Diabetes tipo 2 (mãe)"
        text: String,
    },
    /// List family history entries
    List,
}

pub fn run(action: FamilyAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = HealthRecords::open(open_store()?);

    match action {
        FamilyAction::Add { text } => {
            records.add_family_history(text)?;
            println!("{}", serde_json::to_string_pretty(records.family_history())?);
        }
        FamilyAction::List => {
            println!("{}", serde_json::to_string_pretty(records.family_history())?);
        }
    }
    Ok(())
}
