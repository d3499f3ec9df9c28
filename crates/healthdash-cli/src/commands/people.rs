//! Shared-access people commands for CLI.

use clap::Subcommand;
use healthdash_core::{HealthRecords, SharedPerson};

use super::open_store;

#[derive(Subcommand)]
pub enum PeopleAction {
    /// Grant someone access
    Add {
        /// Person's name
        name: String,
        /// Relationship, e.g. "filha"
        #[arg(long, default_value = "")]
        relationship: String,
        /// Email or phone
        #[arg(long, default_value = "")]
        contact: String,
    },
    /// List people with access
    List,
}

pub fn run(action: PeopleAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = HealthRecords::open(open_store()?);

    match action {
        PeopleAction::Add {
            name,
            relationship,
            contact,
        } => {
            let person = SharedPerson {
                relationship,
                contact,
                ..SharedPerson::new(name)
            };
            records.add_shared_person(person.clone())?;
            println!("{}", serde_json::to_string_pretty(&person)?);
        }
        PeopleAction::List => {
            println!("{}", serde_json::to_string_pretty(records.shared_people())?);
        }
    }
    Ok(())
}
