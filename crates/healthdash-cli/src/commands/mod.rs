pub mod cholesterol;
pub mod config;
pub mod family;
pub mod people;
pub mod treatment;

use healthdash_core::{Config, Database, DateKey};

/// Open the database named in the configuration.
pub fn open_store() -> Result<Database, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    Ok(Database::open_at(&config.database_path()?)?)
}

/// Parse `--date`, defaulting to today.
pub fn date_or_today(date: Option<String>) -> Result<DateKey, Box<dyn std::error::Error>> {
    match date {
        Some(d) => Ok(d.parse()?),
        None => Ok(DateKey::today()),
    }
}
