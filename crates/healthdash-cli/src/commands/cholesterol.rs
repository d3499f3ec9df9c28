//! Cholesterol reading commands for CLI.

use clap::Subcommand;
use healthdash_core::{plot, CholesterolSample, Config, DateKey, HealthRecords, ValidationError};

use super::open_store;

#[derive(Subcommand)]
pub enum CholesterolAction {
    /// Record a reading
    Add {
        /// Total cholesterol, mg/dL
        value: String,
        /// Label for the reading (default: today as YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// List readings in recorded order
    List,
    /// Plot readings as JSON geometry or an SVG document
    Chart {
        /// Emit SVG instead of JSON
        #[arg(long)]
        svg: bool,
    },
}

pub fn run(action: CholesterolAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = HealthRecords::open(open_store()?);

    match action {
        CholesterolAction::Add { value, date } => {
            let parsed = value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ValidationError::InvalidNumber {
                    field: "value".into(),
                    value: value.clone(),
                })?;
            let sample = CholesterolSample {
                date: date.unwrap_or_else(|| DateKey::today().to_string()),
                value: parsed,
            };
            records.add_cholesterol(sample.clone())?;
            println!("{}", serde_json::to_string_pretty(&sample)?);
        }
        CholesterolAction::List => {
            println!("{}", serde_json::to_string_pretty(records.cholesterol())?);
        }
        CholesterolAction::Chart { svg } => {
            let config = Config::load_or_default();
            let frame = config.chart.frame();
            let Some(plot) = plot(records.cholesterol(), &frame) else {
                tracing::info!("no cholesterol readings to chart");
                return Ok(());
            };
            if svg {
                print!("{}", plot.to_svg(&frame, &config.chart.stroke));
            } else {
                println!("{}", serde_json::to_string_pretty(&plot)?);
            }
        }
    }
    Ok(())
}
