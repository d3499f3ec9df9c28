use clap::{Parser, Subcommand};
use healthdash_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "healthdash", version, about = "HealthDash CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Treatments and dose tracking
    Treatment {
        #[command(subcommand)]
        action: commands::treatment::TreatmentAction,
    },
    /// Cholesterol readings and chart
    Cholesterol {
        #[command(subcommand)]
        action: commands::cholesterol::CholesterolAction,
    },
    /// People with shared access
    People {
        #[command(subcommand)]
        action: commands::people::PeopleAction,
    },
    /// Family medical history
    Family {
        #[command(subcommand)]
        action: commands::family::FamilyAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Config::load_or_default().log.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Commands::Treatment { action } => commands::treatment::run(action),
        Commands::Cholesterol { action } => commands::cholesterol::run(action),
        Commands::People { action } => commands::people::run(action),
        Commands::Family { action } => commands::family::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
