//! CLI entry point for the `Vayu` dashboard

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vayu::config::VayuConfig;
use vayu::dashboard::{self, Tab};
use vayu::error::VayuError;
use vayu::{cities, web};

#[derive(Parser)]
#[command(
    name = "vayu",
    version,
    about = "Simulated air-quality dashboard for Indian cities"
)]
struct Cli {
    /// Path to a configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose diagnostics
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the dashboard for a user and city
    Dashboard {
        /// Your name, used in the greeting
        #[arg(long)]
        name: String,
        /// City to look up (case-insensitive)
        #[arg(long)]
        city: String,
        /// Tab to render
        #[arg(long, value_enum, default_value = "overview")]
        tab: Tab,
        /// Skip the simulated loading delays
        #[arg(long)]
        fast: bool,
    },
    /// List the monitored cities with their baseline AQI
    Cities,
    /// Run the HTTP API server
    Serve {
        /// Port override for the API server
        #[arg(long)]
        port: Option<u16>,
    },
}

fn init_tracing(config: &VayuConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone();
    let config = VayuConfig::load_from_path(config_path.clone())?;
    init_tracing(&config, cli.verbose);

    if cli.verbose {
        let shown_path = config_path
            .or_else(VayuConfig::get_config_path)
            .unwrap_or_else(|| PathBuf::from("config.toml"));
        println!("Using config from: {}", shown_path.display());
        println!("Log level: {}", config.logging.level);
        println!("Server port: {}", config.server.port);
    }

    match cli.command {
        Some(Command::Dashboard {
            name,
            city,
            tab,
            fast,
        }) => {
            if name.trim().is_empty() {
                return Err(VayuError::validation("Name cannot be empty").into());
            }
            if city.trim().is_empty() {
                return Err(VayuError::validation("City cannot be empty").into());
            }
            dashboard::run(&name, &city, tab, fast, &config).await?;
        }
        Some(Command::Cities) => {
            println!("Monitored cities:");
            for city in cities::registry() {
                println!("  {:<16} AQI {:>3}  {}", city.name, city.aqi, city.quality);
            }
        }
        Some(Command::Serve { port }) => {
            let mut config = config;
            if let Some(port) = port {
                config.server.port = port;
            }
            web::run(config).await?;
        }
        None => {
            println!("Vayu — simulated air-quality dashboard (mock data, no setup required)");
            println!();
            println!("Try:");
            println!("  vayu cities");
            println!("  vayu dashboard --name Asha --city Delhi");
            println!("  vayu serve");
        }
    }

    Ok(())
}
