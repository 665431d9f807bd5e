use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

use airwise_cli::config::{self, AirwiseConfig};
use airwise_cli::render;
use airwise_cli::report::Assessment;
use airwise_core::models::location::Location;
use airwise_core::models::medical::MedicalFactors;
use airwise_core::models::reading::EnvironmentalReading;
use airwise_openmeteo::ReadingSource;
use airwise_openmeteo::cache::CachedSource;
use airwise_openmeteo::client::OpenMeteoClient;

#[derive(Parser)]
#[command(name = "airwise")]
#[command(version)]
#[command(about = "Environmental asthma risk index from current weather and air quality", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch current conditions and print the risk assessment
    Assess(AssessArgs),

    /// Print the factor weight table
    Weights,

    /// Manage the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args)]
struct AssessArgs {
    /// Location as LAT,LON (repeatable; defaults to the configured location)
    #[arg(short, long = "location", value_name = "LAT,LON", allow_hyphen_values = true)]
    locations: Vec<Location>,

    /// Score a reading from a JSON file instead of fetching
    #[arg(short, long, conflicts_with = "locations")]
    input: Option<PathBuf>,

    /// History of severe attacks or hospitalisation (self-reported)
    #[arg(long)]
    severe_history: bool,

    /// Recent symptoms or flare-up (self-reported)
    #[arg(long)]
    recent_flare: bool,

    /// Poor control or frequent reliever use (self-reported)
    #[arg(long)]
    poor_control: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a config file
    Init {
        /// Default location as LAT,LON
        #[arg(short, long, value_name = "LAT,LON", allow_hyphen_values = true)]
        location: Option<Location>,

        /// HTTP timeout for Open-Meteo requests, in seconds
        #[arg(
            long,
            default_value_t = config::DEFAULT_HTTP_TIMEOUT_SECS,
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        timeout_secs: u64,

        /// How long to reuse a reading for the same location, in seconds
        #[arg(long, default_value_t = config::DEFAULT_CACHE_TTL_SECS)]
        cache_ttl_secs: u64,

        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if cli.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Assess(args) => assess(args),
        Commands::Weights => {
            print!("{}", render::render_weights(airwise_engine::weights()));
            Ok(())
        }
        Commands::Config { action } => run_config(action),
    }
}

fn assess(args: AssessArgs) -> Result<()> {
    let medical = MedicalFactors {
        severe_attack_history: args.severe_history,
        recent_flare_up: args.recent_flare,
        poor_control: args.poor_control,
    };

    let assessments = match &args.input {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read reading from {}", path.display()))?;
            let reading = EnvironmentalReading::from_json(&json)
                .wrap_err_with(|| format!("invalid reading in {}", path.display()))?;
            vec![Assessment::new(None, reading, medical)]
        }
        None => {
            let config = config::load_or_default()?;
            let locations = if args.locations.is_empty() {
                vec![config.default_location]
            } else {
                args.locations.clone()
            };

            let source = CachedSource::new(
                OpenMeteoClient::new(config.http_timeout()),
                config.cache_ttl(),
            );
            locations
                .into_iter()
                .map(|location| -> Result<Assessment> {
                    let reading = source
                        .current(location)
                        .wrap_err_with(|| format!("fetch failed for {location}"))?;
                    Ok(Assessment::new(Some(location), reading, medical))
                })
                .collect::<Result<Vec<_>>>()?
        }
    };

    match args.format {
        OutputFormat::Text => {
            let reports: Vec<String> = assessments.iter().map(render::render_text).collect();
            print!("{}", reports.join("\n"));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&assessments)?);
        }
    }
    Ok(())
}

fn run_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init {
            location,
            timeout_secs,
            cache_ttl_secs,
            force,
        } => {
            if config::has_config() && !force {
                return Err(eyre::eyre!(
                    "config already exists at {}; pass --force to overwrite",
                    config::config_path()?.display()
                ));
            }
            let config = AirwiseConfig {
                http_timeout_secs: timeout_secs,
                cache_ttl_secs,
                ..AirwiseConfig::new(location.unwrap_or_default())
            };
            let path = config::save_config(&config)?;
            println!("wrote {}", path.display());
            Ok(())
        }
        ConfigAction::Show => {
            let config = config::load_or_default()?;
            if !config::has_config() {
                println!("# no config file; showing defaults");
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}
