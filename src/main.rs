use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wattage::config::{Config, DEFAULT_CONFIG_FILE};
use wattage::model;
use wattage::telemetry;
use wattage::units::{self, PowerFormatter, PowerProcessor, UnitsPower};

#[derive(Parser)]
#[command(name = "wattage")]
#[command(about = "Power quantity parser and unit converter", long_about = None)]
struct Cli {
    /// Config file (default: wattage.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level, overridden by RUST_LOG (default: from config)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every power unit
    Units,

    /// Convert a power quantity (e.g., "1500 W")
    Convert {
        /// Quantity to convert
        quantity: String,

        /// Target unit, by name or symbol (default: from config)
        #[arg(short, long)]
        to: Option<String>,
    },

    /// Parse a power quantity and print it as JSON
    Parse {
        /// Quantity to parse
        quantity: String,
    },

    /// Load a power sheet and export it as JSON
    Sheet {
        /// Power sheet path
        path: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace power strings in a TOML file with magnitudes in one unit
    Normalize {
        /// TOML file path
        path: PathBuf,

        /// Target unit
        #[arg(short, long, default_value = "W")]
        to: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let log_level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    telemetry::init_tracing(log_level, config.logging.json);

    let result = match cli.command {
        Commands::Units => list_units(),
        Commands::Convert { quantity, to } => convert(&config, &quantity, to.as_deref()),
        Commands::Parse { quantity } => parse(&quantity),
        Commands::Sheet { path, output } => export_sheet(&path, output.as_deref()),
        Commands::Normalize { path, to } => normalize(&path, &to),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Config::load_from_file(path)?),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                Ok(Config::load_from_file(default_path)?)
            } else {
                Ok(Config::empty())
            }
        }
    }
}

fn list_units() -> Result<(), Box<dyn std::error::Error>> {
    println!("Units ({}):", UnitsPower::all().len());
    for unit in UnitsPower::all() {
        println!(
            "  - {:<10} {:>4}  1e{}",
            unit.name(),
            unit.symbol(),
            unit.exponent()
        );
    }
    Ok(())
}

fn convert(
    config: &Config,
    quantity: &str,
    to: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let power = units::parse_power(quantity)?;

    let mut preferences = config.unit_preferences()?;
    if let Some(to) = to {
        preferences.unit = Some(to.parse()?);
    }

    let formatter = PowerFormatter::new(preferences);
    println!("{}", formatter.format(&power)?);
    Ok(())
}

fn parse(quantity: &str) -> Result<(), Box<dyn std::error::Error>> {
    let power = units::parse_power(quantity)?;
    println!("{}", serde_json::to_string_pretty(&power)?);
    Ok(())
}

fn export_sheet(path: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let (sheet, validation) = model::load_power_sheet(path)?;

    // Print validation issues if any
    if validation.has_issues() {
        eprintln!("{}", validation);
    }

    let json = serde_json::to_string_pretty(&sheet)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        println!("Power sheet exported to {}", output_path.display());
    } else {
        println!("{}", json);
    }

    if !validation.is_valid() {
        return Err(format!("{} entries failed to load", validation.errors.len()).into());
    }

    Ok(())
}

fn normalize(path: &Path, to: &str) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let table: toml::Table = toml::from_str(&content)?;

    let processor = PowerProcessor::new(to.parse()?);
    let processed = processor.process_table(&table)?;

    println!("{}", serde_json::to_string_pretty(&processed)?);
    Ok(())
}
