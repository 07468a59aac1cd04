//! NeuroLens CLI
//!
//! Command-line companion for the NeuroLens site:
//! - Run the text-preview simulator in a terminal
//! - Print the route table and the developer portal data
//! - Generate a default config file

use clap::{Parser, Subcommand, ValueEnum};
use neurolens::config::{generate_default_config, Config, LoggingConfig};
use neurolens::portal;
use neurolens::simulator::{
    DashboardSession, RandomSource, RetentionPercent, RngSource, SimulationOutput, Simulator,
};
use neurolens::site::Route;
use neurolens::Notification;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "neurolens-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "NeuroLens demo tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Log simulator internals to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the text-preview simulator once
    Simulate {
        /// Text to preview ("-" reads stdin)
        text: Option<String>,
        /// Read the text from a file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Summary length in percent (10-90, steps of 10)
        #[arg(short, long)]
        retention: Option<u8>,
        /// Seed for a reproducible sentiment draw
        #[arg(long)]
        seed: Option<u64>,
        /// Override the processing delay (ms)
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the site's routes
    Routes,

    /// Print the developer portal data
    Portal,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.config.as_deref())?;

    if cli.verbose {
        neurolens::logging::init(&LoggingConfig {
            level: "debug".to_string(),
            ..config.logging.clone()
        })?;
    }

    match cli.command {
        Commands::Simulate {
            text,
            file,
            retention,
            seed,
            delay_ms,
        } => {
            let text = read_input(text, file)?;
            let retention = match retention {
                Some(pct) => RetentionPercent::new(pct)?,
                None => config.simulator.default_retention,
            };
            let delay = delay_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.simulator.delay());

            let rng: Box<dyn RandomSource + Send> = match seed {
                Some(seed) => Box::new(RngSource::seeded(seed)),
                None => Box::new(RngSource::from_entropy()),
            };

            let mut session = DashboardSession::with_retention(retention);
            session.set_text(text);

            let (simulator, mut notices) = Simulator::with_delay(session, rng, delay);

            let result = match simulator.trigger().await {
                Ok(handle) => {
                    if cli.format == OutputFormat::Text {
                        eprintln!("Processing... (summary length {})", retention);
                    }
                    Ok(handle.await?)
                }
                Err(e) => Err(e),
            };

            drop(simulator);
            while let Some(notice) = notices.recv().await {
                print_notice(&notice);
            }

            let output = result?;
            print_output(&output, cli.format)?;
        }

        Commands::Routes => match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&Route::ALL)?),
            OutputFormat::Text => {
                println!("{:<12} {}", "Path", "Label");
                println!("{}", "-".repeat(32));
                for route in Route::ALL {
                    println!("{:<12} {}", route.path(), route.label());
                }
            }
        },

        Commands::Portal => match cli.format {
            OutputFormat::Json => {
                let data = serde_json::json!({
                    "stats": portal::stats(),
                    "recent_activity": portal::recent_activity(),
                    "feature_toggles": portal::feature_toggles(),
                    "analytics": portal::analytics_highlights(),
                });
                println!("{}", serde_json::to_string_pretty(&data)?);
            }
            OutputFormat::Text => print_portal(),
        },

        Commands::Config { output } => {
            let content = generate_default_config();

            if let Some(path) = output {
                std::fs::write(&path, &content)?;
                println!("Config written to: {:?}", path);
            } else {
                print!("{}", content);
            }
        }
    }

    Ok(())
}

/// Resolve the simulator input from the argument, a file, or stdin
fn read_input(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(path) = file {
        return Ok(std::fs::read_to_string(path)?);
    }

    match text {
        Some(text) if text == "-" => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(text) => Ok(text),
        None => Ok(String::new()),
    }
}

fn print_notice(notice: &Notification) {
    let marker = if notice.is_destructive() { "✕" } else { "✓" };
    eprintln!("{} {} - {}", marker, notice.title, notice.description);
}

fn print_output(output: &SimulationOutput, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(output)?),
        OutputFormat::Text => {
            println!("Sentiment: {} {}", output.sentiment.icon(), output.sentiment);
            println!();
            println!("{}", output.preview);
        }
    }
    Ok(())
}

fn print_portal() {
    println!("{:<20} {:<10} {}", "Stat", "Value", "Change");
    println!("{}", "-".repeat(42));
    for stat in portal::stats() {
        let arrow = if stat.is_increase() { "↑" } else { "↓" };
        println!("{:<20} {:<10} {} {}", stat.label, stat.value, arrow, stat.change);
    }

    println!();
    println!("Recent Activity");
    println!("{}", "-".repeat(42));
    for entry in portal::recent_activity() {
        let marker = if entry.status.is_success() { "✓" } else { "✕" };
        println!(
            "{} {:<16} {:<8} {}",
            marker, entry.endpoint, entry.age, entry.response_time
        );
    }
}
