//! acctfp CLI - Command line harness for acct_fingerprint
//!
//! Reads or generates account records and prints their ADH and ALH.

use acct_fingerprint::records::{self, RecordFormat, DEFAULT_RECORD_SIZE};
use acct_fingerprint::{Config, Fingerprint, HashAlgorithm, LinearAggregator, MerkleAggregator};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "acctfp")]
#[command(about = "Order-independent Merkle and linear fingerprints over account records")]
#[command(version)]
struct Cli {
    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Path to the config file (defaults to ~/.config/acctfp/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hash algorithm (overrides the config file)
    #[arg(short, long)]
    algorithm: Option<HashAlgorithm>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Fingerprint the records in a file ("-" for stdin)
    Hash {
        /// Input file
        file: PathBuf,
        /// Size of each binary record in bytes
        #[arg(short, long, default_value_t = DEFAULT_RECORD_SIZE, conflicts_with = "hex")]
        record_size: usize,
        /// Input holds one hex-encoded record per line
        #[arg(long)]
        hex: bool,
    },

    /// Write random fixed-size records to a file
    Generate {
        /// Output file
        file: PathBuf,
        /// Number of records
        #[arg(short = 'n', long, default_value_t = 20_000)]
        count: usize,
        /// Size of each record in bytes
        #[arg(short, long, default_value_t = DEFAULT_RECORD_SIZE)]
        record_size: usize,
        /// RNG seed
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
    },

    /// Time both aggregators over random in-memory records
    Bench {
        /// Number of records
        #[arg(short = 'n', long, default_value_t = 20_000)]
        count: usize,
        /// Size of each record in bytes
        #[arg(short, long, default_value_t = DEFAULT_RECORD_SIZE)]
        record_size: usize,
        /// RNG seed
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    acct_fingerprint::logging::init(&cli.log_level);

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(algorithm) = cli.algorithm {
        config.algorithm = algorithm;
    }

    match cli.command {
        Commands::Hash {
            file,
            record_size,
            hex,
        } => {
            let format = if hex {
                RecordFormat::HexLines
            } else {
                RecordFormat::Fixed(record_size)
            };
            let records = records::read_records(&file, format)?;
            info!(records = records.len(), path = %file.display(), "read records");

            let fingerprint = Fingerprint::compute(&records, &config);
            output(&cli.format, &serde_json::to_value(fingerprint)?)?;
        }

        Commands::Generate {
            file,
            count,
            record_size,
            seed,
        } => {
            anyhow::ensure!(record_size > 0, "record size must be positive");
            let records = records::generate(count, record_size, seed);
            std::fs::write(&file, records.concat())?;
            info!(records = count, path = %file.display(), "wrote records");

            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "path": file.display().to_string(),
                    "records": count,
                    "record_size": record_size,
                    "seed": seed
                }),
            )?;
        }

        Commands::Bench {
            count,
            record_size,
            seed,
        } => {
            let records = records::generate(count, record_size, seed);

            let adh = MerkleAggregator::from_config(&config).compute(&records);
            let alh = LinearAggregator::from_config(&config).compute(&records);

            let adh_secs = adh.elapsed.as_secs_f64();
            let alh_secs = alh.elapsed.as_secs_f64();
            let ratio = if alh_secs > 0.0 {
                Some(adh_secs / alh_secs)
            } else {
                None
            };

            output(
                &cli.format,
                &serde_json::json!({
                    "algorithm": config.algorithm,
                    "records": count,
                    "adh": adh.value.to_hex(),
                    "adh_seconds": adh_secs,
                    "alh": alh.value,
                    "alh_seconds": alh_secs,
                    "ratio": ratio
                }),
            )?;
        }
    }

    Ok(())
}

fn output(format: &OutputFormat, value: &serde_json::Value) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(value)?);
        }
        OutputFormat::Text => {
            if let Some(fields) = value.as_object() {
                for (key, field) in fields {
                    match field {
                        serde_json::Value::String(s) => println!("{}: {}", key, s),
                        other => println!("{}: {}", key, other),
                    }
                }
            } else {
                println!("{}", serde_json::to_string_pretty(value)?);
            }
        }
    }
    Ok(())
}
