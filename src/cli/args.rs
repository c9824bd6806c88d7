//! Command line argument parsing for the carematch CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::Result;

/// carematch - recommend hospitals for a symptom and a location
#[derive(Parser, Debug, Clone)]
#[command(name = "carematch")]
#[command(about = "Recommend hospitals from a symptom description and a location")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CarematchArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Engine configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Hospital table (CSV), overrides the config file
    #[arg(long, value_name = "CSV", global = true)]
    pub hospitals: Option<PathBuf>,

    /// Disease-to-department table (CSV), overrides the config file
    #[arg(long, value_name = "CSV", global = true)]
    pub diseases: Option<PathBuf>,

    /// Synonym table (CSV), overrides the config file
    #[arg(long, value_name = "CSV", global = true)]
    pub synonyms: Option<PathBuf>,

    /// L-tokenizer score file (JSON), overrides the config file
    #[arg(long, value_name = "JSON", global = true)]
    pub scores: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CarematchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// The config file (or defaults) with command line overrides applied.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path)?,
            None => EngineConfig::default(),
        };

        if let Some(path) = &self.hospitals {
            config.datasets.hospitals = path.clone();
        }
        if let Some(path) = &self.diseases {
            config.datasets.diseases = path.clone();
        }
        if let Some(path) = &self.synonyms {
            config.datasets.synonyms = path.clone();
        }
        if let Some(path) = &self.scores {
            config.tokenizer_scores = Some(path.clone());
        }

        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Recommend hospitals for one symptom and location
    Recommend(RecommendArgs),

    /// Show the departments a symptom resolves to
    Resolve(ResolveArgs),

    /// Show the normalized form of an address
    Normalize(NormalizeArgs),

    /// Print the health acknowledgement
    Health,

    /// Answer JSON-lines requests from stdin on stdout
    Serve,

    /// Answer a file of JSON-lines requests in parallel
    Batch(BatchArgs),
}

/// Arguments for a single recommendation
#[derive(Parser, Debug, Clone)]
pub struct RecommendArgs {
    /// Symptom description
    #[arg(short, long)]
    pub message: String,

    /// User location
    #[arg(short, long)]
    pub location: String,
}

/// Arguments for department resolution
#[derive(Parser, Debug, Clone)]
pub struct ResolveArgs {
    /// Symptom description
    #[arg(value_name = "SYMPTOM")]
    pub symptom: String,
}

/// Arguments for address normalization
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Address to normalize
    #[arg(value_name = "ADDRESS")]
    pub address: String,
}

/// Arguments for batch processing
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// Input file with one JSON request per line
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
