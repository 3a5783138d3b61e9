use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pitchcheck::{
    analyze_bio_with, analyze_startup, generate_bio_with, validate_activity, validate_role,
    validate_startup_field, validate_target, BioAnalysisReport, BioInput, Config, ConfigLoader,
    GeneratedBio, PitchError, StartupField, StartupInput, ValidationResult,
};

#[derive(Parser)]
#[command(
    name = "pitchcheck",
    about = "Generate and check LinkedIn bios and startup pitches",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./pitchcheck.toml when present)
    #[arg(long, short, global = true, env = "PITCHCHECK_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a bio from a BioInput JSON and analyze it
    Bio {
        /// JSON file (reads stdin if omitted)
        file: Option<PathBuf>,
        #[arg(long)]
        score: bool,
        /// Seed for template selection
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Analyze an existing bio: {"bio": GeneratedBio, "input": BioInput}
    AnalyzeBio {
        file: Option<PathBuf>,
        #[arg(long)]
        score: bool,
    },
    /// Analyze a StartupInput JSON
    Startup {
        file: Option<PathBuf>,
        #[arg(long)]
        score: bool,
    },
    /// Validate a single form field
    Validate {
        #[arg(value_enum)]
        field: Field,
        text: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Field {
    Role,
    Target,
    Activity,
    Problem,
    Solution,
    TargetMarket,
    Competition,
    BusinessModel,
}

impl Field {
    fn validate(self, text: &str) -> ValidationResult {
        match self {
            Field::Role => validate_role(text),
            Field::Target => validate_target(text),
            Field::Activity => validate_activity(text),
            Field::Problem => validate_startup_field(StartupField::Problem, text),
            Field::Solution => validate_startup_field(StartupField::Solution, text),
            Field::TargetMarket => validate_startup_field(StartupField::TargetMarket, text),
            Field::Competition => validate_startup_field(StartupField::Competition, text),
            Field::BusinessModel => validate_startup_field(StartupField::BusinessModel, text),
        }
    }
}

#[derive(Serialize)]
struct BioOutput {
    bio: GeneratedBio,
    analysis: BioAnalysisReport,
}

#[derive(Deserialize)]
struct AnalyzeBioRequest {
    bio: GeneratedBio,
    #[serde(default)]
    input: BioInput,
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ConfigLoader::load(cli.config.as_deref())?;
    debug!(?config, "loaded config");

    match cli.command {
        Commands::Bio { file, score, seed } => {
            let input: BioInput = read_json(file.as_deref())?;
            let bio = match seed_for(seed, &config) {
                Some(seed) => generate_bio_with(&input, &mut StdRng::seed_from_u64(seed)),
                None => generate_bio_with(&input, &mut rand::rng()),
            };
            let analysis = analyze_bio_with(
                &bio,
                &input,
                scoring(score, &config),
                &config.scoring.weights,
            );
            print_json(&BioOutput { bio, analysis })?;
        }
        Commands::AnalyzeBio { file, score } => {
            let request: AnalyzeBioRequest = read_json(file.as_deref())?;
            let report = analyze_bio_with(
                &request.bio,
                &request.input,
                scoring(score, &config),
                &config.scoring.weights,
            );
            print_json(&report)?;
        }
        Commands::Startup { file, score } => {
            let input: StartupInput = read_json(file.as_deref())?;
            print_json(&analyze_startup(&input, scoring(score, &config)))?;
        }
        Commands::Validate { field, text } => {
            print_json(&field.validate(&text))?;
        }
    }
    Ok(())
}

fn scoring(flag: bool, config: &Config) -> bool {
    flag || config.scoring.enabled
}

/// `--seed` wins over `generation.seed`.
fn seed_for(flag: Option<u64>, config: &Config) -> Option<u64> {
    flag.or(config.generation.seed)
}

fn read_json<T: serde::de::DeserializeOwned>(path: Option<&Path>) -> anyhow::Result<T> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| PitchError::io(path, e))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| PitchError::io("<stdin>", e))?;
            buf
        }
    };
    if text.trim().is_empty() {
        return Err(PitchError::InvalidInput("expected a JSON document, got empty input".into()).into());
    }
    let value = serde_json::from_str(&text).map_err(PitchError::from)?;
    Ok(value)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    println!("{out}");
    Ok(())
}
