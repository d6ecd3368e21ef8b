// TutorLens CLI Entry Point
// Classifies student questions and reports topic insights as JSON

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use tutorlens_core::brain::{StudyAnalyzer, Theme};
use tutorlens_core::config::AnalyticsConfig;
use tutorlens_core::models::{self, Question};
use tutorlens_core::telemetry;

#[derive(Debug, Parser)]
#[command(name = "tutorlens", version, about = "Student question analytics")]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a single question
    Classify {
        /// Theme id (pure-math, applied-math, physics, quantum-computing)
        #[arg(short, long, default_value = "general")]
        theme: String,
        /// Question text
        text: String,
    },
    /// Rank topic insights for a JSON file of questions
    Analyze {
        /// Path to a JSON array of questions
        questions: PathBuf,
    },
    /// Full analytics report for a JSON file of questions
    Report {
        /// Path to a JSON array of questions
        questions: PathBuf,
    },
    /// List the available themes
    Themes,
}

fn load_questions(path: &Path) -> Result<Vec<Question>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let questions = models::parse_questions(&raw)
        .with_context(|| format!("Failed to parse questions from {}", path.display()))?;
    info!("Loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn run(cli: Cli, analyzer: &StudyAnalyzer) -> Result<String> {
    match cli.command {
        Command::Classify { theme, text } => {
            let classification = analyzer.classify(&text, Theme::from_id(&theme));
            render(&classification, cli.pretty)
        }
        Command::Analyze { questions } => {
            let questions = load_questions(&questions)?;
            render(&analyzer.insights(&questions), cli.pretty)
        }
        Command::Report { questions } => {
            let questions = load_questions(&questions)?;
            render(&analyzer.report(&questions), cli.pretty)
        }
        Command::Themes => render(&Theme::catalog(), cli.pretty),
    }
}

/// Loads configuration and logging for an already parsed command line
fn execute(cli: Cli) -> Result<String> {
    let config = AnalyticsConfig::from_env()?;
    telemetry::init_tracing(config.log_format, &config.log_filter)?;
    let analyzer = StudyAnalyzer::with_config(&config);

    run(cli, &analyzer)
}

fn main() -> Result<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    // Parse first so --help and --version work with a broken environment
    let cli = Cli::parse();

    let output = execute(cli)?;
    println!("{}", output);

    Ok(())
}
