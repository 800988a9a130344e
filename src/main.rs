mod charts;
mod gui;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::info;

use crate::input::{InputError, validate_values};
use crate::model::features::N_FEATURES;
use crate::model::profile::{ModelProfile, ProfileError};
use crate::model::risk::ClinicalInput;
use crate::pipeline::evaluate;
use crate::pipeline::stage4_report::{ReportError, ReportFormat, render, write_reports};

#[derive(Debug, Parser)]
#[command(
    name = "kira-metarisk",
    version,
    about = "Heuristic metastasis-risk score from ten clinical inputs."
)]
struct Cli {
    /// Log at debug level regardless of RUST_LOG.
    #[arg(long, short, global = true)]
    verbose: bool,

    /// JSON model profile overriding the built-in coefficients.
    #[arg(long, global = true, value_name = "FILE")]
    model: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the diagnostic panel (default).
    Gui,
    /// Score one patient from flags and print the report.
    Score(ScoreArgs),
}

#[derive(Debug, Args)]
struct ScoreArgs {
    /// Age in years.
    #[arg(long, default_value_t = 55.0, allow_negative_numbers = true)]
    age: f64,
    /// Tumor size in cm.
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    tumor_cm: f64,
    /// Histological grade, 1-3.
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    grade: f64,
    /// Number of positive lymph nodes.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    lymph_nodes: f64,
    /// Estrogen receptor status (0/1).
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    er: f64,
    /// Progesterone receptor status (0/1).
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pr: f64,
    /// HER2 status (0/1).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    her2: f64,
    /// Vascularization (0/1).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    vascular: f64,
    /// Lymphovascular invasion (0/1).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    invasion: f64,
    /// Comorbidities (0/1).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    comorbidity: f64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write the text report and summary.json into this directory.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

impl ScoreArgs {
    fn values(&self) -> [f64; N_FEATURES] {
        [
            self.age,
            self.tumor_cm,
            self.grade,
            self.lymph_nodes,
            self.er,
            self.pr,
            self.her2,
            self.vascular,
            self.invasion,
            self.comorbidity,
        ]
    }

    fn clinical_input(&self) -> Result<ClinicalInput, InputError> {
        validate_values(self.values())
    }
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("GUI error: {0}")]
    Gui(String),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let profile = load_profile(cli.model.as_deref())?;
    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => gui::run(profile).map_err(|e| AppError::Gui(e.to_string())),
        Command::Score(args) => run_score(&args, &profile),
    }
}

fn run_score(args: &ScoreArgs, profile: &ModelProfile) -> Result<(), AppError> {
    let input = args.clinical_input()?;
    let eval = evaluate(&input, profile);
    println!("{}", render(&eval, profile, args.format.into())?);
    if let Some(out_dir) = &args.out {
        write_reports(&eval, profile, out_dir)?;
    }
    Ok(())
}

fn load_profile(path: Option<&Path>) -> Result<ModelProfile, ProfileError> {
    match path {
        Some(path) => {
            let profile = ModelProfile::from_json_file(path)?;
            info!(path = %path.display(), profile = %profile.name, "loaded model profile");
            Ok(profile)
        }
        None => Ok(ModelProfile::default_v1()),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
