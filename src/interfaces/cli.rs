//! Command-line front end.

use super::input_ranges::{clamp_factors, clamp_features};
use super::roster::Roster;
use crate::application::autofill::{AutofillOutcome, AutofillService};
use crate::application::prediction_service::PredictionService;
use crate::application::report::format_result;
use crate::config::Config;
use crate::domain::player::{ExternalFactors, FeatureVector, LookupOutcome};
use crate::domain::ports::PlayerStatsProvider;
use crate::domain::prediction::PredictionResult;
use crate::infrastructure::csv_lookup::CsvPlayerStatsProvider;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Hall of Fame induction estimator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Predict induction odds for one player
    Predict(PredictArgs),
    /// Look up career totals for a player
    Lookup {
        /// Player name, "First Last"
        #[arg(long)]
        name: String,
    },
    /// Predict every player of a TOML roster
    Batch {
        /// Path to roster file
        #[arg(long)]
        roster: PathBuf,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Player name, "First Last"
    #[arg(long)]
    pub name: String,

    /// Career WAR (0-150)
    #[arg(long, value_parser = parse_finite)]
    pub war: Option<f64>,

    /// Hall of Fame Monitor score (0-300)
    #[arg(long, value_parser = parse_finite)]
    pub hofm: Option<f64>,

    /// JAWS score (0-100)
    #[arg(long, value_parser = parse_finite)]
    pub jaws: Option<f64>,

    /// Player has a doping history
    #[arg(long)]
    pub doping: bool,

    /// Leadership score (0-1)
    #[arg(long, default_value_t = 0.5, value_parser = parse_finite)]
    pub leadership: f64,

    /// Career and cultural influence (0-1)
    #[arg(long, default_value_t = 0.5, value_parser = parse_finite)]
    pub influence: f64,

    /// Era adjustment (-0.3 to 0.3)
    #[arg(
        long,
        default_value_t = 0.0,
        allow_negative_numbers = true,
        value_parser = parse_finite
    )]
    pub era_adjust: f64,

    /// Fill career totals from the configured lookup tables first
    #[arg(long)]
    pub autofill: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Numeric flags must be finite; NaN and infinities never reach the model.
fn parse_finite(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("invalid number {:?}: {}", s, e))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{} is not a finite number", s))
    }
}

impl PredictArgs {
    fn features(&self, defaults: FeatureVector) -> FeatureVector {
        FeatureVector {
            war: self.war.unwrap_or(defaults.war),
            hofm: self.hofm.unwrap_or(defaults.hofm),
            jaws: self.jaws.unwrap_or(defaults.jaws),
        }
    }

    fn factors(&self) -> ExternalFactors {
        ExternalFactors {
            doping: self.doping,
            leadership: self.leadership,
            influence: self.influence,
            era_adjust: self.era_adjust,
        }
    }
}

/// Builds the lookup provider if both tables are configured.
///
/// A source that fails to load only disables autofill.
pub fn build_provider(config: &Config) -> Option<Arc<dyn PlayerStatsProvider>> {
    let (register, batting) = config.lookup.sources()?;
    match CsvPlayerStatsProvider::from_paths(register, batting) {
        Ok(provider) => Some(Arc::new(provider)),
        Err(e) => {
            warn!("Player lookup disabled: {}", e);
            None
        }
    }
}

pub fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Command::Predict(args) => run_predict(&args, &config),
        Command::Lookup { name } => run_lookup(&name, &config),
        Command::Batch { roster, json } => run_batch(&roster, json, &config),
    }
}

fn run_predict(args: &PredictArgs, config: &Config) -> Result<()> {
    let service =
        PredictionService::bootstrap(&config.model).context("Failed to fit induction models")?;

    let mut features = args.features(config.defaults.features());
    if args.autofill {
        match build_provider(config) {
            Some(provider) => {
                let autofill = AutofillService::new(provider, config.defaults.features());
                if let AutofillOutcome::Filled(filled) = autofill.autofill(&args.name, features) {
                    features = filled;
                }
            }
            None => warn!("--autofill requested but player lookup is unavailable"),
        }
    }

    let result = service.predict(
        &args.name,
        clamp_features(features),
        clamp_factors(args.factors()),
    );

    println!("{}", render_result(&result, args.json)?);
    Ok(())
}

fn run_lookup(name: &str, config: &Config) -> Result<()> {
    let provider = build_provider(config).context(
        "No lookup tables available; set HOF_REGISTER_CSV and HOF_BATTING_CSV",
    )?;

    match provider.fetch_player_summary(name) {
        LookupOutcome::Found(summary) => {
            let show = |v: Option<f64>| v.map_or_else(|| "n/a".to_string(), |v| format!("{:.1}", v));
            println!("{}", name);
            println!("  WAR:  {}", show(summary.war));
            println!("  HOFm: {}", show(summary.hofm));
            println!("  JAWS: {}", show(summary.jaws));
        }
        LookupOutcome::NotFound => println!("No career record found for {}", name),
    }
    Ok(())
}

fn run_batch(roster_path: &Path, json: bool, config: &Config) -> Result<()> {
    let roster = Roster::load(roster_path)?;
    let service =
        PredictionService::bootstrap(&config.model).context("Failed to fit induction models")?;

    let results = service.predict_batch(&roster.requests());
    info!("Predicted {} players", results.len());

    println!("{}", render_batch(&results, json)?);
    Ok(())
}

/// Output of `predict`: pretty JSON object or the text report.
pub fn render_result(result: &PredictionResult, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(result).context("Failed to serialize result")
    } else {
        Ok(format_result(result))
    }
}

/// Output of `batch`: a JSON array, or text reports separated by a blank line.
pub fn render_batch(results: &[PredictionResult], json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(results).context("Failed to serialize results")
    } else {
        let reports: Vec<String> = results.iter().map(format_result).collect();
        Ok(reports.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_args_parse() {
        let cli = Cli::try_parse_from([
            "hof-predictor",
            "predict",
            "--name",
            "Joe Mauer",
            "--war",
            "55.2",
            "--doping",
            "--era-adjust",
            "-0.2",
        ])
        .unwrap();

        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        let features = args.features(FeatureVector::new(65.0, 120.0, 55.0));
        assert_eq!(features, FeatureVector::new(55.2, 120.0, 55.0));

        let factors = args.factors();
        assert!(factors.doping);
        assert_eq!(factors.leadership, 0.5);
        assert_eq!(factors.era_adjust, -0.2);
    }

    #[test]
    fn test_batch_args_parse() {
        let cli = Cli::try_parse_from(["hof-predictor", "batch", "--roster", "players.toml"])
            .unwrap();
        assert!(matches!(cli.command, Command::Batch { json: false, .. }));
    }

    #[test]
    fn test_no_provider_without_tables() {
        assert!(build_provider(&Config::default()).is_none());
    }

    #[test]
    fn test_non_finite_flags_are_rejected() {
        for (flag, value) in [
            ("--war", "NaN"),
            ("--hofm", "inf"),
            ("--jaws", "infinity"),
            ("--leadership", "nan"),
            ("--era-adjust", "NaN"),
        ] {
            let parsed =
                Cli::try_parse_from(["hof-predictor", "predict", "--name", "Joe Mauer", flag, value]);
            assert!(parsed.is_err(), "{} {} should be rejected", flag, value);
        }
    }

    #[test]
    fn test_parse_finite() {
        assert_eq!(parse_finite("55.2"), Ok(55.2));
        assert_eq!(parse_finite("-0.3"), Ok(-0.3));
        assert!(parse_finite("NaN").is_err());
        assert!(parse_finite("abc").is_err());
    }

    fn batch_results() -> Vec<PredictionResult> {
        let service = PredictionService::bootstrap(&Config::default().model).unwrap();
        let roster = Roster::parse(
            "[[player]]\nname = \"Joe Mauer\"\nwar = 55.2\nhofm = 118\njaws = 47.1\n\n\
             [[player]]\nname = \"Derek Jeter\"\nwar = 71.3\nhofm = 278\njaws = 57.4\n",
        )
        .unwrap();
        service.predict_batch(&roster.requests())
    }

    #[test]
    fn test_batch_text_output_separates_reports() {
        let results = batch_results();
        let text = render_batch(&results, false).unwrap();

        // Two 8-line reports joined by one blank line
        assert_eq!(text.lines().count(), 8 * 2 + 1);
        assert!(text.starts_with("Joe Mauer - Hall of Fame prediction"));
        assert!(text.contains("\n\nDerek Jeter - Hall of Fame prediction\n"));
        assert_eq!(
            text,
            format!("{}\n\n{}", format_result(&results[0]), format_result(&results[1]))
        );
    }

    #[test]
    fn test_batch_json_output_is_an_array() {
        let results = batch_results();
        let json = render_batch(&results, true).unwrap();
        let parsed: Vec<PredictionResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].name, "Derek Jeter");
        assert_eq!(parsed[0].vote_trend.len(), results[0].vote_trend.len());
    }

    #[test]
    fn test_single_result_output() {
        let result = batch_results().remove(0);
        let text = render_result(&result, false).unwrap();
        assert_eq!(text, format_result(&result));

        let value: serde_json::Value =
            serde_json::from_str(&render_result(&result, true).unwrap()).unwrap();
        assert_eq!(value["name"], "Joe Mauer");
        assert!(value["final_prob"].is_f64());
    }
}
