use anyhow::{Context, Result};
use clap::Parser;
use hof_predictor::application::ml::logistic_classifier::LogisticClassifier;
use hof_predictor::application::ml::predictor::InductionClassifier;
use hof_predictor::config::ModelEnvConfig;
use hof_predictor::domain::ml::feature_registry::FEATURE_NAMES;
use hof_predictor::domain::ml::training_set::REFERENCE_TRAINING_SET;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fit the induction model and print diagnostics", long_about = None)]
struct Args {
    /// Override the L2 penalty (defaults to HOF_MODEL_REGULARIZATION)
    #[arg(long)]
    alpha: Option<f64>,

    /// Probability threshold used for the accuracy figure
    #[arg(long, default_value_t = 0.5)]
    threshold: f64,
}

/// Prints per-example fit quality on the training set
fn print_training_fit(model: &LogisticClassifier, threshold: f64) {
    println!("\n══════════════════════════════════════════════════════");
    println!("  TRAINING SET FIT");
    println!("══════════════════════════════════════════════════════");
    println!(
        "\n  {:>6} {:>6} {:>6}  {:>7}  {:>10}",
        "WAR", "HOFm", "JAWS", "elected", "P(elected)"
    );

    let mut log_loss = 0.0;
    let mut correct = 0;
    for example in &REFERENCE_TRAINING_SET {
        let p = model.predict_proba(&example.features);
        let p_clipped = p.clamp(1e-15, 1.0 - 1e-15);
        log_loss -= if example.elected {
            p_clipped.ln()
        } else {
            (1.0 - p_clipped).ln()
        };
        if (p >= threshold) == example.elected {
            correct += 1;
        }

        println!(
            "  {:>6.1} {:>6.1} {:>6.1}  {:>7}  {:>9.2}%",
            example.features.war,
            example.features.hofm,
            example.features.jaws,
            if example.elected { "yes" } else { "no" },
            p * 100.0
        );
    }

    let n = REFERENCE_TRAINING_SET.len();
    println!("\n  Log loss:  {:.4}", log_loss / n as f64);
    println!(
        "  Accuracy:  {}/{} ({:.1}%) at threshold {:.2}",
        correct,
        n,
        correct as f64 / n as f64 * 100.0,
        threshold
    );
    println!("══════════════════════════════════════════════════════\n");
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    let alpha = match args.alpha {
        Some(alpha) => alpha,
        None => ModelEnvConfig::from_env()?.regularization,
    };

    info!(
        "Fitting on {} reference careers with alpha={}",
        REFERENCE_TRAINING_SET.len(),
        alpha
    );
    let model = LogisticClassifier::fit("vote_model", &REFERENCE_TRAINING_SET, alpha)
        .context("Model fit failed")?;

    let weights = model.weights();
    println!("Model: {} ({})", model.name(), model.version());
    println!("  {:<10} {:>14}", "term", "weight");
    for (feature, w) in FEATURE_NAMES.iter().zip(weights.coefficients.iter()) {
        println!("  {:<10} {:>14.8}", feature, w);
    }
    println!("  {:<10} {:>14.8}", "intercept", weights.intercept);

    print_training_fit(&model, args.threshold);

    Ok(())
}
