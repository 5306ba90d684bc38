use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;

use clap::Parser;

use crate::opts::{FitOpts, Opts, PredictOpts, Subcommand, WebOpts};
use crate::prelude::*;
use crate::regression::{Dataset, FeatureVector, Model};

mod logging;
mod math;
mod opts;
mod portfolio;
mod prelude;
mod regression;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = logging::init(opts.sentry_dsn, opts.traces_sample_rate)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting…");

    let start_instant = Instant::now();
    let result = match opts.subcommand {
        Subcommand::Web(opts) => run_web(opts).await,
        Subcommand::Fit(opts) => run_fit(&opts),
        Subcommand::Predict(opts) => run_predict(&opts),
    };

    match &result {
        Ok(_) => info!(elapsed = logging::format_elapsed(start_instant).as_str(), "finished"),
        Err(error) => error!(elapsed = logging::format_elapsed(start_instant).as_str(), "{:#}", error),
    }
    result
}

/// Loads the dataset and fits the model. Any failure here is fatal.
fn load_and_fit(dataset_path: &Path) -> Result<(Dataset, Model)> {
    let dataset = Dataset::load(dataset_path)
        .with_context(|| format!("failed to load the dataset from `{}`", dataset_path.display()))?;
    let model = Model::fit(&dataset)
        .with_context(|| format!("failed to fit the model on `{}`", dataset_path.display()))?;
    Ok((dataset, model))
}

async fn run_web(opts: WebOpts) -> Result {
    sentry::configure_scope(|scope| scope.set_tag("app", "web"));
    let (dataset, model) = load_and_fit(&opts.dataset.dataset)?;
    web::run(&opts, Arc::new(model), Arc::new(dataset)).await
}

fn run_fit(opts: &FitOpts) -> Result {
    let (dataset, model) = load_and_fit(&opts.dataset.dataset)?;
    write_summary(&dataset, &model, io::stdout().lock())
}

fn write_summary(dataset: &Dataset, model: &Model, mut writer: impl Write) -> Result {
    writeln!(writer, "samples:   {}", dataset.len())?;
    writeln!(writer, "bias:      {:.6}", model.bias)?;
    for (feature, weight) in model.named_weights() {
        writeln!(writer, "{:<10} {:.6}", format!("{}:", feature), weight)?;
    }
    writeln!(writer, "rmse:      {:.6}", model.diagnostics.rmse)?;
    match model.diagnostics.r_squared {
        Some(r_squared) => writeln!(writer, "r²:        {:.6}", r_squared)?,
        None => writeln!(writer, "r²:        undefined")?,
    }
    Ok(())
}

fn run_predict(opts: &PredictOpts) -> Result {
    println!("{}", predict(opts)?);
    Ok(())
}

fn predict(opts: &PredictOpts) -> Result<f64> {
    let (_, model) = load_and_fit(&opts.dataset.dataset)?;
    let fields: HashMap<String, f64> = opts
        .features()
        .into_iter()
        .map(|(feature, value)| (feature.to_string(), value))
        .collect();
    let features = FeatureVector::try_from(&fields)?;
    Ok(model.predict(&features))
}
