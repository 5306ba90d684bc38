//! CLI options.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand as ClapSubcommand};

use crate::regression::N_FEATURES;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Opts {
    /// Sentry DSN
    #[arg(long, env = "PORTFOLIO_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance monitoring sample rate for Sentry
    #[arg(long, env = "PORTFOLIO_TRACES_SAMPLE_RATE", default_value = "0")]
    pub traces_sample_rate: f32,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(ClapSubcommand)]
pub enum Subcommand {
    Web(WebOpts),
    Fit(FitOpts),
    Predict(PredictOpts),
}

#[derive(Args)]
pub struct DatasetOpts {
    /// Training dataset: CSV with a header row, the feature columns and `grade`
    #[arg(long, env = "PORTFOLIO_DATASET", default_value = "data/assets.csv")]
    pub dataset: PathBuf,
}

/// Runs the web application
#[derive(Args)]
pub struct WebOpts {
    #[command(flatten)]
    pub dataset: DatasetOpts,

    /// Web application bind host
    #[arg(long, env = "PORTFOLIO_HOST", default_value = "::")]
    pub host: String,

    /// Web application bind port
    #[arg(short, long, env = "PORTFOLIO_PORT", default_value = "8080")]
    pub port: u16,

    /// Google Analytics measurement ID
    #[arg(long, env = "PORTFOLIO_GTAG")]
    pub gtag: Option<String>,
}

/// Fits the model and prints the coefficients
#[derive(Args)]
pub struct FitOpts {
    #[command(flatten)]
    pub dataset: DatasetOpts,
}

/// Fits the model and predicts the grade of a single asset
#[derive(Args)]
pub struct PredictOpts {
    #[command(flatten)]
    pub dataset: DatasetOpts,

    #[arg(long, allow_hyphen_values = true)]
    pub avg_return: f64,

    #[arg(long, allow_hyphen_values = true)]
    pub volatility: f64,

    #[arg(long, allow_hyphen_values = true)]
    pub liquidity: f64,

    #[arg(long, allow_hyphen_values = true)]
    pub risk_score: f64,

    #[arg(long, allow_hyphen_values = true)]
    pub momentum: f64,
}

impl PredictOpts {
    /// Feature values keyed by their names.
    pub fn features(&self) -> [(&'static str, f64); N_FEATURES] {
        [
            ("avg_return", self.avg_return),
            ("volatility", self.volatility),
            ("liquidity", self.liquidity),
            ("risk_score", self.risk_score),
            ("momentum", self.momentum),
        ]
    }
}
