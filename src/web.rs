use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::CatchPanic;
use poem::{get, Endpoint, EndpointExt, Route, Server};

use crate::opts::WebOpts;
use crate::prelude::*;
use crate::regression::{Dataset, Model};
use crate::web::middleware::{ErrorMiddleware, RequestMiddleware, SecurityHeadersMiddleware};
use crate::web::tracking_code::TrackingCode;

mod middleware;
mod partials;
#[cfg(test)]
mod test;
mod tracking_code;
mod views;

/// Serves the site until Ctrl+C.
#[instrument(skip_all, level = "info", fields(host = opts.host.as_str(), port = opts.port))]
pub async fn run(opts: &WebOpts, model: Arc<Model>, dataset: Arc<Dataset>) -> Result {
    let tracking_code = TrackingCode::new(opts.gtag.as_deref())?;
    let app = create_standalone_app(model, dataset).data(tracking_code);
    let listener = TcpListener::bind((IpAddr::from_str(&opts.host)?, opts.port));
    info!("listening…");
    Server::new(listener)
        .run_with_graceful_shutdown(
            app,
            async {
                if let Err(error) = tokio::signal::ctrl_c().await {
                    warn!("failed to listen for Ctrl+C: {:#}", error);
                }
                info!("shutting down…");
            },
            None,
        )
        .await
        .context("the web server has failed")?;
    Ok(())
}

/// Builds the routes on top of the already fitted model.
pub fn create_standalone_app(model: Arc<Model>, dataset: Arc<Dataset>) -> impl Endpoint {
    Route::new()
        .at("/", get(views::index::get))
        .at("/projects", get(views::projects::get))
        .at("/about", get(views::about::get))
        .at("/contact", get(views::contact::get))
        .at("/predictor", get(views::predictor::get).post(views::predictor::post))
        .at("/api/predict", poem::post(views::api::predict))
        .at("/api/model", get(views::api::get_model))
        .at("/health", get(views::api::get_health))
        .at("/static/theme.css", get(views::r#static::get_theme_css))
        .at("/robots.txt", get(views::r#static::get_robots_txt))
        .data(model)
        .data(dataset)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(RequestMiddleware)
        .with(SecurityHeadersMiddleware)
}
