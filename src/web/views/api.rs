use std::collections::HashMap;

use poem::http::StatusCode;
use poem::web::{Data, Json};
use poem::{handler, IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

use crate::prelude::*;
use crate::regression::metrics::Diagnostics;
use crate::regression::{FeatureVector, Model};

const CACHE_CONTROL: &str = "no-cache";

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get_health() -> impl IntoResponse {
    Response::from(StatusCode::NO_CONTENT).with_header("Cache-Control", CACHE_CONTROL)
}

#[derive(Serialize)]
struct NamedWeight {
    feature: &'static str,
    weight: f64,
}

#[derive(Serialize)]
struct ModelView {
    bias: f64,
    weights: Vec<NamedWeight>,
    diagnostics: Diagnostics,
}

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get_model(Data(model): Data<&Arc<Model>>) -> impl IntoResponse {
    Json(ModelView {
        bias: model.bias,
        weights: model
            .named_weights()
            .map(|(feature, weight)| NamedWeight { feature, weight })
            .collect(),
        diagnostics: model.diagnostics,
    })
}

/// Takes a JSON object of feature values keyed by the feature names.
#[handler]
#[instrument(skip_all, level = "info")]
pub async fn predict(
    Json(fields): Json<HashMap<String, f64>>,
    Data(model): Data<&Arc<Model>>,
) -> Response {
    match FeatureVector::try_from(&fields) {
        Ok(features) => {
            let grade = model.predict(&features);
            debug!(grade, "predicted");
            Json(json!({ "grade": grade })).into_response()
        }
        Err(error) => {
            info!(%error, "rejected the request");
            Json(json!({ "error": error.to_string() }))
                .with_status(StatusCode::UNPROCESSABLE_ENTITY)
                .into_response()
        }
    }
}
