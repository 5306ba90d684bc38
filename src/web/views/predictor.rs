use std::collections::HashMap;

use maud::{html, Markup, DOCTYPE};
use poem::http::StatusCode;
use poem::web::{Data, Form, Html};
use poem::{handler, IntoResponse, Response};

use crate::prelude::*;
use crate::regression::{Dataset, FeatureVector, Model, ValidationError, FEATURE_NAMES};
use crate::web::partials::*;
use crate::web::tracking_code::TrackingCode;

/// Submitted form together with its outcome.
struct Submission {
    fields: HashMap<String, String>,
    outcome: Result<f64, ValidationError>,
}

impl Submission {
    fn value(&self, feature: &str) -> &str {
        self.fields.get(feature).map_or("", String::as_str)
    }
}

fn feature_label(feature: &str) -> &'static str {
    match feature {
        "avg_return" => "Average return",
        "volatility" => "Volatility",
        "liquidity" => "Liquidity",
        "risk_score" => "Risk score",
        "momentum" => "Momentum",
        _ => "Unknown",
    }
}

#[instrument(skip_all)]
#[handler]
pub async fn get(
    Data(tracking_code): Data<&TrackingCode>,
    Data(model): Data<&Arc<Model>>,
    Data(dataset): Data<&Arc<Dataset>>,
) -> impl IntoResponse {
    Html(render(tracking_code, model, dataset, None).into_string())
}

#[instrument(skip_all)]
#[handler]
pub async fn post(
    Form(fields): Form<HashMap<String, String>>,
    Data(tracking_code): Data<&TrackingCode>,
    Data(model): Data<&Arc<Model>>,
    Data(dataset): Data<&Arc<Dataset>>,
) -> Response {
    let outcome = FeatureVector::try_from(&fields).map(|features| model.predict(&features));
    let status = match &outcome {
        Ok(prediction) => {
            info!(prediction = *prediction, "predicted");
            StatusCode::OK
        }
        Err(error) => {
            info!(%error, "rejected the submission");
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };
    let submission = Submission { fields, outcome };
    Html(render(tracking_code, model, dataset, Some(&submission)).into_string())
        .with_status(status)
        .into_response()
}

fn render(
    tracking_code: &TrackingCode,
    model: &Model,
    dataset: &Dataset,
    submission: Option<&Submission>,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (headers())
                title { (title(Page::Predictor)) }
            }
            body {
                (tracking_code)
                (navbar(Page::Predictor))

                section.section {
                    div.container {
                        h1.title { "Grade predictor" }
                        p.subtitle {
                            "A linear model fitted with the normal equation on "
                            strong { (dataset.len()) } " assets."
                        }

                        div.columns {
                            div.column."is-7" {
                                div.box {
                                    h2.title."is-5" { "Predict a grade" }
                                    @if let Some(submission) = submission {
                                        @match &submission.outcome {
                                            Ok(prediction) => {
                                                div.notification.is-success {
                                                    "Predicted grade: " strong { (Float::from(*prediction)) }
                                                }
                                            }
                                            Err(error) => {
                                                div.notification.is-danger { (error.to_string()) }
                                            }
                                        }
                                    }
                                    form action=(Page::Predictor.path()) method="POST" {
                                        @for feature in FEATURE_NAMES {
                                            div.field {
                                                label.label for=(feature) { (feature_label(feature)) }
                                                div.control {
                                                    input.input
                                                        id=(feature)
                                                        name=(feature)
                                                        type="number"
                                                        step="any"
                                                        value=(submission.map_or("", |submission| submission.value(feature)))
                                                        required;
                                                }
                                            }
                                        }
                                        div.field {
                                            div.control {
                                                button.button.is-link type="submit" {
                                                    span.icon { i.fas.fa-calculator {} }
                                                    span { "Predict" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }

                            div.column."is-5" {
                                (model_summary(model))
                            }
                        }

                        div.box {
                            h2.title."is-5" { "Assets" }
                            div.table-container {
                                table.table.is-hoverable.is-striped.is-fullwidth {
                                    thead {
                                        tr {
                                            th { "Asset" }
                                            @for feature in FEATURE_NAMES {
                                                th { (feature_label(feature)) }
                                            }
                                            th { "Grade" }
                                            th { "Predicted" }
                                        }
                                    }
                                    tbody {
                                        @for sample in dataset.samples() {
                                            tr {
                                                th { (sample.asset) }
                                                @for (_, value) in sample.features.iter() {
                                                    td { (value) }
                                                }
                                                td { (sample.grade) }
                                                td.has-text-weight-semibold { (Float::from(model.predict(&sample.features))) }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                (footer())
            }
        }
    }
}

fn model_summary(model: &Model) -> Markup {
    html! {
        div.box {
            h2.title."is-5" { "Model" }
            table.table.is-fullwidth.is-narrow {
                tbody {
                    tr {
                        th { "Bias" }
                        td.is-family-monospace { (Float::from(model.bias).precision(4)) }
                    }
                    @for (feature, weight) in model.named_weights() {
                        tr {
                            th { (feature_label(feature)) }
                            td.is-family-monospace { (Float::from(weight).precision(4)) }
                        }
                    }
                }
            }
            nav.level.is-mobile {
                div.level-item.has-text-centered {
                    div {
                        p.heading { "Samples" }
                        p.title."is-5" { (model.diagnostics.n_samples) }
                    }
                }
                div.level-item.has-text-centered {
                    div {
                        p.heading { "RMSE" }
                        p.title."is-5" { (Float::from(model.diagnostics.rmse)) }
                    }
                }
                div.level-item.has-text-centered {
                    div {
                        p.heading { "R²" }
                        p.title."is-5" {
                            @match model.diagnostics.r_squared {
                                Some(r_squared) => (Float::from(r_squared).precision(3)),
                                None => "–",
                            }
                        }
                    }
                }
            }
        }
    }
}
