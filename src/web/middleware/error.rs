use poem::http::StatusCode;
use poem::web::Json;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};
use serde_json::json;

use crate::prelude::*;

/// Answers failed requests: a JSON error object under `/api/`, a bare status elsewhere.
pub struct ErrorMiddleware;

impl<E: Endpoint<Output = Response>> Middleware<E> for ErrorMiddleware {
    type Output = ErrorEndpoint<E>;

    fn transform(&self, inner: E) -> Self::Output {
        ErrorEndpoint { inner }
    }
}

pub struct ErrorEndpoint<E> {
    inner: E,
}

#[poem::async_trait]
impl<E: Endpoint<Output = Response>> Endpoint for ErrorEndpoint<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let path = request.uri().path().to_string();
        let error = match self.inner.call(request).await {
            Ok(response) => return Ok(response),
            Err(error) => error,
        };

        let status = error.status();
        if status.is_server_error() {
            error!(path = path.as_str(), %status, "{:#}", error);
        } else {
            info!(path = path.as_str(), %status, "{:#}", error);
        }

        if path.starts_with("/api/") {
            let message = describe(status, &error);
            Ok(Json(json!({ "error": message })).with_status(status).into_response())
        } else {
            Ok(status.into_response())
        }
    }
}

/// Client errors are shown as is, server errors never leak their details.
fn describe(status: StatusCode, error: &poem::Error) -> String {
    if status.is_server_error() {
        status.canonical_reason().unwrap_or("internal error").to_string()
    } else {
        error.to_string()
    }
}
