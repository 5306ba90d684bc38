use std::collections::BTreeMap;

use poem::{Endpoint, Middleware, Request, Response, Result};

use crate::logging::format_elapsed;
use crate::prelude::*;

/// Tags the Sentry scope with the request and logs how it went.
pub struct RequestMiddleware;

impl<E: Endpoint<Output = Response>> Middleware<E> for RequestMiddleware {
    type Output = RequestEndpoint<E>;

    fn transform(&self, inner: E) -> Self::Output {
        RequestEndpoint { inner }
    }
}

pub struct RequestEndpoint<E> {
    inner: E,
}

#[poem::async_trait]
impl<E: Endpoint<Output = Response>> Endpoint for RequestEndpoint<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let method = request.method().clone();
        let path = request.uri().path().to_string();
        sentry::configure_scope(|scope| {
            scope.set_tag("http.method", method.as_str());
            scope.set_tag("http.path", &path);

            let mut context = BTreeMap::new();
            if let Some(query) = request.uri().query() {
                context.insert("query".to_string(), query.into());
            }
            if let Some(user_agent) = request.header("User-Agent") {
                context.insert("user_agent".to_string(), user_agent.into());
            }
            scope.set_context("request", sentry::protocol::Context::Other(context));
        });

        let start_instant = Instant::now();
        let result = self.inner.call(request).await;
        let elapsed = format_elapsed(start_instant);
        match &result {
            Ok(response) => {
                info!(%method, path = path.as_str(), status = response.status().as_u16(), elapsed = elapsed.as_str());
            }
            Err(error) => {
                warn!(%method, path = path.as_str(), status = error.status().as_u16(), elapsed = elapsed.as_str(), "failed");
            }
        }
        result
    }
}
