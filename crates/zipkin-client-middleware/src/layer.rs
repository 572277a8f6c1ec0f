// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! `tower` integration plugging the decorator hooks into a client pipeline.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use http::{Request, Response};
use tower::{BoxError, Layer, Service};

use crate::config::Config;
use crate::instrument::ClientInstrumentation;

/// Wraps an HTTP client service with Zipkin instrumentation.
///
/// The wrapped service sees the request decorated with B3 propagation headers
/// and the resolved [`TraceId`](zipkin_trace_core::TraceId) in its
/// extensions; responses and errors are annotated on the way back out and
/// otherwise passed through untouched.
#[derive(Clone)]
pub struct TraceLayer {
    instrumentation: Arc<ClientInstrumentation>,
}

impl TraceLayer {
    pub fn new(config: Config) -> Self {
        TraceLayer {
            instrumentation: Arc::new(ClientInstrumentation::new(config)),
        }
    }
}

impl<S> Layer<S> for TraceLayer {
    type Service = TraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TraceService {
            inner,
            instrumentation: self.instrumentation.clone(),
        }
    }
}

/// The instrumented client service produced by [`TraceLayer`].
#[derive(Clone)]
pub struct TraceService<S> {
    inner: S,
    instrumentation: Arc<ClientInstrumentation>,
}

impl<S, B, RB> Service<Request<B>> for TraceService<S>
where
    S: Service<Request<B>, Response = Response<RB>>,
    S::Error: Into<BoxError>,
    S::Future: Send + 'static,
    RB: Send + 'static,
{
    type Response = Response<RB>;
    type Error = BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Response<RB>, BoxError>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        let instrumentation = self.instrumentation.clone();

        // Decorate synchronously, before the request is dispatched.
        let id = match instrumentation.start_request(&mut request) {
            Ok(id) => id,
            Err(error) => return Box::pin(std::future::ready(Err(error.into()))),
        };

        let future = self.inner.call(request);
        Box::pin(async move {
            match future.await {
                Ok(response) => {
                    instrumentation.finish_response(&id, &response);
                    Ok(response)
                }
                Err(error) => {
                    let error = error.into();
                    instrumentation.finish_error(&id, &error);
                    Err(error)
                }
            }
        })
    }
}
