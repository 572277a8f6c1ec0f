// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The three decorator hooks: request, response, and error.

use std::fmt;

use http::{Request, Response};
use tracing::debug;

use zipkin_trace_core::propagation::propagation_headers;
use zipkin_trace_core::{Annotation, TraceId};

use crate::config::Config;
use crate::error::InstrumentationError;

/// Binary annotation key carrying the request URL.
pub const HTTP_URL: &str = "http.url";
/// Binary annotation key carrying the response status code.
pub const HTTP_STATUS_CODE: &str = "http.status_code";
/// Binary annotation key carrying the stringified failure.
pub const REQUEST_ERROR: &str = "request.error";

/// Per-request override for the logical name of the peer being called,
/// carried in request extensions. Takes precedence over the configured
/// default for that call only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteServiceName(pub String);

/// Records the fixed per-request annotation sequence through the configured
/// tracer and injects B3 propagation headers into outgoing requests.
///
/// One instance serves any number of concurrent requests: each call owns its
/// resolved [`TraceId`], handed back from [`start_request`] and threaded
/// explicitly into [`finish_response`] or [`finish_error`].
///
/// [`start_request`]: ClientInstrumentation::start_request
/// [`finish_response`]: ClientInstrumentation::finish_response
/// [`finish_error`]: ClientInstrumentation::finish_error
pub struct ClientInstrumentation {
    config: Config,
}

impl ClientInstrumentation {
    pub fn new(config: Config) -> Self {
        ClientInstrumentation { config }
    }

    /// Decorates an outgoing request.
    ///
    /// Creates a child span, records (in order) the service name, the
    /// upper-cased RPC method, the request URL, the client-send marker, and —
    /// only if a remote service name resolves from the request extension or
    /// the configured default — the server address. Then merges the B3
    /// headers into the request, preserving unrelated pre-existing headers,
    /// and attaches the resolved identifier to the request extensions for
    /// later correlation.
    pub fn start_request<B>(
        &self,
        request: &mut Request<B>,
    ) -> Result<TraceId, InstrumentationError> {
        let id = self.config.tracer.create_child_id();

        let remote_service = request
            .extensions()
            .get::<RemoteServiceName>()
            .map(|name| name.0.clone())
            .or_else(|| self.config.remote_service_name.clone());

        let method = request.method().as_str().to_uppercase();
        let url = request.uri().to_string();

        let tracer = self.config.tracer.as_ref();
        tracer.scoped(&id, &mut || {
            tracer.record(
                &id,
                Annotation::ServiceName(self.config.service_name.clone()),
            );
            tracer.record(&id, Annotation::Rpc(method.clone()));
            tracer.record(&id, Annotation::binary(HTTP_URL, url.clone()));
            tracer.record(&id, Annotation::ClientSend);
            if let Some(service_name) = &remote_service {
                tracer.record(
                    &id,
                    Annotation::ServerAddr {
                        service_name: service_name.clone(),
                    },
                );
            }
        });

        let trace_headers = propagation_headers(&id)?;
        request.headers_mut().extend(trace_headers);
        request.extensions_mut().insert(id.clone());

        debug!("Instrumented {method} {url} (trace id: {})", id.trace_id);
        Ok(id)
    }

    /// Decorates a completed response: records the status code (as a decimal
    /// string) and the client-receive marker against the identifier resolved
    /// at dispatch time. The response itself is left untouched.
    pub fn finish_response<B>(&self, id: &TraceId, response: &Response<B>) {
        let status = response.status().as_u16().to_string();

        let tracer = self.config.tracer.as_ref();
        tracer.scoped(id, &mut || {
            tracer.record(id, Annotation::binary(HTTP_STATUS_CODE, status.clone()));
            tracer.record(id, Annotation::ClientRecv);
        });

        debug!("Recorded response status {status} (trace id: {})", id.trace_id);
    }

    /// Decorates a failed request: records the stringified error and the
    /// client-receive marker against the identifier resolved at dispatch
    /// time. The error is never swallowed; callers return it unchanged.
    pub fn finish_error(&self, id: &TraceId, error: &dyn fmt::Display) {
        let message = error.to_string();

        let tracer = self.config.tracer.as_ref();
        tracer.scoped(id, &mut || {
            tracer.record(id, Annotation::binary(REQUEST_ERROR, message.clone()));
            tracer.record(id, Annotation::ClientRecv);
        });

        debug!("Recorded request error (trace id: {})", id.trace_id);
    }
}
