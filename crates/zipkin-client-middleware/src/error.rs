// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// Errors raised by the client instrumentation middleware.
///
/// Everything else — network failures, non-2xx responses — belongs to the
/// underlying HTTP client and passes through this middleware unmodified.
#[derive(Debug, thiserror::Error)]
pub enum InstrumentationError {
    /// Raised synchronously at configuration time, before any request is
    /// attempted.
    #[error("zipkin-client-middleware requires a `tracer` implementation")]
    MissingTracer,

    /// The tracer produced an identifier that is not a valid HTTP header
    /// value. Raised before the request is issued.
    #[error("trace identifier is not a valid propagation header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
}
