// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Zipkin instrumentation middleware for HTTP client pipelines.
//!
//! Decorates outbound requests with the classic Zipkin client annotation
//! sequence (service name, RPC method, request URL, client send/receive,
//! optional server address) and injects B3 propagation headers so the remote
//! service can continue the same trace. Everything that makes tracing hard —
//! identifier generation, sampling, annotation storage — is delegated to a
//! caller-supplied [`Tracer`] implementation.
//!
//! ```no_run
//! use std::sync::Arc;
//! use tower::{Layer, ServiceExt};
//! use zipkin_client_middleware::{Config, TraceLayer};
//! # use zipkin_trace_core::{Annotation, TraceId, Tracer};
//! # struct MyTracer;
//! # impl Tracer for MyTracer {
//! #     fn create_child_id(&self) -> TraceId { TraceId::new("t", "s") }
//! #     fn scoped(&self, _: &TraceId, f: &mut dyn FnMut()) { f() }
//! #     fn record(&self, _: &TraceId, _: Annotation) {}
//! # }
//! # async fn example(client: tower::util::BoxService<http::Request<String>, http::Response<String>, tower::BoxError>) -> Result<(), tower::BoxError> {
//! let config = Config::builder()
//!     .tracer(Arc::new(MyTracer))
//!     .service_name("caller")
//!     .remote_service_name("callee")
//!     .build()?;
//!
//! let traced = TraceLayer::new(config).layer(client);
//! let request = http::Request::post("http://callee.internal/user")
//!     .body(String::new())?;
//! let response = traced.oneshot(request).await?;
//! # Ok(())
//! # }
//! ```
//!
//! [`Tracer`]: zipkin_trace_core::Tracer

pub mod config;
pub mod error;
pub mod instrument;
pub mod layer;

pub use config::{Config, ConfigBuilder, DEFAULT_SERVICE_NAME};
pub use error::InstrumentationError;
pub use instrument::{
    ClientInstrumentation, RemoteServiceName, HTTP_STATUS_CODE, HTTP_URL, REQUEST_ERROR,
};
pub use layer::{TraceLayer, TraceService};

pub use zipkin_trace_core::{Annotation, TraceId, Tracer};
