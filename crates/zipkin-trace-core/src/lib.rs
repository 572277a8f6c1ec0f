// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Shared vocabulary for Zipkin client instrumentation.
//!
//! This crate defines the types exchanged between the client middleware (see
//! the `zipkin-client-middleware` crate) and whatever tracer implementation a
//! caller plugs in: trace identifiers, the annotation vocabulary, the
//! [`Tracer`] capability trait, and B3 propagation header construction. It
//! deliberately contains no tracing logic of its own — identifier generation,
//! sampling, and annotation storage all belong to the [`Tracer`]
//! implementation.

pub mod annotation;
pub mod propagation;
pub mod trace_id;
pub mod tracer;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use annotation::Annotation;
pub use trace_id::TraceId;
pub use tracer::Tracer;
