// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{Annotation, TraceId};

/// The tracer capability the client middleware is built against.
///
/// Callers supply any conforming implementation: a real Zipkin tracer, an
/// OpenTelemetry bridge, or a test double. The middleware never generates
/// identifiers, makes sampling decisions, or stores annotations itself — it
/// only drives these three operations in a fixed sequence per request.
///
/// Annotations are always recorded with the owning [`TraceId`] passed
/// explicitly, so implementations without implicit context can ignore
/// [`scoped`](Tracer::scoped) entirely. The middleware still wraps its record
/// calls in `scoped` for tracers whose recorders depend on an active context
/// being bound.
pub trait Tracer: Send + Sync {
    /// Derive a child span identifier from whatever span the tracer considers
    /// currently active. The sampling decision (or its absence) arrives on
    /// the returned identifier.
    fn create_child_id(&self) -> TraceId;

    /// Bind `id` as the active trace context for the duration of `f`,
    /// restoring the previous context afterwards. Implementations without an
    /// implicit context may simply invoke `f`.
    fn scoped(&self, id: &TraceId, f: &mut dyn FnMut());

    /// Record one annotation against `id`.
    fn record(&self, id: &TraceId, annotation: Annotation);
}
