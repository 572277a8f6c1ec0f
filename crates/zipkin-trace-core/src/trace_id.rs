// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Identifier for one client span within a trace.
///
/// The identifier values are opaque to this crate: they are produced by a
/// [`Tracer`](crate::Tracer) implementation and only carried along so they can
/// be propagated over B3 headers and attached to recorded annotations. The
/// `sampled` field is deliberately a three-state optional: `None` means no
/// sampling decision has been made yet, which is distinct from a decision not
/// to sample (`Some(false)`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceId {
    /// Correlates all annotations belonging to one logical request chain.
    pub trace_id: String,
    /// Identifies this client call within the trace.
    pub span_id: String,
    /// Span id of the enclosing span, if this span has a parent.
    pub parent_id: Option<String>,
    /// Sampling decision, if one has been made.
    pub sampled: Option<bool>,
}

impl TraceId {
    pub fn new(trace_id: impl Into<String>, span_id: impl Into<String>) -> Self {
        TraceId {
            trace_id: trace_id.into(),
            span_id: span_id.into(),
            parent_id: None,
            sampled: None,
        }
    }

    pub fn with_parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_sampled(mut self, sampled: bool) -> Self {
        self.sampled = Some(sampled);
        self
    }
}
