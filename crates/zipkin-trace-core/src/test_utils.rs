// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Test doubles for the [`Tracer`](crate::Tracer) capability.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::{Annotation, TraceId, Tracer};

/// Tracer double that hands out deterministic child identifiers and keeps
/// every recorded annotation in memory, in recording order.
pub struct RecordingTracer {
    trace_id: String,
    parent_id: Option<String>,
    sampled: Option<bool>,
    next_span: AtomicU64,
    scoped_calls: AtomicU64,
    records: Mutex<Vec<(TraceId, Annotation)>>,
}

impl RecordingTracer {
    pub fn new() -> Self {
        RecordingTracer {
            trace_id: "86154a4ba6e91385".to_string(),
            parent_id: None,
            sampled: None,
            next_span: AtomicU64::new(1),
            scoped_calls: AtomicU64::new(0),
            records: Mutex::new(Vec::new()),
        }
    }

    /// Child identifiers handed out by this tracer will carry this parent.
    pub fn with_parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Child identifiers handed out by this tracer will carry this sampling
    /// decision.
    pub fn with_sampled(mut self, sampled: bool) -> Self {
        self.sampled = Some(sampled);
        self
    }

    /// Every annotation recorded so far, with the identifier it was recorded
    /// against.
    pub fn records(&self) -> Vec<(TraceId, Annotation)> {
        self.records.lock().unwrap().clone()
    }

    /// How many times `scoped` has been entered.
    pub fn scoped_calls(&self) -> u64 {
        self.scoped_calls.load(Ordering::Relaxed)
    }
}

impl Default for RecordingTracer {
    fn default() -> Self {
        RecordingTracer::new()
    }
}

impl Tracer for RecordingTracer {
    fn create_child_id(&self) -> TraceId {
        let span = self.next_span.fetch_add(1, Ordering::Relaxed);
        let mut id = TraceId::new(self.trace_id.clone(), format!("{span:016x}"));
        id.parent_id = self.parent_id.clone();
        id.sampled = self.sampled;
        id
    }

    fn scoped(&self, _id: &TraceId, f: &mut dyn FnMut()) {
        self.scoped_calls.fetch_add(1, Ordering::Relaxed);
        f();
    }

    fn record(&self, id: &TraceId, annotation: Annotation) {
        self.records.lock().unwrap().push((id.clone(), annotation));
    }
}
