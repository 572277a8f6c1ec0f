// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use zipkin_trace_core::Tracer;

use crate::error::InstrumentationError;

/// Service name recorded when the caller does not configure one.
pub const DEFAULT_SERVICE_NAME: &str = "unknown";

/// Configuration for the client instrumentation.
#[derive(Clone)]
pub struct Config {
    pub(crate) tracer: Arc<dyn Tracer>,
    pub(crate) service_name: String,
    pub(crate) remote_service_name: Option<String>,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for [`Config`]. A tracer is the one required option; building
/// without one fails synchronously, before any request is attempted.
#[derive(Default)]
pub struct ConfigBuilder {
    tracer: Option<Arc<dyn Tracer>>,
    service_name: Option<String>,
    remote_service_name: Option<String>,
}

impl ConfigBuilder {
    /// The tracer capability annotations are recorded through. Required.
    pub fn tracer(mut self, tracer: Arc<dyn Tracer>) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Logical name of the service issuing requests. Defaults to
    /// [`DEFAULT_SERVICE_NAME`].
    pub fn service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    /// Default logical name of the peer being called, overridable per request
    /// through the [`RemoteServiceName`](crate::RemoteServiceName) request
    /// extension. Without either, no `ServerAddr` annotation is recorded.
    pub fn remote_service_name(mut self, remote_service_name: impl Into<String>) -> Self {
        self.remote_service_name = Some(remote_service_name.into());
        self
    }

    pub fn build(self) -> Result<Config, InstrumentationError> {
        let tracer = self.tracer.ok_or(InstrumentationError::MissingTracer)?;
        Ok(Config {
            tracer,
            service_name: self
                .service_name
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            remote_service_name: self.remote_service_name,
        })
    }
}
