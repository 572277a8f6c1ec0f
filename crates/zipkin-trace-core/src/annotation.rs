// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// A timestamped fact recorded against one span.
///
/// This is the classic Zipkin v1 annotation vocabulary. The middleware only
/// ever emits these; timestamping and storage are up to the
/// [`Tracer`](crate::Tracer) implementation receiving them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Annotation {
    /// Logical name of the service issuing the call.
    ServiceName(String),
    /// Name of the RPC being made, for HTTP the upper-cased method.
    Rpc(String),
    /// A key/value fact, e.g. `http.url` or `http.status_code`.
    Binary { key: String, value: String },
    /// The client dispatched the request.
    ClientSend,
    /// Logical name of the peer being called.
    ServerAddr { service_name: String },
    /// The client observed the response (or the failure).
    ClientRecv,
}

impl Annotation {
    pub fn binary(key: impl Into<String>, value: impl Into<String>) -> Self {
        Annotation::Binary {
            key: key.into(),
            value: value.into(),
        }
    }
}
