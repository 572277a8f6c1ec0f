// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! B3 propagation header construction.

use http::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue};

use crate::TraceId;

pub static B3_TRACE_ID: HeaderName = HeaderName::from_static("x-b3-traceid");
pub static B3_SPAN_ID: HeaderName = HeaderName::from_static("x-b3-spanid");
pub static B3_PARENT_SPAN_ID: HeaderName = HeaderName::from_static("x-b3-parentspanid");
pub static B3_SAMPLED: HeaderName = HeaderName::from_static("x-b3-sampled");

/// Maps a trace identifier to its B3 propagation headers.
///
/// Trace id and span id are always present. The parent span id is present
/// only if the identifier carries one, and the sampled flag only if a
/// sampling decision has been made, encoded as the literal `"1"` or `"0"`.
/// Identifier values are opaque strings, so encoding them as header values
/// can fail; this happens before any request is issued.
pub fn propagation_headers(id: &TraceId) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut headers = HeaderMap::with_capacity(4);

    headers.insert(&B3_TRACE_ID, HeaderValue::from_str(&id.trace_id)?);
    headers.insert(&B3_SPAN_ID, HeaderValue::from_str(&id.span_id)?);

    if let Some(parent_id) = &id.parent_id {
        headers.insert(&B3_PARENT_SPAN_ID, HeaderValue::from_str(parent_id)?);
    }

    if let Some(sampled) = id.sampled {
        let flag = if sampled { "1" } else { "0" };
        headers.insert(&B3_SAMPLED, HeaderValue::from_static(flag));
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use crate::TraceId;

    use super::{propagation_headers, B3_PARENT_SPAN_ID, B3_SAMPLED, B3_SPAN_ID, B3_TRACE_ID};

    #[test]
    fn test_trace_and_span_id_always_present() {
        let id = TraceId::new("48485a3953bb6124", "b26412d1ac16767d");
        let headers = propagation_headers(&id).unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[&B3_TRACE_ID], "48485a3953bb6124");
        assert_eq!(headers[&B3_SPAN_ID], "b26412d1ac16767d");
        assert!(!headers.contains_key(&B3_PARENT_SPAN_ID));
        assert!(!headers.contains_key(&B3_SAMPLED));
    }

    #[test]
    fn test_parent_span_id_present_when_carried() {
        let id = TraceId::new("48485a3953bb6124", "b26412d1ac16767d")
            .with_parent_id("48485a3953bb6124");
        let headers = propagation_headers(&id).unwrap();
        assert_eq!(headers[&B3_PARENT_SPAN_ID], "48485a3953bb6124");
    }

    #[test]
    fn test_sampled_encoded_as_one_and_zero() {
        let sampled = TraceId::new("a", "b").with_sampled(true);
        let headers = propagation_headers(&sampled).unwrap();
        assert_eq!(headers[&B3_SAMPLED], "1");

        let not_sampled = TraceId::new("a", "b").with_sampled(false);
        let headers = propagation_headers(&not_sampled).unwrap();
        assert_eq!(headers[&B3_SAMPLED], "0");
    }

    #[test]
    fn test_no_sampled_header_before_a_decision() {
        let undecided = TraceId::new("a", "b");
        let headers = propagation_headers(&undecided).unwrap();
        assert!(!headers.contains_key(&B3_SAMPLED));
    }

    #[test]
    fn test_identifier_that_is_not_a_header_value_fails() {
        let id = TraceId::new("48485a39\n53bb6124", "b26412d1ac16767d");
        assert!(propagation_headers(&id).is_err());
    }
}
