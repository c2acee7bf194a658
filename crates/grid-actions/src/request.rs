// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! HTTP request abstraction for form submissions.
//!
//! This module provides a platform-agnostic request type that adapters
//! (HTTP servers, test harnesses) fill in and hand to [`crate::Form::process`].

use std::collections::HashMap;

use crate::body::{parse_form_body, BodyParseError};
use crate::form::HttpData;

/// A platform-agnostic HTTP request carrying a possible form submission.
///
/// # Example
///
/// ```rust
/// use grid_actions::FormRequest;
///
/// let request = FormRequest::new("POST")
///     .with_headers([("content-type".into(), "application/x-www-form-urlencoded".into())].into())
///     .with_body(b"group_action%5B1%5D=Delete".to_vec());
///
/// assert!(request.is_form_submission());
/// ```
#[derive(Debug, Clone)]
pub struct FormRequest {
    /// The HTTP method (e.g., "GET", "POST")
    pub method: String,

    /// HTTP headers
    pub headers: HashMap<String, String>,

    /// Request body
    pub body: Option<Vec<u8>>,
}

impl FormRequest {
    /// Creates a new request with the given method.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Adds headers to the request.
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Adds a body to the request.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns the Content-Type header, if present.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .map(|(_, v)| v.as_str())
    }

    /// Checks if this is a form submission (POST with form content type).
    pub fn is_form_submission(&self) -> bool {
        self.method.eq_ignore_ascii_case("POST")
            && self
                .content_type()
                .map(|ct| {
                    ct.starts_with("application/x-www-form-urlencoded")
                        || ct.starts_with("multipart/form-data")
                })
                .unwrap_or(false)
    }

    /// Decodes the body into raw form data.
    pub fn form_data(&self) -> Result<HttpData, BodyParseError> {
        parse_form_body(self.body.as_deref().unwrap_or_default(), self.content_type())
    }
}

impl Default for FormRequest {
    fn default() -> Self {
        Self::new("GET")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urlencoded(body: &str) -> FormRequest {
        FormRequest::new("POST")
            .with_headers([("Content-Type".into(), "application/x-www-form-urlencoded".into())].into())
            .with_body(body.as_bytes().to_vec())
    }

    #[test]
    fn test_get_is_not_submission() {
        assert!(!FormRequest::default().is_form_submission());
    }

    #[test]
    fn test_content_type_case_insensitive() {
        let req = urlencoded("");
        assert_eq!(req.content_type(), Some("application/x-www-form-urlencoded"));
        assert!(req.is_form_submission());
    }

    #[test]
    fn test_json_post_is_not_submission() {
        let req = FormRequest::new("post")
            .with_headers([("content-type".into(), "application/json".into())].into());
        assert!(!req.is_form_submission());
    }

    #[test]
    fn test_form_data() {
        let req = urlencoded("a=1&a=2&b=x");
        let data = req.form_data().unwrap();
        assert_eq!(data.all("a"), vec!["1", "2"]);
        assert_eq!(data.first("b"), Some("x"));
    }
}
