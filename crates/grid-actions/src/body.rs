// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Request body decoding into raw form data.
//!
//! Unlike a plain key/value map, repeated keys are kept in submission order:
//! multi-selects and per-row checkboxes depend on them.

use crate::form::HttpData;

/// Errors that can occur while decoding a request body.
#[derive(Debug, thiserror::Error)]
pub enum BodyParseError {
    /// The multipart body is malformed.
    #[error("Invalid multipart data: {0}")]
    InvalidMultipart(String),
    /// The body uses a content type that does not carry form fields.
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),
}

/// Decodes a form submission body according to its content type.
///
/// An empty body decodes to empty form data regardless of content type.
pub fn parse_form_body(body: &[u8], content_type: Option<&str>) -> Result<HttpData, BodyParseError> {
    let content_type = content_type.unwrap_or("");

    if content_type.contains("application/x-www-form-urlencoded") {
        return Ok(HttpData::from_urlencoded(body));
    }

    if content_type.contains("multipart/form-data") {
        return parse_multipart_basic(body, content_type);
    }

    if body.is_empty() {
        return Ok(HttpData::default());
    }

    Err(BodyParseError::UnsupportedContentType(content_type.to_string()))
}

fn parse_multipart_basic(bytes: &[u8], content_type: &str) -> Result<HttpData, BodyParseError> {
    let boundary = content_type
        .split(';')
        .find(|s| s.trim().starts_with("boundary="))
        .and_then(|s| s.trim().strip_prefix("boundary="))
        .ok_or_else(|| BodyParseError::InvalidMultipart("Missing boundary".to_string()))?;

    let boundary = boundary.trim_matches('"');
    let delimiter = format!("--{}", boundary);

    let body_str = String::from_utf8_lossy(bytes);
    let mut pairs = Vec::new();

    for part in body_str.split(&delimiter) {
        if part.trim().is_empty() || part.starts_with("--") {
            continue;
        }

        let Some(idx) = part.find("\r\n\r\n") else {
            continue;
        };

        let headers_str = &part[..idx];
        // Only the CRLF preceding the next boundary belongs to the framing.
        let rest = &part[idx + 4..];
        let content = rest.strip_suffix("\r\n").unwrap_or(rest);

        // File uploads never carry group action fields.
        if headers_str.contains("filename=") {
            continue;
        }

        if let Some(name) = extract_form_field_name(headers_str) {
            pairs.push((name.to_string(), content.to_string()));
        }
    }

    Ok(HttpData::from_pairs(pairs))
}

fn extract_form_field_name(headers: &str) -> Option<&str> {
    for line in headers.lines() {
        if line.to_lowercase().starts_with("content-disposition:") {
            if let Some(name_part) = line.split(';').find(|s| s.trim().starts_with("name=")) {
                let name = name_part.trim().strip_prefix("name=")?;
                return Some(name.trim_matches('"'));
            }
        }
    }
    None
}
