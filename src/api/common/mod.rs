//
//  bitly-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Bitly API
//!
//! This module provides shared types and utilities used by every resource
//! client: error handling, the error body returned by Bitly, pagination,
//! query-string encoding and the timestamp format.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`ErrorResponse`] - The JSON body Bitly returns with non-2xx responses
//! - [`ErrorDetail`] - A single field-level entry inside an [`ErrorResponse`]
//! - Pagination types (re-exported from the [`pagination`] submodule)
//! - Query encoding helpers (re-exported from the [`query`] submodule)
//! - [`JsonDate`] (re-exported from the [`time`] submodule)
//!
//! # Example
//!
//! ```rust
//! use bitly_client::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::Api { status: 403, .. }) => println!("Check your access token"),
//!         Err(ApiError::MissingParameter(name)) => println!("{} is required", name),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use std::fmt;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod pagination;
pub mod query;
pub mod time;

pub use pagination::*;
pub use query::*;
pub use time::*;

/// Unified error type for all Bitly API operations.
///
/// Every public operation returns either its decoded result or exactly one
/// `ApiError`. Nothing is retried and nothing is swallowed.
///
/// # Variants
///
/// | Variant | When | Request sent? |
/// |---------|------|---------------|
/// | `Serialize` | Payload could not be encoded as JSON | No |
/// | `Query` | Query object could not be URL-encoded | No |
/// | `InvalidUrl` | Base URL and path do not form a URL | No |
/// | `InvalidHeader` | A header name or value is not valid HTTP | No |
/// | `Build` | The transport rejected the request | No |
/// | `MissingParameter` | A required identifier was empty | No |
/// | `Transport` | Connection, DNS or timeout failure | Yes |
/// | `Api` | Non-2xx status with a decodable error body | Yes |
/// | `ErrorBody` | Non-2xx status whose body is not an error body | Yes |
/// | `Decode` | 2xx status whose body does not match the target type | Yes |
/// | `Io` | Writing a raw response body to its sink failed | Yes |
///
/// # Example
///
/// ```rust
/// use bitly_client::api::common::{ApiError, ErrorResponse};
/// use reqwest::Method;
///
/// let err = ApiError::Api {
///     method: Method::GET,
///     url: "https://api-ssl.bitly.com/v4/groups".to_string(),
///     status: 403,
///     response: ErrorResponse {
///         message: "FORBIDDEN".to_string(),
///         ..Default::default()
///     },
/// };
///
/// assert_eq!(
///     err.to_string(),
///     "GET https://api-ssl.bitly.com/v4/groups: 403 FORBIDDEN"
/// );
/// assert_eq!(err.status(), Some(403));
/// ```
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request payload could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A query parameter object could not be URL-encoded.
    #[error("Failed to encode query parameters: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// The concatenated base URL and path is not a valid URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A header produced by the client or its credentials is not valid HTTP.
    ///
    /// # Parameters
    ///
    /// - `name` - The offending header name
    #[error("Invalid header: {name}")]
    InvalidHeader {
        /// The header name that could not be encoded.
        name: String,
    },

    /// The HTTP transport failed to construct the request.
    #[error("Failed to build request: {0}")]
    Build(#[source] reqwest::Error),

    /// A network-level error occurred while executing the request.
    ///
    /// This covers connection failures, timeouts and DNS resolution errors.
    /// The request is not retried.
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-2xx status and a Bitly error body.
    #[error("{method} {url}: {status} {}", .response.message)]
    Api {
        /// HTTP method of the failed request.
        method: Method,
        /// Absolute URL of the failed request.
        url: String,
        /// HTTP status code returned by the server.
        status: u16,
        /// The decoded error body.
        response: ErrorResponse,
    },

    /// The server answered with a non-2xx status and a body that is not a
    /// Bitly error body (for example an HTML page from a proxy).
    #[error("{method} {url}: {status} (unreadable error body: {source})")]
    ErrorBody {
        /// HTTP method of the failed request.
        method: Method,
        /// Absolute URL of the failed request.
        url: String,
        /// HTTP status code returned by the server.
        status: u16,
        /// Why the body could not be decoded.
        source: serde_json::Error,
    },

    /// A successful response body did not match the expected shape.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Copying a raw response body into the caller's sink failed.
    #[error("Failed to write response body: {0}")]
    Io(#[from] std::io::Error),

    /// A required parameter was empty; no request was made.
    #[error("{0} parameter is required and cannot be empty")]
    MissingParameter(&'static str),
}

impl ApiError {
    /// Returns the HTTP status code when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::ErrorBody { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` for a 404 response.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns the decoded error body, if there is one.
    pub fn response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Api { response, .. } => Some(response),
            _ => None,
        }
    }
}

/// Error body returned by Bitly with every non-2xx response.
///
/// ```json
/// {
///   "message": "INVALID_ARG_LONG_URL",
///   "resource": "bitlinks",
///   "description": "The value provided is invalid.",
///   "errors": [{"field": "long_url", "error_code": "invalid"}]
/// }
/// ```
///
/// Not all fields are present on every response, so all of them default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable message, e.g. `FORBIDDEN`.
    #[serde(default)]
    pub message: String,

    /// Field-level validation errors.
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,

    /// The resource the request targeted.
    #[serde(default)]
    pub resource: String,

    /// Human-readable description of the failure.
    #[serde(default)]
    pub description: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if !self.description.is_empty() {
            write!(f, ": {}", self.description)?;
        }
        for detail in &self.errors {
            write!(f, " [{}: {}]", detail.field, detail.error_code)?;
        }
        Ok(())
    }
}

/// A single field-level error inside an [`ErrorResponse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// The request field that was rejected.
    #[serde(default)]
    pub field: String,

    /// Explanation of the problem.
    #[serde(default)]
    pub message: String,

    /// Machine-readable error code, e.g. `invalid`.
    #[serde(default)]
    pub error_code: String,
}
