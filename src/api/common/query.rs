//
//  bitly-client
//  api/common/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query string encoding.
//!
//! Query parameter objects are plain `Serialize` structs whose fields carry
//! `#[serde(skip_serializing_if = "is_default")]`, so a field left at its
//! zero or empty value never reaches the wire. A struct with every field at
//! its default encodes to the empty string.
//!
//! ```rust
//! use bitly_client::api::common::{encode_query, is_default};
//! use serde::Serialize;
//!
//! #[derive(Default, Serialize)]
//! struct Search {
//!     #[serde(skip_serializing_if = "is_default")]
//!     keyword: String,
//!     #[serde(skip_serializing_if = "is_default")]
//!     size: u32,
//! }
//!
//! assert_eq!(encode_query(&Search::default()).unwrap(), "");
//! assert_eq!(
//!     encode_query(&Search { size: 10, ..Default::default() }).unwrap(),
//!     "size=10"
//! );
//! ```

use serde::Serialize;
use url::Url;

use super::ApiError;

/// `skip_serializing_if` predicate: `true` when the value equals its default.
pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// URL-encodes a query parameter object.
///
/// # Errors
///
/// Returns [`ApiError::Query`] when the object contains values that have no
/// query-string representation (nested maps or sequences).
pub fn encode_query<Q: Serialize + ?Sized>(params: &Q) -> Result<String, ApiError> {
    Ok(serde_urlencoded::to_string(params)?)
}

/// Appends an encoded query to a request path, omitting the `?` when the
/// query is empty.
pub fn append_query<Q: Serialize + ?Sized>(path: &str, params: &Q) -> Result<String, ApiError> {
    let query = encode_query(params)?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, query))
    }
}

/// Replaces the query of an absolute URL with the encoded `params`.
///
/// Any query already present on `raw_url` is dropped; a fragment is kept.
///
/// # Errors
///
/// Returns [`ApiError::InvalidUrl`] when `raw_url` is not an absolute URL.
///
/// # Example
///
/// ```rust
/// use bitly_client::api::common::build_url;
///
/// let url = build_url("http://example.com/path?old=1", &[("force", "true"), ("sort", "desc")]).unwrap();
/// assert_eq!(url, "http://example.com/path?force=true&sort=desc");
/// ```
pub fn build_url<Q: Serialize + ?Sized>(raw_url: &str, params: &Q) -> Result<String, ApiError> {
    Url::parse(raw_url)?;
    let (rest, fragment) = match raw_url.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (raw_url, None),
    };
    let base = rest.split_once('?').map_or(rest, |(base, _)| base);

    let mut url = append_query(base, params)?;
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }
    Ok(url)
}
