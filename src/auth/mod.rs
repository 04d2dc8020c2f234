//
//  bitly-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! This module provides the credential providers used to authenticate every
//! request sent to the Bitly API.
//!
//! ## Supported Authentication Methods
//!
//! - **OAuth Bearer Token**: The generic access token issued from the Bitly
//!   dashboard or through an OAuth flow. This is the recommended method.
//! - **Basic Authentication**: Username/password authentication, used by Bitly
//!   to exchange credentials for an access token.
//!
//! ## Providers
//!
//! - [`BasicCredentials`]: HTTP Basic credentials
//! - [`BearerCredentials`]: OAuth bearer token credentials
//!
//! ## Example
//!
//! ```rust
//! use bitly_client::auth::{BearerCredentials, Credentials};
//!
//! let credentials = BearerCredentials::new("my-access-token");
//! let headers = credentials.headers();
//!
//! assert_eq!(headers["Authorization"], "Bearer my-access-token");
//! ```
//!
//! See <https://dev.bitly.com/docs/getting-started/authentication> for the
//! authentication flows Bitly supports.

mod basic;
mod token;

pub use basic::*;
pub use token::*;

use std::collections::HashMap;
use std::fmt::Debug;

/// Name of the header carrying credentials.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// A source of authentication headers for outbound requests.
///
/// Implementations are immutable once constructed: [`headers`](Self::headers)
/// is a pure function of the values the credential was created with, so a
/// single instance can be shared by every request a client makes.
///
/// The client applies these headers after its fixed `Content-Type`, `Accept`
/// and `User-Agent` headers, so a credential that returns one of those names
/// overrides the default.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use bitly_client::auth::Credentials;
///
/// #[derive(Debug)]
/// struct ApiKey(String);
///
/// impl Credentials for ApiKey {
///     fn headers(&self) -> HashMap<String, String> {
///         HashMap::from([("X-Api-Key".to_string(), self.0.clone())])
///     }
/// }
///
/// let key = ApiKey("abc".to_string());
/// assert_eq!(key.headers()["X-Api-Key"], "abc");
/// ```
pub trait Credentials: Debug + Send + Sync {
    /// Returns the header name/value pairs to attach to a request.
    fn headers(&self) -> HashMap<String, String>;
}
