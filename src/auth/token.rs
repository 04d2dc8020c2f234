//
//  bitly-client
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! OAuth bearer token credentials.
//!
//! Bitly issues a long-lived "generic access token" per user, and the same
//! header format is used for tokens obtained through the OAuth web flow. The
//! token is sent verbatim; no validation or trimming is performed.

use std::collections::HashMap;
use std::fmt;

use super::{Credentials, AUTHORIZATION_HEADER};

/// An OAuth access token sent as `Authorization: Bearer <token>`.
///
/// # Example
///
/// ```rust
/// use bitly_client::auth::{BearerCredentials, Credentials};
///
/// let credentials = BearerCredentials::new("secret_token");
/// assert_eq!(credentials.headers()["Authorization"], "Bearer secret_token");
/// ```
#[derive(Clone)]
pub struct BearerCredentials {
    token: String,
}

impl BearerCredentials {
    /// Creates bearer credentials from an access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Credentials for BearerCredentials {
    fn headers(&self) -> HashMap<String, String> {
        HashMap::from([(
            AUTHORIZATION_HEADER.to_string(),
            format!("Bearer {}", self.token),
        )])
    }
}

impl fmt::Debug for BearerCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerCredentials")
            .field("token", &"<redacted>")
            .finish()
    }
}
