//
//  bitly-client
//  auth/basic.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! HTTP Basic credentials.

use std::collections::HashMap;
use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::{Credentials, AUTHORIZATION_HEADER};

/// Username and password sent with HTTP Basic authentication.
///
/// The header value is `Basic <base64(username ":" password)>` using the
/// standard, padded base64 alphabet. Empty usernames or passwords are not
/// rejected here; the server decides whether they are acceptable.
///
/// # Example
///
/// ```rust
/// use bitly_client::auth::{BasicCredentials, Credentials};
///
/// let credentials = BasicCredentials::new("test", "test");
/// assert_eq!(credentials.headers()["Authorization"], "Basic dGVzdDp0ZXN0");
/// ```
#[derive(Clone)]
pub struct BasicCredentials {
    username: String,
    password: String,
}

impl BasicCredentials {
    /// Creates Basic credentials from a username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The username these credentials authenticate as.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl Credentials for BasicCredentials {
    fn headers(&self) -> HashMap<String, String> {
        HashMap::from([(
            AUTHORIZATION_HEADER.to_string(),
            format!("Basic {}", basic_auth(&self.username, &self.password)),
        )])
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Encodes `username:password` with standard base64.
pub fn basic_auth(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{}:{}", username, password))
}
