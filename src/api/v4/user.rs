//
//  bitly-client
//  api/v4/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User API operations and data structures.
//!
//! The user resource always refers to the owner of the credentials the
//! client was created with.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::GroupsResponse;
use crate::api::client::versioned;
use crate::api::common::{is_default, ApiError, JsonDate};
use crate::api::BitlyClient;

/// An email address registered on a [`User`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// The address.
    #[serde(default)]
    pub email: String,

    /// Whether Bitly sends notifications to this address.
    #[serde(default)]
    pub is_primary: bool,

    /// Whether the address has been confirmed.
    #[serde(default)]
    pub is_verified: bool,
}

/// The authenticated Bitly user.
///
/// # Example
///
/// ```rust
/// use bitly_client::api::v4::User;
///
/// let json = r#"{"login":"test","name":"test","is_active":true,"created":"2012-12-18T18:14:53+0000","modified":"2018-01-20T17:37:52+0000","emails":[]}"#;
/// let user: User = serde_json::from_str(json).unwrap();
///
/// assert_eq!(user.login, "test");
/// assert_eq!(user.created.to_string(), "2012-12-18T18:14:53+0000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Account creation time.
    #[serde(default)]
    pub created: JsonDate,

    /// Last modification time.
    #[serde(default)]
    pub modified: JsonDate,

    /// Login name.
    #[serde(default)]
    pub login: String,

    /// Whether the account is active.
    #[serde(default)]
    pub is_active: bool,

    /// Whether two-factor authentication is enabled.
    #[serde(default)]
    pub is_2fa_enabled: bool,

    /// Registered email addresses.
    #[serde(default)]
    pub emails: Vec<Email>,

    /// Whether the account signs in through SSO.
    #[serde(default)]
    pub is_sso_user: bool,

    /// Group new bitlinks are created in when none is given.
    #[serde(default)]
    pub default_group_guid: String,
}

/// Changes applied by [`UserService::update`].
///
/// Only fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,

    /// New default group.
    #[serde(skip_serializing_if = "is_default")]
    pub default_group_guid: String,
}

/// Operations on the authenticated user.
#[async_trait]
pub trait UserService {
    /// Fetches the authenticated user.
    async fn get(&self) -> Result<User, ApiError>;

    /// Updates the authenticated user and returns the stored record.
    ///
    /// An update with no field set is rejected without a request.
    async fn update(&self, update: &UserUpdate) -> Result<User, ApiError>;

    /// Lists the groups `login` belongs to.
    ///
    /// Bitly only exposes the groups of the authenticated user, so `login` is
    /// checked for presence and the authenticated user's groups are returned.
    async fn get_groups(&self, login: &str) -> Result<GroupsResponse, ApiError>;
}

/// [`UserService`] backed by a [`BitlyClient`].
///
/// Obtained from [`BitlyClient::user`].
#[derive(Debug, Clone, Copy)]
pub struct UserClient<'a> {
    client: &'a BitlyClient,
}

impl<'a> UserClient<'a> {
    pub(crate) fn new(client: &'a BitlyClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<'a> UserService for UserClient<'a> {
    async fn get(&self) -> Result<User, ApiError> {
        self.client.get(&versioned("user")).await
    }

    async fn update(&self, update: &UserUpdate) -> Result<User, ApiError> {
        if is_default(update) {
            return Err(ApiError::MissingParameter("update"));
        }
        self.client.patch(&versioned("user"), update).await
    }

    async fn get_groups(&self, login: &str) -> Result<GroupsResponse, ApiError> {
        if login.is_empty() {
            return Err(ApiError::MissingParameter("login"));
        }
        self.client.get(&versioned("groups")).await
    }
}
