//
//  bitly-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for the Bitly REST API and the typed
//! resource operations built on top of it.
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP client with authentication and request handling
//! - [`v4`]: Resource operations of API v4 (groups, user, bitlinks)
//! - [`common`]: Shared types (errors, pagination, query encoding, timestamps)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bitly_client::api::BitlyClient;
//! use bitly_client::api::v4::UserService;
//! use bitly_client::auth::BearerCredentials;
//!
//! # async fn example() -> Result<(), bitly_client::ApiError> {
//! let client = BitlyClient::new(BearerCredentials::new("your-token"))?;
//! let user = client.user().get().await?;
//! println!("Hello, {}", user.name);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns an [`ApiError`] on failure. Non-2xx responses
//! become `ApiError::Api` carrying the method, URL, status and decoded error
//! body; the display form is `"<METHOD> <URL>: <status> <message>"`.

/// Core HTTP client wrapper for the Bitly API.
///
/// Provides the [`BitlyClient`] struct which handles:
/// - Authentication header injection
/// - Request/response serialization
/// - Error handling and status code mapping
pub mod client;

/// Bitly API v4 resource operations.
pub mod v4;

/// Common types shared by every resource.
pub mod common;

/// Re-export of the main Bitly API client.
pub use client::BitlyClient;

/// Re-export of the API error type.
pub use common::ApiError;
