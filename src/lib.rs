//
//  bitly-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Bitly Client Library
//!
//! A thin async client library for the Bitly v4 URL-shortening REST API.
//!
//! ## Overview
//!
//! Every operation maps one method call to one HTTP request/response cycle.
//! The library builds authenticated requests, encodes and decodes JSON,
//! follows pagination links and maps error responses to typed errors. It does
//! not retry, rate limit or cache.
//!
//! ## Module Structure
//!
//! - [`api`]: The HTTP client and the v4 resource operations
//! - [`auth`]: Credential providers (Bearer token, HTTP Basic)
//! - [`config`]: Client configuration from the environment or a TOML file
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bitly_client::api::v4::GroupsService;
//! use bitly_client::config::ClientConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ClientConfig::from_env()?.build_client()?;
//!
//! for group in client.groups().list_groups("").await?.groups {
//!     println!("{}: {}", group.guid, group.name);
//! }
//! # Ok(())
//! # }
//! ```

/// API client implementations for Bitly.
///
/// The client handles authentication, request building, pagination, and
/// error handling.
pub mod api;

/// Authentication and credential management.
///
/// Handles two authentication methods:
/// - OAuth bearer tokens
/// - HTTP Basic (username/password)
pub mod auth;

/// Configuration management.
///
/// Builds a [`BitlyClient`] from explicit settings read from the process
/// environment or a TOML file.
pub mod config;

/// Re-export of the main client struct.
pub use api::BitlyClient;

/// Re-export of the error type returned by every API operation.
pub use api::ApiError;

/// Re-export of the configuration struct.
pub use config::ClientConfig;

/// Library version constant.
///
/// Derived from Cargo.toml at compile time and used in the default
/// User-Agent header.
///
/// # Example
///
/// ```rust
/// use bitly_client::VERSION;
///
/// println!("bitly-client {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
