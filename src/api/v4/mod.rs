//
//  bitly-client
//  api/v4/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Bitly API v4 implementation.
//!
//! This module provides type-safe Rust bindings for the Bitly v4 REST API,
//! organized by resource. Each resource exposes a capability trait, so code
//! that depends on it can be tested against a substitute, and a concrete
//! client that borrows the shared [`BitlyClient`](crate::api::BitlyClient).
//!
//! # Module Organization
//!
//! - [`groups`] - Groups, group preferences and the bitlinks of a group
//! - [`user`] - The authenticated user
//! - [`bitlinks`] - Bitlink data structures
//!
//! # Example
//!
//! ```rust,no_run
//! use bitly_client::api::BitlyClient;
//! use bitly_client::api::v4::GroupsService;
//! use bitly_client::auth::BearerCredentials;
//!
//! # async fn example() -> Result<(), bitly_client::ApiError> {
//! let client = BitlyClient::new(BearerCredentials::new("your-token"))?;
//!
//! for group in client.groups().list_groups("").await?.groups {
//!     println!("{} ({})", group.name, group.guid);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Notes
//!
//! - Identifiers (GUIDs) are opaque strings such as `BcciiJcGgDF`
//! - Empty required identifiers are rejected before any request is made

pub mod bitlinks;
pub mod groups;
pub mod user;

pub use bitlinks::*;
pub use groups::*;
pub use user::*;
