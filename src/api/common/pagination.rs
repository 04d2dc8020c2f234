//
//  bitly-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for Bitly API Responses
//!
//! Bitly list endpoints embed a pagination envelope next to their items:
//!
//! ```json
//! {
//!   "links": [ ... ],
//!   "pagination": {"total": 120, "size": 50, "page": 1, "prev": "", "next": "https://..."}
//! }
//! ```
//!
//! `next` and `prev` are complete URLs, or empty strings when there is no
//! page in that direction.
//!
//! # Overview
//!
//! | Type | Role |
//! |------|------|
//! | [`Paginate`] | The decoded envelope |
//! | [`Paginated`] | Implemented by every response type that carries an envelope |
//! | [`Cursor`] | Walks a paginated endpoint forward and backward |
//!
//! # Cursor protocol
//!
//! A cursor never fetches on its own. [`Cursor::advance`] only moves the
//! cursor to the next or previous URL and marks it stale; the caller then
//! calls [`Cursor::load`] to fetch that page:
//!
//! ```rust,ignore
//! let mut cursor = client.groups().bitlinks_cursor("BcciiJcGgDF", None).await?;
//!
//! loop {
//!     for link in &cursor.response().links {
//!         println!("{}", link.link);
//!     }
//!     if !cursor.advance(Direction::Forward) {
//!         break;
//!     }
//!     cursor.load().await?;
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::api::BitlyClient;

/// Pagination envelope attached to Bitly list responses.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `total` | `u64` | Total number of items across all pages |
/// | `size` | `u32` | Page size |
/// | `page` | `u32` | Current page number (1-indexed) |
/// | `prev` | `String` | URL of the previous page, empty if none |
/// | `next` | `String` | URL of the next page, empty if none |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginate {
    /// Total number of items across all pages.
    #[serde(default)]
    pub total: u64,

    /// Number of items per page.
    #[serde(default)]
    pub size: u32,

    /// Current page number.
    #[serde(default)]
    pub page: u32,

    /// URL to fetch the previous page of results, or empty.
    #[serde(default)]
    pub prev: String,

    /// URL to fetch the next page of results, or empty.
    #[serde(default)]
    pub next: String,
}

impl Paginate {
    /// Checks if there is a page after this one.
    pub fn has_next(&self) -> bool {
        !self.next.is_empty()
    }

    /// Checks if there is a page before this one.
    pub fn has_prev(&self) -> bool {
        !self.prev.is_empty()
    }

    /// Returns the URL for `direction`, or `None` when it is empty.
    pub fn url(&self, direction: Direction) -> Option<&str> {
        let url = match direction {
            Direction::Forward => &self.next,
            Direction::Backward => &self.prev,
        };
        (!url.is_empty()).then_some(url.as_str())
    }
}

/// A response type that carries a [`Paginate`] envelope.
pub trait Paginated {
    /// The pagination envelope of this page.
    fn pagination(&self) -> &Paginate;
}

/// Direction of travel for [`Cursor::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow the `next` URL.
    Forward,
    /// Follow the `prev` URL.
    Backward,
}

/// Walks the pages of a paginated endpoint.
///
/// The cursor owns the most recently fetched page and the URL of the page it
/// points at. After a successful [`advance`](Self::advance) the two disagree
/// until [`load`](Self::load) fetches the new URL; [`response`](Self::response)
/// keeps returning the previous page in the meantime and
/// [`is_loaded`](Self::is_loaded) reports `false`.
///
/// # Type Parameters
///
/// - `T` - The decoded page type, e.g.
///   [`BitlinksResponse`](crate::api::v4::BitlinksResponse)
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    client: BitlyClient,
    url: String,
    response: T,
    loaded: bool,
}

impl<T> Cursor<T>
where
    T: Paginated + DeserializeOwned,
{
    /// Wraps an already fetched page together with the URL that produced it.
    pub fn new(client: BitlyClient, url: impl Into<String>, response: T) -> Self {
        Self {
            client,
            url: url.into(),
            response,
            loaded: true,
        }
    }

    /// Points the cursor at the next or previous page.
    ///
    /// Returns `false` without touching the cursor when there is no page in
    /// that direction. Returns `true` after storing the new URL and marking
    /// the cursor stale; call [`load`](Self::load) before reading the page.
    pub fn advance(&mut self, direction: Direction) -> bool {
        match self.response.pagination().url(direction) {
            Some(url) => {
                self.url = url.to_string();
                self.loaded = false;
                true
            }
            None => false,
        }
    }

    /// Fetches the page the cursor points at, unless it is already loaded.
    ///
    /// On failure the cursor stays stale and keeps its previous page, so the
    /// call can be repeated.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        if self.loaded {
            return Ok(());
        }

        tracing::trace!(url = %self.url, "loading page");
        self.response = self.client.get_url(&self.url).await?;
        self.loaded = true;
        Ok(())
    }

    /// Advances forward and loads the page. Returns `false` on the last page.
    pub async fn next_page(&mut self) -> Result<bool, ApiError> {
        self.step(Direction::Forward).await
    }

    /// Advances backward and loads the page. Returns `false` on the first page.
    pub async fn prev_page(&mut self) -> Result<bool, ApiError> {
        self.step(Direction::Backward).await
    }

    async fn step(&mut self, direction: Direction) -> Result<bool, ApiError> {
        if !self.advance(direction) {
            return Ok(false);
        }
        self.load().await?;
        Ok(true)
    }
}

impl<T> Cursor<T> {
    /// The most recently fetched page.
    pub fn response(&self) -> &T {
        &self.response
    }

    /// The URL the cursor points at.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether [`response`](Self::response) reflects [`url`](Self::url).
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Consumes the cursor and returns the most recently fetched page.
    pub fn into_inner(self) -> T {
        self.response
    }
}
