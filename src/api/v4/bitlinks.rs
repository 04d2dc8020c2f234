//
//  bitly-client
//  api/v4/bitlinks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Bitlink API types and data structures.
//!
//! A bitlink is a shortened URL. Bitlinks belong to a group and are listed
//! through [`GroupsService::get_bitlinks`](super::GroupsService::get_bitlinks),
//! which returns a paginated [`BitlinksResponse`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::common::{JsonDate, Paginate, Paginated};

/// A shortened URL.
///
/// # Fields
///
/// * `id` - The bitlink without scheme, e.g. `bit.ly/F3zBa5`
/// * `link` - The full short URL, e.g. `http://bit.ly/F3zBa5`
/// * `long_url` - The destination URL
/// * `created_at` - Creation timestamp in Bitly's format
/// * `references` - Links to related resources, keyed by resource name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bitlink {
    /// Links to related resources, e.g. `{"group": "https://.../groups/G"}`.
    #[serde(default)]
    pub references: HashMap<String, String>,

    /// Whether the bitlink is archived (hidden from default listings).
    #[serde(default)]
    pub archived: bool,

    /// Tags applied to the bitlink.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Creation timestamp, e.g. `2012-12-18T20:16:46+0000`.
    #[serde(default)]
    pub created_at: JsonDate,

    /// Login of the user who created the bitlink.
    #[serde(default)]
    pub created_by: String,

    /// Title of the destination page.
    #[serde(default)]
    pub title: String,

    /// The destination URL.
    #[serde(default)]
    pub long_url: String,

    /// The OAuth client that created the bitlink.
    #[serde(default)]
    pub client_id: String,

    /// The bitlink without scheme.
    #[serde(default)]
    pub id: String,

    /// The full short URL.
    #[serde(default)]
    pub link: String,

    /// Custom back-halves pointing at this bitlink.
    #[serde(default)]
    pub custom_bitlinks: Vec<String>,

    /// Mobile app deeplinks attached to the bitlink.
    #[serde(default)]
    pub deeplinks: Vec<Deeplink>,
}

/// A mobile app deeplink attached to a [`Bitlink`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deeplink {
    /// Unique identifier of the deeplink.
    #[serde(default)]
    pub guid: String,

    /// The bitlink the deeplink is attached to.
    #[serde(default)]
    pub bitlink: String,

    /// Path opened inside the app, e.g. `app://product/42`.
    #[serde(default)]
    pub app_uri_path: String,

    /// Where users without the app are sent to install it.
    #[serde(default)]
    pub install_url: String,

    /// Identifier of the registered app.
    #[serde(default)]
    pub app_guid: String,

    /// Target platform, `ios` or `android`.
    #[serde(default)]
    pub os: String,

    /// Install behavior, e.g. `promote_install`.
    #[serde(default)]
    pub install_type: String,

    /// Creation timestamp.
    #[serde(default)]
    pub created: JsonDate,

    /// Last modification timestamp.
    #[serde(default)]
    pub modified: JsonDate,

    /// Brand the app belongs to.
    #[serde(default)]
    pub brand_guid: String,
}

/// One page of bitlinks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitlinksResponse {
    /// The bitlinks on this page.
    #[serde(default)]
    pub links: Vec<Bitlink>,

    /// The pagination envelope.
    #[serde(default)]
    pub pagination: Paginate,
}

impl Paginated for BitlinksResponse {
    fn pagination(&self) -> &Paginate {
        &self.pagination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitlinks_response_decodes() {
        let json = r#"{
            "links": [{
                "created_at": "2012-12-18T20:16:46+0000",
                "id": "bit.ly/F3zBa5",
                "link": "http://bit.ly/F3zBa5",
                "custom_bitlinks": [],
                "long_url": "http://example.com/",
                "title": "Example.com Main Page",
                "archived": false,
                "created_by": "test",
                "client_id": "36b72d37f23e9e247e0aa40083841c92163c5c2f",
                "tags": ["docs"],
                "deeplinks": [{"guid": "Dg1", "os": "ios", "install_type": "promote_install"}],
                "references": {"group": "https://api-ssl.bitly.com/v4/groups/BcciiJsSgCZ"}
            }],
            "pagination": {"prev": "", "next": "", "size": 50, "page": 1, "total": 1}
        }"#;

        let response: BitlinksResponse = serde_json::from_str(json).unwrap();
        let link = &response.links[0];

        assert_eq!(link.id, "bit.ly/F3zBa5");
        assert_eq!(link.created_at.to_string(), "2012-12-18T20:16:46+0000");
        assert_eq!(link.deeplinks[0].created, JsonDate::default());
        assert_eq!(link.tags, vec!["docs".to_string()]);
        assert_eq!(link.deeplinks[0].os, "ios");
        assert_eq!(link.references["group"], "https://api-ssl.bitly.com/v4/groups/BcciiJsSgCZ");
        assert_eq!(response.pagination().total, 1);
        assert!(!response.pagination().has_next());
    }
}
