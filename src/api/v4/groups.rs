//
//  bitly-client
//  api/v4/groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Group API operations and data structures.
//!
//! Groups are the unit of ownership in Bitly: every bitlink belongs to
//! exactly one group, and every group belongs to an organization.
//!
//! # Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`list_groups`](GroupsService::list_groups) | `GET /v4/groups` |
//! | [`get_group`](GroupsService::get_group) | `GET /v4/groups/{guid}` |
//! | [`get_preferences`](GroupsService::get_preferences) | `GET /v4/groups/{guid}/preferences` |
//! | [`update_preferences`](GroupsService::update_preferences) | `PATCH /v4/groups/{guid}/preferences` |
//! | [`get_bitlinks`](GroupsService::get_bitlinks) | `GET /v4/groups/{guid}/bitlinks` |
//!
//! # Example
//!
//! ```rust,no_run
//! use bitly_client::api::BitlyClient;
//! use bitly_client::api::v4::{BitlinksByGroupQuery, GroupsService};
//! use bitly_client::auth::BearerCredentials;
//!
//! # async fn example() -> Result<(), bitly_client::ApiError> {
//! let client = BitlyClient::new(BearerCredentials::new("your-token"))?;
//! let groups = client.groups();
//!
//! let query = BitlinksByGroupQuery {
//!     size: 10,
//!     keyword: "launch".to_string(),
//!     ..Default::default()
//! };
//! let page = groups.get_bitlinks("BcciiJcGgDF", Some(&query)).await?;
//! println!("{} of {} bitlinks", page.links.len(), page.pagination.total);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::BitlinksResponse;
use crate::api::client::versioned;
use crate::api::common::{append_query, is_default, ApiError, Cursor, JsonDate};
use crate::api::BitlyClient;

/// A Bitly group.
///
/// # Fields
///
/// * `guid` - Unique identifier of the group
/// * `organization_guid` - The organization the group belongs to
/// * `name` - Human-readable name
/// * `role` - The authenticated user's role in the group, e.g. `org-admin`
/// * `bsds` - Branded short domains available to the group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Links to related resources, keyed by resource name.
    #[serde(default)]
    pub references: HashMap<String, String>,

    /// Human-readable name of the group.
    #[serde(default)]
    pub name: String,

    /// Branded short domains available to the group.
    #[serde(default)]
    pub bsds: Vec<String>,

    /// Whether the group is active.
    #[serde(default)]
    pub is_active: bool,

    /// Creation timestamp, e.g. `2012-12-18T18:14:53+0000`.
    #[serde(default)]
    pub created: JsonDate,

    /// Last modification timestamp.
    #[serde(default)]
    pub modified: JsonDate,

    /// The organization the group belongs to.
    #[serde(default)]
    pub organization_guid: String,

    /// The authenticated user's role in the group.
    #[serde(default)]
    pub role: String,

    /// Unique identifier of the group.
    #[serde(default)]
    pub guid: String,
}

/// Response of [`GroupsService::list_groups`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupsResponse {
    /// The groups, in the order the API returned them.
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// Preferences of a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPreferences {
    /// The group the preferences belong to.
    #[serde(default)]
    pub group_guid: String,

    /// Default short domain for new bitlinks, e.g. `bit.ly`.
    #[serde(default)]
    pub domain_preference: String,
}

/// Query parameters of [`GroupsService::list_groups`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListGroupsQuery {
    /// Restrict the listing to one organization.
    #[serde(skip_serializing_if = "is_default")]
    pub organization_guid: String,
}

/// Query parameters of [`GroupsService::get_bitlinks`].
///
/// Fields left at their default value are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BitlinksByGroupQuery {
    /// Page size (1-100). The server default is 50.
    #[serde(skip_serializing_if = "is_default")]
    pub size: u32,

    /// Page number, 1-indexed.
    #[serde(skip_serializing_if = "is_default")]
    pub page: u32,

    /// Opaque cursor returned by the server for keyset pagination.
    #[serde(skip_serializing_if = "is_default")]
    pub search_after: String,

    /// Free-text search across titles and URLs.
    #[serde(skip_serializing_if = "is_default")]
    pub keyword: String,

    /// Search query understood by the Bitly search syntax.
    #[serde(skip_serializing_if = "is_default")]
    pub query: String,

    /// Unix timestamp; only bitlinks created before it.
    #[serde(skip_serializing_if = "is_default")]
    pub created_before: i64,

    /// Unix timestamp; only bitlinks created after it.
    #[serde(skip_serializing_if = "is_default")]
    pub created_after: i64,

    /// Unix timestamp; only bitlinks modified after it.
    #[serde(skip_serializing_if = "is_default")]
    pub modified_after: i64,

    /// `on`, `off` or `both`.
    #[serde(skip_serializing_if = "is_default")]
    pub archived: String,

    /// `on`, `off` or `both`.
    #[serde(skip_serializing_if = "is_default")]
    pub deeplinks: String,

    /// `on`, `off` or `both`.
    #[serde(skip_serializing_if = "is_default")]
    pub domain_deeplinks: String,

    /// Only bitlinks in this campaign.
    #[serde(skip_serializing_if = "is_default")]
    pub campaign_guid: String,

    /// Only bitlinks in this channel.
    #[serde(skip_serializing_if = "is_default")]
    pub channel_guid: String,

    /// `on`, `off` or `both`.
    #[serde(skip_serializing_if = "is_default")]
    pub custom_bitlink: String,

    /// Only bitlinks created by this login.
    #[serde(skip_serializing_if = "is_default")]
    pub encoding_login: String,
}

/// Operations on groups.
///
/// Implemented by [`GroupsClient`]; code that only needs these operations can
/// depend on the trait and be tested against a substitute.
#[async_trait]
pub trait GroupsService {
    /// Lists the groups the authenticated user belongs to.
    ///
    /// An empty `organization_guid` lists groups across all organizations.
    async fn list_groups(&self, organization_guid: &str) -> Result<GroupsResponse, ApiError>;

    /// Fetches a single group.
    async fn get_group(&self, group_guid: &str) -> Result<Group, ApiError>;

    /// Fetches the preferences of a group.
    async fn get_preferences(&self, group_guid: &str) -> Result<GroupPreferences, ApiError>;

    /// Updates the preferences of a group and returns the stored values.
    async fn update_preferences(
        &self,
        group_guid: &str,
        preferences: &GroupPreferences,
    ) -> Result<GroupPreferences, ApiError>;

    /// Fetches one page of the bitlinks of a group.
    async fn get_bitlinks(
        &self,
        group_guid: &str,
        query: Option<&BitlinksByGroupQuery>,
    ) -> Result<BitlinksResponse, ApiError>;
}

/// [`GroupsService`] backed by a [`BitlyClient`].
///
/// Obtained from [`BitlyClient::groups`].
#[derive(Debug, Clone, Copy)]
pub struct GroupsClient<'a> {
    client: &'a BitlyClient,
}

impl<'a> GroupsClient<'a> {
    pub(crate) fn new(client: &'a BitlyClient) -> Self {
        Self { client }
    }

    /// Fetches the first page of the bitlinks of a group and wraps it in a
    /// [`Cursor`] for traversal.
    pub async fn bitlinks_cursor(
        &self,
        group_guid: &str,
        query: Option<&BitlinksByGroupQuery>,
    ) -> Result<Cursor<BitlinksResponse>, ApiError> {
        let path = bitlinks_path(group_guid, query)?;
        let response = self.client.get(&path).await?;
        Ok(Cursor::new(self.client.clone(), path, response))
    }
}

/// `/groups` or `/groups/{guid}`, with the guid percent-encoded as one segment.
fn group_path(group_guid: &str) -> String {
    if group_guid.is_empty() {
        "/groups".to_string()
    } else {
        format!("/groups/{}", urlencoding::encode(group_guid))
    }
}

/// Versioned path of a collection below a required group.
fn group_resource_path(group_guid: &str, resource: &str) -> Result<String, ApiError> {
    let group_guid = group_guid.trim_end_matches('/');
    if group_guid.is_empty() {
        return Err(ApiError::MissingParameter("group_guid"));
    }
    let path = versioned(&format!("{}/{}", group_path(group_guid), resource));
    tracing::trace!(%path, "built group path");
    Ok(path)
}

fn bitlinks_path(
    group_guid: &str,
    query: Option<&BitlinksByGroupQuery>,
) -> Result<String, ApiError> {
    let path = group_resource_path(group_guid, "bitlinks")?;
    match query {
        Some(query) => append_query(&path, query),
        None => Ok(path),
    }
}

#[async_trait]
impl<'a> GroupsService for GroupsClient<'a> {
    async fn list_groups(&self, organization_guid: &str) -> Result<GroupsResponse, ApiError> {
        let query = ListGroupsQuery {
            organization_guid: organization_guid.to_string(),
        };
        let path = append_query(&versioned(&group_path("")), &query)?;
        self.client.get(&path).await
    }

    async fn get_group(&self, group_guid: &str) -> Result<Group, ApiError> {
        let path = group_resource_path(group_guid, "")?;
        self.client.get(&path).await
    }

    async fn get_preferences(&self, group_guid: &str) -> Result<GroupPreferences, ApiError> {
        let path = group_resource_path(group_guid, "preferences")?;
        self.client.get(&path).await
    }

    async fn update_preferences(
        &self,
        group_guid: &str,
        preferences: &GroupPreferences,
    ) -> Result<GroupPreferences, ApiError> {
        let path = group_resource_path(group_guid, "preferences")?;
        self.client.patch(&path, preferences).await
    }

    async fn get_bitlinks(
        &self,
        group_guid: &str,
        query: Option<&BitlinksByGroupQuery>,
    ) -> Result<BitlinksResponse, ApiError> {
        let path = bitlinks_path(group_guid, query)?;
        self.client.get(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{Direction, Paginate};
    use crate::auth::BearerCredentials;
    use mockito::Matcher;

    const GROUPS_BODY: &str = r#"{"groups":[{"created":"2012-12-18T18:14:53+0000","modified":"2016-11-11T21:04:26+0000","bsds":[],"guid":"BcciiJcGgDF","organization_guid":"OssccSr9D4j","name":"test","is_active":true,"role":"org-admin","references":{"organization":"https://api-ssl.bitly.com/v4/organizations/OssccSr9D4j"}}]}"#;

    const BITLINKS_BODY: &str = r#"{"links":[{"created_at":"2012-12-18T20:16:46+0000","id":"bit.ly/F3zBa5","link":"http://bit.ly/F3zBa5","custom_bitlinks":[],"long_url":"http://example.com/","title":"Example.com Main Page","archived":false,"created_by":"test","client_id":"36b72d37f23e9e247e0aa40083841c92163c5c2f","tags":[],"deeplinks":[],"references":{"group":"https://api-ssl.bitly.com/v4/groups/BcciiJsSgCZ"}},{"created_at":"2012-12-18T18:15:00+0000","id":"on.natgeo.com/WmsHnP","link":"http://on.natgeo.com/WmsHnP","custom_bitlinks":[],"long_url":"http://animals.nationalgeographic.com/animals/fish/pufferfish/","title":"All about Pufferfish","archived":false,"created_by":"test","client_id":"36b72d37f23e9e247e0aa40083841c92163c5c2f","tags":[],"deeplinks":[],"references":{"group":"https://api-ssl.bitly.com/v4/groups/BcciiJsSgCZ"}}],"pagination":{"prev":"","next":"","size":50,"page":1,"total":2}}"#;

    fn client(base_url: &str) -> BitlyClient {
        BitlyClient::new(BearerCredentials::new("bitly-token"))
            .unwrap()
            .with_base_url(base_url)
    }

    #[test]
    fn test_group_paths() {
        assert_eq!(group_path(""), "/groups");
        assert_eq!(group_path("abc"), "/groups/abc");
        assert_eq!(group_resource_path("abc", "").unwrap(), "/v4/groups/abc");
        assert_eq!(group_resource_path("abc/", "preferences").unwrap(), "/v4/groups/abc/preferences");
        assert!(matches!(
            group_resource_path("", "bitlinks"),
            Err(ApiError::MissingParameter("group_guid"))
        ));
    }

    #[test]
    fn test_group_path_encodes_reserved_characters() {
        assert_eq!(group_path("a?b"), "/groups/a%3Fb");
        assert_eq!(group_path("a/b#c"), "/groups/a%2Fb%23c");
        assert_eq!(
            group_resource_path("a?b", "bitlinks").unwrap(),
            "/v4/groups/a%3Fb/bitlinks"
        );
    }

    #[tokio::test]
    async fn test_get_group_with_reserved_characters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v4/groups/a%3Fb")
            .with_status(200)
            .with_body(r#"{"guid":"a?b","name":"odd"}"#)
            .create_async()
            .await;

        let group = client(&server.url()).groups().get_group("a?b").await.unwrap();

        mock.assert_async().await;
        assert_eq!(group.guid, "a?b");
    }

    #[tokio::test]
    async fn test_list_groups_ok() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v4/groups")
            .with_status(200)
            .with_body(GROUPS_BODY)
            .create_async()
            .await;

        let client = client(&server.url());
        let response = client.groups().list_groups("").await.unwrap();

        mock.assert_async().await;
        let expected = Group {
            created: JsonDate::parse("2012-12-18T18:14:53+0000").unwrap(),
            modified: JsonDate::parse("2016-11-11T21:04:26+0000").unwrap(),
            bsds: vec![],
            guid: "BcciiJcGgDF".to_string(),
            organization_guid: "OssccSr9D4j".to_string(),
            name: "test".to_string(),
            is_active: true,
            role: "org-admin".to_string(),
            references: HashMap::from([(
                "organization".to_string(),
                "https://api-ssl.bitly.com/v4/organizations/OssccSr9D4j".to_string(),
            )]),
        };
        assert_eq!(response.groups, vec![expected]);
    }

    #[tokio::test]
    async fn test_list_groups_empty() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v4/groups")
            .match_query(Matcher::UrlEncoded(
                "organization_guid".into(),
                "test".into(),
            ))
            .with_status(200)
            .with_body(r#"{"groups":[]}"#)
            .create_async()
            .await;

        let client = client(&server.url());
        let response = client.groups().list_groups("test").await.unwrap();

        mock.assert_async().await;
        assert!(response.groups.is_empty());
    }

    #[tokio::test]
    async fn test_list_groups_errors() {
        let cases = [
            (403, r#"{"message":"FORBIDDEN"}"#, "403 FORBIDDEN"),
            (500, r#"{"message":"some error"}"#, "500 some error"),
            (503, r#"{"message":"unavailable"}"#, "503 unavailable"),
        ];

        for (status, body, want) in cases {
            let mut server = mockito::Server::new_async().await;
            let _mock = server
                .mock("GET", "/v4/groups")
                .with_status(status)
                .with_body(body)
                .create_async()
                .await;

            let client = client(&server.url());
            let err = client.groups().list_groups("").await.unwrap_err();
            assert!(err.to_string().contains(want), "want {} got {}", want, err);
        }
    }

    #[tokio::test]
    async fn test_get_group() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v4/groups/BcciiJcGgDF")
            .with_status(200)
            .with_body(r#"{"guid":"BcciiJcGgDF","name":"test","is_active":false}"#)
            .create_async()
            .await;

        let client = client(&server.url());
        let group = client.groups().get_group("BcciiJcGgDF").await.unwrap();

        mock.assert_async().await;
        assert_eq!(group.guid, "BcciiJcGgDF");
        assert!(!group.is_active);
    }

    #[tokio::test]
    async fn test_empty_guid_makes_no_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = client(&server.url());
        let groups = client.groups();

        assert!(matches!(
            groups.get_group("").await,
            Err(ApiError::MissingParameter("group_guid"))
        ));
        assert!(matches!(
            groups.get_preferences("").await,
            Err(ApiError::MissingParameter(_))
        ));
        assert!(matches!(
            groups.get_bitlinks("", None).await,
            Err(ApiError::MissingParameter(_))
        ));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_preferences_roundtrip() {
        let mut server = mockito::Server::new_async().await;
        let get = server
            .mock("GET", "/v4/groups/G1/preferences")
            .with_status(200)
            .with_body(r#"{"group_guid":"G1","domain_preference":"bit.ly"}"#)
            .create_async()
            .await;
        let patch = server
            .mock("PATCH", "/v4/groups/G1/preferences")
            .match_body(Matcher::Json(serde_json::json!({
                "group_guid": "G1",
                "domain_preference": "j.mp"
            })))
            .with_status(200)
            .with_body(r#"{"group_guid":"G1","domain_preference":"j.mp"}"#)
            .create_async()
            .await;

        let client = client(&server.url());
        let groups = client.groups();

        let mut preferences = groups.get_preferences("G1").await.unwrap();
        assert_eq!(preferences.domain_preference, "bit.ly");

        preferences.domain_preference = "j.mp".to_string();
        let updated = groups.update_preferences("G1", &preferences).await.unwrap();

        get.assert_async().await;
        patch.assert_async().await;
        assert_eq!(updated, preferences);
    }

    #[tokio::test]
    async fn test_get_bitlinks_by_group() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v4/groups/BcciiJcGgDF/bitlinks")
            .with_status(200)
            .with_body(BITLINKS_BODY)
            .create_async()
            .await;

        let client = client(&server.url());
        let response = client
            .groups()
            .get_bitlinks("BcciiJcGgDF", None)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            response.pagination,
            Paginate {
                total: 2,
                size: 50,
                page: 1,
                prev: String::new(),
                next: String::new(),
            }
        );
        assert_eq!(response.links.len(), 2);
        assert_eq!(response.links[1].title, "All about Pufferfish");
        assert_eq!(response.links[0].created_by, "test");
    }

    #[tokio::test]
    async fn test_get_bitlinks_sends_only_set_params() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v4/groups/G1/bitlinks")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("size".into(), "2".into()),
                Matcher::UrlEncoded("archived".into(), "both".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"links":[],"pagination":{"total":0,"size":2,"page":1,"prev":"","next":""}}"#)
            .create_async()
            .await;

        let query = BitlinksByGroupQuery {
            size: 2,
            archived: "both".to_string(),
            ..Default::default()
        };
        assert_eq!(
            bitlinks_path("G1", Some(&query)).unwrap(),
            "/v4/groups/G1/bitlinks?size=2&archived=both"
        );

        let client = client(&server.url());
        let response = client.groups().get_bitlinks("G1", Some(&query)).await.unwrap();

        mock.assert_async().await;
        assert!(response.links.is_empty());
    }

    #[test]
    fn test_default_bitlinks_query_is_empty() {
        assert_eq!(
            bitlinks_path("G1", Some(&BitlinksByGroupQuery::default())).unwrap(),
            "/v4/groups/G1/bitlinks"
        );
    }

    #[tokio::test]
    async fn test_bitlinks_cursor_walks_pages() {
        let mut server = mockito::Server::new_async().await;
        let base = server.url();

        let first = server
            .mock("GET", "/v4/groups/G1/bitlinks?size=1")
            .with_status(200)
            .with_body(format!(
                r#"{{"links":[{{"id":"bit.ly/a"}}],"pagination":{{"total":2,"size":1,"page":1,"prev":"","next":"{}/v4/groups/G1/bitlinks?size=1&page=2"}}}}"#,
                base
            ))
            .create_async()
            .await;
        let second = server
            .mock("GET", "/v4/groups/G1/bitlinks?size=1&page=2")
            .with_status(200)
            .with_body(format!(
                r#"{{"links":[{{"id":"bit.ly/b"}}],"pagination":{{"total":2,"size":1,"page":2,"prev":"{}/v4/groups/G1/bitlinks?size=1","next":""}}}}"#,
                base
            ))
            .create_async()
            .await;

        let client = client(&base);
        let query = BitlinksByGroupQuery {
            size: 1,
            ..Default::default()
        };
        let mut cursor = client
            .groups()
            .bitlinks_cursor("G1", Some(&query))
            .await
            .unwrap();

        assert_eq!(cursor.response().links[0].id, "bit.ly/a");
        assert!(cursor.advance(Direction::Forward));
        cursor.load().await.unwrap();
        assert_eq!(cursor.response().links[0].id, "bit.ly/b");
        assert_eq!(cursor.response().pagination.page, 2);
        assert!(!cursor.advance(Direction::Forward));

        first.assert_async().await;
        second.assert_async().await;
    }
}
