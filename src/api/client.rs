//
//  bitly-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Bitly API
//!
//! This module provides the core HTTP client for interacting with the Bitly
//! v4 API. Every resource operation funnels through it.
//!
//! ## Features
//!
//! - Request construction with JSON content headers and a custom User-Agent
//! - Authentication header injection from a [`Credentials`] provider
//! - JSON serialization of payloads and deserialization of responses
//! - Mapping of non-2xx responses to [`ApiError::Api`]
//! - Raw body passthrough for opaque payloads
//! - Optional debug logging of requests and responses through `tracing`

use std::sync::Arc;

use reqwest::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use url::Url;

use crate::api::common::{ApiError, ErrorResponse};
use crate::api::v4::{GroupsClient, UserClient};
use crate::auth::Credentials;

/// Production endpoint of the Bitly API.
pub const DEFAULT_BASE_URL: &str = "https://api-ssl.bitly.com";

/// Version segment inserted in front of every resource path.
pub const API_VERSION: &str = "v4";

const JSON_CONTENT_TYPE: &str = "application/json";

/// The User-Agent sent when none is configured: `bitly-client/<version>`.
pub fn default_user_agent() -> String {
    format!("bitly-client/{}", crate::VERSION)
}

/// Prefixes a resource path with the API version segment.
///
/// Leading and trailing separators on `path` are trimmed, so exactly one
/// version segment and one separator end up in the result.
///
/// # Example
///
/// ```rust
/// use bitly_client::api::client::versioned;
///
/// assert_eq!(versioned("groups"), "/v4/groups");
/// assert_eq!(versioned("/groups/"), "/v4/groups");
/// assert_eq!(versioned("//groups/abc//"), "/v4/groups/abc");
/// ```
pub fn versioned(path: &str) -> String {
    format!("/{}/{}", API_VERSION, path.trim_matches('/'))
}

/// The main HTTP client for interacting with the Bitly API.
///
/// This client handles all HTTP communication with Bitly, including:
/// - Building request URLs from the configured base URL
/// - Applying the fixed JSON headers and authentication headers
/// - Serializing request bodies and deserializing responses
/// - Error handling for non-success status codes
///
/// Cloning is cheap: clones share the underlying connection pool and the
/// credentials. The client is `Send + Sync` and can be used from many tasks at
/// once.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use bitly_client::api::BitlyClient;
/// use bitly_client::auth::BearerCredentials;
///
/// let client = BitlyClient::new(BearerCredentials::new("your-token"))?;
/// assert_eq!(client.base_url(), "https://api-ssl.bitly.com");
/// # Ok::<(), bitly_client::ApiError>(())
/// ```
///
/// # Timeouts
///
/// The client imposes no timeout of its own. Configure one on the transport
/// and hand it over with [`with_http_client`](Self::with_http_client):
///
/// ```rust,no_run
/// use std::time::Duration;
/// use bitly_client::api::BitlyClient;
/// use bitly_client::auth::BearerCredentials;
///
/// let http = reqwest::Client::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let client = BitlyClient::new(BearerCredentials::new("your-token"))
///     .map(|c| c.with_http_client(http));
/// # Ok::<(), reqwest::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BitlyClient {
    /// The underlying HTTP client
    http: Client,
    /// Prefix for every request URL, e.g. `https://api-ssl.bitly.com`
    base_url: String,
    /// Value of the User-Agent header
    user_agent: String,
    /// Log requests and responses at debug level
    debug: bool,
    /// Source of the authentication headers
    credentials: Arc<dyn Credentials>,
}

impl BitlyClient {
    /// Creates a client for the production Bitly endpoint.
    ///
    /// # Parameters
    ///
    /// * `credentials` - The credential provider attached to every request
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Build`] if the HTTP client could not be created
    /// (for example when the TLS backend fails to initialize).
    pub fn new(credentials: impl Credentials + 'static) -> Result<Self, ApiError> {
        let http = Client::builder().build().map_err(ApiError::Build)?;
        Ok(Self::from_parts(http, Arc::new(credentials)))
    }

    /// Creates a client from an existing transport and shared credentials.
    pub fn from_parts(http: Client, credentials: Arc<dyn Credentials>) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: default_user_agent(),
            debug: false,
            credentials,
        }
    }

    /// Replaces the underlying HTTP transport.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Sets the base URL requests are sent to.
    ///
    /// The base URL and request paths are joined by plain concatenation, so
    /// the base URL should not end with `/`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the User-Agent header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Enables or disables debug logging of requests and responses.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Changes the base URL in place.
    ///
    /// Intended for test harnesses that point an existing client at a mock
    /// server. Call it before the client is shared between tasks.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Returns the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the User-Agent header value.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Checks if debug logging is enabled.
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Operations on groups.
    pub fn groups(&self) -> GroupsClient<'_> {
        GroupsClient::new(self)
    }

    /// Operations on the authenticated user.
    pub fn user(&self) -> UserClient<'_> {
        UserClient::new(self)
    }

    /// Builds a request for `path` relative to the base URL.
    ///
    /// The URL is `base_url + path`; `path` must start with `/`. When a
    /// payload is given it is serialized as the JSON body. The request carries
    /// `Content-Type: application/json`, `Accept: application/json`, the
    /// configured User-Agent and every credential header, in that order;
    /// credential headers replace any fixed header with the same name.
    ///
    /// # Type Parameters
    ///
    /// * `B` - The payload type (must implement `Serialize`)
    ///
    /// # Errors
    ///
    /// Returns an error without sending anything if:
    /// - The payload cannot be serialized ([`ApiError::Serialize`])
    /// - `base_url + path` is not a URL ([`ApiError::InvalidUrl`])
    /// - A header cannot be encoded ([`ApiError::InvalidHeader`])
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitly_client::api::BitlyClient;
    /// use bitly_client::auth::BearerCredentials;
    /// use reqwest::Method;
    ///
    /// let client = BitlyClient::new(BearerCredentials::new("token"))?
    ///     .with_base_url("http://example.com/bar");
    ///
    /// let request = client.build_request::<()>(Method::GET, "/foo", None)?;
    /// assert_eq!(request.url().as_str(), "http://example.com/bar/foo");
    /// # Ok::<(), bitly_client::ApiError>(())
    /// ```
    pub fn build_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&B>,
    ) -> Result<Request, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        self.build_url_request(method, &url, payload)
    }

    fn build_url_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        payload: Option<&B>,
    ) -> Result<Request, ApiError> {
        let body = payload
            .map(serde_json::to_vec)
            .transpose()
            .map_err(ApiError::Serialize)?;

        let url = Url::parse(url)?;
        let mut request = self.http.request(method, url).build().map_err(ApiError::Build)?;

        if let Some(body) = body {
            *request.body_mut() = Some(body.into());
        }

        let user_agent = HeaderValue::from_str(&self.user_agent).map_err(|_| {
            ApiError::InvalidHeader {
                name: USER_AGENT.to_string(),
            }
        })?;

        let headers = request.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(USER_AGENT, user_agent);

        for (name, value) in self.credentials.headers() {
            let invalid = || ApiError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let mut header_value = HeaderValue::from_str(&value).map_err(|_| invalid())?;
            header_value.set_sensitive(true);
            headers.insert(header_name, header_value);
        }

        Ok(request)
    }

    /// Sends a request and decodes the JSON response body into `T`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] if the exchange fails at the network level
    /// - [`ApiError::Api`] / [`ApiError::ErrorBody`] for statuses outside 200-299
    /// - [`ApiError::Decode`] if a successful body does not match `T`
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let response = self.dispatch(request).await?;
        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::Transport)?;

        if self.debug {
            tracing::debug!(
                status = status.as_u16(),
                body = %String::from_utf8_lossy(&body),
                "Response received"
            );
        }

        serde_json::from_slice(&body).map_err(ApiError::Decode)
    }

    /// Sends a request and copies the successful response body verbatim into
    /// `sink`, returning the number of bytes written.
    ///
    /// Use this for endpoints that return binary or non-JSON payloads (QR
    /// codes, CSV exports). Error responses are handled exactly as in
    /// [`execute`](Self::execute).
    pub async fn execute_raw<W>(&self, request: Request, sink: &mut W) -> Result<u64, ApiError>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let mut response = self.dispatch(request).await?;
        let mut written = 0u64;

        while let Some(chunk) = response.chunk().await.map_err(ApiError::Transport)? {
            sink.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        sink.flush().await?;

        if self.debug {
            tracing::debug!(bytes = written, "Raw response copied");
        }

        Ok(written)
    }

    /// Sends a request, checks the status and discards the response body.
    pub async fn execute_empty(&self, request: Request) -> Result<(), ApiError> {
        let response = self.dispatch(request).await?;
        response.bytes().await.map_err(ApiError::Transport)?;
        Ok(())
    }

    /// Executes the request and turns non-2xx statuses into errors.
    async fn dispatch(&self, request: Request) -> Result<Response, ApiError> {
        let method = request.method().clone();
        let url = request.url().to_string();

        if self.debug {
            tracing::debug!(
                method = %method,
                url = %url,
                headers = ?request.headers(),
                body = ?request.body().and_then(|b| b.as_bytes()).map(String::from_utf8_lossy),
                "Executing request"
            );
        }

        let response = self.http.execute(request).await.map_err(ApiError::Transport)?;
        let status = response.status().as_u16();

        if (200..=299).contains(&status) {
            return Ok(response);
        }

        let body = response.bytes().await.map_err(ApiError::Transport)?;

        if self.debug {
            tracing::debug!(
                status,
                body = %String::from_utf8_lossy(&body),
                "Error response received"
            );
        }

        match serde_json::from_slice::<ErrorResponse>(&body) {
            Ok(response) => Err(ApiError::Api {
                method,
                url,
                status,
                response,
            }),
            Err(source) => Err(ApiError::ErrorBody {
                method,
                url,
                status,
                source,
            }),
        }
    }

    /// Makes an HTTP GET request to the specified path.
    ///
    /// # Type Parameters
    ///
    /// * `T` - The type to deserialize the response JSON into
    ///
    /// # Parameters
    ///
    /// * `path` - The API path including the version segment (e.g., "/v4/user")
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitly_client::api::BitlyClient;
    /// use bitly_client::api::client::versioned;
    /// use bitly_client::api::v4::User;
    /// use bitly_client::auth::BearerCredentials;
    ///
    /// # async fn example() -> Result<(), bitly_client::ApiError> {
    /// let client = BitlyClient::new(BearerCredentials::new("token"))?;
    /// let user: User = client.get(&versioned("user")).await?;
    /// println!("Logged in as {}", user.login);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.build_request::<()>(Method::GET, path, None)?;
        self.execute(request).await
    }

    /// Makes an HTTP GET request to a URL returned by the server.
    ///
    /// Absolute URLs are used verbatim. URLs starting with `/` are resolved
    /// against the base URL.
    pub async fn get_url<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let request = if url.starts_with('/') {
            self.build_request::<()>(Method::GET, url, None)?
        } else {
            self.build_url_request::<()>(Method::GET, url, None)?
        };
        self.execute(request).await
    }

    /// Makes an HTTP POST request to the specified path with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.build_request(Method::POST, path, Some(body))?;
        self.execute(request).await
    }

    /// Makes an HTTP PUT request to the specified path with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.build_request(Method::PUT, path, Some(body))?;
        self.execute(request).await
    }

    /// Makes an HTTP PATCH request to the specified path with a JSON body.
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.build_request(Method::PATCH, path, Some(body))?;
        self.execute(request).await
    }

    /// Makes an HTTP DELETE request to the specified path.
    ///
    /// The response body, if any, is discarded.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.build_request::<()>(Method::DELETE, path, None)?;
        self.execute_empty(request).await
    }
}
