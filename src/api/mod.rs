//! HTTP client for the remote content API
//!
//! Every call is a single attempt against the configured base URL. Failures
//! come back as [`ApiError`]; callers decide how each one is shown.

use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::content::{NewComment, NewPost, Post};
use crate::helpers::encode_segment;

/// Errors from the content API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Upstream status, if the API answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw upstream response body, if any
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Success envelope: `{ "data": ... }`
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Client for the content API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `http://localhost:3000`)
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client reusing a preconfigured `reqwest::Client`
    pub fn with_client(base_url: &str, http: Client) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn posts_url(&self) -> String {
        format!("{}/api/posts", self.base_url)
    }

    fn post_url(&self, id: &str) -> String {
        format!("{}/{}", self.posts_url(), encode_segment(id))
    }

    /// `POST /api/posts`
    pub async fn create_post(&self, payload: &NewPost) -> Result<(), ApiError> {
        let url = self.posts_url();
        tracing::debug!("Creating post via {}: {:?}", url, payload);
        let request = self
            .http
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(payload);
        send(request, url).await.map(drop)
    }

    /// `GET /api/posts`
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = self.posts_url();
        let response = send(self.http.get(&url), url.clone()).await?;
        decode::<Vec<Post>>(response, url).await
    }

    /// `GET /api/posts/:id`
    pub async fn get_post(&self, id: &str) -> Result<Post, ApiError> {
        let url = self.post_url(id);
        let response = send(self.http.get(&url), url.clone()).await?;
        decode::<Post>(response, url).await
    }

    /// `DELETE /api/posts/:id`
    pub async fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        let url = self.post_url(id);
        send(self.http.delete(&url), url).await.map(drop)
    }

    /// `POST /api/posts/:id/comments`
    pub async fn add_comment(&self, post_id: &str, payload: &NewComment) -> Result<(), ApiError> {
        let url = format!("{}/comments", self.post_url(post_id));
        tracing::debug!("Adding comment via {}: {:?}", url, payload);
        let request = self
            .http
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(payload);
        send(request, url).await.map(drop)
    }

    /// `POST /api/posts/:id/like`
    pub async fn like_post(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/like", self.post_url(id));
        send(self.http.post(&url), url).await.map(drop)
    }
}

/// Send a request, turning non-2xx answers into [`ApiError::Status`]
async fn send(request: reqwest::RequestBuilder, url: String) -> Result<Response, ApiError> {
    let response = match request.send().await {
        Ok(response) => response,
        Err(source) => return Err(ApiError::Transport { url, source }),
    };

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // An unreadable error body is still a status error
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { url, status, body })
}

async fn decode<T: DeserializeOwned>(response: Response, url: String) -> Result<T, ApiError> {
    match response.json::<Envelope<T>>().await {
        Ok(envelope) => Ok(envelope.data),
        Err(source) => Err(ApiError::Decode { url, source }),
    }
}
