//! HTTP API Client
//!
//! Talks to the toggle endpoints of the backend. Both calls carry the AJAX
//! marker header the server keys its JSON responses on, plus the CSRF token
//! read from the session cookie.

use gloo_net::http::Request;
use web_sys::Document;

use super::error::{ApiError, ApiResult};
use crate::config::EndpointConfig;
use crate::dom;

/// Header the backend uses to tell JSON calls from page loads
const AJAX_MARKER_HEADER: &str = "X-Requested-With";
const AJAX_MARKER_VALUE: &str = "XMLHttpRequest";

/// Header carrying the CSRF token
const CSRF_HEADER: &str = "X-CSRFToken";

// ============ Response Types ============

/// Result of a like toggle. The server is the source of truth for both the
/// new state and the count.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct LikeToggle {
    pub liked: bool,
    pub like_count: i64,
}

/// Result of a follow toggle
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct FollowToggle {
    pub followed: bool,
}

// ============ Client ============

/// Client for the backend toggle endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    document: Document,
    like_path: String,
    follow_path: String,
    csrf_cookie: String,
}

impl ApiClient {
    /// Create a client from endpoint configuration
    pub fn new(document: Document, endpoints: &EndpointConfig) -> Self {
        Self {
            document,
            like_path: endpoints.like_path.clone(),
            follow_path: endpoints.follow_path.clone(),
            csrf_cookie: endpoints.csrf_cookie.clone(),
        }
    }

    /// Toggle the like state of a post
    pub async fn toggle_like(&self, post_id: &str) -> ApiResult<LikeToggle> {
        self.post_json(&toggle_url(&self.like_path, post_id)).await
    }

    /// Toggle the follow state of a user
    pub async fn toggle_follow(&self, user_id: &str) -> ApiResult<FollowToggle> {
        self.post_json(&toggle_url(&self.follow_path, user_id)).await
    }

    /// POST to `url` with the marker and CSRF headers and decode the JSON
    /// response. A missing CSRF cookie is logged and the request goes out
    /// without the header; the server rejects it on the normal error path.
    async fn post_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let mut request = Request::post(url).header(AJAX_MARKER_HEADER, AJAX_MARKER_VALUE);

        match dom::get_cookie(&self.document, &self.csrf_cookie) {
            Some(token) => {
                request = request.header(CSRF_HEADER, &token);
            }
            None => {
                web_sys::console::warn_1(
                    &format!(
                        "Cookie '{}' not set, sending request without CSRF token",
                        self.csrf_cookie
                    )
                    .into(),
                );
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Build the URL for an id-keyed toggle endpoint
fn toggle_url(base: &str, id: &str) -> String {
    format!("{}/{}/", base.trim_end_matches('/'), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_url() {
        assert_eq!(toggle_url("/like_post", "42"), "/like_post/42/");
        assert_eq!(toggle_url("/follow", "7"), "/follow/7/");
    }

    #[test]
    fn test_toggle_url_normalizes_trailing_slash() {
        assert_eq!(toggle_url("/like_post/", "42"), "/like_post/42/");
    }

    #[test]
    fn test_like_toggle_decode() {
        let toggle: LikeToggle =
            serde_json::from_str(r#"{"liked": true, "like_count": 7}"#).unwrap();
        assert_eq!(
            toggle,
            LikeToggle {
                liked: true,
                like_count: 7
            }
        );
    }

    #[test]
    fn test_like_toggle_rejects_missing_count() {
        assert!(serde_json::from_str::<LikeToggle>(r#"{"liked": true}"#).is_err());
    }

    #[test]
    fn test_follow_toggle_decode() {
        let toggle: FollowToggle = serde_json::from_str(r#"{"followed": false}"#).unwrap();
        assert_eq!(toggle, FollowToggle { followed: false });
    }
}
