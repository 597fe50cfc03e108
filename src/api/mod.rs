//! Backend API Layer
//!
//! HTTP client for the JSON endpoints the page consumes, built with gloo-net.
//!
//! # Endpoints
//!
//! - `POST /like_post/{post_id}/` - Toggle a like, returns the new state and count
//! - `POST /follow/{user_id}/` - Toggle a follow, returns the new state
//!
//! Comment and post creation go through native form submission and are not
//! part of this layer. Both calls here are same-origin: the session cookie
//! rides along automatically and the CSRF token is read from the
//! `csrftoken` cookie into the `X-CSRFToken` header.

pub mod client;
pub mod error;

pub use client::{ApiClient, FollowToggle, LikeToggle};
pub use error::{ApiError, ApiResult};
