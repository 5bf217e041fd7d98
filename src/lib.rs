//! Async client for the Threads Graph API.
//!
//! # Example
//!
//! ```ignore
//! use threads_sdk::{AccessToken, ClientConfig, MediaType, ThreadsClient};
//!
//! let client = ThreadsClient::new(ClientConfig::new(
//!     "app-id",
//!     "app-secret",
//!     "https://example.com/callback",
//!     "threads_basic,threads_content_publish",
//! ));
//!
//! let session = client.get_access_token(&code).await?;
//! let long_lived = client.get_long_lived_token(&session.access_token).await?;
//! let token = long_lived.access_token;
//!
//! let creation_id = client
//!     .create_media_container(&token, &session.user_id, MediaType::Text, None, Some("hello"))
//!     .await?;
//! client.publish_media_container(&token, &session.user_id, &creation_id).await?;
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod auth;
pub mod config;
pub mod error;
pub mod types;

mod client;
mod http;
mod insights;
mod moderation;
mod publish;
mod retrieve;

pub use auth::{AccessToken, LongLivedToken, ShortLivedToken, generate_state};
pub use client::ThreadsClient;
pub use config::{ClientConfig, Config, Endpoints, HttpSettings};
pub use error::{Error, ErrorKind, Operation, Result};
pub use retrieve::DEFAULT_REVERSE;
pub use types::{
    CarouselItemType, Insight, InsightValue, InsightsRange, MediaType, ReplyControl, ThreadsMedia,
    UserProfile, UserThreadsQuery,
};
