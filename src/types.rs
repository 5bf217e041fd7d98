//! Request enums and response shapes for the Threads API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Media type of a single post or reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    Text,
    Image,
    Video,
}

impl MediaType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media type of a carousel item. Carousel items cannot be text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarouselItemType {
    Image,
    Video,
}

impl CarouselItemType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
        }
    }
}

impl From<CarouselItemType> for MediaType {
    fn from(value: CarouselItemType) -> Self {
        match value {
            CarouselItemType::Image => Self::Image,
            CarouselItemType::Video => Self::Video,
        }
    }
}

/// Who may reply to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyControl {
    Everyone,
    AccountsYouFollow,
    MentionedOnly,
}

impl ReplyControl {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Everyone => "everyone",
            Self::AccountsYouFollow => "accounts_you_follow",
            Self::MentionedOnly => "mentioned_only",
        }
    }
}

impl fmt::Display for ReplyControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for [`ThreadsClient::get_user_threads`](crate::ThreadsClient::get_user_threads).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserThreadsQuery {
    /// Lower time bound (unix timestamp or any `strtotime` string).
    pub since: Option<String>,
    pub until: Option<String>,
    pub limit: u32,
}

impl UserThreadsQuery {
    pub const DEFAULT_LIMIT: u32 = 10;
}

impl Default for UserThreadsQuery {
    fn default() -> Self {
        Self {
            since: None,
            until: None,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Time range for user insights, in unix seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsightsRange {
    pub since: Option<i64>,
    pub until: Option<i64>,
}

/// A Threads post, reply, or carousel.
///
/// Only the fields the caller asked for are populated. Fields without a
/// typed slot land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreadsMedia {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_product_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_quote_post: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_replies: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads_profile_picture_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads_biography: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One metric from an insights response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Time series metrics (e.g. `views` for a user).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<InsightValue>,
    /// Aggregate metrics (e.g. `likes` for a user).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_value: Option<InsightValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightValue {
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// `{"data": [...]}` list envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: Vec<T>,
}

/// `{"id": "..."}` mutation response.
#[derive(Debug, Deserialize)]
pub(crate) struct IdResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
}

/// `{"success": true}` mutation response.
#[derive(Debug, Deserialize)]
pub(crate) struct SuccessResponse {
    pub success: bool,
}

/// Graph ids are strings, but some endpoints return them as JSON numbers.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Num(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Num(n) => n.to_string(),
    })
}
