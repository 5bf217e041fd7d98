//! Error types for Threads API calls.
//!
//! Every network operation fails with [`Error`]. The variant is derived from
//! the HTTP status and the Graph error payload; the remote message is kept as
//! a field so callers can branch on the kind without parsing strings.

use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// Maximum number of body characters kept in a fallback error message.
const MAX_BODY_CHARS: usize = 512;

/// Graph error codes that mean the access token is invalid or expired.
const AUTH_ERROR_CODES: &[i64] = &[190];
/// Graph error codes used for application and user throttling.
const THROTTLE_ERROR_CODES: &[i64] = &[4, 17, 32, 613];

/// The API operation a request belongs to.
///
/// Displays as the human-readable description used in error messages,
/// e.g. `publish media container`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetAccessToken,
    GetLongLivedToken,
    RefreshLongLivedToken,
    CreateMediaContainer,
    PublishMediaContainer,
    CreateCarouselItemContainer,
    CreateCarouselContainer,
    PublishCarouselContainer,
    GetUserThreads,
    GetThreadsMediaObject,
    GetUserProfile,
    GetReplies,
    GetConversation,
    HideReply,
    RespondToReply,
    ControlWhoCanReply,
    GetMediaInsights,
    GetUserInsights,
}

impl Operation {
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::GetAccessToken => "get access token",
            Self::GetLongLivedToken => "get long-lived token",
            Self::RefreshLongLivedToken => "refresh long-lived token",
            Self::CreateMediaContainer => "create media container",
            Self::PublishMediaContainer => "publish media container",
            Self::CreateCarouselItemContainer => "create carousel item container",
            Self::CreateCarouselContainer => "create carousel container",
            Self::PublishCarouselContainer => "publish carousel container",
            Self::GetUserThreads => "retrieve user's threads",
            Self::GetThreadsMediaObject => "retrieve threads media object",
            Self::GetUserProfile => "retrieve user's profile",
            Self::GetReplies => "retrieve replies",
            Self::GetConversation => "retrieve conversation",
            Self::HideReply => "hide/unhide reply",
            Self::RespondToReply => "respond to reply",
            Self::ControlWhoCanReply => "control who can reply",
            Self::GetMediaInsights => "retrieve media insights",
            Self::GetUserInsights => "retrieve user insights",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Unauthorized,
    RateLimited,
    Validation,
    Unknown,
}

#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced an HTTP response.
    #[error("Failed to {operation}: {source}")]
    Network {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to {operation}: {message}")]
    Unauthorized {
        operation: Operation,
        status: u16,
        message: String,
    },

    #[error("Failed to {operation}: {message}")]
    RateLimited {
        operation: Operation,
        status: u16,
        message: String,
        /// Seconds from the `Retry-After` header, if the server sent one.
        retry_after: Option<u64>,
    },

    #[error("Failed to {operation}: {message}")]
    Validation {
        operation: Operation,
        status: u16,
        message: String,
    },

    /// Server errors, unexpected statuses, and undecodable success bodies.
    #[error("Failed to {operation}: {message}")]
    Unknown {
        operation: Operation,
        status: Option<u16>,
        message: String,
    },
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } => ErrorKind::Network,
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::RateLimited { .. } => ErrorKind::RateLimited,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Self::Network { operation, .. }
            | Self::Unauthorized { operation, .. }
            | Self::RateLimited { operation, .. }
            | Self::Validation { operation, .. }
            | Self::Unknown { operation, .. } => *operation,
        }
    }

    /// HTTP status of the failed response, if one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network { .. } => None,
            Self::Unauthorized { status, .. }
            | Self::RateLimited { status, .. }
            | Self::Validation { status, .. } => Some(*status),
            Self::Unknown { status, .. } => *status,
        }
    }

    /// The remote (or locally generated) message without the operation prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Network { source, .. } => source.to_string(),
            Self::Unauthorized { message, .. }
            | Self::RateLimited { message, .. }
            | Self::Validation { message, .. }
            | Self::Unknown { message, .. } => message.clone(),
        }
    }

    /// Whether repeating the same call later could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } | Self::RateLimited { .. } => true,
            Self::Unknown { status, .. } => status.is_some_and(|s| s >= 500),
            Self::Unauthorized { .. } | Self::Validation { .. } => false,
        }
    }

    /// The request URL is dropped: its query string carries credentials.
    pub(crate) fn network(operation: Operation, source: reqwest::Error) -> Self {
        Self::Network {
            operation,
            source: source.without_url(),
        }
    }

    /// A 2xx response whose body did not have the expected shape.
    pub(crate) fn decode(operation: Operation, status: StatusCode, err: &serde_json::Error) -> Self {
        Self::Unknown {
            operation,
            status: Some(status.as_u16()),
            message: format!("Failed to parse response: {err}"),
        }
    }

    /// Build the error for a non-success response.
    pub(crate) fn from_response(
        operation: Operation,
        status: StatusCode,
        retry_after: Option<u64>,
        body: &str,
    ) -> Self {
        let json = serde_json::from_str::<serde_json::Value>(body).ok();
        let message = json
            .as_ref()
            .and_then(extract_error_message)
            .unwrap_or_else(|| fallback_message(status, body));
        let code = json.as_ref().and_then(extract_error_code);
        let code_matches = |codes: &[i64]| code.is_some_and(|c| codes.contains(&c));

        let status_code = status.as_u16();
        if status == StatusCode::TOO_MANY_REQUESTS || code_matches(THROTTLE_ERROR_CODES) {
            Self::RateLimited {
                operation,
                status: status_code,
                message,
                retry_after,
            }
        } else if status == StatusCode::UNAUTHORIZED
            || status == StatusCode::FORBIDDEN
            || code_matches(AUTH_ERROR_CODES)
        {
            Self::Unauthorized {
                operation,
                status: status_code,
                message,
            }
        } else if status.is_client_error() {
            Self::Validation {
                operation,
                status: status_code,
                message,
            }
        } else {
            Self::Unknown {
                operation,
                status: Some(status_code),
                message,
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Extract the user-facing message from an error payload.
///
/// Handles the Graph shape (`{"error": {"message": ...}}`), the
/// `error_message` variant, and the flat OAuth shapes.
fn extract_error_message(json: &serde_json::Value) -> Option<String> {
    let as_string = |v: &serde_json::Value| {
        v.as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    if let Some(error_obj) = json.get("error") {
        for key in ["error_message", "message"] {
            if let Some(msg) = error_obj.get(key).and_then(as_string) {
                return Some(msg);
            }
        }
    }

    for key in ["error_message", "error_description", "error", "message"] {
        if let Some(msg) = json.get(key).and_then(as_string) {
            return Some(msg);
        }
    }

    None
}

fn extract_error_code(json: &serde_json::Value) -> Option<i64> {
    json.get("error")?.get("code")?.as_i64()
}

fn fallback_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return format!("HTTP {}", status.as_u16());
    }
    let truncated: String = body.chars().take(MAX_BODY_CHARS).collect();
    format!("HTTP {}: {truncated}", status.as_u16())
}
