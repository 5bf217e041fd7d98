//! OAuth `state` parameter generation.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::Rng;

/// Generate a random state string for CSRF protection.
///
/// Pass it to [`ThreadsClient::authorization_url`](crate::ThreadsClient::authorization_url)
/// and compare it with the `state` echoed back to the redirect URI.
#[must_use]
pub fn generate_state() -> String {
    let mut state_bytes = [0u8; 32];
    rand::rng().fill(&mut state_bytes);
    URL_SAFE_NO_PAD.encode(state_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_generation() {
        let state = generate_state();
        assert_eq!(state.len(), 43);
        assert!(
            state
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );

        let state2 = generate_state();
        assert_ne!(state, state2);
    }
}
