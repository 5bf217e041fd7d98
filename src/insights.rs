//! Media and account insights.

use crate::auth::AccessToken;
use crate::client::ThreadsClient;
use crate::error::{Operation, Result};
use crate::http::{Params, join_list};
use crate::types::{Insight, InsightsRange};

impl ThreadsClient {
    /// Metrics for one post, e.g. `views`, `likes`, `replies`.
    pub async fn get_media_insights<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        media_id: &str,
        metrics: &[S],
    ) -> Result<Vec<Insight>> {
        let params = Params::new()
            .with("metric", join_list(metrics))
            .with("access_token", token.as_str());

        self.get_list(
            Operation::GetMediaInsights,
            &format!("{media_id}/insights"),
            &params,
        )
        .await
    }

    /// Account-level metrics, optionally bounded by `range`.
    pub async fn get_user_insights<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        user_id: &str,
        metrics: &[S],
        range: &InsightsRange,
    ) -> Result<Vec<Insight>> {
        let params = Params::new()
            .with("metric", join_list(metrics))
            .with("access_token", token.as_str())
            .with_opt("since", range.since.map(|s| s.to_string()))
            .with_opt("until", range.until.map(|u| u.to_string()));

        self.get_list(
            Operation::GetUserInsights,
            &format!("{user_id}/threads_insights"),
            &params,
        )
        .await
    }
}
