//! Shared helpers for tests that run the client against a mock Graph server.

#![allow(dead_code)]

use threads_sdk::{AccessToken, ClientConfig, Endpoints, ThreadsClient};
use wiremock::MockServer;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

pub const TOKEN: &str = "test-access-token";

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct TestContext {
    pub server: MockServer,
    pub client: ThreadsClient,
    pub token: AccessToken,
}

impl TestContext {
    pub async fn new() -> Self {
        init_logging();
        let server = MockServer::start().await;
        let client = ThreadsClient::with_endpoints(
            ClientConfig::new("C", "S", "https://app/cb", "basic"),
            Endpoints::with_graph_url(server.uri()),
        );

        Self {
            server,
            client,
            token: AccessToken::new(TOKEN),
        }
    }

    /// Respond to `verb path` with `status` and a JSON body, expecting one call.
    pub async fn mock_json(&self, verb: &str, route: &str, status: u16, body: serde_json::Value) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// The only request the server received.
    pub async fn single_request(&self) -> wiremock::Request {
        let mut requests = self
            .server
            .received_requests()
            .await
            .expect("request recording is enabled");
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }

    /// Form body of the only request, in wire order.
    pub async fn form_params(&self) -> Vec<(String, String)> {
        let request = self.single_request().await;
        url::form_urlencoded::parse(&request.body)
            .into_owned()
            .collect()
    }

    /// Query string of the only request, in wire order.
    pub async fn query_params(&self) -> Vec<(String, String)> {
        let request = self.single_request().await;
        request.url.query_pairs().into_owned().collect()
    }
}

pub fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

pub fn keys(params: &[(String, String)]) -> Vec<&str> {
    params.iter().map(|(k, _)| k.as_str()).collect()
}
