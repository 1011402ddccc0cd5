use async_trait::async_trait;

use super::GithubEndpoint;
use crate::domain::DocumentSource;
use crate::infrastructure::http_client::HttpClientTrait;

const RAW_ACCEPT: &str = "application/vnd.github.v3.raw";

/// One place a README may live
#[derive(Debug, Clone, PartialEq, Eq)]
struct ReadmeLocation {
    url: String,
    accept: Option<&'static str>,
}

/// Fetches READMEs from raw branch URLs, then from the contents API
#[derive(Debug)]
pub struct GithubReadmeRetriever<C: HttpClientTrait> {
    client: C,
    endpoint: GithubEndpoint,
}

impl<C: HttpClientTrait> GithubReadmeRetriever<C> {
    pub fn new(client: C, endpoint: GithubEndpoint) -> Self {
        Self { client, endpoint }
    }

    /// Locations in the order they are tried
    fn locations(&self, repo_name: &str) -> Vec<ReadmeLocation> {
        let account = &self.endpoint.account;

        let mut locations: Vec<ReadmeLocation> = self
            .endpoint
            .branches
            .iter()
            .map(|branch| ReadmeLocation {
                url: format!(
                    "{}/{}/{}/{}/README.md",
                    self.endpoint.raw_base_url, account, repo_name, branch
                ),
                accept: None,
            })
            .collect();

        locations.push(ReadmeLocation {
            url: format!(
                "{}/repos/{}/{}/readme",
                self.endpoint.api_base_url, account, repo_name
            ),
            accept: Some(RAW_ACCEPT),
        });

        locations
    }

    async fn try_location(&self, location: &ReadmeLocation) -> Option<String> {
        let mut headers = self.endpoint.auth_headers();

        if let Some(accept) = location.accept {
            headers.push(("Accept", accept));
        }

        match self.client.get(&location.url, headers).await {
            Ok(response) if response.status == 200 && !response.body.trim().is_empty() => {
                Some(response.body)
            }
            Ok(response) => {
                tracing::debug!(
                    url = %location.url,
                    status = response.status,
                    "README location yielded nothing"
                );
                None
            }
            Err(e) => {
                tracing::debug!(url = %location.url, error = %e, "README location failed");
                None
            }
        }
    }
}

#[async_trait]
impl<C: HttpClientTrait> DocumentSource for GithubReadmeRetriever<C> {
    async fn fetch_document(&self, repo_name: &str) -> Option<String> {
        for location in self.locations(repo_name) {
            if let Some(document) = self.try_location(&location).await {
                tracing::debug!(repo = %repo_name, url = %location.url, "Fetched README");
                return Some(document);
            }
        }

        tracing::info!(repo = %repo_name, "No README found");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http_client::mock::MockHttpClient;
    use crate::infrastructure::http_client::HttpClient;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MAIN_URL: &str = "https://raw.githubusercontent.com/octocat/spoon-knife/main/README.md";
    const MASTER_URL: &str = "https://raw.githubusercontent.com/octocat/spoon-knife/master/README.md";
    const API_URL: &str = "https://api.github.com/repos/octocat/spoon-knife/readme";

    fn retriever(client: MockHttpClient) -> GithubReadmeRetriever<MockHttpClient> {
        GithubReadmeRetriever::new(client, GithubEndpoint::public("octocat"))
    }

    #[tokio::test]
    async fn test_main_branch_wins() {
        let client = MockHttpClient::new()
            .with_response(MAIN_URL, 200, "# Spoon Knife")
            .with_response(MASTER_URL, 200, "# Old");
        let retriever = retriever(client);

        let document = retriever.fetch_document("spoon-knife").await;

        assert_eq!(document.as_deref(), Some("# Spoon Knife"));
        assert_eq!(retriever.client.requested_urls(), vec![MAIN_URL]);
    }

    #[tokio::test]
    async fn test_falls_back_to_master_on_missing_main() {
        let client = MockHttpClient::new().with_response(MASTER_URL, 200, "# From master");
        let retriever = retriever(client);

        let document = retriever.fetch_document("spoon-knife").await;

        assert_eq!(document.as_deref(), Some("# From master"));
        assert_eq!(retriever.client.requested_urls(), vec![MAIN_URL, MASTER_URL]);
    }

    #[tokio::test]
    async fn test_blank_body_counts_as_missing() {
        let client = MockHttpClient::new()
            .with_response(MAIN_URL, 200, "   \n\t ")
            .with_error(MASTER_URL, "timed out")
            .with_response(API_URL, 200, "API readme");
        let retriever = retriever(client);

        let document = retriever.fetch_document("spoon-knife").await;

        assert_eq!(document.as_deref(), Some("API readme"));
        assert_eq!(
            retriever.client.requested_urls(),
            vec![MAIN_URL, MASTER_URL, API_URL]
        );

        let api_request = &retriever.client.requests()[2];
        assert_eq!(api_request.header("Accept"), Some(RAW_ACCEPT));
    }

    #[tokio::test]
    async fn test_all_locations_failing_is_absent() {
        let client = MockHttpClient::new()
            .with_response(MAIN_URL, 500, "boom")
            .with_response(API_URL, 200, "");
        let retriever = retriever(client);

        assert_eq!(retriever.fetch_document("spoon-knife").await, None);
        assert_eq!(retriever.client.requested_urls().len(), 3);
    }

    #[tokio::test]
    async fn test_each_location_tried_once() {
        let client = MockHttpClient::new()
            .with_error(MAIN_URL, "timed out")
            .with_error(MASTER_URL, "timed out")
            .with_error(API_URL, "timed out");
        let retriever = retriever(client);

        assert_eq!(retriever.fetch_document("spoon-knife").await, None);
        assert_eq!(
            retriever.client.requested_urls(),
            vec![MAIN_URL, MASTER_URL, API_URL]
        );
    }

    #[tokio::test]
    async fn test_token_sent_on_raw_and_api_requests() {
        let client = MockHttpClient::new().with_response(API_URL, 200, "readme");
        let retriever = GithubReadmeRetriever::new(
            client,
            GithubEndpoint::public("octocat").with_token("ghp_secret"),
        );

        retriever.fetch_document("spoon-knife").await;

        for request in retriever.client.requests() {
            assert_eq!(request.header("Authorization"), Some("token ghp_secret"));
        }
    }

    #[tokio::test]
    async fn test_against_http_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/octocat/spoon-knife/main/README.md"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/octocat/spoon-knife/master/README.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/octocat/spoon-knife/readme"))
            .and(header("Accept", RAW_ACCEPT))
            .respond_with(ResponseTemplate::new(200).set_body_string("# Spoon Knife\nA fork demo."))
            .expect(1)
            .mount(&server)
            .await;

        let endpoint = GithubEndpoint::public("octocat")
            .with_api_base_url(server.uri())
            .with_raw_base_url(server.uri());
        let http = HttpClient::with_timeout(Duration::from_secs(5)).unwrap();
        let retriever = GithubReadmeRetriever::new(http, endpoint);

        let document = retriever.fetch_document("spoon-knife").await;
        assert_eq!(document.as_deref(), Some("# Spoon Knife\nA fork demo."));
    }
}
