use async_trait::async_trait;
use serde::Deserialize;

use super::GithubEndpoint;
use crate::domain::{DomainError, RepositoryDirectory, RepositoryRef, RepositorySet};
use crate::infrastructure::http_client::HttpClientTrait;

const PAGE_SIZE: u32 = 100;

/// Repository listing through the GitHub REST API
#[derive(Debug)]
pub struct GithubDirectoryClient<C: HttpClientTrait> {
    client: C,
    endpoint: GithubEndpoint,
}

impl<C: HttpClientTrait> GithubDirectoryClient<C> {
    pub fn new(client: C, endpoint: GithubEndpoint) -> Self {
        Self { client, endpoint }
    }

    fn repos_url(&self) -> String {
        format!(
            "{}/users/{}/repos?per_page={}",
            self.endpoint.api_base_url, self.endpoint.account, PAGE_SIZE
        )
    }

    fn parse_response(body: &str) -> Result<RepositorySet, DomainError> {
        let repos: Vec<GithubRepository> = serde_json::from_str(body).map_err(|e| {
            DomainError::directory_unavailable(format!("Failed to parse repository listing: {}", e))
        })?;

        Ok(RepositorySet::ranked(
            repos.into_iter().map(GithubRepository::into_domain).collect(),
        ))
    }
}

#[async_trait]
impl<C: HttpClientTrait> RepositoryDirectory for GithubDirectoryClient<C> {
    async fn list_repositories(&self) -> Result<RepositorySet, DomainError> {
        let url = self.repos_url();
        let mut headers = vec![("Accept", "application/vnd.github+json")];
        headers.extend(self.endpoint.auth_headers());

        let response = self
            .client
            .get(&url, headers)
            .await
            .map_err(|e| DomainError::directory_unavailable(e.to_string()))?;

        if !response.is_success() {
            return Err(DomainError::directory_unavailable(format!(
                "HTTP {} from {}",
                response.status, url
            )));
        }

        let repositories = Self::parse_response(&response.body)?;

        tracing::debug!(
            account = %self.endpoint.account,
            count = repositories.len(),
            "Listed repositories"
        );

        Ok(repositories)
    }
}

#[derive(Debug, Deserialize)]
struct GithubRepository {
    name: String,
    html_url: String,
    #[serde(default)]
    stargazers_count: Option<u64>,
}

impl GithubRepository {
    fn into_domain(self) -> RepositoryRef {
        RepositoryRef::new(self.name, self.html_url, self.stargazers_count.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http_client::mock::MockHttpClient;
    use crate::infrastructure::http_client::HttpClient;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const REPOS_URL: &str = "https://api.github.com/users/octocat/repos?per_page=100";

    fn listing() -> String {
        serde_json::json!([
            {"name": "hello-world", "html_url": "https://github.com/octocat/hello-world", "stargazers_count": 3},
            {"name": "spoon-knife", "html_url": "https://github.com/octocat/spoon-knife", "stargazers_count": 12},
            {"name": "linguist", "html_url": "https://github.com/octocat/linguist"}
        ])
        .to_string()
    }

    #[tokio::test]
    async fn test_lists_repositories_by_popularity() {
        let client = MockHttpClient::new().with_response(REPOS_URL, 200, listing());
        let directory = GithubDirectoryClient::new(client, GithubEndpoint::public("octocat"));

        let set = directory.list_repositories().await.unwrap();

        assert_eq!(set.names(), vec!["spoon-knife", "hello-world", "linguist"]);
        let last = set.iter().last().unwrap();
        assert_eq!(last.popularity, 0);
        assert_eq!(last.url, "https://github.com/octocat/linguist");
    }

    #[tokio::test]
    async fn test_sends_token_when_configured() {
        let client = MockHttpClient::new().with_response(REPOS_URL, 200, "[]");
        let endpoint = GithubEndpoint::public("octocat").with_token("ghp_secret");
        let directory = GithubDirectoryClient::new(client, endpoint);

        directory.list_repositories().await.unwrap();

        let request = &directory.client.requests()[0];
        assert_eq!(request.header("Authorization"), Some("token ghp_secret"));
    }

    #[tokio::test]
    async fn test_non_success_is_directory_unavailable() {
        let client = MockHttpClient::new().with_response(REPOS_URL, 403, "rate limited");
        let directory = GithubDirectoryClient::new(client, GithubEndpoint::public("octocat"));

        let error = directory.list_repositories().await.unwrap_err();
        assert!(error.is_directory_unavailable());
    }

    #[tokio::test]
    async fn test_transport_error_is_directory_unavailable() {
        let client = MockHttpClient::new().with_error(REPOS_URL, "connection refused");
        let directory = GithubDirectoryClient::new(client, GithubEndpoint::public("octocat"));

        let error = directory.list_repositories().await.unwrap_err();
        assert!(error.is_directory_unavailable());
    }

    #[tokio::test]
    async fn test_malformed_body_is_directory_unavailable() {
        let client = MockHttpClient::new().with_response(REPOS_URL, 200, "{\"message\": \"oops\"}");
        let directory = GithubDirectoryClient::new(client, GithubEndpoint::public("octocat"));

        let error = directory.list_repositories().await.unwrap_err();
        assert!(error.is_directory_unavailable());
    }

    #[tokio::test]
    async fn test_against_http_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .and(query_param("per_page", "100"))
            .and(header("Accept", "application/vnd.github+json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(listing()))
            .expect(1)
            .mount(&server)
            .await;

        let endpoint = GithubEndpoint::public("octocat").with_api_base_url(server.uri());
        let http = HttpClient::with_timeout(Duration::from_secs(5)).unwrap();
        let directory = GithubDirectoryClient::new(http, endpoint);

        let set = directory.list_repositories().await.unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.names()[0], "spoon-knife");
    }
}
