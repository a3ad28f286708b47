//! Heroku HTTP client for API interactions

use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, RANGE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{HerokuError, Result};
use crate::heroku::{ApiErrorBody, Credentials};

/// Response header carrying the range of the next page
const NEXT_RANGE: &str = "Next-Range";

/// Heroku Platform API client
pub struct HerokuClient {
    client: Client,
    credentials: Credentials,
    base_url: String,
}

impl HerokuClient {
    /// Create a new client with pooled connections
    pub fn new(credentials: Credentials, base_url: String) -> Self {
        let client = Client::builder()
            .user_agent(concat!("heroku-listing/", env!("CARGO_PKG_VERSION")))
            // Fan-out keeps many requests in flight against a single host
            .pool_max_idle_per_host(64)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL for API requests
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header(ACCEPT, api::ACCEPT)
            .header(AUTHORIZATION, self.credentials.authorization())
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) => format!("Failed to fetch {}: {}", error_context, body.message),
                Err(_) => format!("Failed to fetch {}", error_context),
            };
            return Err(HerokuError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch a single resource by API path
    pub async fn fetch_resource<T>(&self, path: &str, error_context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", error_context, url);

        let response = self.get(&url).send().await?;
        self.parse_api_response(response, error_context).await
    }

    /// Fetch every page of a list endpoint
    ///
    /// Heroku paginates with the `Range` request header. A `206 Partial Content`
    /// response carries `Next-Range`, which is sent back verbatim until the
    /// final page arrives with `200 OK`.
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "/apps/{id}/dynos")
    /// * `range_field` - Field the range is ordered by (e.g., "id" or "name")
    /// * `error_context` - Context for error messages (e.g., "dynos for app 'web'")
    pub async fn fetch_all_pages<T>(
        &self,
        path: &str,
        range_field: &str,
        error_context: &str,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        let mut range = format!("{} ..; max={}", range_field, api::PAGE_SIZE);
        let mut all_items = Vec::new();
        let mut page: u32 = 1;

        loop {
            debug!("Fetching page {} from: {} (Range: {})", page, url, range);

            let response = self.get(&url).header(RANGE, &range).send().await?;

            let next_range = if response.status() == StatusCode::PARTIAL_CONTENT {
                response
                    .headers()
                    .get(NEXT_RANGE)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string)
            } else {
                None
            };

            let page_context = format!("{} (page {})", error_context, page);
            let items: Vec<T> = self.parse_api_response(response, &page_context).await?;
            debug!("Page {} returned {} items", page, items.len());
            all_items.extend(items);

            match next_range {
                Some(next) => {
                    range = next;
                    page += 1;
                }
                None => break,
            }
        }

        debug!("Fetched {} total items for {}", all_items.len(), error_context);
        Ok(all_items)
    }
}

#[cfg(test)]
impl HerokuClient {
    /// Create a test client pointing at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(
            Credentials::Token("test-token".to_string()),
            base_url.to_string(),
        )
    }
}


#[cfg(test)]
mod pagination_tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Deserialize, Debug)]
    struct TestItem {
        id: String,
    }

    #[tokio::test]
    async fn test_fetch_all_pages_single_page() {
        let mock_server = MockServer::start().await;
        let client = HerokuClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(header("Range", "id ..; max=1000"))
            .and(header("Accept", api::ACCEPT))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "a"},
                {"id": "b"}
            ])))
            .mount(&mock_server)
            .await;

        let items: Vec<TestItem> = client
            .fetch_all_pages("/items", "id", "test items")
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "a");
        assert_eq!(items[1].id, "b");
    }

    #[tokio::test]
    async fn test_fetch_all_pages_follows_next_range() {
        let mock_server = MockServer::start().await;
        let client = HerokuClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(header("Range", "id ..; max=1000"))
            .respond_with(
                ResponseTemplate::new(206)
                    .insert_header("Next-Range", "]b..; max=1000")
                    .set_body_json(serde_json::json!([{"id": "a"}, {"id": "b"}])),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(header("Range", "]b..; max=1000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "c"}
            ])))
            .mount(&mock_server)
            .await;

        let items: Vec<TestItem> = client
            .fetch_all_pages("/items", "id", "test items")
            .await
            .unwrap();

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_fetch_all_pages_partial_content_without_next_range() {
        let mock_server = MockServer::start().await;
        let client = HerokuClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(
                ResponseTemplate::new(206).set_body_json(serde_json::json!([{"id": "a"}])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let items: Vec<TestItem> = client
            .fetch_all_pages("/items", "id", "test items")
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_all_pages_api_error_uses_body_message() {
        let mock_server = MockServer::start().await;
        let client = HerokuClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "id": "not_found",
                "message": "Couldn't find that app."
            })))
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_all_pages::<TestItem>("/items", "id", "test items")
            .await;

        match result.unwrap_err() {
            HerokuError::Api { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("test items (page 1)"));
                assert!(message.contains("Couldn't find that app."));
            }
            other => panic!("Expected HerokuError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_pages_error_on_second_page() {
        let mock_server = MockServer::start().await;
        let client = HerokuClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(header("Range", "id ..; max=1000"))
            .respond_with(
                ResponseTemplate::new(206)
                    .insert_header("Next-Range", "]a..; max=1000")
                    .set_body_json(serde_json::json!([{"id": "a"}])),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(header("Range", "]a..; max=1000"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_all_pages::<TestItem>("/items", "id", "test items")
            .await;

        match result.unwrap_err() {
            HerokuError::Api { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("page 2"));
            }
            other => panic!("Expected HerokuError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_resource() {
        let mock_server = MockServer::start().await;
        let client = HerokuClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/items/a"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "a"
            })))
            .mount(&mock_server)
            .await;

        let item: TestItem = client.fetch_resource("/items/a", "item 'a'").await.unwrap();
        assert_eq!(item.id, "a");
    }
}
