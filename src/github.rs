use crate::error::{Result, TrackerError};
use crate::types::{ApiErrorBody, Repository, SearchResponse};
use chrono::DateTime;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::debug;

const API_BASE_URL: &str = "https://api.github.com";
const PER_PAGE: u32 = 100;
// The GitHub search API never returns more than 1000 results per query.
const MAX_RESULTS: u64 = 1000;
const MAX_PAGES: u32 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 10;

pub struct GitHubClient {
    client: Client,
    token: Option<String>,
    base_url: String,
}

impl GitHubClient {
    /// Create a client. The token is optional; without one GitHub allows
    /// 60 search requests per hour, with one 5000.
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_base_url(token, API_BASE_URL.to_string())
    }

    pub fn with_base_url(token: Option<String>, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent("esprit-tracker/0.1.0")
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(GitHubClient {
            client,
            token,
            base_url,
        })
    }

    async fn fetch_page(&self, query: &str, page: u32) -> Result<SearchResponse> {
        let url = format!(
            "{}/search/repositories?q={}&per_page={}&page={}",
            self.base_url,
            urlencoding::encode(query),
            PER_PAGE,
            page
        );

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
            let rate_limit_remaining = header_value::<u32>(&response, "X-RateLimit-Remaining");
            if status == StatusCode::TOO_MANY_REQUESTS || rate_limit_remaining == Some(0) {
                let reset_time = header_value::<i64>(&response, "X-RateLimit-Reset")
                    .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0));
                return Err(TrackerError::RateLimited { reset_time });
            }
        }

        if status == StatusCode::UNPROCESSABLE_ENTITY {
            let body: ApiErrorBody = response.json().await.unwrap_or(ApiErrorBody {
                message: None,
            });
            return Err(TrackerError::InvalidQuery(
                body.message.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TrackerError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let data: SearchResponse = response.json().await?;
        Ok(data)
    }

    /// Fetch all pages of search results for a query, in the API's relevance
    /// order. Stops on an empty or short page, when the reported total count
    /// is reached, at the API's 1000-result cap, or at the safety page limit.
    pub async fn search_repositories(&self, query: &str) -> Result<Vec<Repository>> {
        let mut all_repos = Vec::new();
        let mut page = 1;

        loop {
            let data = self.fetch_page(query, page).await?;
            let page_len = data.items.len();

            debug!(page, page_len, total_count = data.total_count, "fetched search page");

            if data.items.is_empty() {
                break;
            }

            all_repos.extend(data.items);

            let available = data.total_count.min(MAX_RESULTS);
            if all_repos.len() as u64 >= available || page_len < PER_PAGE as usize {
                break;
            }

            page += 1;
            if page > MAX_PAGES {
                break;
            }
        }

        Ok(all_repos)
    }
}

fn header_value<T: std::str::FromStr>(response: &Response, name: &str) -> Option<T> {
    response
        .headers()
        .get(name)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<T>().ok())
}
