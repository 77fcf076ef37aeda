use serde::Deserialize;

// GitHub search API response structures
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub total_count: u64,
    pub items: Vec<Repository>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub owner: RepositoryOwner,
    pub stargazers_count: u32,
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}
