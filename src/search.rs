use crate::types::Repository;

pub const REPO_PREFIX: &str = "ESPRITPI";

/// The four search modes exposed by the CLI. Each mode knows how to build
/// its GitHub search query and how to re-check a repository name locally,
/// since the search endpoint does fuzzy token matching and returns superset
/// results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
    /// All repositories starting with the prefix.
    All,
    /// Repositories matching `ESPRITPI-<Class>` (any year).
    Class { class_name: String },
    /// Exact match on `ESPRITPI-<Class>-<Year>`.
    Exact { class_name: String, year: String },
    /// Repositories matching `ESPRITPI-*-<Year>`.
    Year { year: String },
}

impl SearchMode {
    /// Build the search query string sent to the GitHub API.
    pub fn query(&self) -> String {
        match self {
            SearchMode::All => format!("{} in:name", REPO_PREFIX),
            SearchMode::Class { class_name } => {
                format!("{}-{} in:name", REPO_PREFIX, class_name)
            }
            SearchMode::Exact { class_name, year } => {
                format!("{}-{}-{} in:name", REPO_PREFIX, class_name, year)
            }
            SearchMode::Year { year } => format!("{} {} in:name", REPO_PREFIX, year),
        }
    }

    /// Check a repository name against this mode's pattern, case-insensitively.
    ///
    /// Class mode enforces a separator boundary: after `ESPRITPI-<Class>` only
    /// `-` or the end of the name may follow, so class `3A` matches
    /// `ESPRITPI-3A-2024` but not `ESPRITPI-3AB-2024`.
    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_uppercase();

        match self {
            SearchMode::All => name.starts_with(REPO_PREFIX),
            SearchMode::Class { class_name } => {
                let pattern = format!("{}-{}", REPO_PREFIX, class_name.to_uppercase());
                match name.strip_prefix(pattern.as_str()) {
                    Some(rest) => rest.is_empty() || rest.starts_with('-'),
                    None => false,
                }
            }
            SearchMode::Exact { class_name, year } => {
                let pattern = format!(
                    "{}-{}-{}",
                    REPO_PREFIX,
                    class_name.to_uppercase(),
                    year.to_uppercase()
                );
                name == pattern
            }
            SearchMode::Year { year } => {
                let prefix = format!("{}-", REPO_PREFIX);
                let suffix = format!("-{}", year.to_uppercase());
                // Equivalent of ^ESPRITPI-.+-<Year>$: the class segment
                // between prefix and year suffix must be non-empty.
                name.starts_with(prefix.as_str())
                    && name.ends_with(suffix.as_str())
                    && name.len() > prefix.len() + suffix.len()
            }
        }
    }

    /// Human-readable description used in the pre-search status line.
    pub fn description(&self) -> String {
        match self {
            SearchMode::All => format!("all {} repositories", REPO_PREFIX),
            SearchMode::Class { class_name } => {
                format!("{}-{} repositories", REPO_PREFIX, class_name)
            }
            SearchMode::Exact { class_name, year } => {
                format!("exact match: {}-{}-{}", REPO_PREFIX, class_name, year)
            }
            SearchMode::Year { year } => {
                format!("all {} repositories from year {}", REPO_PREFIX, year)
            }
        }
    }
}

/// Drop fuzzy false positives returned by the search endpoint, keeping only
/// repositories whose name satisfies the mode's pattern. Order is preserved.
pub fn filter_repositories(repos: Vec<Repository>, mode: &SearchMode) -> Vec<Repository> {
    repos
        .into_iter()
        .filter(|repo| mode.matches(&repo.name))
        .collect()
}
