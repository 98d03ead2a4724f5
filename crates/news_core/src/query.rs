use thiserror::Error;
use url::Url;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path of the article listing, appended to the base URL.
pub const NEWS_PATH: &str = "/api/news";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EndpointError {
    #[error("base url is empty")]
    Empty,
    #[error("invalid base url {url}: {message}")]
    InvalidUrl { url: String, message: String },
    #[error("unsupported scheme {scheme} (expected http or https)")]
    UnsupportedScheme { scheme: String },
}

/// Location of the news service. Built once from configuration and handed to
/// the state at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
}

impl Endpoint {
    pub fn parse(base: &str) -> Result<Self, EndpointError> {
        let trimmed = base.trim();
        if trimmed.is_empty() {
            return Err(EndpointError::Empty);
        }
        let base = Url::parse(trimmed).map_err(|err| EndpointError::InvalidUrl {
            url: trimmed.to_string(),
            message: err.to_string(),
        })?;
        match base.scheme() {
            "http" | "https" => Ok(Self { base }),
            other => Err(EndpointError::UnsupportedScheme {
                scheme: other.to_string(),
            }),
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `{base}/api/news`, with `?category=` only when a category is given.
    ///
    /// Any path on the base is kept as a prefix; query and fragment on the
    /// base are dropped.
    pub fn articles_url(&self, category: Option<&str>) -> Url {
        let mut url = self.base.clone();
        let path = format!("{}{}", url.path().trim_end_matches('/'), NEWS_PATH);
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);
        if let Some(category) = category {
            url.query_pairs_mut().append_pair("category", category);
        }
        url
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
        }
    }
}

/// The user's current category selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    category: Option<String>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` means "all categories".
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Replaces the selection. No validation: unknown values go to the
    /// service as-is, and an empty value clears the filter.
    pub fn set_category(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.category = if value.is_empty() { None } else { Some(value) };
    }

    /// The listing URL this selection asks for on `endpoint`.
    pub fn target(&self, endpoint: &Endpoint) -> Url {
        endpoint.articles_url(self.category())
    }
}
