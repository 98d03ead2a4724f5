#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Front end is up; performs the initial unfiltered load.
    Started,
    /// User picked a category. An empty string clears the filter.
    CategorySelected(String),
    /// User asked to re-run the current query.
    RefreshRequested,
    /// Engine progress for a request.
    FetchProgress {
        request_id: crate::RequestId,
        bytes: u64,
    },
    /// Engine delivered a decoded article list.
    FetchSucceeded {
        request_id: crate::RequestId,
        articles: Vec<crate::Article>,
    },
    /// Engine gave up on a request (network, status, payload or timeout).
    FetchFailed {
        request_id: crate::RequestId,
        message: String,
    },
}
