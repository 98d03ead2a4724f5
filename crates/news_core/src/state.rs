use crate::view_model::{category_options, AppViewModel, ArticleRowView, FetchStatus};
use crate::{Effect, Endpoint, QueryState};

pub type RequestId = u64;

/// One article as delivered by the news service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
    pub source: String,
    pub category: String,
    pub published_at: Option<String>,
}

/// Lifecycle of the current query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Fetching {
        request_id: RequestId,
    },
    Committed {
        request_id: RequestId,
    },
    Errored {
        request_id: RequestId,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    endpoint: Endpoint,
    query: QueryState,
    next_request_id: RequestId,
    phase: FetchPhase,
    articles: Vec<Article>,
    committed_request: Option<RequestId>,
    bytes_received: Option<u64>,
    discarded_responses: u64,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Endpoint::default())
    }
}

impl AppState {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            query: QueryState::new(),
            next_request_id: 1,
            phase: FetchPhase::Idle,
            articles: Vec::new(),
            committed_request: None,
            bytes_received: None,
            discarded_responses: 0,
            dirty: false,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn phase(&self) -> &FetchPhase {
        &self.phase
    }

    /// The committed article list; empty until the first successful commit.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Id of the most recently issued request, if any.
    pub fn latest_request_id(&self) -> Option<RequestId> {
        self.next_request_id.checked_sub(1).filter(|id| *id > 0)
    }

    /// Id of the request whose articles are currently visible.
    pub fn committed_request_id(&self) -> Option<RequestId> {
        self.committed_request
    }

    pub fn discarded_responses(&self) -> u64 {
        self.discarded_responses
    }

    pub fn view(&self) -> AppViewModel {
        let (status, error) = match &self.phase {
            FetchPhase::Idle => (FetchStatus::Idle, None),
            FetchPhase::Fetching { .. } => (FetchStatus::Fetching, None),
            FetchPhase::Committed { .. } => (FetchStatus::Committed, None),
            FetchPhase::Errored { message, .. } => (FetchStatus::Errored, Some(message.clone())),
        };

        AppViewModel {
            category: self.query.category().map(ToOwned::to_owned),
            category_options: category_options(self.query.category()),
            status,
            error,
            request_id: self.latest_request_id(),
            article_count: self.articles.len(),
            rows: self
                .articles
                .iter()
                .enumerate()
                .map(|(index, article)| ArticleRowView {
                    index,
                    title: article.title.clone(),
                    description: article.description.clone(),
                    source: article.source.clone(),
                    category: article.category.clone(),
                    url: article.url.clone(),
                    published_at: article.published_at.clone(),
                })
                .collect(),
            bytes_received: self.bytes_received,
            discarded_responses: self.discarded_responses,
        }
    }

    /// Returns whether anything visible changed since the last call, and
    /// resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn select_category(&mut self, value: String) {
        self.query.set_category(value);
        self.mark_dirty();
    }

    /// Starts a new `Fetching` instance for the current query. Any request
    /// still in flight is superseded from here on.
    pub(crate) fn issue_fetch(&mut self) -> Effect {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.phase = FetchPhase::Fetching { request_id };
        self.bytes_received = None;
        self.mark_dirty();
        Effect::FetchArticles {
            request_id,
            url: self.query.target(&self.endpoint).to_string(),
        }
    }

    /// A completion is accepted only for the request currently being
    /// fetched; anything else is superseded or already sealed.
    pub(crate) fn is_awaiting(&self, request_id: RequestId) -> bool {
        matches!(self.phase, FetchPhase::Fetching { request_id: current } if current == request_id)
    }

    pub(crate) fn apply_progress(&mut self, request_id: RequestId, bytes: u64) -> bool {
        if !self.is_awaiting(request_id) {
            return false;
        }
        self.bytes_received = Some(bytes);
        self.mark_dirty();
        true
    }

    pub(crate) fn commit_articles(&mut self, request_id: RequestId, articles: Vec<Article>) -> bool {
        if !self.is_awaiting(request_id) {
            self.discarded_responses += 1;
            return false;
        }
        self.articles = articles;
        self.committed_request = Some(request_id);
        self.phase = FetchPhase::Committed { request_id };
        self.bytes_received = None;
        self.mark_dirty();
        true
    }

    /// Records a failure without touching the committed articles.
    pub(crate) fn record_failure(&mut self, request_id: RequestId, message: String) -> bool {
        if !self.is_awaiting(request_id) {
            self.discarded_responses += 1;
            return false;
        }
        self.phase = FetchPhase::Errored {
            request_id,
            message,
        };
        self.bytes_received = None;
        self.mark_dirty();
        true
    }
}
