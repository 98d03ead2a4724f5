use news_core::{Article, Effect, Msg};
use news_engine::{EngineEvent, EngineHandle, NewsArticle};
use news_logging::news_info;

/// Executes core effects on the engine and turns engine events back into
/// messages for the UI thread.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchArticles { request_id, url } => {
                    news_info!("FetchArticles request_id={} url={}", request_id, url);
                    self.engine.fetch(request_id, url);
                }
            }
        }
    }

    /// Everything the engine has reported since the last call.
    pub fn drain(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Progress(progress) => Msg::FetchProgress {
            request_id: progress.request_id,
            bytes: progress.bytes,
        },
        EngineEvent::FetchCompleted {
            request_id,
            result: Ok(articles),
        } => Msg::FetchSucceeded {
            request_id,
            articles: articles.into_iter().map(map_article).collect(),
        },
        EngineEvent::FetchCompleted {
            request_id,
            result: Err(err),
        } => Msg::FetchFailed {
            request_id,
            message: err.to_string(),
        },
    }
}

fn map_article(article: NewsArticle) -> Article {
    Article {
        title: article.title,
        description: article.description,
        url: article.url,
        source: article.source,
        category: article.category,
        published_at: article.published_at,
    }
}
