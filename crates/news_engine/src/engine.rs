use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use news_logging::{news_debug, news_info};

use crate::decode::{decode_articles, NewsArticle};
use crate::fetch::{ChannelProgressSink, FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineError, EngineEvent, FailureKind, FetchError, FetchOutput, RequestId};

enum EngineCommand {
    Fetch { request_id: RequestId, url: String },
}

/// Runs fetches on a background tokio runtime and reports back over a channel.
///
/// Every command is executed to completion; nothing is cancelled when a newer
/// request arrives. Deciding which completion to keep is up to the receiver.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let fetcher = ReqwestFetcher::new(settings)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("news-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, event_tx).await;
                    });
                }
                news_debug!("Engine command channel closed; shutting down");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            request_id,
            url: url.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { request_id, url } => {
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result = fetcher
                .fetch(request_id, &url, &sink)
                .await
                .and_then(decode_output);
            match &result {
                Ok(articles) => news_info!(
                    "Fetched request_id={} articles={} url={}",
                    request_id,
                    articles.len(),
                    url
                ),
                Err(err) => news_info!("Fetch request_id={} url={} failed: {}", request_id, url, err),
            }
            let _ = event_tx.send(EngineEvent::FetchCompleted { request_id, result });
        }
    }
}

fn decode_output(output: FetchOutput) -> Result<Vec<NewsArticle>, FetchError> {
    let meta = &output.metadata;
    news_debug!(
        "Response status={} content_type={:?} bytes={} final_url={}",
        meta.status,
        meta.content_type,
        meta.byte_len,
        meta.final_url
    );
    if meta.final_url != meta.url {
        news_info!("Redirected {} -> {}", meta.url, meta.final_url);
    }
    decode_articles(&output.bytes)
        .map_err(|err| FetchError::new(FailureKind::MalformedPayload, err.to_string()))
}
