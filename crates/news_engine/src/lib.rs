//! News engine: HTTP fetch of the article listing and effect execution.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_articles, DecodeError, NewsArticle};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ProgressSink, ReqwestFetcher};
pub use types::{
    EngineError, EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, FetchProgress,
    RequestId,
};
