//! News core: pure category/fetch state machine and view-model helpers.
mod category;
mod effect;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use category::Category;
pub use effect::Effect;
pub use msg::Msg;
pub use query::{Endpoint, EndpointError, QueryState, DEFAULT_BASE_URL, NEWS_PATH};
pub use state::{AppState, Article, FetchPhase, RequestId};
pub use update::update;
pub use view_model::{category_options, AppViewModel, ArticleRowView, CategoryOption, FetchStatus};
