use news_logging::{news_debug, news_warn};

use crate::{AppState, Effect, FetchPhase, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if *state.phase() == FetchPhase::Idle {
                vec![state.issue_fetch()]
            } else {
                Vec::new()
            }
        }
        Msg::CategorySelected(value) => {
            // Re-selecting the current category re-issues the request on purpose.
            state.select_category(value);
            vec![state.issue_fetch()]
        }
        Msg::RefreshRequested => vec![state.issue_fetch()],
        Msg::FetchProgress { request_id, bytes } => {
            state.apply_progress(request_id, bytes);
            Vec::new()
        }
        Msg::FetchSucceeded {
            request_id,
            articles,
        } => {
            let count = articles.len();
            if !state.commit_articles(request_id, articles) {
                news_debug!(
                    "Discarded superseded response request_id={} latest={:?} articles={}",
                    request_id,
                    state.latest_request_id(),
                    count
                );
            }
            Vec::new()
        }
        Msg::FetchFailed {
            request_id,
            message,
        } => {
            let logged = message.clone();
            if state.record_failure(request_id, message) {
                news_warn!("Fetch request_id={} failed: {}", request_id, logged);
            } else {
                news_debug!(
                    "Discarded superseded failure request_id={} latest={:?}: {}",
                    request_id,
                    state.latest_request_id(),
                    logged
                );
            }
            Vec::new()
        }
    };

    (state, effects)
}
