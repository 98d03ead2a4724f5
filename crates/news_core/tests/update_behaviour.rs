use std::sync::Once;

use news_core::{update, AppState, Category, Effect, Endpoint, FetchPhase, Msg};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(news_logging::initialize_for_tests);
}

fn state() -> AppState {
    AppState::new(Endpoint::parse("http://news.test:8000").unwrap())
}

fn select(state: AppState, category: &str) -> (AppState, Vec<Effect>) {
    update(state, Msg::CategorySelected(category.to_string()))
}

fn fetch_url(effects: &[Effect]) -> &str {
    match effects {
        [Effect::FetchArticles { url, .. }] => url.as_str(),
        other => panic!("expected exactly one fetch, got {other:?}"),
    }
}

#[test]
fn started_issues_unfiltered_initial_load() {
    init_logging();
    let (mut state, effects) = update(state(), Msg::Started);

    assert_eq!(
        effects,
        vec![Effect::FetchArticles {
            request_id: 1,
            url: "http://news.test:8000/api/news".to_string(),
        }]
    );
    assert_eq!(*state.phase(), FetchPhase::Fetching { request_id: 1 });
    assert!(state.consume_dirty());
}

#[test]
fn started_twice_does_not_reload() {
    init_logging();
    let (state, _) = update(state(), Msg::Started);
    let (state, effects) = update(state, Msg::Started);

    assert!(effects.is_empty());
    assert_eq!(state.latest_request_id(), Some(1));
}

#[test]
fn every_category_is_encoded_as_query_parameter() {
    init_logging();
    for category in Category::ALL {
        let (_, effects) = select(state(), category.as_str());
        assert_eq!(
            fetch_url(&effects),
            format!("http://news.test:8000/api/news?category={}", category.as_str())
        );
    }
}

#[test]
fn clearing_the_category_matches_the_initial_request() {
    init_logging();
    let (_, initial) = update(state(), Msg::Started);
    let initial_url = fetch_url(&initial).to_string();

    let (state, _) = select(state(), "sports");
    let (state, cleared) = select(state, "");

    assert_eq!(fetch_url(&cleared), initial_url);
    assert!(!fetch_url(&cleared).contains("category"));
    assert_eq!(state.query().category(), None);
}

#[test]
fn reselecting_the_same_category_reissues_an_identical_request() {
    init_logging();
    let (state, first) = select(state(), "health");
    let (state, second) = select(state, "health");

    assert_eq!(fetch_url(&first), fetch_url(&second));
    assert_eq!(
        second,
        vec![Effect::FetchArticles {
            request_id: 2,
            url: "http://news.test:8000/api/news?category=health".to_string(),
        }]
    );
    assert_eq!(*state.phase(), FetchPhase::Fetching { request_id: 2 });
}

#[test]
fn unknown_category_is_passed_through() {
    init_logging();
    let (state, effects) = select(state(), "weather");

    assert_eq!(
        fetch_url(&effects),
        "http://news.test:8000/api/news?category=weather"
    );
    assert_eq!(state.query().category(), Some("weather"));
    assert!(state.view().category_options.iter().all(|o| !o.selected));
}

#[test]
fn request_ids_increase_monotonically() {
    init_logging();
    let (state, a) = update(state(), Msg::Started);
    let (state, b) = select(state, "science");
    let (state, c) = update(state, Msg::RefreshRequested);

    let ids: Vec<_> = a
        .iter()
        .chain(&b)
        .chain(&c)
        .map(|effect| match effect {
            Effect::FetchArticles { request_id, .. } => *request_id,
        })
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(state.latest_request_id(), Some(3));
}

#[test]
fn refresh_keeps_the_current_filter() {
    init_logging();
    let (state, _) = select(state(), "technology");
    let (_, effects) = update(state, Msg::RefreshRequested);

    assert_eq!(
        fetch_url(&effects),
        "http://news.test:8000/api/news?category=technology"
    );
}
