use crate::{Category, RequestId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Fetching,
    Committed,
    Errored,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub category: Option<String>,
    pub category_options: Vec<CategoryOption>,
    pub status: FetchStatus,
    pub error: Option<String>,
    pub request_id: Option<RequestId>,
    pub article_count: usize,
    pub rows: Vec<ArticleRowView>,
    pub bytes_received: Option<u64>,
    pub discarded_responses: u64,
}

impl AppViewModel {
    /// Position of the selected option; 0 ("All categories") when the current
    /// selection is not one of the fixed categories.
    pub fn selected_option_index(&self) -> usize {
        self.category_options
            .iter()
            .position(|option| option.selected)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRowView {
    pub index: usize,
    pub title: String,
    pub description: String,
    pub source: String,
    pub category: String,
    pub url: String,
    pub published_at: Option<String>,
}

/// One entry of the category selector. `value == None` is "All categories".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: Option<Category>,
    pub label: &'static str,
    pub selected: bool,
}

impl CategoryOption {
    /// The string to send back as `Msg::CategorySelected`.
    pub fn query_value(&self) -> &'static str {
        self.value.map(Category::as_str).unwrap_or("")
    }
}

/// The selector contents for the given selection: "All categories" first,
/// then the fixed categories in display order.
pub fn category_options(selected: Option<&str>) -> Vec<CategoryOption> {
    std::iter::once(CategoryOption {
        value: None,
        label: "All categories",
        selected: selected.is_none(),
    })
    .chain(Category::ALL.into_iter().map(|category| CategoryOption {
        value: Some(category),
        label: category.label(),
        selected: selected == Some(category.as_str()),
    }))
    .collect()
}
