#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue `GET url`; the completion must be reported back with the same id.
    FetchArticles {
        request_id: crate::RequestId,
        url: String,
    },
}
