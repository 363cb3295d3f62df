use crate::domain::models::{RenderTarget, RequestSeq, SearchQuery};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchRandom(RequestSeq, RenderTarget),
    Search(RequestSeq, SearchQuery),
    LoadAll(RequestSeq),
    CopyToClipboard(String),

    // Handled by the loop, which owns the debouncer.
    DebounceSearch(SearchQuery),
    CancelPendingSearch,
}
