use crate::domain::error::ExpansionError;
use crate::domain::models::{Expansion, ExpansionList, RenderTarget, RequestSeq, SearchQuery};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,

    // --- Navigation (Results) ---
    ScrollResultsUp(u16),
    ScrollResultsDown(u16),

    // --- Expansion Intents ---
    // These trigger async tasks
    RefreshRandom,                  // GET /api/random into the banner
    RandomIntoResults,              // GET /api/random into the results
    LoadAll,                        // GET /api/all
    SearchRequested(SearchQuery),   // GET /api/search, fired by the debouncer
    CopyResults,                    // Results text to the clipboard

    // --- UI Mode Transitions ---
    FocusSearch,                            // Start editing the search bar (/)
    CancelMode,                             // ESC key (dismiss error / leave search)
    ClearSearch,                            // Empty the search bar, drop pending search
    SearchInput(crossterm::event::KeyEvent), // Edit the search bar

    // --- Async Results (The "Callback") ---
    ExpansionLoaded {
        seq: RequestSeq,
        target: RenderTarget,
        result: Result<Expansion, ExpansionError>,
    },
    ExpansionsLoaded {
        seq: RequestSeq,
        result: Result<ExpansionList, ExpansionError>,
    },
    ClipboardWritten {
        lines: usize,
        result: Result<(), ExpansionError>,
    },
}
