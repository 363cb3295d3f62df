use crate::app::config::Config;
use crate::domain::error::ExpansionError;
use crate::domain::models::{RenderTarget, RequestSeq};
use std::time::Instant;

pub mod error;
pub mod input;
pub mod target;

// Re-exports
pub use error::{ErrorSeverity, ErrorState};
pub use input::{AppTextArea, SearchState};
pub use target::TextTarget;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Browse, // Keymap active, results scrollable
    Search, // Keys edit the search bar
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Connectivity & Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>, // "Copied 10 lines."
    pub status_clear_time: Option<Instant>,
    pub base_url: String,

    // --- Render Targets ---
    // `None` means the element is not on screen at all.
    pub banner: Option<TextTarget>,
    pub results: Option<TextTarget>,
    pub results_scroll: u16,

    // --- Requests ---
    pub next_seq: RequestSeq,
    pub in_flight: usize,

    // --- Input Handling ---
    pub search: SearchState<'a>,

    // --- Animation ---
    pub frame_count: u64,
    pub spinner: String,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            banner: config.show_banner.then(TextTarget::default),
            ..Default::default()
        }
    }

    /// Hands out the next request sequence number and counts it as in flight.
    pub fn issue_seq(&mut self) -> RequestSeq {
        self.next_seq += 1;
        self.in_flight += 1;
        self.next_seq
    }

    pub fn settle_request(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn target(&self, target: RenderTarget) -> Result<&TextTarget, ExpansionError> {
        match target {
            RenderTarget::Banner => self.banner.as_ref(),
            RenderTarget::Results => self.results.as_ref(),
        }
        .ok_or(ExpansionError::RenderTargetMissing(target))
    }

    pub fn target_mut(&mut self, target: RenderTarget) -> Result<&mut TextTarget, ExpansionError> {
        match target {
            RenderTarget::Banner => self.banner.as_mut(),
            RenderTarget::Results => self.results.as_mut(),
        }
        .ok_or(ExpansionError::RenderTargetMissing(target))
    }

    pub fn report_error(&mut self, error: ExpansionError) {
        tracing::warn!(kind = error.kind(), "{error}");
        self.last_error = Some(ErrorState::new(error, &self.base_url));
    }

    pub fn advance_spinner(&mut self) {
        self.frame_count = self.frame_count.wrapping_add(1);
        let idx = (self.frame_count % SPINNER_FRAMES.len() as u64) as usize;
        self.spinner = SPINNER_FRAMES[idx].to_string();
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Browse,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            base_url: crate::app::config::DEFAULT_BASE_URL.to_string(),
            banner: Some(TextTarget::default()),
            results: Some(TextTarget::default()),
            results_scroll: 0,
            next_seq: 0,
            in_flight: 0,
            search: SearchState::default(),
            frame_count: 0,
            spinner: SPINNER_FRAMES[0].to_string(),
        }
    }
}
