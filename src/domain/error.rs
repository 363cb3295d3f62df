use super::models::RenderTarget;
use thiserror::Error;

/// Failure of a single client operation. Never fatal to the app.
///
/// Carries messages rather than source errors so it can ride inside
/// `Action`s, which are `Clone + PartialEq`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpansionError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    Parse(String),

    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error("render target missing: {0}")]
    RenderTargetMissing(RenderTarget),
}

impl ExpansionError {
    pub fn kind(&self) -> &'static str {
        match self {
            ExpansionError::Network(_) => "NetworkError",
            ExpansionError::Parse(_) => "ParseError",
            ExpansionError::Clipboard(_) => "ClipboardError",
            ExpansionError::RenderTargetMissing(_) => "RenderTargetMissing",
        }
    }
}
