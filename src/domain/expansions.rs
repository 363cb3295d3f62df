use crate::domain::error::ExpansionError;
use crate::domain::models::{Expansion, ExpansionList, SearchQuery};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExpansionSource: Send + Sync {
    // GET /api/random
    async fn random(&self) -> Result<Expansion, ExpansionError>;

    // GET /api/search?query=<query>
    async fn search(&self, query: &SearchQuery) -> Result<ExpansionList, ExpansionError>;

    // GET /api/all
    async fn all(&self) -> Result<ExpansionList, ExpansionError>;

    fn base_url(&self) -> String;
}

#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSink: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ExpansionError>;
}
