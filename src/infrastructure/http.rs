use crate::domain::{
    error::ExpansionError,
    expansions::ExpansionSource,
    models::{Expansion, ExpansionList, SearchQuery},
};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

const RANDOM_PATH: &str = "api/random";
const SEARCH_PATH: &str = "api/search";
const ALL_PATH: &str = "api/all";

#[derive(Debug, Deserialize)]
struct RandomBody {
    expansion: String,
}

pub struct HttpExpansions {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpExpansions {
    pub fn new(mut base_url: Url) -> Self {
        // `Url::join` replaces the last segment unless the base ends in a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ExpansionError> {
        self.base_url
            .join(path)
            .map_err(|e| ExpansionError::Network(format!("invalid endpoint {path}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ExpansionError> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ExpansionError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExpansionError::Network(format!("{url} returned {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ExpansionError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ExpansionError::Parse(format!("{url}: {e}")))
    }
}

#[async_trait]
impl ExpansionSource for HttpExpansions {
    async fn random(&self) -> Result<Expansion, ExpansionError> {
        let url = self.endpoint(RANDOM_PATH)?;
        let body: RandomBody = self.get_json(url).await?;
        Ok(Expansion(body.expansion))
    }

    async fn search(&self, query: &SearchQuery) -> Result<ExpansionList, ExpansionError> {
        let mut url = self.endpoint(SEARCH_PATH)?;
        url.query_pairs_mut().append_pair("query", query.as_str());
        let list: Vec<String> = self.get_json(url).await?;
        Ok(ExpansionList::from(list))
    }

    async fn all(&self) -> Result<ExpansionList, ExpansionError> {
        let url = self.endpoint(ALL_PATH)?;
        let list: Vec<String> = self.get_json(url).await?;
        Ok(ExpansionList::from(list))
    }

    fn base_url(&self) -> String {
        self.base_url.to_string()
    }
}
