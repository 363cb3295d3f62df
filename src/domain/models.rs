use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Expansion(pub String);

impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Expansion {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Expansion {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Ordered list of expansions, in the order the server returned them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpansionList(pub Vec<Expansion>);

impl ExpansionList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// One expansion per line, no trailing newline.
    pub fn render_text(&self) -> String {
        self.0
            .iter()
            .map(|expansion| expansion.0.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Vec<String>> for ExpansionList {
    fn from(values: Vec<String>) -> Self {
        Self(values.into_iter().map(Expansion).collect())
    }
}

impl FromIterator<Expansion> for ExpansionList {
    fn from_iter<I: IntoIterator<Item = Expansion>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Raw search bar text. Sent to the server as-is, empty included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SearchQuery(pub String);

impl SearchQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SearchQuery {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Issued per request, strictly increasing from 1. Zero means "nothing applied yet".
pub type RequestSeq = u64;

/// Where a response gets rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    Banner,
    Results,
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderTarget::Banner => write!(f, "banner"),
            RenderTarget::Results => write!(f, "results"),
        }
    }
}
