use serde::{Deserialize, Serialize};

/// Monotonic counter identifying one submission. Settlements carry the
/// generation of the request they answer; anything not matching the
/// generation currently in flight is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestGeneration(pub u64);

impl RequestGeneration {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Recommendation text as returned by the service. The text is untrusted
/// and is never parsed as markup; consumers render it line by line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationText(String);

impl RecommendationText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Structural lines for rendering: one entry per `\n`-separated segment,
    /// with `\r\n` treated like `\n`. Blank segments are preserved so the UI
    /// can keep paragraph breaks visible.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }
}
