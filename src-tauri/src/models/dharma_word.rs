use serde::{Deserialize, Serialize};

/// A daily Dharma word: a short title and the explanation that goes with it.
/// Sent to the frontend as the payload of `fetch_dharma_word`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DharmaWord {
    /// The word or short phrase itself
    pub title: String,
    /// A brief explanation suitable for daily reflection
    pub explanation: String,
}

impl DharmaWord {
    /// Build a word from its two fields, rejecting blank ones.
    ///
    /// Returns `None` when either field is empty.
    pub fn new(title: impl Into<String>, explanation: impl Into<String>) -> Option<Self> {
        let title = title.into();
        let explanation = explanation.into();
        if title.is_empty() || explanation.is_empty() {
            return None;
        }
        Some(Self { title, explanation })
    }
}
