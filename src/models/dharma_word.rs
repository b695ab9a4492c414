use serde::{Deserialize, Serialize};

/// Prefix of every shared message
pub const SHARE_LABEL: &str = "Palavra do Dharma do dia";
/// Suffix of every shared message
pub const SHARE_HASHTAGS: &str = "#DharmaWord #ReflexãoDiária";

/// A daily Dharma word.
/// Mirrors the backend `DharmaWord` type for IPC serialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DharmaWord {
    pub title: String,
    pub explanation: String,
}

impl DharmaWord {
    /// Text posted to share destinations: label and quoted title, a blank
    /// line, the explanation, a blank line, then the hashtags.
    pub fn share_text(&self) -> String {
        format!(
            "{SHARE_LABEL}: \"{}\"\n\n{}\n\n{SHARE_HASHTAGS}",
            self.title, self.explanation
        )
    }
}

/// Share destinations handled by the backend opener.
/// Mirrors the backend `ShareTarget` type for IPC serialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ShareTarget {
    WhatsApp,
    Facebook,
    Twitter,
}

impl ShareTarget {
    pub const fn label(self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
        }
    }
}
