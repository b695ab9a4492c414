use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters escaped by `encodeURIComponent`: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// External destinations a Dharma word can be shared to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ShareTarget {
    WhatsApp,
    Facebook,
    Twitter,
}

impl ShareTarget {
    /// Human-readable name used in logs and button labels
    pub const fn label(self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
        }
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Build the fully-qualified share URL for `target`.
///
/// WhatsApp takes a single message parameter carrying text and URL on
/// separate lines. Facebook's sharer wants the URL in `u` and the text in
/// `quote`. Twitter takes `text` and `url` as separate query parameters.
pub fn share_link(target: ShareTarget, text: &str, url: &str) -> String {
    match target {
        ShareTarget::WhatsApp => format!(
            "https://api.whatsapp.com/send?text={}",
            encode(&format!("{text}\n{url}"))
        ),
        ShareTarget::Facebook => format!(
            "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
            encode(url),
            encode(text)
        ),
        ShareTarget::Twitter => format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            encode(text),
            encode(url)
        ),
    }
}
