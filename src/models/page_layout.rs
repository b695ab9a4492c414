use super::{DharmaWord, FetchState};

/// The single main panel shown for a fetch state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Loading,
    /// Error message plus a retry button
    Error(String),
    Word(DharmaWord),
    /// First-visit prompt with the "get word" button
    CallToAction,
}

/// What the page renders: one main panel, plus the "get another" button
/// below a displayed word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub panel: Panel,
    pub fetch_another: bool,
}

impl PageLayout {
    /// Loading wins over an error, an error over a word, a word over the prompt.
    pub fn for_state(state: &FetchState) -> Self {
        let panel = if state.is_loading() {
            Panel::Loading
        } else if let Some(message) = state.error() {
            Panel::Error(message.to_string())
        } else if let Some(word) = state.word() {
            Panel::Word(word.clone())
        } else {
            Panel::CallToAction
        };

        let fetch_another = !state.is_loading() && state.word().is_some();
        Self {
            panel,
            fetch_another,
        }
    }
}
