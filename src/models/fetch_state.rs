use super::DharmaWord;

/// The only error text the user ever sees for a failed fetch
pub const FETCH_ERROR_MESSAGE: &str =
    "Não foi possível buscar a Palavra do Dharma. Por favor, tente novamente mais tarde.";

/// Lifecycle of the current word.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    /// Nothing fetched yet
    #[default]
    Idle,
    Loading,
    Success(DharmaWord),
    /// Holds the user-facing message, never the underlying error
    Failed(String),
}

impl FetchState {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn word(&self) -> Option<&DharmaWord> {
        match self {
            Self::Success(word) => Some(word),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Identifies one fetch request; only the newest ticket may settle the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchTicket(u64);

/// Fetch state plus the ticket of the request that currently owns it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchCycle {
    state: FetchState,
    latest: FetchTicket,
}

impl FetchCycle {
    pub const fn state(&self) -> &FetchState {
        &self.state
    }

    /// Drop the current word or error and start loading.
    /// Any earlier ticket is superseded.
    pub fn begin(&mut self) -> FetchTicket {
        self.latest = FetchTicket(self.latest.0 + 1);
        self.state = FetchState::Loading;
        self.latest
    }

    /// Settle the fetch identified by `ticket`.
    ///
    /// Returns false, leaving the state untouched, when `ticket` has been
    /// superseded or was already settled.
    pub fn finish<E>(&mut self, ticket: FetchTicket, outcome: Result<DharmaWord, E>) -> bool {
        if ticket != self.latest || !self.state.is_loading() {
            return false;
        }

        self.state = match outcome {
            Ok(word) => FetchState::Success(word),
            Err(_) => FetchState::Failed(FETCH_ERROR_MESSAGE.to_string()),
        };
        true
    }
}
