pub mod dharma_state;
pub mod dharma_word;
pub mod fetch_state;
pub mod page_layout;
pub mod theme_color;

pub use dharma_state::DharmaState;
pub use dharma_word::{DharmaWord, ShareTarget};
pub use fetch_state::{FetchCycle, FetchState, FetchTicket};
pub use page_layout::{PageLayout, Panel};
pub use theme_color::ThemeColor;
