pub mod dharma_word;
pub mod share;

pub use dharma_word::DharmaWord;
pub use share::{share_link, ShareTarget};
