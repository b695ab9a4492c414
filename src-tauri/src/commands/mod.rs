pub mod dharma;
