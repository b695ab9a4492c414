pub mod dharma_service;

pub use dharma_service::DharmaService;
