//! Data module - CSV loading and size counting

mod loader;
mod processor;

pub use loader::{parse_number, ComponentTable, DataLoader, LoaderError, SIZE_COLUMN};
pub use processor::{DataProcessor, SizeBucket, SizeHistogram};
