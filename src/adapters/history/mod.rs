//! History repository adapters.

mod in_memory;
mod json_file;

pub use in_memory::InMemoryHistoryRepository;
pub use json_file::JsonFileHistoryRepository;
