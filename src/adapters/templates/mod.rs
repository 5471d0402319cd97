//! Template store adapters.

mod filesystem;

pub use filesystem::FsTemplateStore;
