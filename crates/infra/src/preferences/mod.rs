// crates/infra/src/preferences/mod.rs
mod json_file;
mod memory;

pub use json_file::JsonFilePreferenceStore;
pub use memory::InMemoryPreferenceStore;
