// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod broadcast;
pub mod paths;
pub mod preferences;
pub mod watch;

pub use preferences::{InMemoryPreferenceStore, JsonFilePreferenceStore};
