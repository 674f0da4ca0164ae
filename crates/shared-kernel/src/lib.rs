// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DomainError, DomainResult, ErrorContext, InfrastructureError, PresentationError, Result,
    WordCounterError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{CharCount, LineCount, WordCount};
