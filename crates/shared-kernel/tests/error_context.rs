// crates/shared-kernel/tests/error_context.rs
use std::io;

use word_counter_shared_kernel::{DomainError, ErrorContext, WordCounterError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(WordCounterError::from)
        .context("reading preferences")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("reading preferences"));
    assert!(display.contains("Output error:"));
}

#[test]
fn with_context_is_lazy_and_keeps_domain_source() {
    let result: std::result::Result<(), DomainError> =
        Err(DomainError::UnknownLanguage { value: "fr".into() });
    let err = result.with_context(|| "parsing --lang".to_string()).unwrap_err();

    let display = err.to_string();
    assert!(display.starts_with("parsing --lang: Domain error:"));
    assert!(display.contains("'fr'"));
}
