//! # Ports
//!
//! Interface definitions for external collaborators.
//!
//! - [`preferences`]: Preference storage with change notification
//! - [`input`]: Selection and text-input events
//! - [`render`]: Display surfaces for computed metrics
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod input;
pub mod preferences;
pub mod render;
