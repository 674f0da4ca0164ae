//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`tooltip`]: Floating display that follows text selections
//! - [`panel`]: Standalone panel with live counts and preference toggles
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod panel;
pub mod tooltip;

pub use panel::PanelController;
pub use tooltip::{TooltipController, TooltipOutcome};

#[cfg(test)]
pub(crate) mod test_support;
