// crates/ports/src/render.rs
use serde::Serialize;
use word_counter_domain::{DisplayRow, Language, Placement};
use word_counter_shared_kernel::Result;

/// Everything a display surface needs to draw one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub language: Language,
    pub rows: Vec<DisplayRow>,
    /// Set for the floating tooltip, `None` for the standalone panel.
    pub placement: Option<Placement>,
}

pub trait Renderer {
    fn show(&self, view: &PanelView) -> Result<()>;
    fn hide(&self) -> Result<()>;
}
