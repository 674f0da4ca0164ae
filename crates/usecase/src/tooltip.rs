use crossbeam_channel::Receiver;
use word_counter_domain::{PanelKind, PreferenceChange, Preferences, compute_metrics, display_rows, place_tooltip};
use word_counter_ports::input::InputEvent;
use word_counter_ports::render::{PanelView, Renderer};
use word_counter_shared_kernel::Result;

/// What a single event did to the tooltip.
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipOutcome {
    Shown(PanelView),
    Hidden,
    Ignored,
}

/// Shows counts next to the current selection while auto mode is on.
///
/// Settings are passed in at construction and updated only through
/// [`apply_change`](Self::apply_change).
pub struct TooltipController<'a> {
    settings: Preferences,
    renderer: &'a dyn Renderer,
}

impl<'a> TooltipController<'a> {
    pub fn new(settings: Preferences, renderer: &'a dyn Renderer) -> Self {
        Self { settings, renderer }
    }

    pub const fn settings(&self) -> Preferences {
        self.settings
    }

    pub fn apply_change(&mut self, change: PreferenceChange) {
        self.settings.apply(change);
    }

    /// Applies every change already waiting on `updates`; returns how many there were.
    pub fn drain_changes(&mut self, updates: &Receiver<PreferenceChange>) -> usize {
        let mut applied = 0;
        for change in updates.try_iter() {
            self.apply_change(change);
            applied += 1;
        }
        applied
    }

    pub fn handle(&mut self, event: &InputEvent) -> Result<TooltipOutcome> {
        match event {
            InputEvent::PointerDown => {
                self.renderer.hide()?;
                Ok(TooltipOutcome::Hidden)
            }
            InputEvent::Selection { text, rect } => {
                if !self.settings.auto_mode {
                    return Ok(TooltipOutcome::Ignored);
                }
                if text.is_empty() {
                    self.renderer.hide()?;
                    return Ok(TooltipOutcome::Hidden);
                }
                if !rect.is_displayable() {
                    return Ok(TooltipOutcome::Ignored);
                }

                let metrics = compute_metrics(text);
                log::debug!("selection metrics: {metrics:?}");
                let view = PanelView {
                    language: self.settings.language,
                    rows: display_rows(&metrics, self.settings.language, PanelKind::Tooltip),
                    placement: Some(place_tooltip(rect)),
                };
                self.renderer.show(&view)?;
                Ok(TooltipOutcome::Shown(view))
            }
            InputEvent::TextChanged(_) => Ok(TooltipOutcome::Ignored),
        }
    }
}
