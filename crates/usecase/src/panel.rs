use crossbeam_channel::Receiver;
use word_counter_domain::{
    Language, PanelKind, PreferenceChange, Preferences, TextMetrics, compute_metrics, display_rows,
};
use word_counter_ports::input::InputEvent;
use word_counter_ports::preferences::{PreferenceStore, load_preferences};
use word_counter_ports::render::{PanelView, Renderer};
use word_counter_shared_kernel::{ApplicationError, Result};

/// Standalone panel: a text field with live counts, an auto-mode switch and
/// a language switch.
pub struct PanelController<'a> {
    store: &'a dyn PreferenceStore,
    renderer: &'a dyn Renderer,
    updates: Receiver<PreferenceChange>,
    prefs: Preferences,
    text: String,
    metrics: TextMetrics,
}

impl<'a> PanelController<'a> {
    /// Subscribes before reading so no change between the two is lost.
    pub fn new(store: &'a dyn PreferenceStore, renderer: &'a dyn Renderer) -> Self {
        let updates = store.subscribe();
        let prefs = load_preferences(store);
        Self { store, renderer, updates, prefs, text: String::new(), metrics: TextMetrics::default() }
    }

    /// Starts with `language` shown instead of the stored one. Nothing is written.
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.prefs.language = language;
        self
    }

    pub const fn preferences(&self) -> Preferences {
        self.prefs
    }

    pub const fn metrics(&self) -> TextMetrics {
        self.metrics
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn handle(&mut self, event: &InputEvent) -> Result<()> {
        match event {
            InputEvent::TextChanged(text) => self.set_text(text.clone()).map(|_| ()),
            InputEvent::Selection { .. } | InputEvent::PointerDown => Ok(()),
        }
    }

    /// Replaces the field content and re-renders. Empty text renders zeros.
    pub fn set_text(&mut self, text: String) -> Result<TextMetrics> {
        self.text = text;
        self.metrics = compute_metrics(&self.text);
        self.render()?;
        Ok(self.metrics)
    }

    pub fn toggle_auto_mode(&mut self) -> Result<bool> {
        let enabled = !self.prefs.auto_mode;
        self.set_auto_mode(enabled)?;
        Ok(enabled)
    }

    pub fn set_auto_mode(&mut self, enabled: bool) -> Result<()> {
        self.write(PreferenceChange::AutoMode(enabled))
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.write(PreferenceChange::Language(language))
    }

    pub fn toggle_language(&mut self) -> Result<Language> {
        let next = self.prefs.language.toggled();
        self.set_language(next)?;
        Ok(next)
    }

    /// Applies changes made elsewhere. Returns `true` if anything changed.
    pub fn sync(&mut self) -> Result<bool> {
        let before = self.prefs;
        for change in self.updates.try_iter() {
            self.prefs.apply(change);
        }
        if before.language != self.prefs.language {
            self.render()?;
        }
        Ok(before != self.prefs)
    }

    pub fn view(&self) -> PanelView {
        PanelView {
            language: self.prefs.language,
            rows: display_rows(&self.metrics, self.prefs.language, PanelKind::Panel),
            placement: None,
        }
    }

    fn write(&mut self, change: PreferenceChange) -> Result<()> {
        self.store.set(change).map_err(|err| ApplicationError::PreferenceStoreFailed {
            reason: format!("writing {}", change.key()),
            source: Some(Box::new(err)),
        })?;
        let language_changed = matches!(change, PreferenceChange::Language(lang) if lang != self.prefs.language);
        self.prefs.apply(change);
        self.sync()?;
        if language_changed {
            self.render()?;
        }
        Ok(())
    }

    fn render(&self) -> Result<()> {
        self.renderer.show(&self.view()).map_err(|err| {
            ApplicationError::RenderFailed { reason: "panel".to_string(), source: Some(Box::new(err)) }.into()
        })
    }
}

#[cfg(test)]
mod tests {
    use word_counter_infra::InMemoryPreferenceStore;

    use super::*;
    use crate::test_support::{Frame, RecordingRenderer};

    fn shown_values(renderer: &RecordingRenderer) -> Vec<(&'static str, String)> {
        match renderer.last() {
            Some(Frame::Shown(view)) => view.rows.into_iter().map(|r| (r.label, r.value)).collect(),
            other => panic!("expected a shown frame, got {other:?}"),
        }
    }

    #[test]
    fn typing_updates_all_four_rows() {
        let store = InMemoryPreferenceStore::default();
        let renderer = RecordingRenderer::default();
        let mut panel = PanelController::new(&store, &renderer);

        panel.handle(&InputEvent::TextChanged("a\nb\nc".into())).expect("handle succeeds");
        assert_eq!(
            shown_values(&renderer),
            vec![
                ("文字数", "5".to_string()),
                ("空白なし", "3".to_string()),
                ("行数", "3".to_string()),
                ("単語数", "3".to_string()),
            ]
        );
    }

    #[test]
    fn clearing_the_field_renders_zeros() {
        let store = InMemoryPreferenceStore::default();
        let renderer = RecordingRenderer::default();
        let mut panel = PanelController::new(&store, &renderer);
        panel.set_text("abc".into()).expect("set_text succeeds");
        let metrics = panel.set_text(String::new()).expect("set_text succeeds");
        assert!(metrics.is_empty());
        assert!(shown_values(&renderer).iter().all(|(_, v)| v == "0"));
    }

    #[test]
    fn loads_stored_preferences_at_start() {
        let store = InMemoryPreferenceStore::new(Preferences { auto_mode: true, language: Language::En });
        let renderer = RecordingRenderer::default();
        let panel = PanelController::new(&store, &renderer);
        assert_eq!(panel.preferences(), Preferences { auto_mode: true, language: Language::En });
    }

    #[test]
    fn language_override_is_not_persisted() {
        let store = InMemoryPreferenceStore::default();
        let renderer = RecordingRenderer::default();
        let mut panel = PanelController::new(&store, &renderer).with_language(Language::En);
        panel.set_text("abc".into()).expect("set_text succeeds");
        assert_eq!(shown_values(&renderer)[0], ("Characters", "3".to_string()));
        assert_eq!(store.snapshot().language, Language::Ja);
    }

    #[test]
    fn toggling_auto_mode_writes_through() {
        let store = InMemoryPreferenceStore::default();
        let renderer = RecordingRenderer::default();
        let mut panel = PanelController::new(&store, &renderer);
        assert!(panel.toggle_auto_mode().expect("toggle succeeds"));
        assert!(store.snapshot().auto_mode);
        assert!(!panel.toggle_auto_mode().expect("toggle succeeds"));
        assert!(!store.snapshot().auto_mode);
    }

    #[test]
    fn switching_language_re_renders() {
        let store = InMemoryPreferenceStore::default();
        let renderer = RecordingRenderer::default();
        let mut panel = PanelController::new(&store, &renderer);
        panel.set_text("hello world".into()).expect("set_text succeeds");
        assert_eq!(panel.toggle_language().expect("toggle succeeds"), Language::En);
        assert_eq!(shown_values(&renderer)[0], ("Characters", "11".to_string()));
        assert_eq!(store.snapshot().language, Language::En);
    }

    #[test]
    fn changes_from_another_surface_are_picked_up() {
        let store = InMemoryPreferenceStore::default();
        let renderer = RecordingRenderer::default();
        let mut panel = PanelController::new(&store, &renderer);
        store.set(PreferenceChange::Language(Language::En)).expect("set succeeds");
        assert!(panel.sync().expect("sync succeeds"));
        assert_eq!(panel.preferences().language, Language::En);
        assert!(!panel.sync().expect("sync succeeds"));
    }
}
