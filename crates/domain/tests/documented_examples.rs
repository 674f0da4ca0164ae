// crates/domain/tests/documented_examples.rs
use word_counter_domain::{Language, PanelKind, compute_metrics, display_rows};

#[test]
fn hello_world_panel_rows_in_english() {
    let rows = display_rows(&compute_metrics("hello world"), Language::En, PanelKind::Panel);
    let pairs: Vec<_> = rows.iter().map(|r| (r.label, r.value.as_str())).collect();
    assert_eq!(
        pairs,
        [("Characters", "11"), ("No spaces", "10"), ("Lines", "1"), ("Words", "2")]
    );
}

#[test]
fn japanese_greeting_tooltip_rows() {
    let rows = display_rows(&compute_metrics("こんにちは"), Language::Ja, PanelKind::Tooltip);
    let pairs: Vec<_> = rows.iter().map(|r| (r.label, r.value.as_str())).collect();
    assert_eq!(pairs, [("文字数", "5"), ("空白なし", "5"), ("単語数", "5")]);
}

#[test]
fn empty_text_renders_zeros() {
    let rows = display_rows(&compute_metrics(""), Language::Ja, PanelKind::Panel);
    assert!(rows.iter().all(|r| r.value == "0"));
}
