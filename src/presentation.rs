// src/presentation.rs
use std::cell::RefCell;
use std::io::Write;

use serde::Serialize;
use word_counter_domain::{Anchor, Preferences, TextMetrics};
use word_counter_ports::render::{PanelView, Renderer};
use word_counter_shared_kernel::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

/// Draws panel views on a text stream.
///
/// The table form mirrors the on-page panel: one `label  value` row per count.
pub struct TerminalRenderer<W: Write> {
    out: RefCell<W>,
    format: OutputFormat,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out: RefCell::new(out), format }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_str(&self, s: &str) -> Result<()> {
        let mut out = self.out.borrow_mut();
        out.write_all(s.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn show(&self, view: &PanelView) -> Result<()> {
        let text = match self.format {
            OutputFormat::Table => format_view_table(view),
            OutputFormat::Json => format!("{}\n", serde_json::to_string(view)?),
            OutputFormat::Yaml => format!("---\n{}", to_yaml(view)?),
        };
        self.write_str(&text)
    }

    fn hide(&self) -> Result<()> {
        log::debug!("display hidden");
        Ok(())
    }
}

pub fn format_view_table(view: &PanelView) -> String {
    let mut out = String::new();
    if let Some(p) = &view.placement {
        let anchor = match p.anchor {
            Anchor::Above => "above",
            Anchor::Below => "below",
        };
        out.push_str(&format!("@ left={} top={} ({anchor})\n", p.left, p.top));
    }
    let width = view.rows.iter().map(|r| display_width(r.label)).max().unwrap_or(0);
    for row in &view.rows {
        let pad = width - display_width(row.label);
        out.push_str(&format!("{}{}  {:>8}\n", row.label, " ".repeat(pad), row.value));
    }
    out
}

/// Serialized form of `count` output.
pub fn format_metrics(metrics: &TextMetrics, format: OutputFormat) -> Result<Option<String>> {
    match format {
        OutputFormat::Table => Ok(None),
        OutputFormat::Json => Ok(Some(format!("{}\n", serde_json::to_string_pretty(metrics)?))),
        OutputFormat::Yaml => to_yaml(metrics).map(Some),
    }
}

pub fn format_preferences(prefs: &Preferences, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format!("autoMode  {}\nlanguage  {}\n", prefs.auto_mode, prefs.language)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(prefs)?)),
        OutputFormat::Yaml => to_yaml(prefs),
    }
}

fn to_yaml<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

/// 非 ASCII 文字をすべて 2 桁として数える簡易幅。
///
/// ラベル表（日本語/英語の固定文言）の桁揃え専用で、任意テキストの幅計算には使えない。
fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}
