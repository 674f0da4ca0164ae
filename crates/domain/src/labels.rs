// crates/domain/src/labels.rs
use serde::Serialize;

use crate::language::Language;
use crate::metrics::{MetricKind, TextMetrics};

struct LabelTable {
    characters: &'static str,
    non_whitespace: &'static str,
    lines: &'static str,
    words: &'static str,
}

static JA: LabelTable = LabelTable {
    characters: "文字数",
    non_whitespace: "空白なし",
    lines: "行数",
    words: "単語数",
};

static EN: LabelTable = LabelTable {
    characters: "Characters",
    non_whitespace: "No spaces",
    lines: "Lines",
    words: "Words",
};

/// 計測項目の表示ラベル。
#[must_use]
pub fn label(language: Language, kind: MetricKind) -> &'static str {
    let table = match language {
        Language::Ja => &JA,
        Language::En => &EN,
    };
    match kind {
        MetricKind::Characters => table.characters,
        MetricKind::NonWhitespace => table.non_whitespace,
        MetricKind::Lines => table.lines,
        MetricKind::Words => table.words,
    }
}

/// 表示面の種類。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// 選択範囲の近くに出すツールチップ（行数は出さない）
    Tooltip,
    /// 入力欄つきの独立パネル
    Panel,
}

impl PanelKind {
    #[must_use]
    pub const fn rows(self) -> &'static [MetricKind] {
        match self {
            Self::Tooltip => &[MetricKind::Characters, MetricKind::NonWhitespace, MetricKind::Words],
            Self::Panel => &MetricKind::ALL,
        }
    }
}

/// ラベルと整形済みの値からなる 1 行。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub kind: MetricKind,
    pub label: &'static str,
    pub value: String,
}

/// 計測結果を表示行に変換する。値は区切り文字なしの 10 進表記。
#[must_use]
pub fn display_rows(metrics: &TextMetrics, language: Language, panel: PanelKind) -> Vec<DisplayRow> {
    panel
        .rows()
        .iter()
        .map(|&kind| DisplayRow {
            kind,
            label: label(language, kind),
            value: metrics.value(kind).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_metrics;

    #[test]
    fn japanese_labels() {
        let rows = display_rows(&compute_metrics("a b\nc"), Language::Ja, PanelKind::Panel);
        let labels: Vec<_> = rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, ["文字数", "空白なし", "行数", "単語数"]);
    }

    #[test]
    fn tooltip_has_no_line_row() {
        let rows = display_rows(&compute_metrics("x"), Language::En, PanelKind::Tooltip);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.kind != MetricKind::Lines));
        assert_eq!(rows[2].label, "Words");
    }

    #[test]
    fn values_have_no_thousands_separator() {
        let text = "a".repeat(12_345);
        let rows = display_rows(&compute_metrics(&text), Language::En, PanelKind::Panel);
        assert_eq!(rows[0].value, "12345");
    }
}
