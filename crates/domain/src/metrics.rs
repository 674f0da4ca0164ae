// crates/domain/src/metrics.rs
use serde::{Deserialize, Serialize};
use word_counter_shared_kernel::{CharCount, LineCount, WordCount};

use crate::script::is_japanese_bearing;
use crate::whitespace::{is_whitespace, tokens};

/// 1 つのテキストに対する計測結果。
///
/// 入力が変わるたびに作り直す不変のスナップショット。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMetrics {
    /// UTF-16 コードユニット数（サロゲートペアは 2）
    pub character_count: CharCount,
    /// 空白文字を除いた UTF-16 コードユニット数
    pub non_whitespace_character_count: CharCount,
    /// `\n` で分割したセグメント数（空文字列なら 0）
    pub line_count: LineCount,
    /// 単語数（日本語を含む場合は文字数と同じ）
    pub word_count: WordCount,
}

/// 表示対象の計測項目。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    Characters,
    NonWhitespace,
    Lines,
    Words,
}

impl MetricKind {
    pub const ALL: [Self; 4] = [Self::Characters, Self::NonWhitespace, Self::Lines, Self::Words];
}

impl TextMetrics {
    #[must_use]
    pub const fn value(&self, kind: MetricKind) -> usize {
        match kind {
            MetricKind::Characters => self.character_count.value(),
            MetricKind::NonWhitespace => self.non_whitespace_character_count.value(),
            MetricKind::Lines => self.line_count.value(),
            MetricKind::Words => self.word_count.value(),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.line_count.is_zero()
    }
}

/// テキストを計測する。
///
/// どの文字列に対しても失敗しない純粋関数。
#[must_use]
pub fn compute_metrics(text: &str) -> TextMetrics {
    if text.is_empty() {
        return TextMetrics::default();
    }

    let mut units = 0usize;
    let mut non_whitespace = 0usize;
    let mut newlines = 0usize;
    for c in text.chars() {
        let width = c.len_utf16();
        units += width;
        if !is_whitespace(c) {
            non_whitespace += width;
        }
        if c == '\n' {
            newlines += 1;
        }
    }

    let words = if is_japanese_bearing(text) { units } else { tokens(text).count() };

    TextMetrics {
        character_count: CharCount::new(units),
        non_whitespace_character_count: CharCount::new(non_whitespace),
        line_count: LineCount::new(newlines + 1),
        word_count: WordCount::new(words),
    }
}
