// crates/domain/src/script.rs
use std::ops::RangeInclusive;

/// ひらがな
pub const HIRAGANA: RangeInclusive<char> = '\u{3040}'..='\u{309F}';
/// カタカナ
pub const KATAKANA: RangeInclusive<char> = '\u{30A0}'..='\u{30FF}';
/// CJK 統合漢字（U+9FAF までに制限）
pub const CJK_IDEOGRAPHS: RangeInclusive<char> = '\u{4E00}'..='\u{9FAF}';

/// 日本語の文字（ひらがな・カタカナ・漢字）か。
#[must_use]
pub fn is_japanese_char(c: char) -> bool {
    HIRAGANA.contains(&c) || KATAKANA.contains(&c) || CJK_IDEOGRAPHS.contains(&c)
}

/// 日本語の文字を 1 つでも含むテキストか。
///
/// 含む場合、単語数は文字数と同じとして数える。
#[must_use]
pub fn is_japanese_bearing(text: &str) -> bool {
    text.chars().any(is_japanese_char)
}
