// crates/domain/src/whitespace.rs
//! 単語の区切りとして扱う空白文字クラス。
//!
//! 正規表現の `\s`（ECMAScript 準拠）と同じ集合を使う。
//! `char::is_whitespace` とは U+0085 (NEL) と U+FEFF (BOM) の扱いが異なる。

/// `c` が空白文字クラスに含まれるか。
#[must_use]
pub const fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// 前後の空白を取り除く。
#[must_use]
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_whitespace)
}

/// 空白の連続で区切られた空でないトークンを返す。
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    trim(text).split(is_whitespace).filter(|token| !token.is_empty())
}
