// crates/domain/src/preferences.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use word_counter_shared_kernel::{DomainError, DomainResult};

use crate::language::Language;

/// ユーザー設定。保存されるのはこの 2 項目のみ。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    /// テキスト選択時にツールチップを自動表示するか
    pub auto_mode: bool,
    /// 表示言語
    pub language: Language,
}

/// 設定キー。保存形式でのキー名は `autoMode` / `language`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    AutoMode,
    Language,
}

impl PreferenceKey {
    pub const ALL: [Self; 2] = [Self::AutoMode, Self::Language];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AutoMode => "autoMode",
            Self::Language => "language",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "autoMode" | "auto_mode" | "auto" => Ok(Self::AutoMode),
            "language" | "lang" => Ok(Self::Language),
            other => Err(DomainError::UnknownPreferenceKey { key: other.to_string() }),
        }
    }
}

/// 1 項目分の設定変更。購読者へはこの単位で通知する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "camelCase")]
pub enum PreferenceChange {
    AutoMode(bool),
    Language(Language),
}

impl PreferenceChange {
    #[must_use]
    pub const fn key(&self) -> PreferenceKey {
        match self {
            Self::AutoMode(_) => PreferenceKey::AutoMode,
            Self::Language(_) => PreferenceKey::Language,
        }
    }
}

impl Preferences {
    /// 変更を適用する。値が変わった場合に `true`。
    pub fn apply(&mut self, change: PreferenceChange) -> bool {
        let changed = match change {
            PreferenceChange::AutoMode(on) => std::mem::replace(&mut self.auto_mode, on) != on,
            PreferenceChange::Language(lang) => std::mem::replace(&mut self.language, lang) != lang,
        };
        if changed {
            log::debug!("preference {} changed", change.key());
        }
        changed
    }

    /// `other` との差分を変更の列として返す。
    #[must_use]
    pub fn diff(&self, other: &Self) -> Vec<PreferenceChange> {
        let mut changes = Vec::new();
        if self.auto_mode != other.auto_mode {
            changes.push(PreferenceChange::AutoMode(other.auto_mode));
        }
        if self.language != other.language {
            changes.push(PreferenceChange::Language(other.language));
        }
        changes
    }
}

/// `on` / `off` 形式のスイッチ値を解釈する。
pub fn parse_switch(value: &str) -> DomainResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Ok(true),
        "off" | "false" | "0" | "no" => Ok(false),
        _ => Err(DomainError::InvalidSwitch { value: value.to_string() }),
    }
}
