// crates/infra/src/paths.rs
use std::path::PathBuf;

pub const APP_DIR: &str = "word_counter";
pub const PREFERENCES_FILE: &str = "preferences.json";

/// `<config_dir>/word_counter/preferences.json`
///
/// 設定ディレクトリが取得できない環境ではカレントディレクトリに置く。
pub fn default_preferences_path() -> PathBuf {
    dirs::config_dir().map_or_else(
        || PathBuf::from(PREFERENCES_FILE),
        |dir| dir.join(APP_DIR).join(PREFERENCES_FILE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_ends_with_preferences_file() {
        let path = default_preferences_path();
        assert!(path.ends_with(PREFERENCES_FILE));
    }
}
