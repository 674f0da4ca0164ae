// src/config.rs
use std::path::PathBuf;

use word_counter_domain::Language;
use word_counter_infra::paths::default_preferences_path;

use crate::cli::{Args, Command, PrefsAction};
use crate::presentation::OutputFormat;

/// Settings resolved from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub prefs_path: PathBuf,
    pub verbosity: u8,
    pub format: OutputFormat,
    /// `--lang` が指定された場合の表示言語。保存された設定より優先し、保存はしない。
    pub language: Option<Language>,
}

impl From<&Args> for AppConfig {
    fn from(args: &Args) -> Self {
        let (format, language): (OutputFormat, Option<Language>) = match &args.command {
            Command::Count { format, lang, .. } | Command::Live { format, lang } => {
                ((*format).into(), lang.map(Into::into))
            }
            Command::Tooltip { format, .. } | Command::Prefs { action: PrefsAction::Show { format } } => {
                ((*format).into(), None)
            }
            Command::Prefs { .. } => (OutputFormat::Table, None),
        };

        Self {
            prefs_path: args.prefs.clone().unwrap_or_else(default_preferences_path),
            verbosity: args.verbose,
            format,
            language,
        }
    }
}
