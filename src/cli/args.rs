// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};
use word_counter_domain::SelectionRect;

use super::value_enum::{CliLanguage, CliOutputFormat, Switch};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "word_counter",
    version = crate::VERSION,
    about = "文字数/空白なし文字数/行数/単語数のカウンター",
)]
pub struct Args {
    /// 設定ファイルのパス（既定: <config_dir>/word_counter/preferences.json）
    #[arg(long, global = true, env = "WORD_COUNTER_PREFS", value_hint = ValueHint::FilePath)]
    pub prefs: Option<PathBuf>,

    /// ログを詳しくする（-v: info, -vv: debug）。RUST_LOG が優先されます。
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// テキストを計測して表示（TEXT 省略時は標準入力）
    Count {
        /// 計測するテキスト（複数指定は空白で連結）
        text: Vec<String>,

        /// 出力フォーマット
        #[arg(long, value_enum, default_value = "table")]
        format: CliOutputFormat,

        /// 表示言語（省略時は保存された設定）
        #[arg(long, value_enum)]
        lang: Option<CliLanguage>,
    },

    /// パネルモード：標準入力を 1 行読むごとに累積テキストを再計測
    ///
    /// `:lang [ja|en]` で言語切替、`:auto` で自動表示の切替、`:clear` で入力を消去。
    Live {
        #[arg(long, value_enum, default_value = "table")]
        format: CliOutputFormat,

        /// 開始時の表示言語（保存された設定は変更しない）
        #[arg(long, value_enum)]
        lang: Option<CliLanguage>,
    },

    /// ツールチップモード：選択テキストと外接矩形から表示内容と位置を出力
    Tooltip {
        /// 選択範囲の外接矩形 left,top,width,height
        #[arg(long, allow_hyphen_values = true)]
        rect: SelectionRect,

        /// 選択テキスト（省略時は標準入力）
        text: Vec<String>,

        #[arg(long, value_enum, default_value = "table")]
        format: CliOutputFormat,
    },

    /// 設定の表示・変更
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum PrefsAction {
    /// 現在の設定を表示
    Show {
        #[arg(long, value_enum, default_value = "table")]
        format: CliOutputFormat,
    },
    /// 選択時の自動表示を切り替え
    Auto { value: Switch },
    /// 表示言語を設定
    Lang { value: CliLanguage },
    /// 設定ファイルの変更を監視して表示
    Watch {
        /// デバウンス間隔（ミリ秒）
        #[arg(long, default_value_t = 200)]
        interval_ms: u64,
    },
}
