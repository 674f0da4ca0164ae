//! # Domain
//!
//! テキスト計測のドメインロジック。
//!
//! - [`metrics`]: 文字数/空白なし文字数/行数/単語数の計算
//! - [`script`]: 日本語を含むテキストの判定
//! - [`whitespace`]: 空白文字クラス
//! - [`labels`]: 表示ラベルと表示行
//! - [`placement`]: ツールチップの配置計算
//! - [`language`] / [`preferences`]: 表示言語と設定値

#![allow(clippy::multiple_crate_versions)]

pub mod labels;
pub mod language;
pub mod metrics;
pub mod placement;
pub mod preferences;
pub mod script;
pub mod whitespace;

pub use labels::{DisplayRow, PanelKind, display_rows};
pub use language::Language;
pub use metrics::{MetricKind, TextMetrics, compute_metrics};
pub use placement::{Anchor, Placement, SelectionRect, place_tooltip};
pub use preferences::{PreferenceChange, PreferenceKey, Preferences};
