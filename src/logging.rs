// src/logging.rs
use log::LevelFilter;

/// `-v` の回数から既定のログレベルを決める。
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// stderr へのロガーを初期化する。`RUST_LOG` が設定されていればそちらを使う。
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(verbosity)).format_timestamp(None).parse_default_env();
    // テストなどで二重に初期化された場合は先勝ち
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(5), LevelFilter::Debug);
    }
}
