// src/cli/mod.rs
mod args;
mod value_enum;

pub use args::{Args, Command, PrefsAction};
pub use value_enum::{CliLanguage, CliOutputFormat, Switch};
