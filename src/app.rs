// src/app.rs
use std::io::{self, BufRead, Read, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use word_counter_domain::preferences::parse_switch;
use word_counter_domain::{Language, PanelKind, PreferenceChange, SelectionRect, compute_metrics, display_rows};
use word_counter_infra::JsonFilePreferenceStore;
use word_counter_infra::watch::WatchService;
use word_counter_ports::input::InputEvent;
use word_counter_ports::preferences::{PreferenceStore, load_preferences};
use word_counter_ports::render::{PanelView, Renderer};
use word_counter_shared_kernel::PresentationError;
use word_counter_usecase::{PanelController, TooltipController, TooltipOutcome};

use crate::cli::{Command, PrefsAction};
use crate::config::AppConfig;
use crate::presentation::{OutputFormat, TerminalRenderer, format_metrics, format_preferences};

pub fn run(command: Command, config: &AppConfig) -> Result<()> {
    log::debug!("preferences file: {}", config.prefs_path.display());
    let store = JsonFilePreferenceStore::new(&config.prefs_path);

    match command {
        Command::Count { text, .. } => count(&store, text, config.format, config.language),
        Command::Live { .. } => live(&store, config.format, config.language),
        Command::Tooltip { rect, text, .. } => tooltip(&store, rect, text, config.format),
        Command::Prefs { action } => prefs(&store, action, config.format),
    }
}

fn count(store: &dyn PreferenceStore, text: Vec<String>, format: OutputFormat, lang: Option<Language>) -> Result<()> {
    let text = read_text(text)?;
    let metrics = compute_metrics(&text);
    log::debug!("metrics: {metrics:?}");

    let stdout = io::stdout();
    if let Some(serialized) = format_metrics(&metrics, format)? {
        stdout.lock().write_all(serialized.as_bytes())?;
        return Ok(());
    }

    let language = lang.unwrap_or_else(|| load_preferences(store).language);
    let view = PanelView { language, rows: display_rows(&metrics, language, PanelKind::Panel), placement: None };
    TerminalRenderer::new(stdout.lock(), format).show(&view)?;
    Ok(())
}

fn live(store: &dyn PreferenceStore, format: OutputFormat, lang: Option<Language>) -> Result<()> {
    let renderer = TerminalRenderer::new(io::stdout(), format);
    let mut panel = PanelController::new(store, &renderer);
    if let Some(language) = lang {
        panel = panel.with_language(language);
    }
    panel.set_text(String::new())?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line).context("reading stdin")? == 0 {
            break;
        }
        panel.sync()?;

        if let Some(command) = line.trim_end_matches(['\n', '\r']).strip_prefix(':') {
            if command == "clear" {
                panel.set_text(String::new())?;
            } else if let Err(err) = live_command(&mut panel, command) {
                log::warn!("{err:#}");
            }
            continue;
        }

        let text = format!("{}{line}", panel.text());
        panel.set_text(text)?;
    }
    Ok(())
}

fn live_command(panel: &mut PanelController<'_>, command: &str) -> Result<()> {
    let (name, arg) = command.split_once(' ').map_or((command, ""), |(n, a)| (n, a.trim()));
    match (name, arg) {
        ("lang", "") => {
            let language = panel.toggle_language()?;
            log::info!("language: {language}");
        }
        ("lang", code) => panel.set_language(code.parse()?)?,
        ("auto", "") => {
            let enabled = panel.toggle_auto_mode()?;
            log::info!("auto mode: {enabled}");
        }
        ("auto", value) => panel.set_auto_mode(parse_switch(value)?)?,
        _ => return Err(PresentationError::UnknownCommand { command: format!(":{command}") }.into()),
    }
    Ok(())
}

fn tooltip(store: &dyn PreferenceStore, rect: SelectionRect, text: Vec<String>, format: OutputFormat) -> Result<()> {
    let text = read_text(text)?;
    let renderer = TerminalRenderer::new(io::stdout(), format);
    let mut controller = TooltipController::new(load_preferences(store), &renderer);

    match controller.handle(&InputEvent::Selection { text, rect })? {
        TooltipOutcome::Shown(_) => {}
        TooltipOutcome::Hidden => log::info!("empty selection, tooltip hidden"),
        TooltipOutcome::Ignored if !controller.settings().auto_mode => {
            log::info!("auto mode is off, tooltip not shown");
        }
        TooltipOutcome::Ignored => log::info!("selection rectangle is empty, tooltip not shown"),
    }
    Ok(())
}

fn prefs(store: &JsonFilePreferenceStore, action: PrefsAction, format: OutputFormat) -> Result<()> {
    match action {
        PrefsAction::Show { .. } => {}
        PrefsAction::Auto { value } => store.set(PreferenceChange::AutoMode(value.into()))?,
        PrefsAction::Lang { value } => store.set(PreferenceChange::Language(value.into()))?,
        PrefsAction::Watch { interval_ms } => {
            return WatchService::follow(store, Duration::from_millis(interval_ms), |change| {
                let mut out = io::stdout().lock();
                writeln!(out, "{}", serde_json::to_string(&change)?)?;
                out.flush()?;
                Ok(())
            })
            .with_context(|| format!("watching {}", store.path().display()));
        }
    }

    let current = store.load().with_context(|| format!("reading {}", store.path().display()))?;
    io::stdout().lock().write_all(format_preferences(&current, format)?.as_bytes())?;
    Ok(())
}

/// 引数があれば空白で連結、なければ標準入力。不正な UTF-8 は U+FFFD に置き換える。
fn read_text(args: Vec<String>) -> Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes).context("reading stdin")?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
