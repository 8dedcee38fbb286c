//! Host loop for the battery runtime card.
//!
//! Wires together everything outside the pure estimator:
//! - States refresh timer (`update_interval`)
//! - States file watcher (external push)
//! - Config file watcher (live reload on change)
//! - Ctrl-C (shutdown)
//!
//! Events are handled one at a time, so evaluations never overlap.

use card_config::{default_path, load as load_config, EntitySet, FileWatcher, HostConfig};
use card_core::{event::Message, DerivedMetrics, Result, StateTable};
use card_estimator::{capture, evaluate};
use card_source::{spawn_refresh, StatesFile};
use card_theme::Theme;
use card_widgets::RuntimeCard;
use chrono::Local;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Run the card with the config at the default path until Ctrl-C.
pub async fn run() -> Result<()> {
    run_with(default_path()).await
}

/// Run the card with the config at `config_path` until Ctrl-C.
///
/// Fails before any evaluation if the config cannot be loaded or lacks a
/// required entity.
pub async fn run_with(config_path: PathBuf) -> Result<()> {
    let config = load_config(&config_path)?;
    let mut card = Card::new(config_path.clone(), config)?;
    info!(
        "Card '{}' ready (states: {})",
        card.config.card.name,
        card.source.path().display()
    );

    card.refresh().await;
    card.present();

    let mut tasks = Tasks::spawn(&card);
    let (_config_watcher, mut config_rx) = FileWatcher::spawn(&config_path);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        let message = tokio::select! {
            Some(table) = recv_or_pending(&mut tasks.refresh) => Message::StatesRefreshed(table),
            Some(()) = recv_or_pending(&mut tasks.push) => Message::StatesPushed,
            Some(()) = config_rx.recv() => Message::ConfigReloaded,
            _ = &mut shutdown => Message::Shutdown,
        };

        match card.update(message).await {
            Control::Continue => {}
            Control::Respawn => tasks = Tasks::spawn(&card),
            Control::Exit => break,
        }
    }

    info!("Shutting down");
    Ok(())
}

async fn recv_or_pending<T>(rx: &mut Option<mpsc::Receiver<T>>) -> Option<T> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

/// Background producers tied to the current config. Dropping the refresh
/// receiver stops the refresh task; dropping the watcher aborts it.
struct Tasks {
    refresh: Option<mpsc::Receiver<StateTable>>,
    push:    Option<mpsc::Receiver<()>>,
    _watcher: Option<FileWatcher>,
}

impl Tasks {
    fn spawn(card: &Card) -> Self {
        let refresh = card
            .config
            .card
            .refresh_interval()
            .map(|interval| spawn_refresh(card.source.clone(), interval));

        let (watcher, push) = if card.config.source.watch {
            let (w, rx) = FileWatcher::spawn(card.source.path());
            (Some(w), Some(rx))
        } else {
            (None, None)
        };

        Self { refresh, push, _watcher: watcher }
    }
}

// ── State ─────────────────────────────────────────────────────────────────────

/// What the loop should do after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// Config changed; background tasks must be restarted.
    Respawn,
    Exit,
}

/// One configured card and the result of its latest evaluation.
#[derive(Debug)]
pub struct Card {
    config_path: PathBuf,
    config:      HostConfig,
    entities:    EntitySet,
    theme:       Theme,
    source:      StatesFile,
    widget:      RuntimeCard,
    metrics:     Option<DerivedMetrics>,
}

impl Card {
    /// Validate `config` and set up the card. No evaluation happens here.
    pub fn new(config_path: PathBuf, config: HostConfig) -> Result<Self> {
        let entities = config.card.validate()?;
        let source = StatesFile::new(states_path(&config_path, &config));

        Ok(Self {
            theme: Theme::from_config(&config.theme),
            config_path,
            config,
            entities,
            source,
            widget: RuntimeCard::new(),
            metrics: None,
        })
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Latest completed evaluation, if any.
    pub fn metrics(&self) -> Option<&DerivedMetrics> {
        self.metrics.as_ref()
    }

    /// Evaluate `table` and replace the stored metrics.
    pub fn apply(&mut self, table: &StateTable) -> &DerivedMetrics {
        let snapshot = capture(table, &self.entities, Local::now());
        let metrics = evaluate(&snapshot, &self.config.card);
        debug!(
            mode = ?metrics.mode(),
            runtime_hours = metrics.runtime_hours,
            charge_time_hours = metrics.charge_time_hours,
            "metrics updated"
        );
        self.metrics.insert(metrics)
    }

    /// Fetch from the source and evaluate. An unreadable source evaluates as
    /// an empty table, so the card shows zeroed values and warnings.
    pub async fn refresh(&mut self) -> &DerivedMetrics {
        let table = match self.source.fetch().await {
            Ok(table) => table,
            Err(e) => {
                warn!("{e}");
                StateTable::new()
            }
        };
        self.apply(&table)
    }

    /// Re-read the config file. On failure the current config stays active.
    pub fn reload(&mut self) -> Result<()> {
        let config = load_config(&self.config_path)?;
        let entities = config.card.validate()?;

        self.source = StatesFile::new(states_path(&self.config_path, &config));
        self.theme = Theme::from_config(&config.theme);
        self.entities = entities;
        self.config = config;
        Ok(())
    }

    /// Rendered card text for the latest evaluation.
    pub fn render(&self) -> Option<String> {
        let metrics = self.metrics.as_ref()?;
        let view = self.widget.view(metrics, &self.config.card, &self.theme);
        Some(view.render(&self.theme))
    }

    fn present(&self) {
        if let Some(text) = self.render() {
            println!("{text}\n");
        }
    }

    // ── Update ────────────────────────────────────────────────────────────────

    pub async fn update(&mut self, message: Message) -> Control {
        match message {
            Message::StatesRefreshed(table) => {
                self.apply(&table);
                self.present();
                Control::Continue
            }
            Message::StatesPushed => {
                self.refresh().await;
                self.present();
                Control::Continue
            }
            Message::ConfigReloaded => match self.reload() {
                Ok(()) => {
                    info!("Config reloaded");
                    self.refresh().await;
                    self.present();
                    Control::Respawn
                }
                Err(e) => {
                    warn!("Config reload failed: {e}");
                    Control::Continue
                }
            },
            Message::Shutdown => Control::Exit,
        }
    }
}

fn states_path(config_path: &Path, config: &HostConfig) -> PathBuf {
    config.source.states_path(config_path.parent())
}
