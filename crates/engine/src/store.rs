//! Navigation menu store.
//!
//! [`NavMenuStore`] maps "the services menu is visible" to "the categories to
//! render". It is owned by the navbar for as long as the navbar is mounted:
//!
//! - `open` starts a fetch when the cache is empty or the last fetch failed
//! - at most one fetch is in flight; further opens while loading are no-ops
//! - every fetch carries a generation number and its result is applied only
//!   if the store is still alive and no newer fetch has been issued
//! - the highlighted category is reset only when the cache changes
//!
//! State changes are published as [`NavMenuSnapshot`]s on a
//! `tokio::sync::watch` channel. Dropping the store (or calling
//! [`NavMenuStore::teardown`]) aborts the pending fetch and freezes the state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use sitenav_api::FetchError;
use sitenav_types::MenuCategory;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::source::ContentSource;
use crate::transform::transform_categories;

/// Message surfaced to users when the service list cannot be loaded.
pub const SERVICES_ERROR_MESSAGE: &str = "Could not load services.";

/// Load lifecycle of the menu cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Read-only view of the store handed to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NavMenuSnapshot {
    pub phase: LoadPhase,
    pub loading: bool,
    pub error: Option<String>,
    pub categories: Arc<Vec<MenuCategory>>,
    pub highlighted: Option<MenuCategory>,
    /// Whether the menu is currently open.
    pub visible: bool,
}

/// Mutable state guarded by [`Shared::state`].
#[derive(Debug, Default)]
struct MenuState {
    phase: LoadPhase,
    error: Option<String>,
    categories: Arc<Vec<MenuCategory>>,
    highlighted_id: Option<String>,
    visible: bool,
    /// Generation of the most recently issued fetch.
    generation: u64,
    /// Cleared on teardown; nothing is applied afterwards.
    alive: bool,
}

impl MenuState {
    fn new() -> Self {
        Self {
            alive: true,
            ..Self::default()
        }
    }

    fn needs_fetch(&self) -> bool {
        self.phase != LoadPhase::Loading && (self.categories.is_empty() || self.phase == LoadPhase::Error)
    }

    /// Enter `Loading` and return the generation of the new fetch.
    fn begin_fetch(&mut self) -> u64 {
        self.phase = LoadPhase::Loading;
        self.error = None;
        self.generation += 1;
        self.generation
    }

    fn contains(&self, id: &str) -> bool {
        self.categories.iter().any(|category| category.id == id)
    }

    fn highlight_first_if_unset(&mut self) {
        if self.highlighted_id.is_none() {
            self.highlighted_id = self.categories.first().map(|category| category.id.clone());
        }
    }

    fn apply_categories(&mut self, categories: Vec<MenuCategory>) {
        self.phase = LoadPhase::Ready;
        self.error = None;
        self.categories = Arc::new(categories);
        let keep = self.highlighted_id.as_deref().is_some_and(|id| self.contains(id));
        if !keep {
            self.highlighted_id = self.categories.first().map(|category| category.id.clone());
        }
    }

    fn apply_failure(&mut self) {
        self.phase = LoadPhase::Error;
        self.error = Some(SERVICES_ERROR_MESSAGE.to_string());
        self.categories = Arc::new(Vec::new());
        self.highlighted_id = None;
    }

    fn snapshot(&self) -> NavMenuSnapshot {
        let highlighted = self
            .highlighted_id
            .as_deref()
            .and_then(|id| self.categories.iter().find(|category| category.id == id))
            .cloned();
        NavMenuSnapshot {
            phase: self.phase,
            loading: self.phase == LoadPhase::Loading,
            error: self.error.clone(),
            categories: Arc::clone(&self.categories),
            highlighted,
            visible: self.visible,
        }
    }
}

/// State shared between the store and its fetch task.
struct Shared {
    state: Mutex<MenuState>,
    notifier: watch::Sender<NavMenuSnapshot>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, MenuState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &MenuState) {
        self.notifier.send_replace(state.snapshot());
    }

    /// Apply a finished fetch. Returns `false` when the result was discarded.
    fn complete_fetch(&self, generation: u64, outcome: Result<Vec<MenuCategory>, FetchError>) -> bool {
        let mut state = self.lock();
        if !state.alive || generation != state.generation {
            debug!(generation, latest = state.generation, alive = state.alive, "discarding stale menu fetch");
            return false;
        }

        match outcome {
            Ok(categories) => {
                debug!(generation, count = categories.len(), "menu categories loaded");
                state.apply_categories(categories);
            }
            Err(error) => {
                warn!(generation, status = ?error.status(), %error, "failed to load menu categories");
                state.apply_failure();
            }
        }
        self.publish(&state);
        true
    }
}

/// Navigation menu data store owned by a single navbar instance.
pub struct NavMenuStore {
    source: Arc<dyn ContentSource>,
    shared: Arc<Shared>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl NavMenuStore {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        let state = MenuState::new();
        let (notifier, _) = watch::channel(state.snapshot());
        Self {
            source,
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                notifier,
            }),
            task: Mutex::new(None),
        }
    }

    /// The menu became visible.
    ///
    /// Starts a fetch when the cache is empty or the last fetch failed and no
    /// fetch is pending. Otherwise highlights the first category if nothing is
    /// highlighted yet.
    pub fn open(&self) {
        let generation = {
            let mut state = self.shared.lock();
            if !state.alive {
                return;
            }
            state.visible = true;
            let generation = if state.needs_fetch() {
                Some(state.begin_fetch())
            } else {
                if state.phase != LoadPhase::Loading {
                    state.highlight_first_if_unset();
                }
                None
            };
            self.shared.publish(&state);
            generation
        };

        if let Some(generation) = generation {
            self.spawn_fetch(generation);
        }
    }

    /// The menu became hidden. The cache and highlight are kept.
    pub fn close(&self) {
        let mut state = self.shared.lock();
        if !state.alive || !state.visible {
            return;
        }
        state.visible = false;
        self.shared.publish(&state);
    }

    /// Highlight the category with `category_id`.
    ///
    /// Returns `false`, leaving the highlight unchanged, when the id is not in
    /// the current cache.
    pub fn highlight(&self, category_id: &str) -> bool {
        let mut state = self.shared.lock();
        if !state.alive || !state.contains(category_id) {
            return false;
        }
        if state.highlighted_id.as_deref() != Some(category_id) {
            state.highlighted_id = Some(category_id.to_string());
            self.shared.publish(&state);
        }
        true
    }

    /// Current state of the store.
    pub fn snapshot(&self) -> NavMenuSnapshot {
        self.shared.lock().snapshot()
    }

    /// Subscribe to snapshots published after every state change.
    ///
    /// Do not hold a borrowed snapshot while calling a mutator; clone it out.
    pub fn subscribe(&self) -> watch::Receiver<NavMenuSnapshot> {
        self.shared.notifier.subscribe()
    }

    /// Unmount the store: abort the pending fetch and freeze the state.
    pub fn teardown(&self) {
        {
            let mut state = self.shared.lock();
            if !state.alive {
                return;
            }
            state.alive = false;
        }
        if let Some(task) = self.task.lock().unwrap_or_else(PoisonError::into_inner).take() {
            task.abort();
        }
        debug!("menu store torn down");
    }

    fn spawn_fetch(&self, generation: u64) {
        let source = Arc::clone(&self.source);
        let shared = Arc::clone(&self.shared);
        let fetch = async move {
            debug!(generation, "fetching menu categories");
            let outcome = source
                .fetch_services()
                .await
                .map(|payload| transform_categories(payload, source.asset_origin()));
            shared.complete_fetch(generation, outcome);
        };

        match Handle::try_current() {
            Ok(handle) => {
                let task = handle.spawn(fetch);
                *self.task.lock().unwrap_or_else(PoisonError::into_inner) = Some(task);
            }
            Err(error) => {
                let outcome = Err(FetchError::transport(format!("no async runtime available: {error}")));
                self.shared.complete_fetch(generation, outcome);
            }
        }
    }
}

impl Drop for NavMenuStore {
    fn drop(&mut self) {
        self.teardown();
    }
}
