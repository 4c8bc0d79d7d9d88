use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, warn};

use crate::ingestor::CatalogBuilder;
use crate::models::{Category, Profile};
use crate::sources::PlaylistRetriever;

pub type StateSender = broadcast::Sender<LoadState>;
pub type StateReceiver = broadcast::Receiver<LoadState>;

/// What the presentation layer should currently show
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading {
        profile: Profile,
    },
    Error {
        profile: Profile,
        /// Banner text for the user
        message: String,
        detail: String,
    },
    Ready {
        profile: Profile,
        categories: Arc<Vec<Category>>,
    },
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready { .. })
    }

    pub fn categories(&self) -> Option<&[Category]> {
        match self {
            LoadState::Ready { categories, .. } => Some(categories.as_slice()),
            _ => None,
        }
    }
}

#[derive(Default)]
struct LoaderInner {
    state: Option<LoadState>,
    last_request: Option<(String, Profile)>,
    cached: Option<(String, Arc<str>)>,
}

impl LoaderInner {
    fn cached_text(&self, locator: &str) -> Option<Arc<str>> {
        match &self.cached {
            Some((cached_locator, raw)) if cached_locator == locator => Some(Arc::clone(raw)),
            _ => None,
        }
    }
}

/// Application-side holder of the raw playlist and the current catalog
///
/// The engine stays stateless: this loader keeps the fetched text and the
/// last request, and passes both into the engine explicitly on every
/// profile switch. Parsing runs on the blocking pool in chunks; a parse that
/// is superseded by a newer request stops at the next chunk boundary and its
/// partial result is discarded.
#[derive(Clone)]
pub struct CatalogLoader {
    retriever: Arc<dyn PlaylistRetriever>,
    chunk_size: usize,
    inner: Arc<RwLock<LoaderInner>>,
    generation: Arc<AtomicU64>,
    state_tx: StateSender,
}

impl CatalogLoader {
    pub fn new(retriever: Arc<dyn PlaylistRetriever>, chunk_size: usize) -> Self {
        let (state_tx, _) = broadcast::channel(16);
        Self {
            retriever,
            chunk_size,
            inner: Arc::new(RwLock::new(LoaderInner::default())),
            generation: Arc::new(AtomicU64::new(0)),
            state_tx,
        }
    }

    pub fn subscribe(&self) -> StateReceiver {
        self.state_tx.subscribe()
    }

    pub async fn state(&self) -> LoadState {
        let inner = self.inner.read().await;
        inner.state.clone().unwrap_or(LoadState::Idle)
    }

    /// Load `locator` for `profile`, fetching only if the text is not cached
    pub async fn load(&self, locator: &str, profile: Profile) -> LoadState {
        let generation = self.begin(locator, profile).await;

        let cached = {
            let inner = self.inner.read().await;
            inner.cached_text(locator)
        };

        let raw = match cached {
            Some(raw) => {
                debug!("Reusing cached playlist text for profile '{}'", profile);
                raw
            }
            None => match self.retriever.fetch(locator).await {
                Ok(text) => {
                    let raw: Arc<str> = Arc::from(text);
                    let mut inner = self.inner.write().await;
                    if self.is_current(generation) {
                        inner.cached = Some((locator.to_string(), Arc::clone(&raw)));
                    }
                    raw
                }
                Err(e) => {
                    warn!("Playlist retrieval via {} failed: {}", self.retriever.name(), e);
                    let state = LoadState::Error {
                        profile,
                        message: e.user_message().to_string(),
                        detail: e.to_string(),
                    };
                    return self.publish(generation, state).await;
                }
            },
        };

        self.parse(generation, raw, profile).await
    }

    /// Re-scope the current playlist to another profile without re-fetching
    ///
    /// With nothing loaded yet the result is an empty catalog.
    pub async fn switch_profile(&self, profile: Profile) -> LoadState {
        let locator = {
            let inner = self.inner.read().await;
            inner.last_request.as_ref().map(|(locator, _)| locator.clone())
        };

        match locator {
            Some(locator) => self.load(&locator, profile).await,
            None => {
                let mut inner = self.inner.write().await;
                self.next_generation();
                let state = LoadState::Ready {
                    profile,
                    categories: Arc::new(Vec::new()),
                };
                self.store(&mut inner, state.clone());
                state
            }
        }
    }

    /// Repeat the last request with the same locator and profile
    pub async fn retry(&self) -> LoadState {
        let last = {
            let inner = self.inner.read().await;
            inner.last_request.clone()
        };

        match last {
            Some((locator, profile)) => {
                info!("Retrying catalog load for profile '{}'", profile);
                self.load(&locator, profile).await
            }
            None => self.state().await,
        }
    }

    /// Drop the cached playlist text so the next load fetches again
    pub async fn invalidate(&self) {
        let mut inner = self.inner.write().await;
        inner.cached = None;
    }

    async fn begin(&self, locator: &str, profile: Profile) -> u64 {
        let mut inner = self.inner.write().await;
        let generation = self.next_generation();
        inner.last_request = Some((locator.to_string(), profile));
        self.store(&mut inner, LoadState::Loading { profile });
        generation
    }

    /// Only called with the write guard held, so generation changes are
    /// ordered with state stores
    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::Acquire) == generation
    }

    fn store(&self, inner: &mut LoaderInner, state: LoadState) {
        inner.state = Some(state.clone());
        let _ = self.state_tx.send(state);
    }

    async fn parse(&self, generation: u64, raw: Arc<str>, profile: Profile) -> LoadState {
        let chunk_size = self.chunk_size;
        let current = Arc::clone(&self.generation);

        let result = tokio::task::spawn_blocking(move || {
            let mut builder = CatalogBuilder::new(&raw, profile);
            loop {
                if current.load(Ordering::Acquire) != generation {
                    return None;
                }
                if builder.step(chunk_size).finished {
                    break;
                }
            }
            Some(builder.finish())
        })
        .await;

        match result {
            Ok(Some(categories)) => {
                let state = LoadState::Ready {
                    profile,
                    categories: Arc::new(categories),
                };
                self.publish(generation, state).await
            }
            Ok(None) => {
                debug!("Abandoned superseded parse for profile '{}'", profile);
                self.state().await
            }
            Err(e) => {
                let state = LoadState::Error {
                    profile,
                    message: "Failed to build catalog".to_string(),
                    detail: e.to_string(),
                };
                self.publish(generation, state).await
            }
        }
    }

    /// Record and broadcast `state` unless a newer request has started
    async fn publish(&self, generation: u64, state: LoadState) -> LoadState {
        let mut inner = self.inner.write().await;
        if !self.is_current(generation) {
            debug!("Discarding state from superseded request");
            return inner.state.clone().unwrap_or(LoadState::Idle);
        }

        self.store(&mut inner, state.clone());
        state
    }
}
