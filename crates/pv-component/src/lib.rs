//! # pv-component
//!
//! The post list view: owns the display sequence, triggers exactly one fetch
//! per mount, renders the current state on demand.
//!
//! The fetch runs as a spawned task and never blocks rendering. Its only
//! failure surface is a single diagnostic log event; the rendered HTML shows
//! whatever the state held before the attempt.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use askama::Template;
use pv_core::models::{DisplayState, Phase};
use pv_core::traits::PostSource;
use pv_ui::PostListTemplate;
use tokio::task::JoinHandle;
use tracing::error;

/// A mounted post list.
///
/// Lifecycle: [`PostListView::mount`] seeds the placeholder state and starts
/// the fetch effect; [`PostListView::render`] may be called any number of
/// times; [`PostListView::unmount`] consumes the view without cancelling an
/// in-flight fetch.
pub struct PostListView {
    state: Arc<RwLock<DisplayState>>,
    source: Arc<dyn PostSource>,
    effect_started: AtomicBool,
    effect: Mutex<Option<JoinHandle<()>>>,
}

impl PostListView {
    /// Attaches the view: seeds the sentinel state and starts the one-shot
    /// fetch effect. Must be called from within a tokio runtime.
    pub fn mount(source: Arc<dyn PostSource>) -> Self {
        let view = Self {
            state: Arc::new(RwLock::new(DisplayState::new())),
            source,
            effect_started: AtomicBool::new(false),
            effect: Mutex::new(None),
        };
        view.run_mount_effect();
        view
    }

    /// Spawns the fetch task.
    ///
    /// Re-offered on every render, but the started flag keeps it one-shot:
    /// however many times the view re-renders, exactly one request goes out
    /// per mount.
    fn run_mount_effect(&self) {
        if self.effect_started.swap(true, Ordering::SeqCst) {
            return;
        }

        // The task holds only a weak handle to the state. If the view is
        // unmounted before the fetch resolves, the upgrade fails and the
        // late result is dropped instead of written into dead state.
        let state = Arc::downgrade(&self.state);
        let source = Arc::clone(&self.source);
        let handle = tokio::spawn(async move {
            match source.fetch_posts().await {
                Ok(posts) => {
                    if let Some(state) = state.upgrade() {
                        // Single write under the lock: the renderer sees the
                        // old sequence or the new one, never a mix.
                        state
                            .write()
                            .expect("display state lock poisoned")
                            .replace(posts);
                    }
                }
                Err(err) => error!(%err, "error fetching data"),
            }
        });
        *self.effect.lock().expect("effect handle lock poisoned") = Some(handle);
    }

    /// Renders the current state to HTML. Never blocks on the fetch.
    pub fn render(&self) -> String {
        self.run_mount_effect();
        let state = self.state.read().expect("display state lock poisoned");
        PostListTemplate { posts: state.posts() }
            .render()
            .expect("template rendering failed")
    }

    /// Whether the view has moved past the placeholder.
    pub fn phase(&self) -> Phase {
        self.state
            .read()
            .expect("display state lock poisoned")
            .phase()
    }

    /// Waits for the mount effect to settle, success or failure.
    ///
    /// Host plumbing only: the view itself never blocks on this, and calling
    /// it is optional. A second call returns immediately.
    pub async fn settled(&self) {
        let handle = self.effect.lock().expect("effect handle lock poisoned").take();
        if let Some(handle) = handle {
            // A panicked effect task has nothing for us to do here; the
            // state simply stays as it was.
            let _ = handle.await;
        }
    }

    /// Detaches the view.
    ///
    /// The in-flight fetch, if any, is NOT cancelled; its eventual
    /// resolution is dropped by the weak-state guard. The handle is returned
    /// so hosts can observe that completion.
    pub fn unmount(self) -> Option<JoinHandle<()>> {
        self.effect.lock().expect("effect handle lock poisoned").take()
    }
}
