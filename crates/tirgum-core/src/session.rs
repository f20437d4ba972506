//! One owned translation session: direction, input, output and the request
//! lifecycle behind them.
//!
//! Requests are numbered in issue order. An outcome is applied only if its
//! number is not lower than the last applied one, so a slow response can never
//! overwrite the result of a request issued after it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tirgum_translator::{TranslateError, Translator};
use tirgum_types::{Direction, Phase, SessionView};
use tokio::sync::watch;

use crate::connectivity::Connectivity;
use crate::debounce::Debouncer;

pub const OFFLINE_MESSAGE: &str = "You are offline. Please connect to the internet to translate.";
pub const FAILED_MESSAGE: &str = "Translation failed. Please try again.";
pub const CONNECT_MESSAGE: &str = "Error: Unable to connect to translation service.";

#[derive(Debug)]
enum Outcome {
    Cleared,
    Translated(String),
    Failed(&'static str),
}

struct SessionInner {
    translator: Arc<dyn Translator>,
    connectivity: Arc<dyn Connectivity>,
    last_issued: AtomicU64,
    view: watch::Sender<SessionView>,
}

impl SessionInner {
    fn issue(&self) -> u64 {
        self.last_issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn set_input(&self, text: &str) {
        self.view.send_if_modified(|view| {
            if view.input == text {
                return false;
            }
            view.input = text.to_string();
            true
        });
    }

    fn clear(&self) {
        let seq = self.issue();
        self.apply(seq, "", Outcome::Cleared);
    }

    async fn run(&self, text: String) {
        let seq = self.issue();

        if text.trim().is_empty() {
            self.apply(seq, &text, Outcome::Cleared);
            return;
        }

        let direction = {
            let mut direction = Direction::default();
            self.view.send_modify(|view| {
                view.phase = Phase::Pending;
                direction = view.direction;
            });
            direction
        };

        if !self.connectivity.is_online().await {
            tracing::warn!("Request #{seq} skipped, no connection");
            self.apply(seq, &text, Outcome::Failed(OFFLINE_MESSAGE));
            return;
        }

        tracing::debug!("Request #{seq} {direction}: {} chars", text.chars().count());
        let outcome = match self.translator.translate_direction(&text, direction).await {
            Ok(translation) => Outcome::Translated(translation.text),
            Err(e) => Outcome::Failed(failure_message(seq, &e)),
        };

        self.apply(seq, &text, outcome);
    }

    /// `requested` is the input the outcome was produced for. If the input
    /// moved on since, the result is shown but the phase stays `Pending`.
    fn apply(&self, seq: u64, requested: &str, outcome: Outcome) -> bool {
        let applied = self.view.send_if_modified(|view| {
            if seq < view.applied_seq {
                return false;
            }
            view.applied_seq = seq;

            match &outcome {
                Outcome::Cleared => {
                    view.translated.clear();
                    view.error.clear();
                    view.phase = Phase::Idle;
                }
                Outcome::Translated(text) => {
                    view.translated = text.clone();
                    view.error.clear();
                    view.phase = Phase::Resolved;
                }
                Outcome::Failed(message) => {
                    view.translated.clear();
                    view.error = message.to_string();
                    view.phase = Phase::Failed;
                }
            }
            if view.input != requested && !matches!(outcome, Outcome::Cleared) {
                view.phase = Phase::Pending;
            }
            true
        });

        if !applied {
            tracing::debug!("Discarding stale outcome of request #{seq}: {outcome:?}");
        }
        applied
    }
}

fn failure_message(seq: u64, error: &TranslateError) -> &'static str {
    if error.is_transport() {
        tracing::error!("Request #{seq} could not reach the translation service: {error}");
        CONNECT_MESSAGE
    } else {
        tracing::warn!("Request #{seq} failed: {error}");
        FAILED_MESSAGE
    }
}

/// Translation state shared by the navbar and display panel.
///
/// Cloning is cheap and every clone drives the same session.
#[derive(Clone)]
pub struct TranslationSession {
    inner: Arc<SessionInner>,
    debouncer: Arc<Debouncer<String>>,
}

impl TranslationSession {
    pub fn new(
        translator: Arc<dyn Translator>,
        connectivity: Arc<dyn Connectivity>,
        direction: Direction,
        debounce: Duration,
    ) -> Self {
        let (view, _) = watch::channel(SessionView::new(direction));
        let inner = Arc::new(SessionInner {
            translator,
            connectivity,
            last_issued: AtomicU64::new(0),
            view,
        });

        let debounced = Arc::clone(&inner);
        let debouncer = Debouncer::new(debounce, move |text: String| {
            let inner = Arc::clone(&debounced);
            async move { inner.run(text).await }
        });

        Self {
            inner,
            debouncer: Arc::new(debouncer),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.inner.view.subscribe()
    }

    pub fn view(&self) -> SessionView {
        self.inner.view.borrow().clone()
    }

    pub fn direction(&self) -> Direction {
        self.inner.view.borrow().direction
    }

    /// Keystroke entry point, translation runs after the debounce delay
    pub fn on_input_change(&self, text: impl Into<String>) {
        let text = text.into();
        self.inner.set_input(&text);

        if text.trim().is_empty() {
            self.debouncer.cancel();
            self.inner.clear();
            return;
        }

        self.inner.view.send_modify(|view| view.phase = Phase::Pending);
        self.debouncer.call(text);
    }

    /// Set the input and translate it right away
    pub async fn request(&self, text: impl Into<String>) {
        let text = text.into();
        self.debouncer.cancel();
        self.inner.set_input(&text);
        self.inner.run(text).await;
    }

    pub async fn translate_now(&self) {
        let input = self.inner.view.borrow().input.clone();
        self.request(input).await;
    }

    /// Run a debounced translation that has not fired yet. Returns false if
    /// nothing was pending.
    pub async fn flush(&self) -> bool {
        if !self.debouncer.cancel() {
            return false;
        }
        self.translate_now().await;
        true
    }

    /// Update the direction without translating, returns true if it changed
    pub fn change_direction(&self, direction: Direction) -> bool {
        let changed = self.inner.view.send_if_modified(|view| {
            if view.direction == direction {
                return false;
            }
            view.direction = direction;
            true
        });

        if changed {
            tracing::info!("Direction set to {direction}");
        }
        changed
    }

    /// Change direction, re-translating the current input if it changed
    pub async fn set_direction(&self, direction: Direction) {
        if self.change_direction(direction) {
            self.translate_now().await;
        }
    }

    pub async fn swap_direction(&self) {
        self.set_direction(self.direction().toggled()).await;
    }
}
