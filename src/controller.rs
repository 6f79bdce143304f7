//! Chat widget controller: the widget operations applied to a live store.
//!
//! DESIGN
//! ======
//! `ChatController` owns no state itself. It mutates a `WidgetStore` (a
//! Leptos signal in the browser, an `Rc<RefCell<_>>` headless) and calls an
//! `AnswerService` for the one network round trip per submission.
//!
//! LIFETIME
//! ========
//! Every store carries a liveness flag cleared on unmount. A reply that
//! arrives after unmount finds the store dead and is dropped without
//! writing anything. The in-flight flag is reset by a drop guard, so it is
//! cleared on every exit path of `submit`, including the future itself
//! being dropped.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::answer::AnswerService;
use crate::net::types::{AskError, FailureKind};
use crate::state::widget::WidgetState;
use crate::util::keys::KeyPress;

// =============================================================================
// STORES
// =============================================================================

/// Shared handle to one widget instance's state.
///
/// Both accessors return `None` once the widget has been unmounted.
pub trait WidgetStore: Clone + 'static {
    fn mutate<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R>;
    fn read<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> Option<R>;
    fn is_alive(&self) -> bool;
    fn unmount(&self);
}

/// Store backed by a Leptos signal, used by the mounted component.
#[derive(Clone, Debug)]
pub struct SignalStore {
    state: RwSignal<WidgetState>,
    alive: Arc<AtomicBool>,
}

impl SignalStore {
    pub fn new(state: RwSignal<WidgetState>) -> Self {
        Self { state, alive: Arc::new(AtomicBool::new(true)) }
    }
}

impl WidgetStore for SignalStore {
    fn mutate<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R> {
        if !self.is_alive() {
            return None;
        }
        self.state.try_update(f)
    }

    fn read<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> Option<R> {
        if !self.is_alive() {
            return None;
        }
        self.state.try_with_untracked(f)
    }

    fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    fn unmount(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

/// Plain single-threaded store for headless hosts and tests.
#[derive(Clone, Debug)]
pub struct LocalStore {
    state: Rc<RefCell<WidgetState>>,
    alive: Rc<Cell<bool>>,
}

impl LocalStore {
    pub fn new(state: WidgetState) -> Self {
        Self { state: Rc::new(RefCell::new(state)), alive: Rc::new(Cell::new(true)) }
    }
}

impl WidgetStore for LocalStore {
    fn mutate<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R> {
        self.alive.get().then(|| f(&mut self.state.borrow_mut()))
    }

    fn read<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> Option<R> {
        self.alive.get().then(|| f(&self.state.borrow()))
    }

    fn is_alive(&self) -> bool {
        self.alive.get()
    }

    fn unmount(&self) {
        self.alive.set(false);
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Result of one `submit` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent: blank draft, request already in flight, or the
    /// widget is no longer mounted.
    Rejected,
    /// The answer was appended to the transcript.
    Answered,
    /// The fallback apology was appended.
    Failed(FailureKind),
    /// The widget was unmounted before the reply arrived; nothing was written.
    Dropped,
}

pub struct ChatController<S: WidgetStore> {
    store: S,
    service: Rc<dyn AnswerService>,
    fallback: Rc<str>,
}

impl<S: WidgetStore> Clone for ChatController<S> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone(), service: Rc::clone(&self.service), fallback: Rc::clone(&self.fallback) }
    }
}

impl<S: WidgetStore> ChatController<S> {
    pub fn new(store: S, service: Rc<dyn AnswerService>, fallback: impl Into<Rc<str>>) -> Self {
        Self { store, service, fallback: fallback.into() }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip panel visibility and return the new value (`false` once unmounted).
    pub fn toggle_visibility(&self) -> bool {
        self.store.mutate(WidgetState::toggle_visibility).unwrap_or(false)
    }

    pub fn update_draft(&self, text: impl Into<String>) {
        let text = text.into();
        self.store.mutate(|s| s.set_draft(text));
    }

    /// Submit the current draft.
    ///
    /// Acceptance happens immediately, before the returned future is polled:
    /// the user message is appended, the draft cleared, and the widget enters
    /// `AwaitingResponse`. The future performs the single request and
    /// appends the reply (or the fallback apology).
    pub fn submit(&self) -> impl Future<Output = SubmitOutcome> + use<S> {
        let accepted = self.store.mutate(WidgetState::begin_submit).flatten();
        let guard = accepted.is_some().then(|| InFlight { store: self.store.clone() });
        let this = self.clone();
        async move {
            let Some(query) = accepted else {
                return SubmitOutcome::Rejected;
            };
            let _in_flight = guard;
            let result = this.service.ask(&query).await;
            this.complete(result)
        }
    }

    /// Submit on the commit key. Returns `None` for any other key, in which
    /// case the caller lets the key through (Shift+Enter inserts a newline).
    pub fn submit_on_enter(&self, press: &KeyPress) -> Option<impl Future<Output = SubmitOutcome> + use<S>> {
        press.is_commit().then(|| self.submit())
    }

    /// Mark the widget dead. Pending replies will be discarded.
    pub fn unmount(&self) {
        self.store.unmount();
    }

    fn complete(&self, result: Result<String, AskError>) -> SubmitOutcome {
        let (text, outcome) = match result {
            Ok(answer) => (answer, SubmitOutcome::Answered),
            Err(err) => {
                let kind = err.kind();
                match kind {
                    FailureKind::Protocol => {
                        leptos::logging::warn!("answer endpoint rejected query: {err}");
                    }
                    FailureKind::Transport => {
                        leptos::logging::warn!("answer request failed: {err}");
                    }
                }
                (self.fallback.to_string(), SubmitOutcome::Failed(kind))
            }
        };
        if self.store.mutate(|s| s.push_assistant(text)).is_none() {
            leptos::logging::log!("chat widget unmounted before reply arrived; dropping it");
            return SubmitOutcome::Dropped;
        }
        outcome
    }
}

/// Returns the widget to `Idle` when the submission scope ends.
struct InFlight<S: WidgetStore> {
    store: S,
}

impl<S: WidgetStore> Drop for InFlight<S> {
    fn drop(&mut self) {
        self.store.mutate(WidgetState::finish_request);
    }
}
