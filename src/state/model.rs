use crate::session::events::{SessionEvent, SessionToken};
use crate::state::view::{StateObserver, ViewState};
use std::sync::mpsc;
use tracing::debug;

/// UI-side fold of [`SessionEvent`]s into the published [`ViewState`].
///
/// Single-threaded by design: exactly one consumer applies events, in delivery
/// order, on the UI context. Events carrying a token other than the active
/// session's are stale (a late callback from a previous run) and are discarded
/// silently.
#[derive(Debug, Default)]
pub struct StateModel {
    state: ViewState,
    active: Option<SessionToken>,
}

impl StateModel {
    /// Create a model in the idle, no-image state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state snapshot.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Apply one event, returning the changed snapshot or `None` when the event
    /// was stale and ignored.
    pub fn apply(&mut self, event: SessionEvent) -> Option<&ViewState> {
        match event {
            SessionEvent::Started { session, .. } => {
                self.active = Some(session);
                self.state = ViewState {
                    is_rendering: true,
                    progress: 0.0,
                    latest_image: None,
                };
            }
            SessionEvent::Progress { session, fraction } => {
                if self.is_stale(session) {
                    return None;
                }
                // The published fraction always stays in [0, 1], whatever the
                // producer sent.
                if !fraction.is_finite() {
                    debug!(fraction, "discarding non-finite progress event");
                    return None;
                }
                self.state.progress = fraction.clamp(0.0, 1.0);
            }
            SessionEvent::Frame { session, image } => {
                if self.is_stale(session) {
                    return None;
                }
                self.state.latest_image = Some(image);
            }
            SessionEvent::Finished {
                session,
                image,
                failure,
                ..
            } => {
                if self.is_stale(session) {
                    return None;
                }
                self.active = None;
                self.state.is_rendering = false;
                if let Some(image) = image {
                    self.state.latest_image = Some(image);
                }
                // A failed session keeps whatever was last successfully
                // published; only clean completion pins progress to 1.
                if failure.is_none() {
                    self.state.progress = 1.0;
                }
            }
        }
        Some(&self.state)
    }

    /// Drain events until the sender side disconnects, notifying `observer` on
    /// every applied change.
    ///
    /// This is the "single consumer task" for a UI loop; tests use it after the
    /// orchestrator has been dropped to observe the full publication sequence.
    pub fn pump(&mut self, events: &mpsc::Receiver<SessionEvent>, observer: &mut dyn StateObserver) {
        while let Ok(event) = events.recv() {
            if self.apply(event).is_some() {
                observer.on_state_changed(&self.state);
            }
        }
    }

    fn is_stale(&self, session: SessionToken) -> bool {
        let stale = self.active != Some(session);
        if stale {
            debug!(session = session.0, "discarding stale session event");
        }
        stale
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/model.rs"]
mod tests;
