use crate::foundation::core::SceneId;
use image::DynamicImage;
use std::sync::Arc;
use std::sync::mpsc;

/// Generation counter identifying one render session.
///
/// Minted when a render request is accepted, strictly increasing across the life of
/// an orchestrator. The UI-side state fold uses it to detect and discard events
/// from superseded or already-finished sessions.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SessionToken(pub u64);

/// Per-session frame accounting, carried on the terminal event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionStats {
    /// Frames successfully encoded and published.
    pub frames_delivered: u64,
    /// Frames dropped because the codec rejected them.
    pub frames_skipped: u64,
}

/// Typed worker-to-UI message describing one session state change.
///
/// All events of one session are delivered in the order they were produced on the
/// worker. No error type crosses this boundary; failures arrive as a
/// [`SessionEvent::Finished`] with `failure` set.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    /// A render request was accepted; published progress resets to zero and the
    /// latest image is cleared.
    Started {
        /// The new session.
        session: SessionToken,
        /// Scene the session renders.
        scene: SceneId,
    },
    /// The engine reported a completion fraction.
    Progress {
        /// Originating session.
        session: SessionToken,
        /// Fraction in `[0, 1]` (already clamped and finite).
        fraction: f64,
    },
    /// An intermediate frame was encoded.
    Frame {
        /// Originating session.
        session: SessionToken,
        /// The encoded frame.
        image: Arc<DynamicImage>,
    },
    /// The session ended; the orchestrator is idle again.
    Finished {
        /// Originating session.
        session: SessionToken,
        /// Final frame, when one was produced and encoded.
        image: Option<Arc<DynamicImage>>,
        /// Engine failure description for session-fatal errors.
        failure: Option<String>,
        /// Frame accounting for the session.
        stats: SessionStats,
    },
}

/// Destination for session events, crossing from the worker toward the UI context.
pub trait EventSink: Send {
    /// Deliver one event. Delivery is infallible from the worker's point of view;
    /// sinks whose consumer is gone drop events silently.
    fn deliver(&self, event: SessionEvent);
}

impl EventSink for mpsc::Sender<SessionEvent> {
    fn deliver(&self, event: SessionEvent) {
        // A dropped receiver means the UI side is gone; nothing left to notify.
        let _ = self.send(event);
    }
}
