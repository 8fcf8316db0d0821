use image::DynamicImage;
use std::sync::Arc;

/// The externally observable render state snapshot.
///
/// Mutated exclusively by the UI-side [`StateModel`]; worker code only ever produces
/// the immutable images it carries.
///
/// [`StateModel`]: crate::state::model::StateModel
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    /// `true` while a render session is in flight.
    pub is_rendering: bool,
    /// Completion fraction in `[0, 1]`.
    pub progress: f64,
    /// Most recently published image, if any.
    pub latest_image: Option<Arc<DynamicImage>>,
}

/// Observer of published-state changes.
///
/// Called on the context that drives the [`StateModel`], normally the UI context,
/// so implementations can touch UI-affined resources directly.
///
/// [`StateModel`]: crate::state::model::StateModel
pub trait StateObserver {
    /// A new state snapshot was published.
    fn on_state_changed(&mut self, state: &ViewState);
}

/// Observer capturing every snapshot, for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    states: Vec<ViewState>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured snapshots, in publication order.
    pub fn states(&self) -> &[ViewState] {
        &self.states
    }

    /// The most recent snapshot, if any.
    pub fn last(&self) -> Option<&ViewState> {
        self.states.last()
    }
}

impl StateObserver for RecordingObserver {
    fn on_state_changed(&mut self, state: &ViewState) {
        self.states.push(state.clone());
    }
}
