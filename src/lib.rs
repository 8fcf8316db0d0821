//! Raypass orchestrates a progressively-updating image render.
//!
//! A [`RenderOrchestrator`] drives a blocking [`RenderEngine`] on a dedicated worker
//! thread. The engine delivers intermediate frames and progress fractions through
//! callbacks; the orchestrator copies each raw frame into a reused scratch buffer,
//! encodes it into an immutable [`image::DynamicImage`], and republishes typed
//! [`SessionEvent`]s toward the UI side. There a [`StateModel`] folds events into the
//! observable [`ViewState`] (busy flag, progress, latest image) and notifies a
//! [`StateObserver`].
//!
//! ```no_run
//! use raypass::{DemoEngine, RecordingObserver, RenderOrchestrator, SceneId, StateModel};
//!
//! let (orchestrator, events) = RenderOrchestrator::spawn_with_channel(DemoEngine::new());
//! orchestrator.request_render(SceneId::new(1).unwrap());
//! drop(orchestrator); // waits for the session, then closes the event channel
//!
//! let mut model = StateModel::new();
//! let mut observer = RecordingObserver::new();
//! model.pump(&events, &mut observer);
//! assert!(observer.last().is_some_and(|s| s.latest_image.is_some()));
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Image codec: raw pixel bytes to displayable images.
pub mod codec;
/// Render engine boundary and the built-in demo engine.
pub mod engine;
/// Raw frame views and the session scratch buffer.
pub mod frame;
/// Render sessions: typed events and the orchestrator.
pub mod session;
/// Published view state and its UI-side event fold.
pub mod state;

pub use crate::foundation::core::{Dimensions, PixelFormat, SceneId};
pub use crate::foundation::error::{RaypassError, RaypassResult};

pub use crate::engine::contract::{EngineEvents, RenderEngine};
pub use crate::engine::demo::DemoEngine;
pub use crate::frame::raw::RawFrame;
pub use crate::frame::scratch::ScratchBuffer;
pub use crate::session::events::{EventSink, SessionEvent, SessionStats, SessionToken};
pub use crate::session::orchestrator::RenderOrchestrator;
pub use crate::state::model::StateModel;
pub use crate::state::view::{RecordingObserver, StateObserver, ViewState};
