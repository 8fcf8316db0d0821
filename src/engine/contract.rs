use crate::foundation::core::SceneId;
use crate::foundation::error::RaypassResult;
use crate::frame::raw::RawFrame;

/// Callback channels a [`RenderEngine`] invokes while a render is in flight.
///
/// Both channels are called inline from within the blocking [`RenderEngine::run_render`]
/// call, on the worker that made it. Within each channel, delivery order matches
/// production order; there is no ordering guarantee between a frame and a progress
/// event produced at the same instant.
pub trait EngineEvents {
    /// One render pass finished; `frame` is valid only for the duration of this call.
    fn frame_ready(&mut self, frame: RawFrame<'_>);

    /// Overall completion fraction in `[0, 1]`, typically monotonically
    /// non-decreasing.
    fn progress(&mut self, fraction: f64);
}

/// The external rendering engine.
///
/// One call per session, blocking, not cancellable mid-flight. Scene validation is
/// the engine's responsibility: an unknown scene id is reported as total failure of
/// the call, which the orchestrator treats as session-fatal.
pub trait RenderEngine: Send {
    /// Render the scene, invoking `events` zero or more times, and return when the
    /// final frame has been produced.
    fn run_render(&mut self, scene: SceneId, events: &mut dyn EngineEvents)
    -> RaypassResult<()>;

    /// The engine's current raw image, if one has been produced.
    ///
    /// Queried once more after [`RenderEngine::run_render`] returns to pick up the
    /// final frame. The returned view is valid only until the engine next mutates
    /// its internal buffer.
    fn current_frame(&self) -> Option<RawFrame<'_>>;
}
