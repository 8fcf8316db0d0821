use crate::codec;
use crate::engine::contract::{EngineEvents, RenderEngine};
use crate::foundation::core::SceneId;
use crate::foundation::error::RaypassResult;
use crate::frame::raw::RawFrame;
use crate::frame::scratch::ScratchBuffer;
use crate::session::events::{EventSink, SessionEvent, SessionStats, SessionToken};
use image::DynamicImage;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use tracing::{debug, warn};

/// Drives render sessions on a dedicated worker thread.
///
/// The orchestrator owns the engine and the session scratch buffer; the only
/// values shared across threads are the rendering flag and the session generation
/// counter. Everything a session produces crosses toward the UI side as immutable
/// [`SessionEvent`]s through the [`EventSink`] given at spawn time.
///
/// Exactly one session runs at a time. The engine call is blocking and not
/// cancellable, so a request arriving while a session is in flight is dropped, not
/// queued (presentation layers disable their request affordance while
/// [`RenderOrchestrator::is_rendering`] holds, but the entry point guards against
/// races regardless).
pub struct RenderOrchestrator {
    requests: Option<mpsc::Sender<Job>>,
    rendering: Arc<AtomicBool>,
    generation: AtomicU64,
    worker: Option<thread::JoinHandle<()>>,
}

#[derive(Clone, Copy, Debug)]
struct Job {
    token: SessionToken,
    scene: SceneId,
}

impl RenderOrchestrator {
    /// Spawn the worker thread around `engine`, delivering session events to
    /// `sink`.
    pub fn spawn<E, S>(engine: E, sink: S) -> Self
    where
        E: RenderEngine + 'static,
        S: EventSink + 'static,
    {
        let (requests, jobs) = mpsc::channel::<Job>();
        let rendering = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&rendering);
        let worker = thread::spawn(move || worker_loop(engine, jobs, sink, flag));
        Self {
            requests: Some(requests),
            rendering,
            generation: AtomicU64::new(0),
            worker: Some(worker),
        }
    }

    /// Spawn with an [`mpsc`] event channel, returning the receiver for the UI
    /// side to drain (see [`StateModel::pump`]).
    ///
    /// [`StateModel::pump`]: crate::state::model::StateModel::pump
    pub fn spawn_with_channel<E>(engine: E) -> (Self, mpsc::Receiver<SessionEvent>)
    where
        E: RenderEngine + 'static,
    {
        let (sink, events) = mpsc::channel();
        (Self::spawn(engine, sink), events)
    }

    /// Request a render of `scene`. Never blocks.
    ///
    /// The idle check and the transition into the rendering state are one atomic
    /// compare-and-set, so two racing requests admit exactly one session. A
    /// request arriving while a session is in flight is dropped by design.
    #[tracing::instrument(skip(self))]
    pub fn request_render(&self, scene: SceneId) {
        if self
            .rendering
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!(scene = scene.0, "render already in flight, request dropped");
            return;
        }
        let token = SessionToken(self.generation.fetch_add(1, Ordering::AcqRel) + 1);
        let sent = self
            .requests
            .as_ref()
            .is_some_and(|tx| tx.send(Job { token, scene }).is_ok());
        if !sent {
            // Worker already shut down; only reachable during teardown.
            self.rendering.store(false, Ordering::Release);
        }
    }

    /// `true` while a session is in flight.
    pub fn is_rendering(&self) -> bool {
        self.rendering.load(Ordering::Acquire)
    }
}

impl Drop for RenderOrchestrator {
    /// Closes the request channel and waits for the worker, which includes
    /// waiting out any in-flight engine call (the engine is not cancellable).
    fn drop(&mut self) {
        self.requests.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn worker_loop<E, S>(
    mut engine: E,
    jobs: mpsc::Receiver<Job>,
    sink: S,
    rendering: Arc<AtomicBool>,
) where
    E: RenderEngine,
    S: EventSink,
{
    while let Ok(job) = jobs.recv() {
        run_session(&mut engine, &sink, job);
        rendering.store(false, Ordering::Release);
    }
}

fn run_session<E, S>(engine: &mut E, sink: &S, job: Job)
where
    E: RenderEngine,
    S: EventSink,
{
    sink.deliver(SessionEvent::Started {
        session: job.token,
        scene: job.scene,
    });

    // Session-scoped: allocated lazily on the first frame, released when the
    // session ends one way or the other.
    let mut scratch: Option<ScratchBuffer> = None;
    let mut stats = SessionStats::default();

    let outcome = {
        let mut passes = PassEvents {
            token: job.token,
            sink,
            scratch: &mut scratch,
            stats: &mut stats,
        };
        engine.run_render(job.scene, &mut passes)
    };

    match outcome {
        Ok(()) => {
            // The call returning is the final frame boundary: one last handling
            // pass over the engine's current image, falling back to the last
            // copied frame when the engine no longer exposes one.
            if let Some(frame) = engine.current_frame()
                && let Err(err) = store_frame(&mut scratch, &frame)
            {
                stats.frames_skipped += 1;
                warn!(%err, "final frame rejected, falling back to last good copy");
            }
            let image = scratch.take().and_then(|buf| {
                let dims = buf.dims();
                match codec::encode_owned(buf.into_bytes(), dims) {
                    Ok(image) => {
                        stats.frames_delivered += 1;
                        Some(Arc::new(image))
                    }
                    Err(err) => {
                        stats.frames_skipped += 1;
                        warn!(%err, "failed to encode final frame");
                        None
                    }
                }
            });
            debug!(
                session = job.token.0,
                scene = job.scene.0,
                delivered = stats.frames_delivered,
                skipped = stats.frames_skipped,
                "session complete"
            );
            sink.deliver(SessionEvent::Finished {
                session: job.token,
                image,
                failure: None,
                stats,
            });
        }
        Err(err) => {
            warn!(%err, scene = job.scene.0, "engine call failed, session aborted");
            drop(scratch);
            sink.deliver(SessionEvent::Finished {
                session: job.token,
                image: None,
                failure: Some(err.to_string()),
                stats,
            });
        }
    }
}

struct PassEvents<'a, S: EventSink> {
    token: SessionToken,
    sink: &'a S,
    scratch: &'a mut Option<ScratchBuffer>,
    stats: &'a mut SessionStats,
}

impl<S: EventSink> EngineEvents for PassEvents<'_, S> {
    fn frame_ready(&mut self, frame: RawFrame<'_>) {
        match handle_frame(self.scratch, &frame) {
            Ok(image) => {
                self.stats.frames_delivered += 1;
                self.sink.deliver(SessionEvent::Frame {
                    session: self.token,
                    image: Arc::new(image),
                });
            }
            Err(err) => {
                // Non-fatal: leave the published image unchanged and keep
                // waiting for the next frame.
                self.stats.frames_skipped += 1;
                warn!(%err, "skipping undecodable frame");
            }
        }
    }

    fn progress(&mut self, fraction: f64) {
        if !fraction.is_finite() {
            warn!(fraction, "ignoring non-finite progress fraction");
            return;
        }
        self.sink.deliver(SessionEvent::Progress {
            session: self.token,
            fraction: fraction.clamp(0.0, 1.0),
        });
    }
}

/// Copy `frame` into the scratch buffer, (re)allocating only when no buffer exists
/// yet or the dimensions changed.
fn store_frame<'s>(
    scratch: &'s mut Option<ScratchBuffer>,
    frame: &RawFrame<'_>,
) -> RaypassResult<&'s ScratchBuffer> {
    frame.validate()?;
    let buf = match scratch.take() {
        Some(buf) if buf.matches(frame.dims()) => scratch.insert(buf),
        _ => scratch.insert(ScratchBuffer::new(frame.dims())?),
    };
    buf.store(frame)?;
    Ok(buf)
}

fn handle_frame(
    scratch: &mut Option<ScratchBuffer>,
    frame: &RawFrame<'_>,
) -> RaypassResult<DynamicImage> {
    let buf = store_frame(scratch, frame)?;
    // Intermediate frames encode from a borrowed view; the buffer is reused for
    // the next pass.
    codec::encode(buf.bytes(), buf.dims())
}

#[cfg(test)]
#[path = "../../tests/unit/session/orchestrator.rs"]
mod tests;
