//! A small self-contained engine rendering a fixed scene catalog.
//!
//! Stands in for the native tracer during development and testing: same call shape
//! (blocking render, per-pass frame callbacks, per-tile progress callbacks, pull
//! accessor for the current raw image), same catalog convention (small positive
//! scene ids, 600px-wide 16:9 RGB frames), but the pixels are a cheap
//! normal-shaded sphere over a sky gradient rather than a path trace.

use crate::engine::contract::{EngineEvents, RenderEngine};
use crate::foundation::core::{Dimensions, SceneId};
use crate::foundation::error::{RaypassError, RaypassResult};
use crate::frame::raw::RawFrame;

const SCREEN_WIDTH: u32 = 600;
const ASPECT: f64 = 16.0 / 9.0;
const PASSES: u32 = 4;
const TILE_ROWS: u32 = 8;

/// Deterministic, allocation-light demo engine.
#[derive(Debug)]
pub struct DemoEngine {
    dims: Dimensions,
    buffer: Vec<u8>,
    has_frame: bool,
}

impl DemoEngine {
    /// Create a demo engine with the catalog's fixed 600x337 RGB output.
    pub fn new() -> Self {
        let dims = Dimensions {
            width: SCREEN_WIDTH,
            height: (SCREEN_WIDTH as f64 / ASPECT) as u32,
            bytes_per_pixel: 3,
        };
        Self {
            dims,
            buffer: Vec::new(),
            has_frame: false,
        }
    }

    /// Output dimensions of every frame this engine produces.
    pub fn dims(&self) -> Dimensions {
        self.dims
    }
}

impl Default for DemoEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderEngine for DemoEngine {
    fn run_render(
        &mut self,
        scene: SceneId,
        events: &mut dyn EngineEvents,
    ) -> RaypassResult<()> {
        let params = SceneParams::from_catalog(scene)?;
        self.buffer.resize(self.dims.byte_len(), 0);
        self.has_frame = false;

        let total = (PASSES * TILE_ROWS) as f64;
        let mut done = 0u32;
        for _pass in 0..PASSES {
            for tile in 0..TILE_ROWS {
                let y0 = tile * self.dims.height / TILE_ROWS;
                let y1 = (tile + 1) * self.dims.height / TILE_ROWS;
                render_rows(&mut self.buffer, self.dims, &params, y0, y1);
                done += 1;
                events.progress(f64::from(done) / total);
            }
            self.has_frame = true;
            events.frame_ready(RawFrame::new(self.dims, &self.buffer)?);
        }
        Ok(())
    }

    fn current_frame(&self) -> Option<RawFrame<'_>> {
        if !self.has_frame {
            return None;
        }
        RawFrame::new(self.dims, &self.buffer).ok()
    }
}

struct SceneParams {
    sphere_center: [f64; 3],
    sphere_radius: f64,
    sky_horizon: [f64; 3],
}

impl SceneParams {
    fn from_catalog(scene: SceneId) -> RaypassResult<Self> {
        if !(1..=9).contains(&scene.0) {
            return Err(RaypassError::engine(format!("unknown scene id {}", scene.0)));
        }
        let i = f64::from(scene.0);
        Ok(Self {
            sphere_center: [(i - 5.0) * 0.25, 0.0, 4.0],
            sphere_radius: 1.0,
            sky_horizon: [0.05 * i, 0.3, (0.9 - 0.05 * i).max(0.2)],
        })
    }
}

fn render_rows(buffer: &mut [u8], dims: Dimensions, params: &SceneParams, y0: u32, y1: u32) {
    // Virtual viewport at focal length 1, camera at the origin looking down +z,
    // scanned top to bottom, left to right.
    let real_aspect = f64::from(dims.width) / f64::from(dims.height);
    let viewport_w = 2.0;
    let viewport_h = viewport_w / real_aspect;
    let dx = viewport_w / f64::from(dims.width);
    let dy = viewport_h / f64::from(dims.height);
    let left = -viewport_w / 2.0 + dx / 2.0;
    let top = viewport_h / 2.0 - dy / 2.0;

    for r in y0..y1 {
        for c in 0..dims.width {
            let p = [
                left + f64::from(c) * dx,
                top - f64::from(r) * dy,
                1.0,
            ];
            let dir = normalize(p);
            let color = shade(dir, params);
            let i = ((r * dims.width + c) * dims.bytes_per_pixel) as usize;
            buffer[i] = to_u8(color[0]);
            buffer[i + 1] = to_u8(color[1]);
            buffer[i + 2] = to_u8(color[2]);
        }
    }
}

fn shade(dir: [f64; 3], params: &SceneParams) -> [f64; 3] {
    if let Some(t) = sphere_hit(dir, params.sphere_center, params.sphere_radius) {
        let hit = [dir[0] * t, dir[1] * t, dir[2] * t];
        let n = normalize([
            hit[0] - params.sphere_center[0],
            hit[1] - params.sphere_center[1],
            hit[2] - params.sphere_center[2],
        ]);
        return [0.5 * (n[0] + 1.0), 0.5 * (n[1] + 1.0), 0.5 * (n[2] + 1.0)];
    }
    let f = 0.5 * (dir[1] + 1.0);
    let h = params.sky_horizon;
    [
        (1.0 - f) + f * h[0],
        (1.0 - f) + f * h[1],
        (1.0 - f) + f * h[2],
    ]
}

fn sphere_hit(dir: [f64; 3], center: [f64; 3], radius: f64) -> Option<f64> {
    // Ray origin is the camera origin, so oc == center.
    let b = dot(dir, center);
    let disc = b * b - (dot(center, center) - radius * radius);
    if disc < 0.0 {
        return None;
    }
    let t = b - disc.sqrt();
    (t > 0.0).then_some(t)
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn normalize(v: [f64; 3]) -> [f64; 3] {
    let len = dot(v, v).sqrt();
    [v[0] / len, v[1] / len, v[2] / len]
}

fn to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0) as u8
}
