use rand::Rng;

use crate::domain::{ChaosState, GenerationMethod, Point, Triangle, recursive};

pub const VIEWPORT_WIDTH: i32 = 1000;
pub const VIEWPORT_HEIGHT: i32 = 1000;
pub const VIEWPORT_MARGIN: i32 = 50;

pub const MIN_DEPTH: u8 = 0;
pub const MAX_DEPTH: u8 = 9;

/// Chaos-game steps advanced per frame
pub const CHAOS_BATCH_SIZE: usize = 100;

/// Static help line shown on the HUD
pub const HELP_TEXT: &str = "Up/Down: Change Depth | Space: Switch Method | R: Reset";

/// Depth from which the parallel subdivision walk pays off
/// (3^8 = 6561 triangles and up)
const PARALLEL_DEPTH_THRESHOLD: u8 = 8;

/// Discrete input events, drained once per frame in poll order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    IncreaseDepth,
    DecreaseDepth,
    ToggleMethod,
    Reset,
    Quit,
}

/// Drawable primitives for one frame, handed to the rendering boundary.
/// The chaos variant borrows the accumulated history so the unbounded
/// point cloud is never copied per frame.
#[derive(Debug, PartialEq, Eq)]
pub enum FrameOutput<'a> {
    /// Triangle outlines from recursive subdivision
    Outlines(Vec<Triangle>),
    /// The three base vertices plus every chaos point so far, as markers
    PointCloud {
        vertices: [Point; 3],
        points: &'a [Point],
    },
}

/// SessionState coordinates the interactive session.
/// It owns all mutable state and is the only place that mutates it; the
/// frame loop feeds it input events and a per-frame advance.
pub struct SessionState {
    pub triangle: Triangle,
    pub depth: u8,
    pub method: GenerationMethod,
    pub chaos: ChaosState,
    pub quit_requested: bool,
    bounds: (i32, i32),
}

impl SessionState {
    /// Create session state for a fixed viewport; the base triangle is
    /// computed here and never changes afterward.
    pub fn new(width: i32, height: i32, margin: i32) -> Self {
        Self {
            triangle: Triangle::inscribed(width, height, margin),
            depth: MIN_DEPTH,
            method: GenerationMethod::default(),
            chaos: ChaosState::new(),
            quit_requested: false,
            bounds: (width, height),
        }
    }

    /// Bump recursion depth, clamped to the maximum
    pub fn increase_depth(mut self) -> Self {
        self.depth = (self.depth + 1).min(MAX_DEPTH);
        self
    }

    /// Lower recursion depth, clamped to the minimum
    pub fn decrease_depth(mut self) -> Self {
        self.depth = self.depth.saturating_sub(1).max(MIN_DEPTH);
        self
    }

    /// Flip Recursive <-> Chaos. The chaos cloud is discarded on every
    /// toggle regardless of direction, so re-entering chaos mode always
    /// starts from a fresh seed.
    pub fn toggle_method(mut self) -> Self {
        self.method = self.method.toggled();
        self.chaos.clear();
        self
    }

    /// Back to the initial state: depth 0 and an empty chaos cloud.
    /// Safe to apply when already there.
    pub fn reset(mut self) -> Self {
        self.depth = MIN_DEPTH;
        self.chaos.clear();
        self
    }

    /// Mark the session for termination; the loop ends after this frame
    pub fn request_quit(mut self) -> Self {
        self.quit_requested = true;
        self
    }

    /// Apply one input event
    pub fn apply(self, event: InputEvent) -> Self {
        match event {
            InputEvent::IncreaseDepth => self.increase_depth(),
            InputEvent::DecreaseDepth => self.decrease_depth(),
            InputEvent::ToggleMethod => self.toggle_method(),
            InputEvent::Reset => self.reset(),
            InputEvent::Quit => self.request_quit(),
        }
    }

    /// Per-frame advancement. Chaos mode runs one fixed-size step batch;
    /// recursive mode mutates nothing, its output is re-derived from the
    /// current depth at render time.
    pub fn tick<R: Rng>(mut self, rng: &mut R) -> Self {
        if self.method == GenerationMethod::Chaos {
            self.chaos
                .step_batch(&self.triangle.vertices(), self.bounds, rng, CHAOS_BATCH_SIZE);
        }
        self
    }

    /// Drawable primitives for the current frame
    pub fn frame_output(&self) -> FrameOutput<'_> {
        match self.method {
            GenerationMethod::Recursive => {
                let depth = i32::from(self.depth);
                let triangles = if self.depth >= PARALLEL_DEPTH_THRESHOLD {
                    recursive::generate_parallel(&self.triangle, depth)
                } else {
                    recursive::generate(&self.triangle, depth)
                };
                // depth is clamped to [MIN_DEPTH, MAX_DEPTH] on every mutation
                FrameOutput::Outlines(triangles.expect("clamped depth is never negative"))
            }
            GenerationMethod::Chaos => FrameOutput::PointCloud {
                vertices: self.triangle.vertices(),
                points: &self.chaos.points,
            },
        }
    }

    /// HUD line: current recursion depth
    pub fn hud_depth(&self) -> String {
        format!("Depth: {}", self.depth)
    }

    /// HUD line: active generation method
    pub fn hud_method(&self) -> String {
        format!("Method: {}", self.method.name())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT, VIEWPORT_MARGIN)
    }
}
