//! Chaos-game Sierpinski generation.
//!
//! A Markov process over a single moving point: each step picks one of
//! the three base vertices uniformly at random and jumps halfway toward
//! it, appending the landing point. The accumulated cloud converges to
//! the Sierpinski attractor as the early transient becomes statistically
//! negligible.

use rand::Rng;

use super::Point;

/// Mutable state of the chaos game.
///
/// `points` is append-only and grows without bound across frames until a
/// reset or method switch clears it. That is the intended tradeoff for
/// visual density, not a leak; the whole history is redrawn every frame.
#[derive(Debug, Default, Clone)]
pub struct ChaosState {
    pub current: Option<Point>,
    pub points: Vec<Point>,
}

impl ChaosState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the process by one step.
    ///
    /// A fresh state seeds `current` uniformly within the viewport
    /// `bounds` (not confined to the triangle; the warm-up transient may
    /// start outside the attractor) and appends nothing. Every later
    /// step appends exactly one midpoint.
    pub fn step<R: Rng>(&mut self, vertices: &[Point; 3], bounds: (i32, i32), rng: &mut R) {
        let Some(current) = self.current else {
            let (width, height) = bounds;
            self.current = Some(Point::new(
                rng.random_range(0..=width),
                rng.random_range(0..=height),
            ));
            return;
        };

        let target = vertices[rng.random_range(0..3)];
        let next = Point::midpoint(current, target);
        self.points.push(next);
        self.current = Some(next);
    }

    /// Run `count` steps back to back. Batching amortizes the per-frame
    /// overhead; the session calls this once per frame.
    pub fn step_batch<R: Rng>(
        &mut self,
        vertices: &[Point; 3],
        bounds: (i32, i32),
        rng: &mut R,
        count: usize,
    ) {
        for _ in 0..count {
            self.step(vertices, bounds, rng);
        }
    }

    /// Drop the accumulated cloud and the moving point, so the next step
    /// reseeds from scratch.
    pub fn clear(&mut self) {
        self.points.clear();
        self.current = None;
    }
}
