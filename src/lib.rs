// Domain layer - Fractal geometry and generators
pub mod domain;

// Application layer - Session state machine and frame coordination
pub mod application;

// Infrastructure layer - Rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Point, Triangle, GenerationMethod, ChaosState, DepthError};
pub use application::{SessionState, InputEvent, FrameOutput};
