mod session;

pub use session::{
    SessionState, InputEvent, FrameOutput, HELP_TEXT, CHAOS_BATCH_SIZE, MAX_DEPTH, MIN_DEPTH,
    VIEWPORT_WIDTH, VIEWPORT_HEIGHT, VIEWPORT_MARGIN,
};
