use macroquad::prelude::*;
use sierpinski::{
    SessionState,
    application::{VIEWPORT_HEIGHT, VIEWPORT_MARGIN, VIEWPORT_WIDTH},
    input, rendering,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Interactive Sierpinski Triangle".to_owned(),
        window_width: VIEWPORT_WIDTH,
        window_height: VIEWPORT_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut state = SessionState::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT, VIEWPORT_MARGIN);
    let mut rng = ::rand::rng();

    loop {
        // Drain this frame's input, then advance the active generator
        let events = input::poll_events();
        state = input::apply_events(state, &events);
        if state.quit_requested {
            break;
        }

        state = state.tick(&mut rng);

        clear_background(rendering::BACKGROUND);
        rendering::draw_output(&state.frame_output());
        rendering::draw_hud(&state);

        next_frame().await;
    }
}
