use macroquad::prelude::*;

use crate::application::{FrameOutput, HELP_TEXT, SessionState, VIEWPORT_HEIGHT};
use crate::domain::Point;

pub const BACKGROUND: Color = BLACK;
const TRIANGLE_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const POINT_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);

const VERTEX_MARKER_RADIUS: f32 = 3.0;
const POINT_RADIUS: f32 = 1.0;

fn to_screen(p: Point) -> Vec2 {
    vec2(p.x as f32, p.y as f32)
}

/// Draw one frame's primitives. The full output is redrawn every frame
/// on a cleared canvas; there is no incremental compositing.
pub fn draw_output(output: &FrameOutput) {
    match output {
        FrameOutput::Outlines(triangles) => {
            for tri in triangles {
                draw_triangle_lines(
                    to_screen(tri.top),
                    to_screen(tri.left),
                    to_screen(tri.right),
                    1.0,
                    TRIANGLE_COLOR,
                );
            }
        }
        FrameOutput::PointCloud { vertices, points } => {
            for &vertex in vertices {
                let v = to_screen(vertex);
                draw_circle(v.x, v.y, VERTEX_MARKER_RADIUS, TRIANGLE_COLOR);
            }
            for &point in *points {
                let p = to_screen(point);
                draw_circle(p.x, p.y, POINT_RADIUS, POINT_COLOR);
            }
        }
    }
}

/// Draw the HUD overlay: depth, method, and the static help line
pub fn draw_hud(state: &SessionState) {
    let labels = [
        (state.hud_depth(), 10.0, 32.0, 28.0),
        (state.hud_method(), 10.0, 64.0, 28.0),
        (
            HELP_TEXT.to_string(),
            10.0,
            VIEWPORT_HEIGHT as f32 - 20.0,
            22.0,
        ),
    ];

    labels.iter().for_each(|(text, x, y, size)| {
        draw_text(text, *x, *y, *size, WHITE);
    });
}
