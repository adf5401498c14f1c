/// Point is the fundamental geometric unit: an immutable pair of
/// integer pixel coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Integer midpoint of two points (coordinates truncate toward zero).
    /// Used both by recursive subdivision and by the chaos-game step.
    pub const fn midpoint(a: Point, b: Point) -> Point {
        Point::new((a.x + b.x) / 2, (a.y + b.y) / 2)
    }
}
