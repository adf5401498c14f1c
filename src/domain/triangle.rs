use super::Point;

/// Triangle is an ordered vertex triple: top, bottom-left, bottom-right.
/// The session's base triangle is computed once from the viewport and
/// never changes afterward.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Triangle {
    pub top: Point,
    pub left: Point,
    pub right: Point,
}

impl Triangle {
    pub const fn new(top: Point, left: Point, right: Point) -> Self {
        Self { top, left, right }
    }

    /// Triangle inscribed in a viewport with the given margin from the
    /// edges: apex at top-center, base along the bottom.
    pub const fn inscribed(width: i32, height: i32, margin: i32) -> Self {
        Self {
            top: Point::new(width / 2, margin),
            left: Point::new(margin, height - margin),
            right: Point::new(width - margin, height - margin),
        }
    }

    /// Vertices in draw order.
    pub const fn vertices(&self) -> [Point; 3] {
        [self.top, self.left, self.right]
    }

    /// The three corner sub-triangles formed by the edge midpoints.
    /// Each keeps the orientation of the parent (corner vertex first).
    pub const fn subdivide(&self) -> [Triangle; 3] {
        let mid_tl = Point::midpoint(self.top, self.left);
        let mid_lr = Point::midpoint(self.left, self.right);
        let mid_rt = Point::midpoint(self.right, self.top);

        [
            Triangle::new(self.top, mid_tl, mid_rt),
            Triangle::new(mid_tl, self.left, mid_lr),
            Triangle::new(mid_rt, mid_lr, self.right),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inscribed_reference_viewport() {
        let tri = Triangle::inscribed(1000, 1000, 50);
        assert_eq!(tri.top, Point::new(500, 50));
        assert_eq!(tri.left, Point::new(50, 950));
        assert_eq!(tri.right, Point::new(950, 950));
    }

    #[test]
    fn test_subdivide_corners_keep_parent_vertices() {
        let tri = Triangle::inscribed(1000, 1000, 50);
        let [a, b, c] = tri.subdivide();
        assert_eq!(a.top, tri.top);
        assert_eq!(b.left, tri.left);
        assert_eq!(c.right, tri.right);
    }

    #[test]
    fn test_subdivide_shares_edge_midpoints() {
        let tri = Triangle::inscribed(1000, 1000, 50);
        let [a, b, c] = tri.subdivide();
        // Sub-triangles meet at the three edge midpoints
        assert_eq!(a.left, b.top);
        assert_eq!(b.right, c.left);
        assert_eq!(c.top, a.right);
        assert_eq!(a.left, Point::midpoint(tri.top, tri.left));
    }
}
