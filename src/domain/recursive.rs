//! Deterministic Sierpinski generation by recursive subdivision.
//!
//! Pure functions of (triangle, depth): output is recomputed from scratch
//! every frame, so a depth change never invalidates any cached state.

use rayon::prelude::*;
use thiserror::Error;

use super::Triangle;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DepthError {
    #[error("recursion depth must be non-negative, got {0}")]
    Negative(i32),
}

/// Generate the outline triangles for a Sierpinski gasket at `depth`.
///
/// Depth 0 is the base case and yields the input triangle itself; each
/// further level replaces every triangle with its three corner
/// sub-triangles, so the result holds exactly `3^depth` triangles.
///
/// The session clamps depth to [0, 9] before calling, but a negative
/// depth from any other caller is rejected rather than clamped.
pub fn generate(triangle: &Triangle, depth: i32) -> Result<Vec<Triangle>, DepthError> {
    if depth < 0 {
        return Err(DepthError::Negative(depth));
    }
    let mut out = Vec::with_capacity(3usize.pow(depth as u32));
    collect(triangle, depth, &mut out);
    Ok(out)
}

fn collect(triangle: &Triangle, depth: i32, out: &mut Vec<Triangle>) {
    if depth == 0 {
        out.push(*triangle);
        return;
    }
    for sub in triangle.subdivide() {
        collect(&sub, depth - 1, out);
    }
}

/// Parallel twin of [`generate`]: fans the three top-level sub-triangles
/// out over rayon and concatenates in the same order as the serial walk.
/// Worth it only for the deeper levels (thousands of triangles).
pub fn generate_parallel(triangle: &Triangle, depth: i32) -> Result<Vec<Triangle>, DepthError> {
    if depth < 0 {
        return Err(DepthError::Negative(depth));
    }
    if depth == 0 {
        return Ok(vec![*triangle]);
    }

    let branches: Vec<Vec<Triangle>> = triangle
        .subdivide()
        .into_par_iter()
        .map(|sub| generate(&sub, depth - 1))
        .collect::<Result<_, _>>()?;

    Ok(branches.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;

    fn base() -> Triangle {
        Triangle::inscribed(1000, 1000, 50)
    }

    #[test]
    fn test_depth_zero_returns_input_triangle() {
        assert_eq!(generate(&base(), 0).unwrap(), vec![base()]);
    }

    #[test]
    fn test_triangle_count_is_power_of_three() {
        for depth in 0..=9 {
            let triangles = generate(&base(), depth).unwrap();
            assert_eq!(triangles.len(), 3usize.pow(depth as u32));
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(generate(&base(), 5).unwrap(), generate(&base(), 5).unwrap());
    }

    #[test]
    fn test_negative_depth_is_rejected() {
        assert_eq!(generate(&base(), -1), Err(DepthError::Negative(-1)));
        assert_eq!(
            generate_parallel(&base(), -3),
            Err(DepthError::Negative(-3))
        );
    }

    #[test]
    fn test_parallel_matches_serial() {
        for depth in [0, 1, 4, 8] {
            assert_eq!(
                generate_parallel(&base(), depth).unwrap(),
                generate(&base(), depth).unwrap()
            );
        }
    }

    #[test]
    fn test_depth_one_contains_parent_corners() {
        let tri = base();
        let subs = generate(&tri, 1).unwrap();
        assert_eq!(subs.len(), 3);
        assert_eq!(subs[0].top, tri.top);
        assert_eq!(subs[1].left, tri.left);
        assert_eq!(subs[2].right, tri.right);
    }

    #[test]
    fn test_vertex_set_is_order_independent() {
        // The set of produced triangles depends only on (triangle, depth),
        // so collecting into a sorted list gives a stable fingerprint.
        let key = |t: &Triangle| (t.top.x, t.top.y, t.left.x, t.left.y, t.right.x, t.right.y);
        let mut serial: Vec<_> = generate(&base(), 6).unwrap().iter().map(key).collect();
        let mut parallel: Vec<_> = generate_parallel(&base(), 6)
            .unwrap()
            .iter()
            .map(key)
            .collect();
        serial.sort_unstable();
        parallel.sort_unstable();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_all_vertices_stay_inside_viewport() {
        let triangles = generate(&base(), 7).unwrap();
        for tri in triangles {
            for Point { x, y } in tri.vertices() {
                assert!((50..=950).contains(&x));
                assert!((50..=950).contains(&y));
            }
        }
    }
}
