//! 8-fold symmetry expansion.

/// Expands a half-diagonal coordinate into the full set of mirrored grid
/// coordinates: the point itself, its diagonal transpose, and the
/// horizontal/vertical/diagonal mirrors of both.
///
/// The guards skip mirrors that collapse onto an already-emitted point
/// (coordinates on the diagonal or on the centre row/column). The emission
/// order is significant: the packed-bitmap writer's in-slot-offset-4 branch
/// relies on neighbouring cells being written with colour values below 64,
/// and downstream callers must apply writes in exactly this order.
pub(crate) fn mirrored_points(x: usize, y: usize, width: usize, height: usize) -> Vec<(usize, usize)> {
    let center = width / 2;
    let mut points = Vec::with_capacity(8);
    points.push((x, y));
    if x != y {
        points.push((y, x));
        if y != center {
            points.push((width - 1 - y, x));
        }
        if x != center {
            points.push((y, height - 1 - x));
        }
        if x != center && y != center {
            points.push((width - 1 - y, height - 1 - x));
        }
    }
    if x != center {
        points.push((width - 1 - x, y));
    }
    if y != center {
        points.push((x, height - 1 - y));
    }
    if x != center && y != center {
        points.push((width - 1 - x, height - 1 - y));
    }
    points
}
