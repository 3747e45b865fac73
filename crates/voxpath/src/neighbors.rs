//! The 26-direction step table and the policy-driven expansion over it.

use voxpath_core::Point3;

use crate::movement::DiagonalMovement;

const fn d(x: i32, y: i32, z: i32) -> Point3 {
    Point3::new(x, y, z)
}

/// Every unit step around a voxel, grouped by order so that contributors
/// always precede the steps that depend on them:
///
/// - 6 faces: `+y, +x, -y, -x, +z, -z`
/// - 12 edges: 4 in the current z-plane, 4 upper (`+z`), 4 lower (`-z`)
/// - 8 corners: 4 upper, 4 lower
pub const DIRECTIONS: [Point3; 26] = [
    // faces
    d(0, 1, 0),
    d(1, 0, 0),
    d(0, -1, 0),
    d(-1, 0, 0),
    d(0, 0, 1),
    d(0, 0, -1),
    // plane diagonals
    d(-1, 1, 0),
    d(1, 1, 0),
    d(1, -1, 0),
    d(-1, -1, 0),
    // upper edges
    d(0, 1, 1),
    d(1, 0, 1),
    d(0, -1, 1),
    d(-1, 0, 1),
    // lower edges
    d(0, 1, -1),
    d(1, 0, -1),
    d(0, -1, -1),
    d(-1, 0, -1),
    // upper corners
    d(-1, 1, 1),
    d(1, 1, 1),
    d(1, -1, 1),
    d(-1, -1, 1),
    // lower corners
    d(-1, 1, -1),
    d(1, 1, -1),
    d(1, -1, -1),
    d(-1, -1, -1),
];

/// Position of a unit step in the 3×3×3 cube around the origin.
#[inline]
fn slot(step: Point3) -> usize {
    ((step.x + 1) * 9 + (step.y + 1) * 3 + (step.z + 1)) as usize
}

/// The lower-order steps a diagonal cuts past: its face components and, for
/// a corner, the three edges that share two of its axes.
///
/// Yields nothing for a face step.
pub fn contributors(step: Point3) -> impl Iterator<Item = Point3> {
    let support = (step.x != 0) as u8 | ((step.y != 0) as u8) << 1 | ((step.z != 0) as u8) << 2;
    (1u8..7)
        .filter(move |&mask| mask & !support == 0 && mask != support)
        .map(move |mask| {
            Point3::new(
                if mask & 1 != 0 { step.x } else { 0 },
                if mask & 2 != 0 { step.y } else { 0 },
                if mask & 4 != 0 { step.z } else { 0 },
            )
        })
}

/// Walk [`DIRECTIONS`] around `at` and call `emit` for every step admitted
/// by `movement` whose destination satisfies `walkable`.
///
/// A step is *open* once it has been emitted. Diagonals count their
/// non-open contributors and defer to [`DiagonalMovement::admits`]. Steps
/// whose destination falls outside the `i32` range are skipped.
/// Returns the number of emitted steps.
pub fn expand(
    at: Point3,
    movement: DiagonalMovement,
    walkable: impl Fn(Point3) -> bool,
    mut emit: impl FnMut(Point3),
) -> usize {
    let mut open = [false; 27];
    let mut count = 0;
    let max_order = movement.max_order();
    for step in DIRECTIONS {
        let order = step.order();
        if order > max_order {
            break;
        }
        if order > 1 {
            let blocked = contributors(step).filter(|c| !open[slot(*c)]).count();
            if !movement.admits(blocked) {
                continue;
            }
        }
        let Some(dest) = at.checked_add(step) else {
            continue;
        };
        if walkable(dest) {
            open[slot(step)] = true;
            emit(dest);
            count += 1;
        }
    }
    count
}
