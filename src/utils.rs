use crate::{
    interp::vertex_interp,
    tables::{CORNER_OFFSETS, EDGE_CORNERS, TRI_TABLE},
    types::{ISO_LEVEL, Point, Value},
};

/// Returns the positions of the 8 corners of the unit cube whose low corner
/// is at grid coordinate `(x, y, z)`.
///
/// Corner order matches [`CORNER_OFFSETS`] and therefore the lookup tables.
#[inline]
pub fn corner_positions(x: usize, y: usize, z: usize) -> [Point; 8] {
    CORNER_OFFSETS.map(|[dx, dy, dz]| {
        Point::new(
            (x + dx) as Value,
            (y + dy) as Value,
            (z + dz) as Value,
        )
    })
}

/// Computes the 8-bit cube configuration index.
///
/// ```text
/// corner index:  7  6  5  4  3  2  1  0
/// index bits:   [_][_][_][_][_][_][_][_]
///                                      ^-- corner 0 inside?
/// ```
///
/// Bit `i` is set when corner `i` is inside the surface, i.e. its value is
/// strictly greater than the iso-level.
#[inline]
pub fn cube_index(corner_values: &[Value; 8]) -> usize {
    let mut index = 0;
    for (i, &v) in corner_values.iter().enumerate() {
        if v > ISO_LEVEL {
            index |= 1 << i;
        }
    }
    index
}

/// Interpolates the iso-crossing on each edge flagged in `edges_mask`.
///
/// `edges_mask` is the 12-bit field from `EDGE_TABLE` — a set bit means that
/// edge is crossed. Crossings are evaluated in edge-index order.
#[inline]
pub fn edge_crossings(
    edges_mask: u16,
    corner_positions: &[Point; 8],
    corner_values: &[Value; 8],
) -> [Option<Point>; 12] {
    let mut crossings: [Option<Point>; 12] = [None; 12];

    for (i, &[a, b]) in EDGE_CORNERS.iter().enumerate() {
        if (edges_mask & (1 << i)) == 0 {
            continue;
        }
        crossings[i] = Some(vertex_interp(
            corner_values[a],
            corner_values[b],
            corner_positions[a],
            corner_positions[b],
        ));
    }

    crossings
}

/// Converts the edge crossings for a given configuration `index` into a flat
/// list of triangle vertices.
///
/// `TRI_TABLE[index]` lists edge indices in groups of three, terminated by
/// `-1`; every referenced edge is guaranteed to be flagged in the edge mask,
/// so the corresponding crossing is always present.
#[inline]
pub fn triangle_vertices(crossings: &[Option<Point>; 12], index: usize) -> Vec<Point> {
    debug_assert!(index < 256);
    TRI_TABLE[index]
        .iter()
        .take_while(|&&e| e != -1)
        .map(|&e| crossings[e as usize].expect("crossing missing for flagged edge"))
        .collect()
}
