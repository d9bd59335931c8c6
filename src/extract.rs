use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::debug;

use crate::{
    field::ScalarField,
    mesh::TriangleMesh,
    tables::{CORNER_OFFSETS, EDGE_TABLE},
    types::Point,
    utils::{corner_positions, cube_index, edge_crossings, triangle_vertices},
};

/// Extracts the 0.5-iso-surface of `field` as a triangle mesh.
///
/// Walks every unit cube whose low corner is `(x, y, z)` with
/// `x ∈ [0, width-2]`, `y ∈ [0, height-2]`, `z ∈ [0, depth-2]`, x-major with
/// z innermost, and concatenates each cube's triangles in that traversal
/// order. The output is deterministic: identical fields produce identical
/// vertex sequences. A field with any axis shorter than 2 samples has no
/// cubes and yields an empty mesh.
///
/// ```text
/// Per cube:
/// 1. corner sampling        →  8 positions + 8 scalar values
/// 2. cube_index             →  256-entry lookup key
/// 3. EDGE_TABLE[index]      →  bitmask of crossed edges (0 → skip cube)
/// 4. edge_crossings         →  up to 12 interpolated points
/// 5. triangle_vertices      →  triangle vertices from TRI_TABLE
/// ```
pub fn extract(field: &ScalarField) -> TriangleMesh {
    let mut vertices = Vec::new();
    for x in 0..field.width().saturating_sub(1) {
        march_slice(field, x, &mut vertices);
    }

    debug!(
        width = field.width(),
        height = field.height(),
        depth = field.depth(),
        triangles = vertices.len() / 3,
        "extracted iso-surface"
    );

    finish(vertices)
}

/// Parallel variant of [`extract`], identical output.
///
/// Cubes are independent — each one reads only its own 8 samples and the
/// static tables — so X slices are marched on the rayon pool. The ordered
/// `collect` keeps slice results in traversal order, and slices are merged
/// in index order, so the concatenation matches the serial driver exactly.
pub fn extract_parallel(field: &ScalarField) -> TriangleMesh {
    let per_slice: Vec<Vec<Point>> = (0..field.width().saturating_sub(1))
        .into_par_iter()
        .map(|x| {
            let mut local = Vec::new();
            march_slice(field, x, &mut local);
            local
        })
        .collect();

    let total = per_slice.iter().map(|v| v.len()).sum();
    let mut vertices = Vec::with_capacity(total);
    for mut slice in per_slice {
        vertices.append(&mut slice);
    }

    debug!(
        width = field.width(),
        height = field.height(),
        depth = field.depth(),
        triangles = vertices.len() / 3,
        "extracted iso-surface (parallel)"
    );

    finish(vertices)
}

/// Marches every cube in the X slice at `x`, appending triangles to `out`.
fn march_slice(field: &ScalarField, x: usize, out: &mut Vec<Point>) {
    for y in 0..field.height().saturating_sub(1) {
        for z in 0..field.depth().saturating_sub(1) {
            let values = CORNER_OFFSETS.map(|[dx, dy, dz]| field.get(x + dx, y + dy, z + dz));

            let index = cube_index(&values);
            let edges_mask = EDGE_TABLE[index];
            if edges_mask == 0 {
                continue;
            }

            let positions = corner_positions(x, y, z);
            let crossings = edge_crossings(edges_mask, &positions, &values);
            out.extend(triangle_vertices(&crossings, index));
        }
    }
}

fn finish(vertices: Vec<Point>) -> TriangleMesh {
    // The tri-table only ever emits whole triples.
    debug_assert_eq!(vertices.len() % 3, 0);
    TriangleMesh::from_vertices(vertices).expect("extractor emitted a partial triangle")
}
