use approx::assert_relative_eq;
use voxel_surface::{
    Point, ScalarField, TriangleMesh, VoxelGrid, extract, extract_parallel, voxelize,
};

/// Field of 2×2×2 samples with the given corner values, corner order matching
/// the marching cubes convention.
fn unit_cube_field(corners: [f32; 8]) -> ScalarField {
    let offsets = [
        (0, 0, 0),
        (1, 0, 0),
        (1, 1, 0),
        (0, 1, 0),
        (0, 0, 1),
        (1, 0, 1),
        (1, 1, 1),
        (0, 1, 1),
    ];
    let mut field = ScalarField::new(2, 2, 2);
    for (i, (x, y, z)) in offsets.into_iter().enumerate() {
        field.set(x, y, z, corners[i]);
    }
    field
}

fn sphere_field(samples: usize, radius: f32) -> ScalarField {
    let c = (samples - 1) as f32 / 2.0;
    ScalarField::from_fn(samples, samples, samples, |x, y, z| {
        let (dx, dy, dz) = (x as f32 - c, y as f32 - c, z as f32 - c);
        let dist = (dx * dx + dy * dy + dz * dz).sqrt();
        if dist < radius { 1.0 } else { 0.0 }
    })
}

#[test]
fn thin_fields_have_no_cubes() {
    assert!(extract(&ScalarField::new(0, 0, 0)).is_empty());
    assert!(extract(&ScalarField::new(1, 5, 5)).is_empty());
    assert!(extract(&ScalarField::new(5, 5, 1)).is_empty());
}

#[test]
fn fully_enclosed_cube_has_no_visible_boundary() {
    // All 8 corners inside → configuration 255 → no crossed edges.
    let mesh = extract(&unit_cube_field([1.0; 8]));
    assert!(mesh.is_empty());
}

#[test]
fn fully_outside_cube_is_empty() {
    let mesh = extract(&unit_cube_field([0.0; 8]));
    assert!(mesh.is_empty());
}

#[test]
fn single_inside_corner_yields_one_triangle() {
    let mut corners = [0.0; 8];
    corners[0] = 1.0;
    let mesh = extract(&unit_cube_field(corners));

    assert_eq!(mesh.triangle_count(), 1);

    // A sharp 1.0/0.0 split crosses each adjacent edge at its midpoint:
    // mu = (0.5 - 1.0) / (0.0 - 1.0) = 0.5. TRI_TABLE emits edges 0, 8, 3.
    let [a, b, c] = mesh.triangle(0);
    assert_relative_eq!(a.x, 0.5); // edge 0, towards corner 1
    assert_relative_eq!(a.y, 0.0);
    assert_relative_eq!(a.z, 0.0);
    assert_relative_eq!(b.z, 0.5); // edge 8, towards corner 4
    assert_relative_eq!(b.x, 0.0);
    assert_relative_eq!(b.y, 0.0);
    assert_relative_eq!(c.y, 0.5); // edge 3, towards corner 3
    assert_relative_eq!(c.x, 0.0);
    assert_relative_eq!(c.z, 0.0);
}

#[test]
fn extraction_is_deterministic() {
    let field = sphere_field(12, 4.0);
    let first = extract(&field);
    let second = extract(&field);
    assert_eq!(first, second);
}

#[test]
fn parallel_extraction_matches_serial() {
    let field = sphere_field(16, 5.5);
    let serial = extract(&field);
    let parallel = extract_parallel(&field);
    assert!(!serial.is_empty());
    assert_eq!(serial, parallel);
}

#[test]
fn sphere_surface_is_plausible() {
    let field = sphere_field(12, 4.0);
    let mesh = extract(&field);

    assert!(!mesh.is_empty());
    assert_eq!(mesh.vertices().len() % 3, 0);
    assert_eq!(mesh.face_normals().len(), mesh.vertices().len());

    // Every vertex stays inside the sampled volume.
    for v in mesh.vertices() {
        for coord in [v.x, v.y, v.z] {
            assert!((0.0..=11.0).contains(&coord), "vertex escaped: {v}");
        }
    }
}

#[test]
fn point_cloud_to_mesh_end_to_end() {
    // A small cluster of raw vertices, deduplicated onto a grid, meshed.
    let points = [
        Point::new(0.1, 0.1, 0.1),
        Point::new(0.4, 0.2, 0.3),
        Point::new(1.2, 0.1, 0.2),
        Point::new(1.4, 1.3, 0.4),
    ];
    let mut grid = VoxelGrid::new(1.0).unwrap();
    grid.extend(points);
    assert_eq!(grid.len(), 3);

    let field = ScalarField::from_cells(grid.cells());
    let mesh = extract(&field);

    assert!(!mesh.is_empty());
    assert_eq!(mesh.vertices().len() % 3, 0);
}

#[test]
fn single_cell_meshes_to_a_closed_octahedron_like_surface() {
    let mut grid = VoxelGrid::new(1.0).unwrap();
    grid.extend([Point::new(0.5, 0.5, 0.5)]);

    let field = ScalarField::from_cells(grid.cells());
    // One occupied sample in a 3×3×3 padded field: the eight surrounding
    // cubes each see exactly one inside corner, one triangle apiece.
    assert_eq!((field.width(), field.height(), field.depth()), (3, 3, 3));
    let mesh = extract(&field);
    assert_eq!(mesh.triangle_count(), 8);
}

#[test]
fn voxelize_round_trips_through_its_own_centers() {
    let points = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(0.9, 0.0, 0.0),
        Point::new(-0.1, 0.0, 0.0),
    ];
    let centers = voxelize(&points, 1.0).unwrap();
    assert_eq!(
        centers,
        vec![Point::new(0.5, 0.5, 0.5), Point::new(-0.5, 0.5, 0.5)]
    );
    assert_eq!(voxelize(&centers, 1.0).unwrap(), centers);
}

#[test]
fn meshes_reject_partial_vertex_buffers() {
    assert!(TriangleMesh::from_vertices(vec![Point::origin(); 2]).is_err());
    assert!(TriangleMesh::from_vertices(Vec::new()).unwrap().is_empty());
}
