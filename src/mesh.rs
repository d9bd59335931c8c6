use crate::{
    error::{Result, VoxelSurfaceError},
    types::{Point, Value, Vector},
};

/// Triangle mesh produced by the iso-surface extractor.
///
/// Vertices are stored flat — every group of three consecutive vertices forms
/// one triangle. There is no index buffer: a vertex shared by several
/// triangles appears once per use.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TriangleMesh {
    vertices: Vec<Point>,
}

impl TriangleMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a flat vertex buffer.
    ///
    /// Returns [`VoxelSurfaceError::MalformedMesh`] unless the vertex count
    /// is a multiple of 3.
    pub fn from_vertices(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() % 3 != 0 {
            return Err(VoxelSurfaceError::MalformedMesh(vertices.len()));
        }
        Ok(Self { vertices })
    }

    /// The flat vertex buffer.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The three vertex positions of triangle `tri`.
    pub fn triangle(&self, tri: usize) -> [Point; 3] {
        [
            self.vertices[tri * 3],
            self.vertices[tri * 3 + 1],
            self.vertices[tri * 3 + 2],
        ]
    }

    /// Iterates over triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Point; 3]> + '_ {
        (0..self.triangle_count()).map(|tri| self.triangle(tri))
    }

    /// Computes the face normal of triangle `tri`.
    ///
    /// Returns the zero vector if the triangle is degenerate.
    pub fn tri_normal(&self, tri: usize) -> Vector {
        let [a, b, c] = self.triangle(tri);

        let ab = b - a;
        let bc = c - b;
        let cross = ab.cross(&bc);

        let nrm = cross.norm();
        if nrm == 0.0 {
            Vector::new(0.0, 0.0, 0.0)
        } else {
            cross / nrm
        }
    }

    /// Computes flat-shaded normals, one per vertex (three per triangle).
    pub fn face_normals(&self) -> Vec<[Value; 3]> {
        let mut normals = Vec::with_capacity(self.vertices.len());
        for tri in 0..self.triangle_count() {
            let normal = self.tri_normal(tri);
            let n = [normal.x, normal.y, normal.z];
            // Push the face normal once per vertex of the triangle.
            normals.push(n);
            normals.push(n);
            normals.push(n);
        }
        normals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rejects_partial_triangles() {
        let verts = vec![Point::origin(); 4];
        assert!(matches!(
            TriangleMesh::from_vertices(verts),
            Err(VoxelSurfaceError::MalformedMesh(4))
        ));
    }

    #[test]
    fn groups_vertices_into_triangles() {
        let verts = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
            Point::new(1.0, 0.0, 1.0),
            Point::new(0.0, 1.0, 1.0),
        ];
        let mesh = TriangleMesh::from_vertices(verts.clone()).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangle(1), [verts[3], verts[4], verts[5]]);
        assert_eq!(mesh.triangles().count(), 2);
    }

    #[test]
    fn ccw_triangle_in_xy_plane_faces_positive_z() {
        let mesh = TriangleMesh::from_vertices(vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ])
        .unwrap();
        let n = mesh.tri_normal(0);
        assert_relative_eq!(n.x, 0.0);
        assert_relative_eq!(n.y, 0.0);
        assert_relative_eq!(n.z, 1.0);
    }

    #[test]
    fn degenerate_triangle_has_zero_normal() {
        let mesh = TriangleMesh::from_vertices(vec![Point::origin(); 3]).unwrap();
        assert_eq!(mesh.tri_normal(0), Vector::new(0.0, 0.0, 0.0));
    }
}
