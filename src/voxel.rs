use std::collections::HashSet;

use tracing::debug;

use crate::{
    error::{Result, VoxelSurfaceError},
    types::{Point, Value},
};

/// An occupied cell of a regular voxel grid, keyed by its integer coordinates.
///
/// A point belongs to the cell covering the half-open box
/// `[x*s, (x+1)*s) × [y*s, (y+1)*s) × [z*s, (z+1)*s)` for voxel size `s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoxelCell {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl VoxelCell {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// The cell containing `point` for the given voxel size.
    ///
    /// Floor classification, not rounding: a point exactly on a cell boundary
    /// belongs to the cell on its positive side, and negative coordinates
    /// floor away from zero rather than truncating towards it.
    #[inline]
    pub fn containing(point: Point, size: Value) -> Self {
        Self {
            x: (point.x / size).floor() as i64,
            y: (point.y / size).floor() as i64,
            z: (point.z / size).floor() as i64,
        }
    }

    /// Centre of this cell in the original coordinate space.
    #[inline]
    pub fn center(&self, size: Value) -> Point {
        Point::new(
            (self.x as Value + 0.5) * size,
            (self.y as Value + 0.5) * size,
            (self.z as Value + 0.5) * size,
        )
    }
}

/// Deduplicates a point cloud onto a regular grid, one cell per occupied box.
///
/// Cells are kept in first-seen order, so output is stable with respect to
/// input order. Insertion is O(1) amortised via the hash set; the grid never
/// allocates storage for unoccupied cells, so sparse clouds of unbounded
/// extent are fine.
#[derive(Debug, Clone)]
pub struct VoxelGrid {
    size: Value,
    seen: HashSet<VoxelCell>,
    cells: Vec<VoxelCell>,
}

impl VoxelGrid {
    /// Creates an empty grid with the given voxel size.
    ///
    /// Returns [`VoxelSurfaceError::InvalidVoxelSize`] unless `size` is a
    /// finite positive number.
    pub fn new(size: Value) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(VoxelSurfaceError::InvalidVoxelSize(size));
        }
        Ok(Self {
            size,
            seen: HashSet::new(),
            cells: Vec::new(),
        })
    }

    /// The voxel edge length this grid was built with.
    pub fn size(&self) -> Value {
        self.size
    }

    /// Inserts a point, returning `true` if it occupied a new cell.
    pub fn insert(&mut self, point: Point) -> bool {
        let cell = VoxelCell::containing(point, self.size);
        if self.seen.insert(cell) {
            self.cells.push(cell);
            true
        } else {
            false
        }
    }

    /// Inserts every point of an iterator.
    pub fn extend<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Point>,
    {
        for point in points {
            self.insert(point);
        }
    }

    /// Occupied cells in first-seen order.
    pub fn cells(&self) -> &[VoxelCell] {
        &self.cells
    }

    /// Cell centres in first-seen order.
    pub fn centers(&self) -> Vec<Point> {
        self.cells.iter().map(|c| c.center(self.size)).collect()
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Snaps a point cloud to a voxel grid, returning one centre per occupied cell.
///
/// Centres come out in first-seen order. An empty input yields an empty
/// output; a non-positive (or non-finite) `size` is rejected up front.
pub fn voxelize(points: &[Point], size: Value) -> Result<Vec<Point>> {
    let mut grid = VoxelGrid::new(size)?;
    grid.extend(points.iter().copied());

    debug!(
        points = points.len(),
        cells = grid.len(),
        size,
        "voxelized point cloud"
    );

    Ok(grid.centers())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_in_one_cell_collapse_to_one_center() {
        let centers = voxelize(
            &[Point::new(0.0, 0.0, 0.0), Point::new(0.9, 0.0, 0.0)],
            1.0,
        )
        .unwrap();
        assert_eq!(centers, vec![Point::new(0.5, 0.5, 0.5)]);
    }

    #[test]
    fn negative_coordinates_floor_not_truncate() {
        let cell = VoxelCell::containing(Point::new(-0.1, 0.0, 0.0), 1.0);
        assert_eq!(cell, VoxelCell::new(-1, 0, 0));
        assert_eq!(cell.center(1.0), Point::new(-0.5, 0.5, 0.5));
    }

    #[test]
    fn boundary_point_belongs_to_positive_side() {
        assert_eq!(
            VoxelCell::containing(Point::new(1.0, 0.0, 0.0), 1.0),
            VoxelCell::new(1, 0, 0)
        );
    }

    #[test]
    fn centers_keep_first_seen_order() {
        let centers = voxelize(
            &[
                Point::new(5.5, 0.5, 0.5),
                Point::new(0.5, 0.5, 0.5),
                Point::new(5.6, 0.5, 0.5), // same cell as the first point
                Point::new(2.5, 0.5, 0.5),
            ],
            1.0,
        )
        .unwrap();
        assert_eq!(
            centers,
            vec![
                Point::new(5.5, 0.5, 0.5),
                Point::new(0.5, 0.5, 0.5),
                Point::new(2.5, 0.5, 0.5),
            ]
        );
    }

    #[test]
    fn voxelization_is_idempotent() {
        let points = [
            Point::new(0.1, 0.2, 0.3),
            Point::new(-1.4, 2.0, 0.9),
            Point::new(3.7, -0.5, 1.1),
        ];
        let centers = voxelize(&points, 0.5).unwrap();
        let again = voxelize(&centers, 0.5).unwrap();
        assert_eq!(centers, again);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(voxelize(&[], 1.0).unwrap(), Vec::<Point>::new());
    }

    #[test]
    fn non_positive_size_is_rejected() {
        assert!(matches!(
            voxelize(&[Point::origin()], 0.0),
            Err(VoxelSurfaceError::InvalidVoxelSize(_))
        ));
        assert!(matches!(
            voxelize(&[Point::origin()], -1.0),
            Err(VoxelSurfaceError::InvalidVoxelSize(_))
        ));
        assert!(matches!(
            VoxelGrid::new(Value::NAN),
            Err(VoxelSurfaceError::InvalidVoxelSize(_))
        ));
    }
}
