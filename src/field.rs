use ndarray::Array3;

use crate::{types::Value, voxel::VoxelCell};

/// A dense 3D grid of scalar samples, indexed `[x, y, z]`.
///
/// Input to the iso-surface extractor. The extractor walks every unit cube
/// between adjacent samples, so an axis needs at least 2 samples before any
/// cube exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    data: Array3<Value>,
}

impl ScalarField {
    /// Creates a field of the given extent with all samples at `0.0`.
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            data: Array3::zeros((width, height, depth)),
        }
    }

    /// Creates a field by evaluating `f` at every sample coordinate.
    pub fn from_fn<F>(width: usize, height: usize, depth: usize, f: F) -> Self
    where
        F: Fn(usize, usize, usize) -> Value,
    {
        Self {
            data: Array3::from_shape_fn((width, height, depth), |(x, y, z)| f(x, y, z)),
        }
    }

    /// Builds a binary occupancy field from a set of voxel cells.
    ///
    /// Cells are translated so the lowest occupied cell lands at sample
    /// `(1, 1, 1)`, leaving a one-sample border of `0.0` on every side.
    /// Without the border, cells touching the field boundary would have no
    /// outside neighbour to cross and the extracted surface would not close.
    ///
    /// The resulting field is in cell space — one grid step per voxel cell.
    /// An empty slice yields an empty field.
    pub fn from_cells(cells: &[VoxelCell]) -> Self {
        let Some(first) = cells.first() else {
            return Self::new(0, 0, 0);
        };

        let mut min = [first.x, first.y, first.z];
        let mut max = min;
        for cell in cells {
            for (axis, c) in [cell.x, cell.y, cell.z].into_iter().enumerate() {
                min[axis] = min[axis].min(c);
                max[axis] = max[axis].max(c);
            }
        }

        // Extent plus a one-sample pad on each side.
        let shape = (
            (max[0] - min[0]) as usize + 3,
            (max[1] - min[1]) as usize + 3,
            (max[2] - min[2]) as usize + 3,
        );
        let mut data = Array3::zeros(shape);
        for cell in cells {
            let x = (cell.x - min[0]) as usize + 1;
            let y = (cell.y - min[1]) as usize + 1;
            let z = (cell.z - min[2]) as usize + 1;
            data[[x, y, z]] = 1.0;
        }

        Self { data }
    }

    /// Number of samples along X.
    pub fn width(&self) -> usize {
        self.data.dim().0
    }

    /// Number of samples along Y.
    pub fn height(&self) -> usize {
        self.data.dim().1
    }

    /// Number of samples along Z.
    pub fn depth(&self) -> usize {
        self.data.dim().2
    }

    /// Returns the sample at `(x, y, z)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Value {
        self.data[[x, y, z]]
    }

    /// Sets the sample at `(x, y, z)`.
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: Value) {
        self.data[[x, y, z]] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_addresses_x_y_z() {
        let field = ScalarField::from_fn(2, 3, 4, |x, y, z| (x * 100 + y * 10 + z) as Value);
        assert_eq!(field.width(), 2);
        assert_eq!(field.height(), 3);
        assert_eq!(field.depth(), 4);
        assert_eq!(field.get(1, 2, 3), 123.0);
    }

    #[test]
    fn from_cells_pads_every_side() {
        let field = ScalarField::from_cells(&[VoxelCell::new(4, -2, 0)]);
        assert_eq!((field.width(), field.height(), field.depth()), (3, 3, 3));
        // The single cell sits at the padded centre.
        assert_eq!(field.get(1, 1, 1), 1.0);
        assert_eq!(field.get(0, 1, 1), 0.0);
        assert_eq!(field.get(2, 1, 1), 0.0);
    }

    #[test]
    fn from_cells_spans_bounding_box() {
        let field = ScalarField::from_cells(&[VoxelCell::new(0, 0, 0), VoxelCell::new(2, 0, 0)]);
        assert_eq!((field.width(), field.height(), field.depth()), (5, 3, 3));
        assert_eq!(field.get(1, 1, 1), 1.0);
        assert_eq!(field.get(2, 1, 1), 0.0); // gap cell stays empty
        assert_eq!(field.get(3, 1, 1), 1.0);
    }

    #[test]
    fn empty_cells_make_empty_field() {
        let field = ScalarField::from_cells(&[]);
        assert_eq!((field.width(), field.height(), field.depth()), (0, 0, 0));
    }
}
