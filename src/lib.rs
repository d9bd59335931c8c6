//! Point-cloud voxelization and Marching Cubes iso-surface extraction.
//!
//! Two independent, composable pieces:
//!
//! - [`VoxelGrid`] / [`voxelize`] — snap an unordered point cloud onto a
//!   regular grid, one representative centre per occupied cell.
//! - [`extract`] / [`extract_parallel`] — march every unit cube of a dense
//!   [`ScalarField`] and emit the 0.5-iso-surface as a [`TriangleMesh`].
//!
//! [`ScalarField::from_cells`] bridges the two, turning occupied cells into a
//! padded binary occupancy field:
//!
//! ```
//! use voxel_surface::{ScalarField, VoxelGrid, extract};
//!
//! let mut grid = VoxelGrid::new(0.5)?;
//! grid.extend([
//!     nalgebra::Point3::new(0.1, 0.2, 0.3),
//!     nalgebra::Point3::new(0.9, 0.2, 0.3),
//! ]);
//!
//! let field = ScalarField::from_cells(grid.cells());
//! let mesh = extract(&field);
//! assert!(!mesh.is_empty());
//! # Ok::<(), voxel_surface::VoxelSurfaceError>(())
//! ```

pub mod error;
pub mod extract;
pub mod field;
pub mod interp;
pub mod mesh;
pub mod tables;
pub mod types;
pub mod utils;
pub mod voxel;

pub use error::{Result, VoxelSurfaceError};
pub use extract::{extract, extract_parallel};
pub use field::ScalarField;
pub use mesh::TriangleMesh;
pub use types::{ISO_EPSILON, ISO_LEVEL, Point, Value, Vector};
pub use voxel::{VoxelCell, VoxelGrid, voxelize};
