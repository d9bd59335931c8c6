use derive_more::Display;

use crate::types::Value;

pub type Result<T> = core::result::Result<T, VoxelSurfaceError>;

#[derive(Debug, Display)]
pub enum VoxelSurfaceError {
    /// Voxel size must be a finite positive number.
    #[display("invalid voxel size: {_0}")]
    InvalidVoxelSize(Value),

    /// A flat vertex buffer must hold a whole number of triangles.
    #[display("vertex count {_0} is not a multiple of 3")]
    MalformedMesh(usize),
}

impl std::error::Error for VoxelSurfaceError {}
