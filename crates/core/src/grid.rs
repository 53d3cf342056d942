//! Grid module - the voxel world
//!
//! The world is a fixed-size 3D grid where each cell is empty or holds a block.
//! Uses a flat array for cache locality; layers are stacked along z.
//! Coordinates: (x, y, z) with z pointing up. Index = (z * Y + y) * X + x.

use std::ops::Range;

use glam::{IVec3, Vec3};

use crate::types::{Block, Cell, GridDims};

/// The voxel world - flat storage of `X * Y * Z` cells
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelGrid {
    dims: GridDims,
    /// Flat array of cells, layer-major order
    cells: Vec<Cell>,
}

impl VoxelGrid {
    /// Create a new empty grid
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            cells: vec![None; dims.volume()],
        }
    }

    /// Calculate flat index from (x, y, z) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if !self.dims.contains(x, y, z) {
            return None;
        }
        let (w, d) = (self.dims.x as usize, self.dims.y as usize);
        Some((z as usize * d + y as usize) * w + x as usize)
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Get cell at (x, y, z)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<Cell> {
        self.index(x, y, z).map(|i| self.cells[i])
    }

    /// Set cell at (x, y, z)
    /// Out-of-bounds writes are dropped and return false
    pub fn set(&mut self, x: i32, y: i32, z: i32, cell: Cell) -> bool {
        match self.index(x, y, z) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    pub fn get_cell(&self, cell: IVec3) -> Option<Cell> {
        self.get(cell.x, cell.y, cell.z)
    }

    pub fn set_cell(&mut self, cell: IVec3, value: Cell) -> bool {
        self.set(cell.x, cell.y, cell.z, value)
    }

    /// Check if integer coordinates are inside the grid
    pub fn contains(&self, cell: IVec3) -> bool {
        self.dims.contains(cell.x, cell.y, cell.z)
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, cell: IVec3) -> bool {
        matches!(self.get_cell(cell), Some(Some(_)))
    }

    /// Check if position is free (within bounds and empty)
    pub fn is_free(&self, cell: IVec3) -> bool {
        matches!(self.get_cell(cell), Some(None))
    }

    /// Block in the cell containing a continuous position, if any.
    ///
    /// The position is truncated toward zero, the same way every caller in
    /// the core maps points to cells.
    pub fn block_at(&self, point: Vec3) -> Option<Block> {
        self.get_cell(cell_of(point)).flatten()
    }

    /// Fill whole z layers with a block (used to seed terrain)
    pub fn fill_layers(&mut self, layers: Range<u16>, block: Block) {
        let layer_len = (self.dims.x as usize) * (self.dims.y as usize);
        let end = layers.end.min(self.dims.z) as usize;
        let start = (layers.start as usize).min(end);
        self.cells[start * layer_len..end * layer_len].fill(Some(block));
    }

    /// Number of solid cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty the whole grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

/// Cell index of a continuous position (truncation toward zero).
#[inline(always)]
pub fn cell_of(point: Vec3) -> IVec3 {
    point.as_ivec3()
}
