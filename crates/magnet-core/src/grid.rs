//! Grid builder: tiles the viewport with fixed-size cells, one marker each.

use crate::constants::MAX_GRID_AXIS;
use crate::surface::Surface;
use glam::Vec2;

/// Visual and motion state of one grid cell.
#[derive(Debug)]
pub struct Marker<H> {
    /// Top-left corner of the cell in viewport px. Fixed for the grid's lifetime.
    pub origin: Vec2,
    /// Current displacement from rest.
    pub offset: Vec2,
    /// Displacement last committed to the surface.
    pub last_written: Vec2,
    pub handle: H,
}

impl<H> Marker<H> {
    #[inline]
    pub fn center(&self, cell_size: f32) -> Vec2 {
        self.origin + Vec2::splat(cell_size * 0.5)
    }
}

/// One generation of markers in row-major order.
#[derive(Debug)]
pub struct Grid<H> {
    pub markers: Vec<Marker<H>>,
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f32,
    pub generation: u64,
}

impl<H> Grid<H> {
    /// A grid with no markers, used while a generation is being replaced.
    pub fn empty(cell_size: f32, generation: u64) -> Self {
        Self {
            markers: Vec::new(),
            rows: 0,
            cols: 0,
            cell_size,
            generation,
        }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn marker(&self, row: usize, col: usize) -> Option<&Marker<H>> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.markers.get(row * self.cols + col)
    }
}

#[inline]
fn axis_cells(extent: f32, cell_size: f32) -> usize {
    // float-to-int casts saturate; NaN becomes 0
    let n = (extent / cell_size).ceil().max(0.0) as usize;
    n.saturating_add(1).min(MAX_GRID_AXIS)
}

/// Rows and columns needed to cover `width` x `height`, with one cell of
/// overscan, capped at `MAX_GRID_AXIS` per axis.
#[inline]
pub fn grid_dims(width: f32, height: f32, cell_size: f32) -> (usize, usize) {
    (axis_cells(height, cell_size), axis_cells(width, cell_size))
}

pub fn build_grid<S: Surface>(
    surface: &mut S,
    width: f32,
    height: f32,
    cell_size: f32,
    glyph: &str,
    generation: u64,
) -> Result<Grid<S::Handle>, S::Error> {
    let (rows, cols) = grid_dims(width, height, cell_size);
    let mut markers: Vec<Marker<S::Handle>> = Vec::with_capacity(rows.saturating_mul(cols));
    for row in 0..rows {
        for col in 0..cols {
            let origin = Vec2::new(col as f32 * cell_size, row as f32 * cell_size);
            let handle = match surface.spawn_marker(origin, glyph) {
                Ok(h) => h,
                Err(e) => {
                    // leave the surface as we found it
                    for m in markers.drain(..) {
                        surface.remove_marker(m.handle);
                    }
                    return Err(e);
                }
            };
            markers.push(Marker {
                origin,
                offset: Vec2::ZERO,
                last_written: Vec2::ZERO,
                handle,
            });
        }
    }
    log::info!(
        "[grid] generation {} built: {}x{} cells of {}px ({} markers)",
        generation,
        rows,
        cols,
        cell_size,
        markers.len()
    );
    Ok(Grid {
        markers,
        rows,
        cols,
        cell_size,
        generation,
    })
}

/// Detach every marker's element. Consumes the grid so none of its markers
/// outlive their generation.
pub fn teardown_grid<S: Surface>(surface: &mut S, grid: Grid<S::Handle>) {
    let generation = grid.generation;
    let count = grid.markers.len();
    for m in grid.markers {
        surface.remove_marker(m.handle);
    }
    log::debug!("[grid] generation {} torn down ({} markers)", generation, count);
}
