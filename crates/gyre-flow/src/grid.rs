use glam::DVec2;
use ndarray::Array1;

/// Half-width of the square sampling window.
pub const GRID_EXTENT: f64 = 1.6;
/// Samples per axis of the standard window.
pub const GRID_RESOLUTION: usize = 500;

/// Square sampling lattice, shared read-only by every case evaluation.
#[derive(Debug, Clone)]
pub struct SampleGrid {
    xs: Array1<f64>,
    ys: Array1<f64>,
}

impl SampleGrid {
    /// `resolution` × `resolution` points over `[-half_extent, half_extent]²`,
    /// endpoints included.
    pub fn new(half_extent: f64, resolution: usize) -> Self {
        SampleGrid {
            xs: Array1::linspace(-half_extent, half_extent, resolution),
            ys: Array1::linspace(-half_extent, half_extent, resolution),
        }
    }

    /// The fixed 500×500 window used for the built-in cases.
    pub fn standard() -> Self {
        SampleGrid::new(GRID_EXTENT, GRID_RESOLUTION)
    }

    /// Number of samples along the x-axis.
    pub fn nx(&self) -> usize {
        self.xs.len()
    }

    /// Number of samples along the y-axis.
    pub fn ny(&self) -> usize {
        self.ys.len()
    }

    pub fn xs(&self) -> &Array1<f64> {
        &self.xs
    }

    pub fn ys(&self) -> &Array1<f64> {
        &self.ys
    }

    /// Coordinates of the lattice point at column `i`, row `j`.
    pub fn point(&self, i: usize, j: usize) -> DVec2 {
        DVec2::new(self.xs[i], self.ys[j])
    }

    /// Index `(column, row)` of the lattice point nearest to `p`.
    pub fn nearest(&self, p: DVec2) -> (usize, usize) {
        (nearest_index(&self.xs, p.x), nearest_index(&self.ys, p.y))
    }
}

fn nearest_index(axis: &Array1<f64>, v: f64) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;

    for (k, &a) in axis.iter().enumerate() {
        let d = (a - v).abs();
        if d < best_dist {
            best = k;
            best_dist = d;
        }
    }

    best
}
